//! Streaming WAV capture.

use std::fs::File;
use std::io::{self, BufWriter, Seek, SeekFrom, Write};
use std::path::Path;

// Chunk layout offsets for the size fields patched on finalize.
const RIFF_SIZE_OFFSET: u64 = 4;
const FACT_FRAMES_OFFSET: u64 = 44;
const DATA_SIZE_OFFSET: u64 = 52;
const HEADER_BYTES: u32 = 56;

/// Writes a RIFF/WAVE file of IEEE-float 32 bit samples as they arrive.
/// The header's size fields are written as zero up front and patched when
/// the writer is finalized (or dropped).
pub struct WavWriter<W: Write + Seek> {
    w: Option<BufWriter<W>>,
    channels: u16,
    data_bytes: u32,
}

impl WavWriter<File> {
    /// Creates `path` and writes the header for the given shape.
    pub fn create(path: &Path, channels: u16, sample_rate: u32) -> io::Result<Self> {
        WavWriter::new(File::create(path)?, channels, sample_rate)
    }
}

impl<W: Write + Seek> WavWriter<W> {
    /// Starts a WAV stream on `w`.
    pub fn new(w: W, channels: u16, sample_rate: u32) -> io::Result<Self> {
        let mut writer = WavWriter {
            w: Some(BufWriter::new(w)),
            channels,
            data_bytes: 0,
        };
        writer.write_header(sample_rate)?;
        Ok(writer)
    }

    fn write_header(&mut self, sample_rate: u32) -> io::Result<()> {
        let w = self.w.as_mut().expect("writer open");
        let block_align = self.channels * 4;

        w.write_all(b"RIFF")?;
        w.write_all(&0u32.to_le_bytes())?; // patched on finalize
        w.write_all(b"WAVE")?;

        w.write_all(b"fmt ")?;
        w.write_all(&16u32.to_le_bytes())?;
        w.write_all(&3u16.to_le_bytes())?; // IEEE float
        w.write_all(&self.channels.to_le_bytes())?;
        w.write_all(&sample_rate.to_le_bytes())?;
        w.write_all(&(sample_rate * block_align as u32).to_le_bytes())?;
        w.write_all(&block_align.to_le_bytes())?;
        w.write_all(&32u16.to_le_bytes())?;

        // Non-PCM formats carry a fact chunk with the frame count.
        w.write_all(b"fact")?;
        w.write_all(&4u32.to_le_bytes())?;
        w.write_all(&0u32.to_le_bytes())?; // patched on finalize

        w.write_all(b"data")?;
        w.write_all(&0u32.to_le_bytes())?; // patched on finalize
        Ok(())
    }

    /// Appends a batch of interleaved samples.
    pub fn write_samples(&mut self, samples: &[f32]) -> io::Result<()> {
        let w = self.w.as_mut().expect("writer open");
        for &s in samples {
            w.write_all(&s.to_le_bytes())?;
        }
        self.data_bytes += 4 * samples.len() as u32;
        Ok(())
    }

    /// Patches the header sizes and flushes. Returns the underlying
    /// writer.
    pub fn finalize(mut self) -> io::Result<W> {
        self.finish_inner()
    }

    fn finish_inner(&mut self) -> io::Result<W> {
        let mut w = self
            .w
            .take()
            .expect("writer open")
            .into_inner()
            .map_err(|e| e.into_error())?;
        let frames = self.data_bytes / (4 * self.channels as u32);
        w.seek(SeekFrom::Start(RIFF_SIZE_OFFSET))?;
        w.write_all(&(HEADER_BYTES - 8 + self.data_bytes).to_le_bytes())?;
        w.seek(SeekFrom::Start(FACT_FRAMES_OFFSET))?;
        w.write_all(&frames.to_le_bytes())?;
        w.seek(SeekFrom::Start(DATA_SIZE_OFFSET))?;
        w.write_all(&self.data_bytes.to_le_bytes())?;
        w.flush()?;
        Ok(w)
    }
}

impl<W: Write + Seek> Drop for WavWriter<W> {
    fn drop(&mut self) {
        if self.w.is_some() {
            if let Err(err) = self.finish_inner() {
                log::error!("finalizing wav file: {err}");
            }
        }
    }
}
