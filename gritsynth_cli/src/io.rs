//! Audio in and out.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleRate, StreamConfig};

use gritsynth::fix::S17;
use gritsynth::{Ticker, MAX_BLOCK};

use crate::wav::WavWriter;

/// The one sample rate every graph here is built for.
pub const SAMPLE_RATE: u32 = 44100;

/// Runs `root` against the default audio devices until `stop` is raised.
///
/// The output device gets one channel per root output; if the root has
/// inputs, the default input device feeds them through a lock-free ring
/// (with zeros when capture falls behind). Samples are reformatted between
/// the device's interleaved floats and the graph's per-channel [S17]
/// blocks on the audio thread. If `wav` is given, everything played is
/// also appended to that file as 32 bit float WAV.
pub fn play_with_defaults(
    stop: Arc<AtomicBool>,
    mut root: Box<dyn Ticker>,
    wav: Option<&Path>,
) -> Result<()> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .context("no default output device")?;
    let out_channels = root.outputs();
    if out_channels == 0 {
        bail!("root processor has no outputs");
    }
    let config = StreamConfig {
        channels: out_channels as u16,
        sample_rate: SampleRate(SAMPLE_RATE),
        buffer_size: cpal::BufferSize::Default,
    };

    let in_channels = root.inputs();
    // Capture runs as its own stream; the ring carries interleaved floats
    // across to the output callback.
    let (capture, mut captured) = rtrb::RingBuffer::<f32>::new(SAMPLE_RATE as usize);
    let _input_stream = if in_channels > 0 {
        let input_device = host
            .default_input_device()
            .context("graph needs inputs but there is no default input device")?;
        let input_config = StreamConfig {
            channels: in_channels as u16,
            sample_rate: SampleRate(SAMPLE_RATE),
            buffer_size: cpal::BufferSize::Default,
        };
        let mut producer = capture;
        let stream = input_device
            .build_input_stream(
                &input_config,
                move |data: &[f32], _: &cpal::InputCallbackInfo| {
                    for &s in data {
                        let _ = producer.push(s);
                    }
                },
                |err| log::error!("input stream: {err}"),
                None,
            )
            .context("building input stream")?;
        stream.play().context("starting input stream")?;
        Some(stream)
    } else {
        None
    };

    let mut writer = match wav {
        Some(path) => Some(
            WavWriter::create(path, out_channels as u16, SAMPLE_RATE)
                .with_context(|| format!("creating {}", path.display()))?,
        ),
        None => None,
    };

    let mut in_bufs = vec![vec![S17::ZERO; MAX_BLOCK]; in_channels];
    let mut out_bufs = vec![vec![S17::ZERO; MAX_BLOCK]; out_channels];
    let stream = device
        .build_output_stream(
            &config,
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                for chunk in data.chunks_mut(MAX_BLOCK * out_channels) {
                    let frames = chunk.len() / out_channels;
                    for f in 0..frames {
                        for c in 0..in_channels {
                            in_bufs[c][f] = S17::from_f32(captured.pop().unwrap_or(0.0));
                        }
                    }
                    let ins: Vec<&[S17]> = in_bufs.iter().map(|b| &b[..frames]).collect();
                    {
                        let mut outs: Vec<&mut [S17]> =
                            out_bufs.iter_mut().map(|b| &mut b[..frames]).collect();
                        root.tick(&ins, &mut outs);
                    }
                    for f in 0..frames {
                        for c in 0..out_channels {
                            chunk[f * out_channels + c] = out_bufs[c][f].to_f32();
                        }
                    }
                    let mut wav_failed = false;
                    if let Some(w) = writer.as_mut() {
                        if let Err(err) = w.write_samples(chunk) {
                            log::error!("writing wav: {err}");
                            wav_failed = true;
                        }
                    }
                    if wav_failed {
                        writer = None;
                    }
                }
            },
            |err| log::error!("output stream: {err}"),
            None,
        )
        .context("building output stream")?;
    stream.play().context("starting output stream")?;

    while !stop.load(Ordering::Relaxed) {
        thread::sleep(Duration::from_millis(50));
    }
    // Dropping the streams tears down the callbacks; the wav writer's drop
    // patches up the file header.
    Ok(())
}
