//! The gritsynth command line: play the demo graphs, inspect fixed-point
//! representations, or watch parsed MIDI.

mod graphs;
mod io;
mod midi_backend;
mod wav;

use std::io::BufRead;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};

use gritsynth::fix::{S17, U08, U17, U71};
use gritsynth::graph::serially;
use gritsynth::midi::{listen, Filter};

#[derive(Parser)]
#[command(name = "gritsynth")]
#[command(about = "Low bit depth audio synthesis")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Graph {
    /// Polyphonic sine keys through the filter.
    Keys,
    /// Polyphonic Karplus-Strong strings.
    Plucks,
    /// A self-playing saw chord into modulated delays.
    Delays,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one of the built-in graphs on the default audio device.
    Play {
        /// Which graph to build.
        #[arg(long, value_enum, default_value = "keys")]
        graph: Graph,

        /// Polyphony for the MIDI-driven graphs.
        #[arg(long, default_value_t = 4)]
        voices: usize,

        /// Also record the output to a timestamped wav file.
        #[arg(long)]
        write: bool,

        /// Stop after this many seconds instead of waiting for Enter.
        #[arg(long)]
        seconds: Option<f32>,
    },

    /// Show fixed-point representations of one or two raw 8 bit patterns,
    /// and the operations between them.
    #[command(allow_negative_numbers = true)]
    ShowFix {
        /// A raw bit pattern, -128 to 255.
        a: i64,
        /// An optional second pattern.
        b: Option<i64>,
    },

    /// Print parsed MIDI messages from every input port.
    Midi,
}

fn main() -> Result<()> {
    env_logger::init();
    match Cli::parse().command {
        Commands::Play {
            graph,
            voices,
            write,
            seconds,
        } => play(graph, voices, write, seconds),
        Commands::ShowFix { a, b } => show_fix(a, b),
        Commands::Midi => watch_midi(),
    }
}

fn stop_when_done(stop: &Arc<AtomicBool>, seconds: Option<f32>) {
    let stop = Arc::clone(stop);
    thread::spawn(move || {
        match seconds {
            Some(s) => thread::sleep(Duration::from_secs_f32(s)),
            None => {
                eprintln!("press Enter to stop");
                let mut line = String::new();
                let _ = std::io::stdin().lock().read_line(&mut line);
            }
        }
        stop.store(true, Ordering::Relaxed);
    });
}

fn play(graph: Graph, voices: usize, write: bool, seconds: Option<f32>) -> Result<()> {
    let stop = Arc::new(AtomicBool::new(false));

    let root = match graph {
        Graph::Delays => graphs::delays(),
        Graph::Keys | Graph::Plucks => {
            let dispatcher = listen(Arc::clone(&stop), midi_backend::receive_all());
            match graph {
                Graph::Keys => graphs::keys(&dispatcher, voices),
                _ => graphs::plucks(&dispatcher, voices),
            }
        }
    };

    // A level meter on the way out, printed from its own thread.
    let meter = graphs::Meter::new(root.outputs());
    let levels = meter.levels();
    let root = Box::new(serially(vec![root, Box::new(meter)]));
    {
        let stop = Arc::clone(&stop);
        thread::spawn(move || {
            while !stop.load(Ordering::Relaxed) {
                thread::sleep(Duration::from_millis(100));
                let levels = levels.lock().unwrap();
                let formatted: Vec<String> =
                    levels.iter().map(|l| format!("{l:.2}")).collect();
                eprint!("\r{}", formatted.join(" "));
            }
            eprintln!();
        });
    }

    let filename = write.then(|| {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let path = PathBuf::from(format!("out-{now}.wav"));
        eprintln!("writing output to {}", path.display());
        path
    });

    stop_when_done(&stop, seconds);
    io::play_with_defaults(stop, root, filename.as_deref())
}

fn show_fix(a: i64, b: Option<i64>) -> Result<()> {
    show_conversions(a)?;
    if let Some(b) = b {
        println!();
        show_conversions(b)?;
        println!();
        show_ops(a, b)?;
    }
    Ok(())
}

fn check_pattern(v: i64) -> Result<u8> {
    if !(-128..=255).contains(&v) {
        bail!("{v} doesn't fit in 8 bits");
    }
    Ok(v as u8)
}

fn show_unsigned(name: &str, value: impl std::fmt::Display, bits: u8) {
    let value = value.to_string();
    println!("{name:<12} {value:<12} {bits:>4} {bits:#04x} {bits:#010b}");
}

fn show_signed(name: &str, value: impl std::fmt::Display, bits: i8) {
    let value = value.to_string();
    println!(
        "{name:<12} {value:<12} {bits:>4} {:#04x} {:#010b}",
        bits as u8, bits as u8,
    );
}

// The most-used corner of the family; enough to see how a pattern reads
// across the signed/unsigned and pitch/level divides.
fn show_conversions(raw: i64) -> Result<()> {
    let bits = check_pattern(raw)?;
    let u08 = U08::from_bits(bits);
    let u17 = U17::from_bits(bits);
    let u71 = U71::from_bits(bits);
    let s17 = S17::from_bits(bits as i8);

    show_unsigned("U08", u08, u08.to_bits());
    show_unsigned("U08->U17", u08.to_u17(), u08.to_u17().to_bits());
    show_unsigned("U08->U71", u08.to_u71(), u08.to_u71().to_bits());
    show_signed("U08->S17", u08.to_s17(), u08.to_s17().to_bits());

    show_unsigned("U17", u17, u17.to_bits());
    show_unsigned("U17->U08", u17.to_u08(), u17.to_u08().to_bits());
    show_unsigned("U17->U71", u17.to_u71(), u17.to_u71().to_bits());
    show_signed("U17->S17", u17.to_s17(), u17.to_s17().to_bits());

    show_unsigned("U71", u71, u71.to_bits());
    show_unsigned("U71->U08", u71.to_u08(), u71.to_u08().to_bits());
    show_unsigned("U71->U17", u71.to_u17(), u71.to_u17().to_bits());
    show_signed("U71->S17", u71.to_s17(), u71.to_s17().to_bits());

    show_signed("S17", s17, s17.to_bits());
    show_unsigned("S17->U08", s17.to_u08(), s17.to_u08().to_bits());
    show_unsigned("S17->U17", s17.to_u17(), s17.to_u17().to_bits());
    show_unsigned("S17->U71", s17.to_u71(), s17.to_u71().to_bits());

    Ok(())
}

fn show_ops(a: i64, b: i64) -> Result<()> {
    let (a, b) = (check_pattern(a)?, check_pattern(b)?);
    let (au08, bu08) = (U08::from_bits(a), U08::from_bits(b));
    let (au17, bu17) = (U17::from_bits(a), U17::from_bits(b));
    let (au71, bu71) = (U71::from_bits(a), U71::from_bits(b));
    let (as17, bs17) = (S17::from_bits(a as i8), S17::from_bits(b as i8));

    show_unsigned("U08 + U08", au08.sadd(bu08), au08.sadd(bu08).to_bits());
    show_unsigned("U08 + U17", au08.sadd_u17(bu17), au08.sadd_u17(bu17).to_bits());
    show_unsigned("U08 - U08", au08.ssub(bu08), au08.ssub(bu08).to_bits());
    show_unsigned("U08 * U08", au08.smul(bu08), au08.smul(bu08).to_bits());
    show_unsigned("U08 * S17", au08.smul_s17(bs17), au08.smul_s17(bs17).to_bits());

    show_unsigned("U17 + U17", au17.sadd(bu17), au17.sadd(bu17).to_bits());
    show_unsigned("U17 - U17", au17.ssub(bu17), au17.ssub(bu17).to_bits());
    show_unsigned("U17 * U17", au17.smul(bu17), au17.smul(bu17).to_bits());
    show_unsigned("U17 * U08", au17.smul_u08(bu08), au17.smul_u08(bu08).to_bits());

    show_unsigned("U71 + U71", au71.sadd(bu71), au71.sadd(bu71).to_bits());
    show_unsigned("U71 - U71", au71.ssub(bu71), au71.ssub(bu71).to_bits());
    show_unsigned("U71 * U71", au71.smul(bu71), au71.smul(bu71).to_bits());

    show_signed("S17 + S17", as17.sadd(bs17), as17.sadd(bs17).to_bits());
    show_signed("S17 - S17", as17.ssub(bs17), as17.ssub(bs17).to_bits());
    show_signed("S17 * S17", as17.smul(bs17), as17.smul(bs17).to_bits());
    show_signed("S17 * U08", as17.smul_u08(bu08), as17.smul_u08(bu08).to_bits());

    Ok(())
}

fn watch_midi() -> Result<()> {
    let stop = Arc::new(AtomicBool::new(false));
    let dispatcher = listen(Arc::clone(&stop), midi_backend::receive_all());
    let rx = dispatcher.subscribe(Filter::all());
    stop_when_done(&stop, None);
    for msg in rx.iter() {
        println!("{msg}");
    }
    Ok(())
}
