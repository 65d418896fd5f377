//! The hard-coded demo graphs, plus the level meter that watches them.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use gritsynth::delay::Delay;
use gritsynth::env::{Ad, Adsr};
use gritsynth::filter::Svf;
use gritsynth::fix::{S17, U08, U26, U71};
use gritsynth::graph::{concurrently, serially, Amp, Collect, Const, Mixer, Mult, Noise, Noop};
use gritsynth::midi::Dispatcher;
use gritsynth::notes::MidiNotes;
use gritsynth::osc::Table;
use gritsynth::pluck::Pluck;
use gritsynth::Ticker;

use crate::io::SAMPLE_RATE;

const SR: f32 = SAMPLE_RATE as f32;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn s17(f: f32) -> S17 {
    S17::from_f32(f)
}

// A constant U71 note source, on the wire as S17 bits.
fn note_const(note: f32) -> Box<dyn Ticker> {
    Box::new(Const::new(U71::from_f32(note).interpret_as_s17()))
}

// Three detuned saws sharing one note input, summed.
fn saw_stack(lowest: f32) -> Box<dyn Ticker> {
    Box::new(serially(vec![
        Box::new(Mult::new(3)),
        Box::new(concurrently(vec![
            Box::new(Table::saw(SR, lowest)),
            Box::new(Table::saw(SR, lowest + 0.2)),
            Box::new(Table::saw(SR, lowest - 0.2)),
        ])),
        Box::new(Mixer::sum(3)),
    ]))
}

/// MIDI keys: polyphonic sine voices with ADSR envelopes, summed through
/// the filter.
pub fn keys(dispatcher: &Dispatcher, voices: usize) -> Box<dyn Ticker> {
    let voice = || -> Box<dyn Ticker> {
        Box::new(serially(vec![
            Box::new(concurrently(vec![
                Box::new(Table::sine(SR, 0.0)),
                Box::new(Adsr::new(ms(200), ms(200), s17(0.5), ms(2000), SR)),
            ])),
            Box::new(Amp),
        ]))
    };
    Box::new(serially(vec![
        Box::new(MidiNotes::new(voices, dispatcher)),
        Box::new(concurrently((0..voices).map(|_| voice()).collect())),
        Box::new(Mixer::sum(voices)),
        Box::new(Svf::new(U08::from_bits(20), U26::from_f32(0.15))),
    ]))
}

/// MIDI plucks: polyphonic Karplus-Strong strings, each excited by an
/// enveloped noise burst.
pub fn plucks(dispatcher: &Dispatcher, voices: usize) -> Box<dyn Ticker> {
    let string = || -> Box<dyn Ticker> {
        let excitation = serially(vec![
            Box::new(concurrently(vec![
                Box::new(Noise::new()),
                Box::new(Ad::new(ms(50), ms(100), SR)),
            ])),
            Box::new(Amp),
        ]);
        Box::new(serially(vec![
            Box::new(Collect::new(2, vec![1, 0, 1])),
            Box::new(concurrently(vec![
                Box::new(excitation),
                Box::new(Collect::new(2, vec![0, 1])),
            ])),
            Box::new(Pluck::new(SR)),
        ]))
    };
    Box::new(serially(vec![
        Box::new(MidiNotes::new(voices, dispatcher)),
        Box::new(concurrently((0..voices).map(|_| string()).collect())),
        Box::new(Mixer::sum(voices)),
    ]))
}

/// No MIDI required: a slowly retriggered saw chord into a pair of
/// modulated delays.
pub fn delays() -> Box<dyn Ticker> {
    // A note, its envelope, and the product.
    let burst = serially(vec![
        Box::new(concurrently(vec![
            Box::new(serially(vec![note_const(52.0), saw_stack(0.0)])),
            Box::new(serially(vec![
                Box::new(gritsynth::graph::Pulse::every(S17::MAX, ms(2000), SR)),
                Box::new(Ad::new(ms(400), ms(1200), SR)),
            ])),
        ])),
        Box::new(Amp),
    ]);
    // The delay rate wobbles around unity from a rat-encoded sine.
    let wobble_delay = |max: Duration, lowest: f32| -> Box<dyn Ticker> {
        Box::new(serially(vec![
            Box::new(concurrently(vec![
                Box::new(Noop::new(1)),
                Box::new(serially(vec![
                    Box::new(Const::new(S17::ZERO)),
                    Box::new(Table::rat_sine(SR, lowest, 1.05)),
                ])),
            ])),
            Box::new(Delay::new(max, SR, Some(Box::new(Mixer::mix(vec![
                s17(0.9),
                s17(0.5),
            ]))))),
        ]))
    };
    Box::new(serially(vec![
        Box::new(burst),
        Box::new(Mult::new(2)),
        Box::new(concurrently(vec![
            wobble_delay(ms(800), -66.0),
            wobble_delay(ms(1100), -60.0),
        ])),
        Box::new(Mixer::new(vec![
            vec![s17(0.8), s17(0.3)],
            vec![s17(0.3), s17(0.8)],
        ])),
    ]))
}

/// A pass-through that tracks a smoothed RMS level per channel, for the
/// terminal meter.
pub struct Meter {
    channels: usize,
    levels: Arc<Mutex<Vec<f32>>>,
}

impl Meter {
    /// A meter over `channels` channels.
    pub fn new(channels: usize) -> Self {
        Meter {
            channels,
            levels: Arc::new(Mutex::new(vec![0.0; channels])),
        }
    }

    /// A handle for reading the levels from another thread.
    pub fn levels(&self) -> Arc<Mutex<Vec<f32>>> {
        Arc::clone(&self.levels)
    }
}

impl Ticker for Meter {
    fn inputs(&self) -> usize {
        self.channels
    }

    fn outputs(&self) -> usize {
        self.channels
    }

    fn tick(&mut self, inputs: &[&[S17]], outputs: &mut [&mut [S17]]) {
        for (o, i) in outputs.iter_mut().zip(inputs) {
            o.copy_from_slice(i);
        }
        let mut levels = self.levels.lock().unwrap();
        for (level, channel) in levels.iter_mut().zip(inputs) {
            let mut sum = 0f64;
            for &s in channel.iter() {
                sum += s.to_f64() * s.to_f64();
            }
            let block = (sum / channel.len().max(1) as f64).sqrt() as f32;
            *level = 0.01 * *level + 0.99 * block;
        }
    }

    fn label(&self) -> String {
        format!("Meter({})", self.channels)
    }
}
