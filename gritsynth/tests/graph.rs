//! Whole-graph scenarios: building and ticking the kinds of patches the
//! synthesizer actually runs.

use std::thread;
use std::time::{Duration, Instant};

use gritsynth::delay::Delay;
use gritsynth::env::Ad;
use gritsynth::fix::{Rat44, S17};
use gritsynth::graph::{concurrently, serially, Amp, Collect, Const, Mixer, Noise, Noop};
use gritsynth::midi::{note_on, parse_messages, Dispatcher};
use gritsynth::notes::MidiNotes;
use gritsynth::osc::Table;
use gritsynth::pluck::Pluck;
use gritsynth::Ticker;

const SR: f32 = 44100.0;

fn tick_blocks(graph: &mut dyn Ticker, input: &[Vec<S17>], frames: usize, block: usize) -> Vec<Vec<S17>> {
    let mut out = vec![vec![S17::ZERO; frames]; graph.outputs()];
    let mut at = 0;
    while at < frames {
        let n = block.min(frames - at);
        let ins: Vec<&[S17]> = input.iter().map(|c| &c[at..at + n]).collect();
        let mut outs: Vec<&mut [S17]> = out.iter_mut().map(|c| &mut c[at..at + n]).collect();
        graph.tick(&ins, &mut outs);
        at += n;
    }
    out
}

fn rms(samples: &[S17]) -> f64 {
    let sum: f64 = samples.iter().map(|s| s.to_f64() * s.to_f64()).sum();
    (sum / samples.len() as f64).sqrt()
}

// One polyphonic voice: a sine and an envelope side by side, multiplied.
fn voice() -> Box<dyn Ticker> {
    Box::new(serially(vec![
        Box::new(concurrently(vec![
            Box::new(Table::sine(SR, 0.0)),
            Box::new(Ad::from_samples(441, 441)),
        ])),
        Box::new(Amp),
    ]))
}

#[test]
fn midi_driven_polyphony_is_audibly_present() {
    let dispatcher = Dispatcher::new();
    let mut notes = MidiNotes::new(4, &dispatcher);

    // A four-note chord, all at once.
    let chord = [
        note_on(0, 60, 100),
        note_on(0, 64, 100),
        note_on(0, 67, 100),
        note_on(0, 71, 100),
    ];
    for msg in parse_messages(&chord).unwrap() {
        dispatcher.dispatch(msg);
    }

    // The subscription thread applies the events; wait until every voice
    // holds a note before rendering.
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        let mut probe = vec![vec![S17::ZERO; 1]; notes.outputs()];
        let mut views: Vec<&mut [S17]> = probe.iter_mut().map(|c| c.as_mut_slice()).collect();
        notes.tick(&[], &mut views);
        if (0..4).all(|v| probe[2 * v][0] != S17::ZERO) {
            break;
        }
        assert!(Instant::now() < deadline, "note events never arrived");
        thread::sleep(Duration::from_millis(5));
    }

    let mut graph = serially(vec![
        Box::new(notes),
        Box::new(concurrently((0..4).map(|_| voice()).collect())),
        Box::new(Mixer::sum(4)),
    ]);
    assert_eq!(graph.inputs(), 0);
    assert_eq!(graph.outputs(), 1);

    // 100ms of audio.
    let frames = (SR / 10.0) as usize;
    let out = tick_blocks(&mut graph, &[], frames, 512);
    let level = rms(&out[0]);
    assert!(
        (0.05..0.5).contains(&level),
        "chord rendered at rms {level}",
    );
}

#[test]
fn delayed_oscillator_echoes() {
    // An oscillator burst into a quarter-second delay running at unit
    // rate: silence for the delay time, then the burst.
    let mut graph = serially(vec![
        Box::new(concurrently(vec![
            Box::new(Noop::new(1)),
            Box::new(Const::new(Rat44::ONE.interpret_as_s17())),
        ])),
        Box::new(Delay::new(Duration::from_millis(250), SR, None)),
    ]);
    assert_eq!(graph.inputs(), 1);

    let delay_samples = (0.25 * SR) as usize;
    let frames = 2 * delay_samples;
    let mut input = vec![vec![S17::ZERO; frames]];
    for (i, s) in input[0][..1000].iter_mut().enumerate() {
        *s = S17::from_f32(0.5 * (i as f32 / 20.0).sin());
    }
    let out = tick_blocks(&mut graph, &input, frames, 441);
    assert!(out[0][..delay_samples].iter().all(|&s| s == S17::ZERO));
    for i in 0..1000 {
        assert_eq!(out[0][delay_samples + i], input[0][i], "sample {i}");
    }
}

#[test]
fn plucked_string_patch_rings() {
    // The note and gate channels drive an excitation generator and the
    // string itself: [note, gate] fans out to [gate->noise burst, note,
    // gate].
    let excitation = serially(vec![
        Box::new(concurrently(vec![
            Box::new(Noise::new()),
            Box::new(Ad::from_samples(100, 400)),
        ])),
        Box::new(Amp),
    ]);
    let mut graph = serially(vec![
        Box::new(Collect::new(2, vec![1, 0, 1])),
        Box::new(concurrently(vec![
            Box::new(excitation),
            Box::new(Collect::new(2, vec![0, 1])),
        ])),
        Box::new(Pluck::with_seed(SR, 1234)),
    ]);
    assert_eq!(graph.inputs(), 2);
    assert_eq!(graph.outputs(), 1);

    let frames = 4096;
    let note = vec![gritsynth::fix::U71::from_bits(69 << 1).interpret_as_s17(); frames];
    let gate = vec![gritsynth::fix::U08::from_bits(100 << 1).interpret_as_s17(); frames];
    let out = tick_blocks(&mut graph, &[note, gate], frames, 512);
    let nonzero = out[0].iter().filter(|&&s| s != S17::ZERO).count();
    assert!(nonzero > frames / 2, "string stayed quiet: {nonzero} nonzero");
}
