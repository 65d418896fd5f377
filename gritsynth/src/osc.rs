//! Wavetable oscillators.

use std::f64::consts::PI;

use crate::fix::{Rat44, S17, U71};
use crate::graph::Ticker;
use crate::interp::lerp;

/// A wavetable oscillator. The single input channel is read sample by
/// sample as a [U71] MIDI note (offset by `lowest`, which may be negative);
/// the output is the table, scanned at whatever rate makes that pitch.
///
/// Tables holding ordinary audio are scanned with linear interpolation;
/// tables whose contents don't interpolate meaningfully (square waves,
/// rate-encoded data) use nearest-neighbour instead.
pub struct Table {
    tab: Vec<S17>,
    phase: f32,
    sample_rate: f32,
    lowest: f32,
    nearest: bool,
}

impl Table {
    /// A 128-entry sine wave, linearly interpolated.
    pub fn sine(sample_rate: f32, lowest: f32) -> Self {
        const N: usize = 128;
        let tab = (0..N)
            .map(|i| S17::from_f64((PI / (N / 2) as f64 * i as f64).sin()))
            .collect();
        Table {
            tab,
            phase: 0.0,
            sample_rate,
            lowest,
            nearest: false,
        }
    }

    /// A sawtooth: all 256 raw values in order, nearest-neighbour.
    pub fn saw(sample_rate: f32, lowest: f32) -> Self {
        let tab = (-128..128).map(|i| S17::from_bits(i as i8)).collect();
        Table {
            tab,
            phase: 0.0,
            sample_rate,
            lowest,
            nearest: true,
        }
    }

    /// A square wave; the whole table is the two extremes.
    pub fn square(sample_rate: f32, high: S17, low: S17, lowest: f32) -> Self {
        Table {
            tab: vec![high, low],
            phase: 0.0,
            sample_rate,
            lowest,
            nearest: true,
        }
    }

    /// An exponentiated sine intended to be read as [Rat44] rate
    /// multipliers: the values swing between `exp` and `1/exp`. Consumers
    /// reinterpret the output bits rather than treating them as samples.
    pub fn rat_sine(sample_rate: f32, lowest: f32, exp: f32) -> Self {
        const N: usize = 128;
        let tab = (0..N)
            .map(|i| {
                let s = (PI / (N / 2) as f64 * i as f64).sin();
                Rat44::from_f32((exp as f64).powf(s) as f32).interpret_as_s17()
            })
            .collect();
        Table {
            tab,
            phase: 0.0,
            sample_rate,
            lowest,
            nearest: true,
        }
    }

    // The table step per output sample that produces the requested note:
    // the note's frequency is in tables per second, so scale by the table
    // length and divide by the output rate.
    fn step(&self, note: U71) -> f32 {
        let n = self.lowest as f64 + note.to_f64();
        let freq = 2f64.powf((n - 69.0) / 12.0) * 440.0;
        (self.tab.len() as f64 * freq / self.sample_rate as f64) as f32
    }
}

impl Ticker for Table {
    fn inputs(&self) -> usize {
        1
    }

    fn outputs(&self) -> usize {
        1
    }

    fn tick(&mut self, inputs: &[&[S17]], outputs: &mut [&mut [S17]]) {
        let len = self.tab.len();
        for (o, &note) in outputs[0].iter_mut().zip(inputs[0]) {
            let j = self.phase as usize;
            *o = if self.nearest {
                self.tab[j]
            } else {
                let k = (j + 1) % len;
                let c = S17::from_f32(self.phase - j as f32);
                lerp(self.tab[j], self.tab[k], c)
            };
            self.phase += self.step(note.interpret_as_u71());
            while self.phase >= len as f32 {
                self.phase -= len as f32;
            }
        }
    }

    fn label(&self) -> String {
        format!("Table({}{})", self.tab.len(), if self.nearest { ", nn" } else { "" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(t: &mut Table, note: U71, n: usize) -> Vec<S17> {
        let input = vec![note.interpret_as_s17(); n];
        let mut out = vec![S17::ZERO; n];
        t.tick(&[&input], &mut [&mut out]);
        out
    }

    #[test]
    fn sine_starts_at_zero_and_swings_both_ways() {
        // Note 69 is A440; 200 samples at 44100 covers about two periods.
        let mut t = Table::sine(44100.0, 0.0);
        let out = run(&mut t, U71::from_bits(69 << 1), 200);
        assert_eq!(out[0], S17::ZERO);
        assert!(out.iter().any(|&s| s.to_f32() > 0.9));
        assert!(out.iter().any(|&s| s.to_f32() < -0.9));
    }

    #[test]
    fn square_alternates_between_extremes() {
        let (hi, lo) = (S17::from_bits(100), S17::from_bits(-100));
        let mut t = Table::square(44100.0, hi, lo, 0.0);
        let out = run(&mut t, U71::from_bits(60 << 1), 500);
        assert!(out.iter().all(|&s| s == hi || s == lo));
        assert!(out.contains(&hi));
        assert!(out.contains(&lo));
    }

    #[test]
    fn saw_scans_the_table_in_order() {
        // Note 21 is A0, exactly 27.5Hz; at a sample rate of 256 * 27.5
        // the step is exactly one table slot per sample.
        let mut t = Table::saw(256.0 * 27.5, 0.0);
        let out = run(&mut t, U71::from_bits(21 << 1), 256);
        for (i, &s) in out.iter().enumerate() {
            assert_eq!(s, S17::from_bits((i as i16 - 128) as i8), "sample {i}");
        }
    }

    #[test]
    fn rat_sine_encodes_rates_around_one() {
        let mut t = Table::rat_sine(44100.0, 0.0, 1.5);
        let out = run(&mut t, U71::from_bits(69 << 1), 128);
        for &s in &out {
            let r = s.interpret_as_rat44().to_f32();
            assert!((1.0 / 1.6..=1.6).contains(&r), "rate {r} out of range");
        }
    }

    #[test]
    fn higher_notes_cycle_faster() {
        let mut low = Table::sine(44100.0, 0.0);
        let mut high = Table::sine(44100.0, 0.0);
        let crossings = |out: &[S17]| {
            out.windows(2)
                .filter(|w| (w[0].to_bits() as i16) * (w[1].to_bits() as i16) < 0)
                .count()
        };
        let a = crossings(&run(&mut low, U71::from_bits(57 << 1), 4096));
        let b = crossings(&run(&mut high, U71::from_bits(81 << 1), 4096));
        assert!(b > a * 3, "low {a}, high {b}");
    }
}
