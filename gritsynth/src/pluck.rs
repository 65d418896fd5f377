//! Plucked-string synthesis with a digital waveguide.

use std::sync::LazyLock;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::buffer::read_at;
use crate::fix::{S17, U08, U71};
use crate::graph::{Noise, Ticker};
use crate::interp::lerp;

const TABLE_SIZE: usize = 1 << 16;

// The loop gain; just under one so the string rings for a long time
// without running away.
const LOOP_GAIN: S17 = S17::from_bits(0x7d);

// Frequencies in Hertz for every U71 bit pattern.
static U71_FREQ: LazyLock<[f32; 256]> = LazyLock::new(|| {
    let mut freqs = [0f32; 256];
    for (i, f) in freqs.iter_mut().enumerate() {
        let n = U71::from_bits(i as u8).to_f64();
        *f = (2f64.powf((n - 69.0) / 12.0) * 440.0) as f32;
    }
    freqs
});

/// A Karplus-Strong plucked string.
///
/// Three inputs: extra excitation audio fed into the loop, the note (as
/// [U71] bits) and a velocity-like gate (as [U08] bits); one output, the
/// string. A rising edge on the gate shuffles the stored excitation and
/// lays it onto the delay line; every sample then reads the line at the
/// rate implied by the note, pushes it through a leaky high-pass to keep
/// DC from swamping the 8 bit signal, and writes the result back.
pub struct Pluck {
    sample_period: f32,
    excitation: Vec<S17>,
    tab: Vec<S17>,
    pos: f32,
    prev: S17,
    prev_vel: U08,
    prev_high: S17,
    rng: SmallRng,
}

impl Pluck {
    /// A string with a randomly seeded excitation shuffle.
    pub fn new(sample_rate: f32) -> Self {
        Pluck::with_seed(sample_rate, rand::thread_rng().gen())
    }

    /// A string whose excitation shuffle is deterministic for a given
    /// seed.
    pub fn with_seed(sample_rate: f32, seed: u64) -> Self {
        let mut excitation = vec![S17::ZERO; TABLE_SIZE];
        Noise::new().tick(&[], &mut [&mut excitation[..]]);
        Pluck {
            sample_period: 1.0 / sample_rate,
            excitation,
            tab: vec![S17::ZERO; TABLE_SIZE],
            pos: 0.0,
            prev: S17::ZERO,
            prev_vel: U08::ZERO,
            prev_high: S17::ZERO,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    // Table slots per output sample for the given note: the note's
    // frequency is in table traversals per second.
    fn step(&self, note: U71) -> f32 {
        let per_second = U71_FREQ[note.to_bits() as usize] * self.tab.len() as f32;
        self.sample_period * per_second
    }
}

impl Ticker for Pluck {
    fn inputs(&self) -> usize {
        3
    }

    fn outputs(&self) -> usize {
        1
    }

    fn tick(&mut self, inputs: &[&[S17]], outputs: &mut [&mut [S17]]) {
        let len = self.tab.len() as f32;
        for (i, o) in outputs[0].iter_mut().enumerate() {
            let vel = inputs[2][i].interpret_as_u08();
            if self.prev_vel == U08::ZERO && vel != U08::ZERO {
                // Round the head down so the excitation copy is aligned;
                // the string is restarting so the jump is inaudible.
                let at = self.pos as usize;
                self.pos = at as f32;
                self.excitation.shuffle(&mut self.rng);
                ring_copy(&mut self.tab, at, &self.excitation);
            }
            self.prev_vel = vel;

            let blend = U08::from_f32(1.0 - vel.to_f32());
            let read = read_at(&self.tab, self.pos);
            let excited = inputs[0][i].sadd(read);
            // A one-pole leaky integrator followed by a differencer: a
            // very low high-pass that blocks DC buildup in the loop.
            let high = excited
                .smul_u08(vel)
                .sadd(self.prev.smul_u08(blend).sadd(S17::from_bits(1)));
            let output = high.ssub(self.prev_high).sadd(LOOP_GAIN.smul(self.prev));
            self.prev_high = high;
            *o = output;

            let step = self.step(inputs[1][i].interpret_as_u71());
            let next = self.pos + step;
            let mut wp = self.pos.ceil();
            while wp < next {
                let c = S17::from_f32((wp - self.pos) / step);
                let idx = wp as usize % self.tab.len();
                self.tab[idx] = lerp(output, self.prev, c);
                wp += 1.0;
            }
            self.prev = output;
            self.pos = next;
            if self.pos >= len {
                self.pos -= len;
            }
        }
    }

    fn label(&self) -> String {
        "Pluck".to_string()
    }
}

fn ring_copy(dst: &mut [S17], at: usize, src: &[S17]) {
    let n = (dst.len() - at).min(src.len());
    dst[at..at + n].copy_from_slice(&src[..n]);
    dst[..src.len() - n].copy_from_slice(&src[n..]);
}
