//! Filters.

use crate::fix::{S17, S26, U08, U17, U26};
use crate::graph::Ticker;

/// A state-variable filter running in fixed point, with the state held in
/// [S26] for headroom. The coefficient matrix is solved in floats once at
/// construction (the fixed-point core has no divide); the per-sample path
/// is all saturating 8 bit arithmetic. The output taps the first state,
/// which blocks DC and rolls off towards Nyquist, so it reads as a broad
/// band around the cutoff.
pub struct Svf {
    state: [S26; 2],
    cutoff: U08,
    // The 2x2 coefficient matrix (I + g*A)^-1, row major.
    h: [S26; 4],
    // -2r, for the state update.
    r2: S26,
    // 2g, the integrator gain.
    g2: U17,
}

impl Svf {
    /// A filter with the given cutoff and resonance. The cutoff is
    /// normalised: as a fraction of the sample rate it is `g / pi`
    /// pre-warping aside, so useful values live well below `MAX`.
    /// Resonance should stay under one; higher values saturate the
    /// feedback coefficient.
    pub fn new(cutoff: U08, resonance: U26) -> Self {
        let g = cutoff.to_f32();
        let r = resonance.to_f32();
        let hf = 1.0 / (g * g + 2.0 * r * g + 1.0);
        Svf {
            state: [S26::ZERO; 2],
            cutoff,
            h: [
                S26::from_f32(hf),
                S26::from_f32(-g * hf),
                S26::from_f32(g * hf),
                S26::from_f32((2.0 * r * g + 1.0) * hf),
            ],
            r2: S26::from_f32(-2.0 * r),
            g2: U17::from_f32(2.0).smul_u08(cutoff),
        }
    }
}

impl Ticker for Svf {
    fn inputs(&self) -> usize {
        1
    }

    fn outputs(&self) -> usize {
        1
    }

    fn tick(&mut self, inputs: &[&[S17]], outputs: &mut [&mut [S17]]) {
        let [h00, h01, h10, h11] = self.h;
        for (o, &u) in outputs[0].iter_mut().zip(inputs[0]) {
            let hs0 = self.state[0].smul(h00).sadd(self.state[1].smul(h01));
            let hs1 = self.state[0].smul(h10).sadd(self.state[1].smul(h11));

            let hu0 = h00.smul_s17(u);
            let hu1 = h10.smul_s17(u);

            let x0 = hu0.smul_u08(self.cutoff).sadd(hs0);
            let x1 = hu1.smul_u08(self.cutoff).sadd(hs1);

            let ax0 = x0.smul(self.r2).ssub(x1);
            let ax1 = x0;
            self.state[0] = self.state[0].sadd(ax0.smul_u17(self.g2));
            self.state[1] = self.state[1].sadd(ax1.smul_u17(self.g2));

            *o = self.state[0].to_s17();
        }
    }

    fn label(&self) -> String {
        format!("Svf({})", self.cutoff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(f: &mut Svf, input: &[S17]) -> Vec<S17> {
        let mut out = vec![S17::ZERO; input.len()];
        f.tick(&[input], &mut [&mut out]);
        out
    }

    #[test]
    fn silence_in_silence_out() {
        let mut f = Svf::new(U08::from_bits(20), U26::from_f32(0.15));
        let out = run(&mut f, &[S17::ZERO; 256]);
        assert!(out.iter().all(|&s| s == S17::ZERO));
    }

    #[test]
    fn blocks_dc_without_saturating() {
        let mut f = Svf::new(U08::from_bits(20), U26::from_f32(0.15));
        let input = [S17::from_f32(0.5); 2048];
        let out = run(&mut f, &input);
        // A constant input settles to a small offset near zero, not a
        // rail and not a limit cycle.
        let tail = &out[1536..];
        for &s in tail {
            assert!(s.to_bits().unsigned_abs() <= 4, "tail sample {s}");
        }
        let spread = tail.iter().map(|s| s.to_bits()).max().unwrap()
            - tail.iter().map(|s| s.to_bits()).min().unwrap();
        assert!(spread <= 2, "tail still moving by {spread} steps");
    }

    #[test]
    fn passes_midband_more_than_nyquist() {
        let sine: Vec<S17> = (0..4096)
            .map(|i| S17::from_f64(0.5 * (2.0 * std::f64::consts::PI * i as f64 / 100.0).sin()))
            .collect();
        let alternation: Vec<S17> = (0..1024)
            .map(|i| {
                if i % 2 == 0 {
                    S17::from_f32(0.5)
                } else {
                    S17::from_f32(-0.5)
                }
            })
            .collect();
        let peak = |out: &[S17]| {
            out.iter()
                .map(|s| s.to_bits().unsigned_abs())
                .max()
                .unwrap()
        };
        let mut f = Svf::new(U08::from_bits(20), U26::from_f32(0.15));
        let mid = peak(&run(&mut f, &sine)[2048..]);
        let mut f = Svf::new(U08::from_bits(20), U26::from_f32(0.15));
        let fast = peak(&run(&mut f, &alternation)[512..]);
        assert!(mid >= 8, "midband barely passes: {mid}");
        assert!(fast < mid, "no rolloff: {fast} vs {mid}");
    }
}
