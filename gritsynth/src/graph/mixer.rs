use crate::fix::S17;
use crate::graph::Ticker;

/// Mixes input channels down through a matrix of gains: output row `i` is
/// the saturating sum over inputs `j` of `gains[i][j] * input[j]`.
pub struct Mixer {
    // One row per output channel, one column per input channel.
    gains: Vec<Vec<S17>>,
}

impl Mixer {
    /// Creates a mixer from an outputs-by-inputs gain matrix. Panics on an
    /// empty or ragged matrix.
    pub fn new(gains: Vec<Vec<S17>>) -> Self {
        assert!(!gains.is_empty(), "Mixer: no output rows");
        let width = gains[0].len();
        assert!(width > 0, "Mixer: no input columns");
        for row in &gains {
            assert!(
                row.len() == width,
                "Mixer: ragged matrix ({} vs {width} columns)",
                row.len(),
            );
        }
        Mixer { gains }
    }

    /// A single-output mixer with the given input gains.
    pub fn mix(gains: Vec<S17>) -> Self {
        Mixer::new(vec![gains])
    }

    /// Sums `n` inputs down to one, scaling the gains to try and keep a
    /// roughly constant power. The square root saturates at the top of the
    /// [S17] range, so for two or more inputs this is close to unity gain.
    pub fn sum(n: usize) -> Self {
        let g = S17::from_f64((n as f64).sqrt());
        Mixer::mix(vec![g; n])
    }
}

impl Ticker for Mixer {
    fn inputs(&self) -> usize {
        self.gains[0].len()
    }

    fn outputs(&self) -> usize {
        self.gains.len()
    }

    fn tick(&mut self, inputs: &[&[S17]], outputs: &mut [&mut [S17]]) {
        let n = outputs[0].len();
        for s in 0..n {
            for (row, output) in self.gains.iter().zip(outputs.iter_mut()) {
                let mut acc = S17::ZERO;
                for (&g, input) in row.iter().zip(inputs) {
                    acc = acc.sadd(g.smul(input[s]));
                }
                output[s] = acc;
            }
        }
    }

    fn label(&self) -> String {
        format!("Mixer({}x{})", self.outputs(), self.inputs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_inputs_cancel() {
        let mut m = Mixer::mix(vec![S17::from_f32(0.5), S17::from_f32(0.5)]);
        let a = [S17::from_bits(100); 8];
        let b = [S17::from_bits(-100); 8];
        let mut out = vec![S17::from_bits(99); 8];
        m.tick(&[&a, &b], &mut [&mut out]);
        assert!(out.iter().all(|&s| s == S17::ZERO), "{out:?}");
    }

    #[test]
    fn matrix_routes_rows_independently() {
        let m = vec![
            vec![S17::MAX, S17::ZERO],
            vec![S17::ZERO, S17::MAX],
        ];
        let mut mixer = Mixer::new(m);
        let a = [S17::from_bits(64); 4];
        let b = [S17::from_bits(-64); 4];
        let mut out = vec![vec![S17::ZERO; 4]; 2];
        let mut views: Vec<&mut [S17]> = out.iter_mut().map(|c| c.as_mut_slice()).collect();
        mixer.tick(&[&a, &b], &mut views);
        // MAX is a hair under unity, so expect within a step.
        assert!((out[0][0].to_bits() - 64).abs() <= 1);
        assert!((out[1][0].to_bits() + 64).abs() <= 1);
    }

    #[test]
    fn sum_gains_saturate_to_near_unity() {
        let mut m = Mixer::sum(4);
        assert_eq!(m.inputs(), 4);
        let one = [S17::from_f32(0.1); 2];
        let mut out = vec![S17::ZERO; 2];
        m.tick(&[&one, &one, &one, &one], &mut [&mut out]);
        // sqrt(4) saturates to MAX, so each input contributes MAX * x.
        let term = S17::MAX.smul(S17::from_f32(0.1));
        let want = term.sadd(term).sadd(term).sadd(term);
        assert_eq!(out[0], want);
    }

    #[test]
    #[should_panic(expected = "ragged")]
    fn ragged_matrix_panics() {
        Mixer::new(vec![vec![S17::ZERO, S17::ZERO], vec![S17::ZERO]]);
    }

    #[test]
    #[should_panic(expected = "no output rows")]
    fn empty_matrix_panics() {
        Mixer::new(vec![]);
    }
}
