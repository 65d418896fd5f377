use arrayvec::ArrayVec;

use crate::fix::S17;
use crate::graph::{Ticker, MAX_BLOCK, MAX_CHANNELS};

/// A serial pipeline of processors: each stage's outputs feed the next
/// stage's inputs. Built with [serially].
pub struct Chain {
    stages: Vec<Box<dyn Ticker>>,
    inputs: usize,
    outputs: usize,
    // Two scratch buffer sets sized to the widest point of the chain. Each
    // stage reads from one set and writes into the other, then the roles
    // swap, so a stage's input and output never alias and nothing is
    // allocated per tick.
    b1: Vec<Vec<S17>>,
    b2: Vec<Vec<S17>>,
}

/// Composes processors in series. Panics if the list is empty, if any
/// stage's output count doesn't match its successor's input count, or if
/// the widest point of the chain exceeds [MAX_CHANNELS].
pub fn serially(stages: Vec<Box<dyn Ticker>>) -> Chain {
    assert!(!stages.is_empty(), "serially: empty chain");
    let mut max_chans = stages[0].inputs();
    for pair in stages.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.outputs() == b.inputs(),
            "serially: outputs/inputs mismatch:\n{} ({} outputs)\n->\n{} ({} inputs)",
            a.label(),
            a.outputs(),
            b.label(),
            b.inputs(),
        );
        max_chans = max_chans.max(a.outputs());
    }
    max_chans = max_chans.max(stages[stages.len() - 1].outputs());
    assert!(
        max_chans <= MAX_CHANNELS,
        "serially: {max_chans} channels exceeds the supported {MAX_CHANNELS}",
    );
    let scratch = || vec![vec![S17::ZERO; MAX_BLOCK]; max_chans];
    Chain {
        inputs: stages[0].inputs(),
        outputs: stages[stages.len() - 1].outputs(),
        b1: scratch(),
        b2: scratch(),
        stages,
    }
}

impl Ticker for Chain {
    fn inputs(&self) -> usize {
        self.inputs
    }

    fn outputs(&self) -> usize {
        self.outputs
    }

    fn tick(&mut self, inputs: &[&[S17]], outputs: &mut [&mut [S17]]) {
        let n = outputs[0].len();
        for (scratch, input) in self.b1.iter_mut().zip(inputs) {
            scratch[..n].copy_from_slice(input);
        }
        for scratch in self.b2.iter_mut() {
            scratch[..n].fill(S17::ZERO);
        }
        let (mut src, mut dst) = (&mut self.b1, &mut self.b2);
        for stage in self.stages.iter_mut() {
            {
                let ins: ArrayVec<&[S17], MAX_CHANNELS> =
                    src[..stage.inputs()].iter().map(|c| &c[..n]).collect();
                let mut outs: ArrayVec<&mut [S17], MAX_CHANNELS> = dst[..stage.outputs()]
                    .iter_mut()
                    .map(|c| &mut c[..n])
                    .collect();
                stage.tick(&ins, &mut outs);
            }
            std::mem::swap(&mut src, &mut dst);
        }
        for (output, scratch) in outputs.iter_mut().zip(src.iter()) {
            output.copy_from_slice(&scratch[..n]);
        }
    }

    fn label(&self) -> String {
        let stages: Vec<String> = self.stages.iter().map(|t| t.label()).collect();
        format!("Chain({})", stages.join(" -> "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Amp, Const, Mult, Noop};

    #[test]
    fn const_through_noop() {
        let v = S17::from_bits(42);
        let mut chain = serially(vec![Box::new(Const::new(v)), Box::new(Noop::new(1))]);
        let mut out = vec![S17::ZERO; 16];
        chain.tick(&[], &mut [&mut out]);
        assert!(out.iter().all(|&s| s == v), "{out:?}");
    }

    #[test]
    fn squaring_a_constant() {
        let half = S17::from_f32(0.5);
        let mut chain = serially(vec![
            Box::new(Const::new(half)),
            Box::new(Mult::new(2)),
            Box::new(Amp),
        ]);
        assert_eq!(chain.inputs(), 0);
        assert_eq!(chain.outputs(), 1);
        let mut out = vec![S17::ZERO; 4];
        chain.tick(&[], &mut [&mut out]);
        assert!(out.iter().all(|&s| s == half.smul(half)), "{out:?}");
    }

    #[test]
    fn state_survives_across_ticks() {
        // A chain around a stateful stage keeps that stage's state.
        let mut chain = serially(vec![
            Box::new(Const::new(S17::MAX)),
            Box::new(crate::env::Ad::from_samples(8, 8)),
        ]);
        let mut first = vec![S17::ZERO; 4];
        chain.tick(&[], &mut [&mut first]);
        let mut second = vec![S17::ZERO; 4];
        chain.tick(&[], &mut [&mut second]);
        // Still climbing the attack in the second block.
        assert!(second[0] > first[3]);
    }

    #[test]
    #[should_panic(expected = "mismatch")]
    fn mismatched_stages_panic() {
        serially(vec![Box::new(Const::new(S17::ZERO)), Box::new(Amp)]);
    }

    #[test]
    #[should_panic(expected = "empty chain")]
    fn empty_chain_panics() {
        serially(vec![]);
    }
}
