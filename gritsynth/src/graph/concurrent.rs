use crate::fix::S17;
use crate::graph::Ticker;

/// A parallel bundle of processors: each child sees its own contiguous
/// slice of the aggregate input and output channels. Built with
/// [concurrently].
pub struct Concurrent {
    parts: Vec<Box<dyn Ticker>>,
    inputs: usize,
    outputs: usize,
}

/// Composes processors in parallel. The bundle's input count is the sum of
/// the children's input counts, likewise for outputs; the children are
/// ticked in order over disjoint channel ranges.
pub fn concurrently(parts: Vec<Box<dyn Ticker>>) -> Concurrent {
    let inputs = parts.iter().map(|t| t.inputs()).sum();
    let outputs = parts.iter().map(|t| t.outputs()).sum();
    Concurrent {
        parts,
        inputs,
        outputs,
    }
}

impl Ticker for Concurrent {
    fn inputs(&self) -> usize {
        self.inputs
    }

    fn outputs(&self) -> usize {
        self.outputs
    }

    fn tick(&mut self, inputs: &[&[S17]], outputs: &mut [&mut [S17]]) {
        let (mut i, mut o) = (0, 0);
        for part in self.parts.iter_mut() {
            let (ni, no) = (i + part.inputs(), o + part.outputs());
            part.tick(&inputs[i..ni], &mut outputs[o..no]);
            (i, o) = (ni, no);
        }
    }

    fn label(&self) -> String {
        let parts: Vec<String> = self.parts.iter().map(|t| t.label()).collect();
        format!("({})", parts.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Const, Noop};

    #[test]
    fn children_see_disjoint_channels() {
        let mut c = concurrently(vec![
            Box::new(Const::new(S17::from_bits(1))),
            Box::new(Noop::new(2)),
            Box::new(Const::new(S17::from_bits(3))),
        ]);
        assert_eq!(c.inputs(), 2);
        assert_eq!(c.outputs(), 4);

        let a = [S17::from_bits(10); 4];
        let b = [S17::from_bits(20); 4];
        let mut out = vec![vec![S17::ZERO; 4]; 4];
        let mut views: Vec<&mut [S17]> = out.iter_mut().map(|c| c.as_mut_slice()).collect();
        c.tick(&[&a, &b], &mut views);

        assert!(out[0].iter().all(|&s| s == S17::from_bits(1)));
        assert_eq!(out[1].as_slice(), &a);
        assert_eq!(out[2].as_slice(), &b);
        assert!(out[3].iter().all(|&s| s == S17::from_bits(3)));
    }
}
