use crate::fix::S17;
use crate::graph::Ticker;

/// Fills its single output with a constant value.
pub struct Const {
    /// The value to emit.
    pub val: S17,
}

impl Const {
    /// Creates a source that always produces `val`.
    pub fn new(val: S17) -> Self {
        Const { val }
    }
}

impl Ticker for Const {
    fn inputs(&self) -> usize {
        0
    }

    fn outputs(&self) -> usize {
        1
    }

    fn tick(&mut self, _inputs: &[&[S17]], outputs: &mut [&mut [S17]]) {
        outputs[0].fill(self.val);
    }

    fn label(&self) -> String {
        format!("Const({})", self.val)
    }
}

/// Multiplies its input by a constant and shifts it by a constant:
/// `y = x*mul + shift`, saturating.
pub struct Scale {
    /// The gain applied first.
    pub mul: S17,
    /// The offset added after the gain.
    pub shift: S17,
}

impl Ticker for Scale {
    fn inputs(&self) -> usize {
        1
    }

    fn outputs(&self) -> usize {
        1
    }

    fn tick(&mut self, inputs: &[&[S17]], outputs: &mut [&mut [S17]]) {
        for (o, &x) in outputs[0].iter_mut().zip(inputs[0]) {
            *o = x.smul(self.mul).sadd(self.shift);
        }
    }

    fn label(&self) -> String {
        format!("Scale({}, {})", self.mul, self.shift)
    }
}

/// Copies each of its inputs to the corresponding output.
pub struct Noop {
    channels: usize,
}

impl Noop {
    /// A pass-through over `channels` channels.
    pub fn new(channels: usize) -> Self {
        Noop { channels }
    }
}

impl Ticker for Noop {
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
    }

    fn label(&self) -> String {
        format!("Noop({})", self.channels)
    }
}

/// Broadcasts its single input to every output.
pub struct Mult {
    copies: usize,
}

impl Mult {
    /// Broadcasts one input channel to `copies` outputs.
    pub fn new(copies: usize) -> Self {
        Mult { copies }
    }
}

impl Ticker for Mult {
    fn inputs(&self) -> usize {
        1
    }

    fn outputs(&self) -> usize {
        self.copies
    }

    fn tick(&mut self, inputs: &[&[S17]], outputs: &mut [&mut [S17]]) {
        for o in outputs.iter_mut() {
            o.copy_from_slice(inputs[0]);
        }
    }

    fn label(&self) -> String {
        format!("Mult({})", self.copies)
    }
}

/// Routes input channels to outputs by index: output `j` is a copy of input
/// `picks[j]`. Channels may be duplicated, reordered or dropped.
pub struct Collect {
    inputs: usize,
    picks: Vec<usize>,
}

impl Collect {
    /// Creates a router over `inputs` channels. Panics if any pick is out
    /// of range.
    pub fn new(inputs: usize, picks: Vec<usize>) -> Self {
        for &p in &picks {
            assert!(
                p < inputs,
                "Collect: pick {p} out of range for {inputs} inputs",
            );
        }
        Collect { inputs, picks }
    }
}

impl Ticker for Collect {
    fn inputs(&self) -> usize {
        self.inputs
    }

    fn outputs(&self) -> usize {
        self.picks.len()
    }

    fn tick(&mut self, inputs: &[&[S17]], outputs: &mut [&mut [S17]]) {
        for (o, &p) in outputs.iter_mut().zip(&self.picks) {
            o.copy_from_slice(inputs[p]);
        }
    }

    fn label(&self) -> String {
        format!("Collect({}, {:?})", self.inputs, self.picks)
    }
}

/// Multiplies its two inputs together, sample by sample.
pub struct Amp;

impl Ticker for Amp {
    fn inputs(&self) -> usize {
        2
    }

    fn outputs(&self) -> usize {
        1
    }

    fn tick(&mut self, inputs: &[&[S17]], outputs: &mut [&mut [S17]]) {
        for (i, o) in outputs[0].iter_mut().enumerate() {
            *o = inputs[0][i].smul(inputs[1][i]);
        }
    }

    fn label(&self) -> String {
        "Amp".to_string()
    }
}
