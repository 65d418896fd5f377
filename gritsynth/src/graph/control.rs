use std::time::Duration;

use crate::fix::S17;
use crate::graph::Ticker;

/// Emits a value exactly once every `interval` samples and zero in between,
/// regardless of how the output is split into blocks. Useful for
/// retriggering envelopes.
pub struct Pulse {
    val: S17,
    interval: usize,
    since: usize,
}

impl Pulse {
    /// Emits `val` every `interval` samples, the first time `interval`
    /// samples after construction.
    pub fn new(val: S17, interval: usize) -> Self {
        assert!(interval > 0, "Pulse: zero interval");
        Pulse {
            val,
            interval,
            since: 0,
        }
    }

    /// Emits `val` every `dur`, at the given sample rate.
    pub fn every(val: S17, dur: Duration, sample_rate: f32) -> Self {
        let interval = (dur.as_secs_f64() * sample_rate as f64) as usize;
        Pulse::new(val, interval.max(1))
    }
}

impl Ticker for Pulse {
    fn inputs(&self) -> usize {
        0
    }

    fn outputs(&self) -> usize {
        1
    }

    fn tick(&mut self, _inputs: &[&[S17]], outputs: &mut [&mut [S17]]) {
        for o in outputs[0].iter_mut() {
            self.since += 1;
            *o = if self.since == self.interval {
                self.since = 0;
                self.val
            } else {
                S17::ZERO
            };
        }
    }

    fn label(&self) -> String {
        format!("Pulse({}, {})", self.val, self.interval)
    }
}

/// Emits a value in the very first sample it produces and zero forever
/// after.
pub struct Once {
    val: S17,
    fired: bool,
}

impl Once {
    /// Emits `val` once, at the first sample.
    pub fn new(val: S17) -> Self {
        Once { val, fired: false }
    }
}

impl Ticker for Once {
    fn inputs(&self) -> usize {
        0
    }

    fn outputs(&self) -> usize {
        1
    }

    fn tick(&mut self, _inputs: &[&[S17]], outputs: &mut [&mut [S17]]) {
        outputs[0].fill(S17::ZERO);
        if !self.fired && !outputs[0].is_empty() {
            outputs[0][0] = self.val;
            self.fired = true;
        }
    }

    fn label(&self) -> String {
        format!("Once({})", self.val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(t: &mut dyn Ticker, blocks: &[usize]) -> Vec<S17> {
        let mut out = Vec::new();
        for &b in blocks {
            let mut block = vec![S17::ZERO; b];
            t.tick(&[], &mut [&mut block]);
            out.extend(block);
        }
        out
    }

    #[test]
    fn pulse_fires_on_schedule_across_blocks() {
        let v = S17::from_bits(64);
        let mut p = Pulse::new(v, 5);
        let out = collect(&mut p, &[3, 3, 3, 3, 3]);
        for (i, &s) in out.iter().enumerate() {
            let want = if i % 5 == 4 { v } else { S17::ZERO };
            assert_eq!(s, want, "sample {i}");
        }
    }

    #[test]
    fn pulse_every_converts_duration() {
        let p = Pulse::every(S17::MAX, Duration::from_millis(10), 1000.0);
        assert_eq!(p.interval, 10);
    }

    #[test]
    fn once_fires_only_at_sample_zero() {
        let v = S17::from_bits(-5);
        let mut o = Once::new(v);
        let out = collect(&mut o, &[4, 4]);
        assert_eq!(out[0], v);
        assert!(out[1..].iter().all(|&s| s == S17::ZERO));
    }
}
