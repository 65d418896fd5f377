use std::fmt;
use std::sync::LazyLock;

use super::S17;

/// An 8 bit rational with 4 bits each of numerator and denominator, encoding
/// `(n+1)/(d+1)` and so covering 1/16 (0.0625) to 16. It is handy for
/// frequency and rate multipliers: like a float it wastes some of its 256
/// patterns (there are a lot of ways to write 1), but in exchange it spreads
/// its values geometrically where the linear spread of the other fixed
/// points would waste most of its precision on one side of 1.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(transparent)]
pub struct Rat44(u8);

impl Rat44 {
    /// The largest `Rat44`: 16/1.
    pub const MAX: Rat44 = Rat44(0xf0);
    /// The smallest `Rat44`: 1/16.
    pub const MIN: Rat44 = Rat44(0x0f);
    /// One, in its lowest-terms encoding.
    pub const ONE: Rat44 = Rat44(0x00);

    /// Builds a `Rat44` from a raw bit pattern.
    pub const fn from_bits(bits: u8) -> Self {
        Rat44(bits)
    }

    /// Returns the raw bit pattern.
    pub const fn to_bits(self) -> u8 {
        self.0
    }

    /// Reinterprets the bits as an [S17]. The inverse of
    /// [S17::interpret_as_rat44].
    pub const fn interpret_as_s17(self) -> S17 {
        S17::from_bits(self.0 as i8)
    }

    /// Decodes the rational to a float.
    pub fn to_f32(self) -> f32 {
        let num = (self.0 >> 4) + 1;
        let den = (self.0 & 0xf) + 1;
        num as f32 / den as f32
    }

    /// Returns the `Rat44` closest in value to `f`. The conversion is fiddly
    /// and there are fewer than 256 distinct values, so the easiest way is to
    /// look the answer up.
    pub fn from_f32(f: f32) -> Self {
        let table = &*RAT_TABLE;
        let mut i = table.partition_point(|&(v, _)| v < f);
        if i == table.len() {
            return Rat44::MAX;
        }
        if i > 0 && (f - table[i].0).abs() > (f - table[i - 1].0).abs() {
            i -= 1;
        }
        table[i].1
    }
}

impl fmt::Display for Rat44 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", (self.0 >> 4) + 1, (self.0 & 0xf) + 1)
    }
}

// Sorted, deduplicated (value, encoding) pairs for all 256 bit patterns.
// Equal values keep the lowest encoding, like 0x00 for 1.
static RAT_TABLE: LazyLock<Vec<(f32, Rat44)>> = LazyLock::new(|| {
    let mut rats: Vec<(f32, Rat44)> = (0..=255u8)
        .map(|i| (Rat44(i).to_f32(), Rat44(i)))
        .collect();
    rats.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
    rats.dedup_by_key(|r| r.0);
    rats
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_round_trip_preserves_value() {
        for i in 0..=255u8 {
            let r = Rat44::from_bits(i);
            let back = Rat44::from_f32(r.to_f32());
            assert_eq!(
                back.to_f32(),
                r.to_f32(),
                "from_f32(to_f32({r})) = {back}",
            );
        }
    }

    #[test]
    fn from_f32_picks_nearest() {
        assert_eq!(Rat44::from_f32(1.0), Rat44::ONE);
        assert_eq!(Rat44::from_f32(0.0), Rat44::MIN);
        assert_eq!(Rat44::from_f32(1000.0), Rat44::MAX);
        assert_eq!(Rat44::from_f32(2.0).to_f32(), 2.0);
        assert_eq!(Rat44::from_f32(0.5).to_f32(), 0.5);
        // 1.01 is much closer to 1 than to the next value up (16/15).
        assert_eq!(Rat44::from_f32(1.01).to_f32(), 1.0);
    }

    #[test]
    fn bounds_decode() {
        assert_eq!(Rat44::MIN.to_f32(), 0.0625);
        assert_eq!(Rat44::MAX.to_f32(), 16.0);
        assert_eq!(Rat44::ONE.to_f32(), 1.0);
    }
}
