//! Instruction-coverage bit vectors.

use bv::{BitVec, Bits, BitsMut};

/// Fixed-width bit vector, one bit per instrumented instruction.
///
/// Width is fixed by the instrumentation of the simulated device; vectors of
/// differing widths still compare, with missing bits treated as unset.
#[derive(Debug, Clone)]
pub struct Coverage {
    bits: BitVec,
}

impl Coverage {
    /// All-zero coverage over `width` instrumentation points.
    pub fn new(width: u64) -> Self {
        Self {
            bits: BitVec::new_fill(false, width),
        }
    }

    /// Coverage over `width` points with the given bits set.
    pub fn from_hits<I: IntoIterator<Item = u64>>(width: u64, hits: I) -> Self {
        let mut cover = Self::new(width);
        for hit in hits {
            cover.set(hit);
        }
        cover
    }

    #[inline]
    pub fn width(&self) -> u64 {
        self.bits.len()
    }

    #[inline]
    pub fn get(&self, i: u64) -> bool {
        i < self.bits.len() && self.bits.get_bit(i)
    }

    #[inline]
    pub fn set(&mut self, i: u64) {
        debug_assert!(i < self.bits.len());
        self.bits.set_bit(i, true);
    }

    /// Number of set bits.
    pub fn cardinality(&self) -> u64 {
        (0..self.bits.len()).filter(|&i| self.bits.get_bit(i)).count() as u64
    }

    /// Number of bits set in `self` but not in `base`: the coverage this
    /// vector exposes beyond what `base` already exposes. Zero iff `base`
    /// subsumes `self`.
    pub fn bonus_over(&self, base: &Coverage) -> u64 {
        (0..self.bits.len())
            .filter(|&i| self.bits.get_bit(i) && !base.get(i))
            .count() as u64
    }
}
