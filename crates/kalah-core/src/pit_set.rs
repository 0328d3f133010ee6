//! Fixed-size bitset of pit indices, used for per-player legal-move sets.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

/// A set of pit indices backed by a `u64`, one bit per board index.
///
/// Copying a `PitSet` copies the whole set, so every snapshot owns its
/// legal-move sets outright.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PitSet(u64);

impl PitSet {
    /// Empty set.
    pub const EMPTY: PitSet = PitSet(0);

    /// Number of distinct indices a set can hold.
    pub const CAPACITY: usize = 64;

    /// Create a set from a raw bit pattern.
    #[inline]
    pub const fn new(bits: u64) -> PitSet {
        PitSet(bits)
    }

    /// Return the set of indices `start..end`.
    ///
    /// `end` must not exceed [`PitSet::CAPACITY`].
    #[inline]
    pub const fn range(start: usize, end: usize) -> PitSet {
        debug_assert!(start <= end && end <= Self::CAPACITY);
        let high = if end == Self::CAPACITY { !0 } else { (1u64 << end) - 1 };
        let low = (1u64 << start) - 1;
        PitSet(high & !low)
    }

    /// Return the underlying `u64`.
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Return `true` if no index is set.
    #[inline]
    pub const fn is_void(self) -> bool {
        self.0 == 0
    }

    /// Count the number of indices in the set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Return `true` if `pit` is in the set.
    #[inline]
    pub const fn contains(self, pit: usize) -> bool {
        pit < Self::CAPACITY && (self.0 >> pit) & 1 == 1
    }

    /// Return a new set with `pit` added.
    #[inline]
    pub const fn with(self, pit: usize) -> PitSet {
        PitSet(self.0 | (1u64 << pit))
    }

    /// Return a new set with `pit` removed.
    #[inline]
    pub const fn without(self, pit: usize) -> PitSet {
        PitSet(self.0 & !(1u64 << pit))
    }

    /// Return the lowest index in the set, or `None` if empty.
    #[inline]
    pub const fn first(self) -> Option<usize> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros() as usize)
        }
    }
}

impl BitAnd for PitSet {
    type Output = PitSet;
    #[inline]
    fn bitand(self, rhs: PitSet) -> PitSet {
        PitSet(self.0 & rhs.0)
    }
}

impl BitOr for PitSet {
    type Output = PitSet;
    #[inline]
    fn bitor(self, rhs: PitSet) -> PitSet {
        PitSet(self.0 | rhs.0)
    }
}

impl Not for PitSet {
    type Output = PitSet;
    #[inline]
    fn not(self) -> PitSet {
        PitSet(!self.0)
    }
}

// Iteration yields indices in ascending order.
impl Iterator for PitSet {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        let pit = self.first()?;
        self.0 &= self.0 - 1;
        Some(pit)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.count() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for PitSet {}

impl fmt::Debug for PitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(*self).finish()
    }
}
