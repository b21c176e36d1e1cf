//! Range primitives for partition-exchange sorting.
//!
//! This module provides the low-level representation of the sub-sequence a
//! sort step operates on, with helpers for deriving the sub-ranges on either
//! side of a placed pivot.

// Inclusive sort bounds `[low, high]` for one partition step.
//
// `low > high` encodes an empty range, which is a legal terminal case.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SortRange {
    // Lower boundary index (inclusive).
    pub low: usize,

    // Upper boundary index (inclusive).
    pub high: usize,
}

impl SortRange {
    // Create a range from inclusive bounds.
    #[inline]
    pub fn new(low: usize, high: usize) -> Self {
        Self { low, high }
    }

    // Range covering a whole sequence of `n` elements.
    #[inline]
    pub fn full(n: usize) -> Self {
        if n == 0 {
            // `low > high` encodes the empty range.
            Self { low: 1, high: 0 }
        } else {
            Self { low: 0, high: n - 1 }
        }
    }

    // Number of elements in the range.
    #[inline]
    pub fn len(&self) -> usize {
        if self.low > self.high {
            0
        } else {
            self.high - self.low + 1
        }
    }

    // Check if the range holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.low > self.high
    }

    // A range of fewer than two elements is already sorted.
    #[inline]
    pub fn is_sorted_trivially(&self) -> bool {
        self.len() < 2
    }

    // Check if an index falls inside the range.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.low <= index && index <= self.high
    }

    // Sub-range strictly left of a placed pivot, if non-empty.
    //
    // Guards the `pivot - 1` bound so an unsigned underflow can never occur
    // when the pivot lands on `low`.
    #[inline]
    pub fn left_of(&self, pivot: usize) -> Option<SortRange> {
        debug_assert!(self.contains(pivot), "left_of: pivot outside range");
        (pivot > self.low).then(|| SortRange::new(self.low, pivot - 1))
    }

    // Sub-range strictly right of a placed pivot, if non-empty.
    #[inline]
    pub fn right_of(&self, pivot: usize) -> Option<SortRange> {
        debug_assert!(self.contains(pivot), "right_of: pivot outside range");
        (pivot < self.high).then(|| SortRange::new(pivot + 1, self.high))
    }
}
