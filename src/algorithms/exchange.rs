//! Element exchange operations.
//!
//! This module provides the two flavors of exchange the crate uses: a
//! bounds-checked entry point for callers, and the instrumented in-range
//! exchange the partition loop relies on.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::errors::SortError;
use crate::primitives::metrics::SortMetrics;

// Exchange the values at positions `i` and `j`.
//
// No other position changes, and the operation is its own inverse.
// `i == j` is allowed and leaves the sequence untouched.
#[inline]
pub fn swap<T: PrimInt>(seq: &mut [T], i: usize, j: usize) -> Result<(), SortError> {
    let len = seq.len();
    if i >= len {
        return Err(SortError::IndexOutOfBounds { index: i, len });
    }
    if j >= len {
        return Err(SortError::IndexOutOfBounds { index: j, len });
    }

    seq.swap(i, j);
    Ok(())
}

// In-range exchange used by the partition loop.
//
// Indices are proven in-range by the caller's validated bounds.
#[inline]
pub(crate) fn exchange<T: PrimInt>(seq: &mut [T], i: usize, j: usize, metrics: &mut SortMetrics) {
    debug_assert!(i < seq.len(), "exchange: left index out of bounds");
    debug_assert!(j < seq.len(), "exchange: right index out of bounds");

    seq.swap(i, j);
    metrics.record_swap();
}
