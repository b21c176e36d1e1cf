//! Lomuto partition scheme.
//!
//! ## Purpose
//!
//! This module implements the single forward-scan partition step that places
//! one pivot element at its final sorted position and groups the remaining
//! elements around it.
//!
//! ## Design notes
//!
//! * **Pivot selection**: Always the last element of the range. No sampling,
//!   no randomization.
//! * **Tie handling**: Elements equal to the pivot move to the left side
//!   (`<=` comparison), so the sort is not stable.
//! * **Cursor encoding**: The boundary cursor starts at `low` and points at
//!   the next slot for a small element, rather than at `low - 1` pointing at
//!   the last placed one. Both encodings perform identical exchanges; this
//!   one stays inside `usize`.
//! * **Generics**: Generic over `PrimInt` types.
//!
//! ## Key concepts
//!
//! * **Forward scan**: A single pass of `j` over `[low, high - 1]`.
//! * **Boundary cursor**: Everything left of the cursor is `<=` pivot.
//! * **Pivot placement**: A final exchange moves the pivot onto the cursor.
//!
//! ## Invariants
//!
//! * On return, every element at an index below the returned pivot position
//!   is `<=` the pivot value, and every element above it is `>=`.
//! * Exactly `high - low` comparisons are performed per call.
//! * Only elements inside `[low, high]` are touched.
//!
//! ## Non-goals
//!
//! * This module does not validate bounds (handled by `engine::validator`).
//! * This module does not recurse or schedule sub-ranges (handled by
//!   `engine::executor`).

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::algorithms::exchange::exchange;
use crate::primitives::metrics::SortMetrics;

// ============================================================================
// Lomuto Partition
// ============================================================================

/// Partition `seq[low..=high]` around its last element.
///
/// Returns the final index of the pivot. Requires `low <= high` and
/// `high < seq.len()`; callers validate both before entering the algorithm
/// layer.
pub fn lomuto_partition<T: PrimInt>(
    seq: &mut [T],
    low: usize,
    high: usize,
    metrics: &mut SortMetrics,
) -> usize {
    debug_assert!(low <= high, "lomuto_partition: empty range");
    debug_assert!(high < seq.len(), "lomuto_partition: high out of bounds");

    let pivot = seq[high];

    // Next slot for an element <= pivot.
    let mut boundary = low;

    for j in low..high {
        metrics.record_comparison();
        if seq[j] <= pivot {
            exchange(seq, boundary, j, metrics);
            boundary += 1;
        }
    }

    // Place the pivot at its final sorted position.
    exchange(seq, boundary, high, metrics);
    metrics.record_partition();

    boundary
}
