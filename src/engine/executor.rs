//! Execution engine for partition-exchange sorting.
//!
//! ## Purpose
//!
//! This module provides the drivers that turn single partition steps into a
//! full sort. It owns the recursion (or the explicit range stack), threads
//! the run counters through every step, and reports what it measured.
//!
//! ## Design notes
//!
//! * **Two drivers**: Native recursion mirrors the classic formulation of
//!   the algorithm; the iterative driver replaces the machine stack with an
//!   explicit stack of pending ranges.
//! * **Identical results**: Both drivers execute the same set of partition
//!   steps, so the sorted output, comparison count, and swap count are
//!   identical. Only the depth measurement differs in meaning.
//! * **Depth risk**: With the last element as pivot, already-sorted and
//!   reverse-sorted inputs drive the recursive driver to O(n) depth. The
//!   iterative driver processes the smaller side of each split first, which
//!   bounds its pending stack at O(log n) ranges.
//! * **Generics**: Generic over `PrimInt` types.
//!
//! ## Invariants
//!
//! * On return, the requested range is sorted in non-descending order.
//! * Elements outside the requested range are untouched.
//! * Execution is fully deterministic for a given input and strategy.
//!
//! ## Non-goals
//!
//! * This module does not validate input ranges (handled by `validator`).
//! * This module does not choose pivots adaptively; the last element of
//!   each range is the pivot, quadratic worst case included.
//! * This module does not provide public-facing result formatting.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use num_traits::PrimInt;

// Internal dependencies
use crate::algorithms::partition::lomuto_partition;
use crate::primitives::metrics::SortMetrics;
use crate::primitives::range::SortRange;

// ============================================================================
// Strategy
// ============================================================================

/// Driver used to schedule partition steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Native recursion - default.
    ///
    /// Faithful to the classic two-branch formulation. Worst-case depth is
    /// O(n) on already-sorted or reverse-sorted input.
    #[default]
    Recursive,

    /// Explicit range stack.
    ///
    /// Same ordering semantics with machine-stack usage independent of the
    /// input; pending ranges are bounded at O(log n).
    Iterative,
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Recursive => write!(f, "Recursive"),
            Self::Iterative => write!(f, "Iterative"),
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for one sort execution.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortConfig {
    /// Driver to run.
    pub strategy: Strategy,

    /// Whether the caller wants the run counters reported back.
    pub collect_metrics: bool,
}

/// Output from sort execution.
#[derive(Debug, Clone, Copy)]
pub struct ExecutorOutput {
    /// Counters accumulated over the run.
    pub metrics: SortMetrics,
}

// ============================================================================
// Executor
// ============================================================================

/// Unified execution engine for partition-exchange sorting.
pub struct SortExecutor;

impl SortExecutor {
    /// Sort `seq` over `range` with the configured driver.
    ///
    /// Assumes `range.high < seq.len()` whenever the range is non-empty;
    /// the caller validates bounds before dispatching here. Empty and
    /// single-element ranges return without touching the sequence.
    pub fn execute<T: PrimInt>(
        seq: &mut [T],
        range: SortRange,
        config: &SortConfig,
    ) -> ExecutorOutput {
        let mut metrics = SortMetrics::new();

        if !range.is_sorted_trivially() {
            debug_assert!(range.high < seq.len(), "execute: range out of bounds");
            match config.strategy {
                Strategy::Recursive => Self::sort_recursive(seq, range, 1, &mut metrics),
                Strategy::Iterative => Self::sort_iterative(seq, range, &mut metrics),
            }
        }

        ExecutorOutput { metrics }
    }

    // ========================================================================
    // Recursive Driver
    // ========================================================================

    /// Classic two-branch recursion: partition, then sort both sides.
    ///
    /// `depth` counts the nested partitioning calls; terminal calls on
    /// ranges of fewer than two elements are not counted.
    fn sort_recursive<T: PrimInt>(
        seq: &mut [T],
        range: SortRange,
        depth: usize,
        metrics: &mut SortMetrics,
    ) {
        if range.is_sorted_trivially() {
            return;
        }

        metrics.observe_depth(depth);
        let pivot = lomuto_partition(seq, range.low, range.high, metrics);

        if let Some(left) = range.left_of(pivot) {
            Self::sort_recursive(seq, left, depth + 1, metrics);
        }
        if let Some(right) = range.right_of(pivot) {
            Self::sort_recursive(seq, right, depth + 1, metrics);
        }
    }

    // ========================================================================
    // Iterative Driver
    // ========================================================================

    /// Explicit-stack driver: pop a range, partition it, push the sides.
    ///
    /// The larger side is pushed first so the smaller side is processed
    /// next, which keeps the pending stack at O(log n) ranges.
    fn sort_iterative<T: PrimInt>(seq: &mut [T], range: SortRange, metrics: &mut SortMetrics) {
        let mut pending: Vec<SortRange> = Vec::new();
        pending.push(range);

        while let Some(current) = pending.pop() {
            if current.is_sorted_trivially() {
                continue;
            }

            // The popped range is in flight; count it on top of the stack.
            metrics.observe_depth(pending.len() + 1);
            let pivot = lomuto_partition(seq, current.low, current.high, metrics);

            let left = current.left_of(pivot);
            let right = current.right_of(pivot);

            match (left, right) {
                (Some(l), Some(r)) => {
                    if l.len() >= r.len() {
                        pending.push(l);
                        pending.push(r);
                    } else {
                        pending.push(r);
                        pending.push(l);
                    }
                }
                (Some(l), None) => pending.push(l),
                (None, Some(r)) => pending.push(r),
                (None, None) => {}
            }
        }
    }
}
