//! High-level API for in-place quicksort.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: a fluent
//! builder for configuring a reusable sorter, and the checked free
//! functions `quick_sort`, `partition`, and `swap` that form the crate's
//! call boundary.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Configuration is validated when `.build()` is called;
//!   ranges are validated before any element is moved.
//! * **Reusable**: A built [`QuickSorter`] borrows each sequence only for
//!   the duration of a call and can sort any number of sequences.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `QuickSort::new()` → setters → `.build()`.
//! * **Whole-slice vs. range**: `sort` covers the full sequence;
//!   `sort_range` covers an inclusive `[low, high]` sub-range.
//! * **Free functions**: One-shot checked calls with default configuration.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::algorithms::exchange;
use crate::algorithms::partition::lomuto_partition;
use crate::engine::executor::{SortConfig, SortExecutor};
use crate::engine::validator::Validator;
use crate::primitives::range::SortRange;

// Publicly re-exported types
pub use crate::engine::executor::Strategy;
pub use crate::engine::output::SortOutput;
pub use crate::primitives::errors::SortError;
pub use crate::primitives::metrics::SortMetrics;

// ============================================================================
// Quicksort Builder
// ============================================================================

/// Fluent builder for configuring an in-place quicksort.
#[derive(Debug, Clone)]
pub struct QuickSortBuilder {
    /// Execution driver (recursive or iterative).
    pub strategy: Option<Strategy>,

    /// Whether to report run counters in the output.
    pub collect_metrics: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl Default for QuickSortBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuickSortBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            strategy: None,
            collect_metrics: None,
            duplicate_param: None,
        }
    }

    /// Set the execution strategy.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        if self.strategy.is_some() {
            self.duplicate_param = Some("strategy");
        }
        self.strategy = Some(strategy);
        self
    }

    /// Include run counters (comparisons, swaps, depth) in the output.
    pub fn collect_metrics(mut self) -> Self {
        if self.collect_metrics.is_some() {
            self.duplicate_param = Some("collect_metrics");
        }
        self.collect_metrics = Some(true);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the sorter.
    pub fn build(self) -> Result<QuickSorter, SortError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(QuickSorter {
            config: SortConfig {
                strategy: self.strategy.unwrap_or_default(),
                collect_metrics: self.collect_metrics.unwrap_or(false),
            },
        })
    }
}

// ============================================================================
// Quicksort Model
// ============================================================================

/// A configured, reusable in-place sorter.
#[derive(Debug, Clone, Copy)]
pub struct QuickSorter {
    config: SortConfig,
}

impl QuickSorter {
    /// Sort an entire sequence in non-descending order.
    ///
    /// Empty and single-element sequences are no-ops. With the default
    /// [`Strategy::Recursive`] driver, recursion depth is O(log n) on
    /// average but O(n) on already-sorted or reverse-sorted input; use
    /// [`Strategy::Iterative`] for adversarial inputs.
    pub fn sort<T: PrimInt>(&self, seq: &mut [T]) -> Result<SortOutput, SortError> {
        self.run(seq, SortRange::full(seq.len()))
    }

    /// Sort the inclusive sub-range `[low, high]` of a sequence.
    ///
    /// A range with `low >= high` covers at most one element and is a
    /// no-op. Elements outside the range are untouched.
    pub fn sort_range<T: PrimInt>(
        &self,
        seq: &mut [T],
        low: usize,
        high: usize,
    ) -> Result<SortOutput, SortError> {
        self.run(seq, SortRange::new(low, high))
    }

    /// Validate, dispatch to the executor, and assemble the output.
    fn run<T: PrimInt>(&self, seq: &mut [T], range: SortRange) -> Result<SortOutput, SortError> {
        if !range.is_sorted_trivially() {
            Validator::validate_range_bounds(range.high, seq.len())?;
        }

        let executed = SortExecutor::execute(seq, range, &self.config);

        Ok(SortOutput {
            len: range.len(),
            strategy: self.config.strategy,
            metrics: self.config.collect_metrics.then_some(executed.metrics),
        })
    }
}

// ============================================================================
// Free Functions
// ============================================================================

/// Sort `seq[low..=high]` in place in non-descending order.
///
/// `low >= high` denotes an empty or single-element range and is a no-op,
/// so this function never reports [`SortError::InvalidRange`]. For a
/// non-empty range, `high` must address a real element.
///
/// Callers sorting a whole sequence invoke `quick_sort(seq, 0, len - 1)`,
/// or use [`QuickSorter::sort`] which handles the empty sequence too.
pub fn quick_sort<T: PrimInt>(seq: &mut [T], low: usize, high: usize) -> Result<(), SortError> {
    if low >= high {
        return Ok(());
    }
    Validator::validate_range_bounds(high, seq.len())?;

    SortExecutor::execute(seq, SortRange::new(low, high), &SortConfig::default());
    Ok(())
}

/// Partition `seq[low..=high]` around its last element and return the
/// pivot's final index.
///
/// On return, every element left of the pivot index is `<=` the pivot
/// value and every element right of it is `>=`. Equal elements move to the
/// left side. Requires a non-empty in-bounds range.
pub fn partition<T: PrimInt>(seq: &mut [T], low: usize, high: usize) -> Result<usize, SortError> {
    Validator::validate_partition_range(low, high)?;
    Validator::validate_range_bounds(high, seq.len())?;

    let mut metrics = SortMetrics::new();
    Ok(lomuto_partition(seq, low, high, &mut metrics))
}

/// Exchange the values at positions `i` and `j`.
///
/// No other position changes, and the operation is its own inverse.
pub fn swap<T: PrimInt>(seq: &mut [T], i: usize, j: usize) -> Result<(), SortError> {
    exchange::swap(seq, i, j)
}
