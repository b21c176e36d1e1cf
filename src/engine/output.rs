//! Output types and result structures for sort operations.
//!
//! ## Purpose
//!
//! This module defines the `SortOutput` struct which encapsulates what a
//! completed sort reports back: the number of elements covered, the driver
//! that ran, and (when requested) the run counters.
//!
//! ## Design notes
//!
//! * **Memory Efficiency**: The sorted data stays in the caller's buffer;
//!   the output carries only scalars.
//! * **Optional Metrics**: Counters are attached only when the caller asked
//!   for them.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `len` equals the number of elements in the requested range.
//! * `metrics` is `Some` exactly when metrics collection was configured.
//!
//! ## Non-goals
//!
//! * This module does not perform sorting; it only stores results.
//! * This module does not validate result consistency (responsibility of
//!   the engine).

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};

// Internal dependencies
use crate::engine::executor::Strategy;
use crate::primitives::metrics::SortMetrics;

// ============================================================================
// Result Structure
// ============================================================================

/// Report from a completed sort operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOutput {
    /// Number of elements in the sorted range.
    pub len: usize,

    /// Driver that performed the sort.
    pub strategy: Strategy,

    /// Run counters, when collection was requested.
    pub metrics: Option<SortMetrics>,
}

impl SortOutput {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Check if run counters were collected.
    pub fn has_metrics(&self) -> bool {
        self.metrics.is_some()
    }

    /// Comparisons performed, when counters were collected.
    pub fn comparisons(&self) -> Option<u64> {
        self.metrics.map(|m| m.comparisons)
    }

    /// Exchanges performed, when counters were collected.
    pub fn swaps(&self) -> Option<u64> {
        self.metrics.map(|m| m.swaps)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Elements sorted: {}", self.len)?;
        writeln!(f, "  Strategy: {}", self.strategy)?;

        if let Some(metrics) = self.metrics {
            writeln!(f)?;
            writeln!(f, "Metrics:")?;
            writeln!(f, "  Comparisons: {}", metrics.comparisons)?;
            writeln!(f, "  Swaps:       {}", metrics.swaps)?;
            writeln!(f, "  Partitions:  {}", metrics.partitions)?;
            writeln!(f, "  Max depth:   {}", metrics.max_depth)?;
        }

        Ok(())
    }
}
