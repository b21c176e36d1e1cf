//! Error types for sorting operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur when driving the
//! sort: out-of-bounds element access, malformed partition ranges, and
//! builder misconfiguration.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the offending index and the sequence length).
//! * **Fail-Fast**: All variants represent caller precondition violations; none is retryable.
//! * **No-std**: Variants carry only `Copy` payloads, so no allocation is needed to report them.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Index validation**: Element access outside `[0, len - 1]`.
//! 2. **Range validation**: `low > high` passed directly to `partition`.
//! 3. **Builder constraints**: A parameter configured more than once.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sorting operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// An index points outside the sequence.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of elements in the sequence.
        len: usize,
    },

    /// A partition range was requested with `low > high`.
    ///
    /// `quick_sort` treats such ranges as empty and never reports this;
    /// `partition` requires a non-empty range and does.
    InvalidRange {
        /// Lower inclusive bound of the requested range.
        low: usize,
        /// Upper inclusive bound of the requested range.
        high: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "Index out of bounds: {index} (sequence has {len} elements)")
            }
            Self::InvalidRange { low, high } => {
                write!(f, "Invalid range: low {low} exceeds high {high}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SortError {}
