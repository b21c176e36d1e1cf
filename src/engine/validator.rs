//! Input validation for sort configuration and ranges.
//!
//! ## Purpose
//!
//! This module provides the validation functions for indices, sort ranges,
//! and builder configuration. It checks requirements such as index bounds
//! and range well-formedness before any element is moved.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Pure**: Validation never mutates the sequence.
//!
//! ## Key concepts
//!
//! * **Index Bounds**: Every index must fall in `[0, len - 1]`.
//! * **Range Shape**: `partition` requires `low <= high`; the sort drivers
//!   accept empty ranges and skip them.
//! * **Builder Hygiene**: Each builder parameter may be configured once.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective bounds.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not partition or reorder data.
//! * This module does not provide automatic correction of invalid inputs.

// Internal dependencies
use crate::primitives::errors::SortError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sort configuration and input ranges.
///
/// Provides static methods returning `Result<(), SortError>` that fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Index Validation
    // ========================================================================

    /// Validate a single element index against the sequence length.
    pub fn validate_index(index: usize, len: usize) -> Result<(), SortError> {
        if index >= len {
            return Err(SortError::IndexOutOfBounds { index, len });
        }
        Ok(())
    }

    // ========================================================================
    // Range Validation
    // ========================================================================

    /// Validate a non-empty partition range.
    ///
    /// `partition` assumes at least one element, unlike the sort drivers
    /// which treat `low >= high` as a terminal case.
    pub fn validate_partition_range(low: usize, high: usize) -> Result<(), SortError> {
        if low > high {
            return Err(SortError::InvalidRange { low, high });
        }
        Ok(())
    }

    /// Validate that a range's upper bound addresses a real element.
    ///
    /// `low <= high` must already hold, so checking `high` covers `low` too.
    pub fn validate_range_bounds(high: usize, len: usize) -> Result<(), SortError> {
        Self::validate_index(high, len)
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Reject builders that configured a parameter more than once.
    pub fn validate_no_duplicates(duplicate: Option<&'static str>) -> Result<(), SortError> {
        if let Some(parameter) = duplicate {
            return Err(SortError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
