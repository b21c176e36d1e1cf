//! # Quicksort — In-Place Partition-Exchange Sorting for Rust
//!
//! An in-place quicksort over primitive integer sequences, built on the
//! Lomuto partition scheme with last-element pivot selection, for **std**
//! and **no_std** targets.
//!
//! ## What is the Lomuto scheme?
//!
//! Lomuto partitioning rearranges a sub-range with a single forward scan
//! and a boundary cursor: the last element is the pivot, elements `<=` the
//! pivot are exchanged down to the cursor, and a final exchange places the
//! pivot at the boundary, which is its final sorted position. Quicksort then
//! recurses on the two sides of the pivot. The scheme is deterministic and
//! allocation-free, and inherits the classic trade-off: O(n log n) on
//! average, O(n²) on already-sorted or reverse-sorted input.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use quicksort::prelude::*;
//!
//! let mut data = vec![4, 3, 2, 1];
//!
//! // Build the sorter
//! let sorter = QuickSort::new().build()?;
//!
//! // Sort the sequence in place
//! let output = sorter.sort(&mut data)?;
//!
//! assert_eq!(data, vec![1, 2, 3, 4]);
//! assert_eq!(output.len, 4);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use quicksort::prelude::*;
//!
//! let mut data: Vec<i64> = (0..1_000).rev().collect();
//!
//! // Reverse-sorted input is the adversarial case for a last-element
//! // pivot; the iterative driver keeps stack usage bounded.
//! let sorter = QuickSort::new()
//!     .strategy(Iterative)    // Explicit range stack instead of recursion
//!     .collect_metrics()      // Count comparisons, swaps, and depth
//!     .build()?;
//!
//! let output = sorter.sort(&mut data)?;
//!
//! println!("{}", output);
//! assert!(data.windows(2).all(|w| w[0] <= w[1]));
//! assert_eq!(output.comparisons(), Some(499_500));
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Elements sorted: 1000
//!   Strategy: Iterative
//!
//! Metrics:
//!   Comparisons: 499500
//!   Swaps:       250499
//!   Partitions:  999
//!   Max depth:   1
//! ```
//!
//! ### Range Sorting and the Call Boundary
//!
//! The classic three-function boundary is available as checked free
//! functions:
//!
//! ```rust
//! use quicksort::prelude::*;
//!
//! let mut data = [9, 5, 3, 1, 7];
//!
//! // Sort only the inclusive sub-range [1, 3]
//! quick_sort(&mut data, 1, 3)?;
//! assert_eq!(data, [9, 1, 3, 5, 7]);
//!
//! // One partition step: places the last element, returns its index
//! let mut arr = [5, 2, 8, 1];
//! let pivot = partition(&mut arr, 0, 3)?;
//! assert_eq!(pivot, 0);
//! assert_eq!(arr, [1, 2, 8, 5]);
//!
//! // Checked element exchange
//! let mut pair = [9, 7];
//! swap(&mut pair, 0, 1)?;
//! assert_eq!(pair, [7, 9]);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ## Error Handling
//!
//! All entry points validate before any element is moved and fail fast:
//!
//! ```rust
//! use quicksort::prelude::*;
//!
//! let mut data = [3, 1, 2];
//!
//! match partition(&mut data, 2, 0) {
//!     Err(SortError::InvalidRange { low: 2, high: 0 }) => {}
//!     other => panic!("expected InvalidRange, got {:?}", other),
//! }
//!
//! match swap(&mut data, 0, 9) {
//!     Err(SortError::IndexOutOfBounds { index: 9, len: 3 }) => {}
//!     other => panic!("expected IndexOutOfBounds, got {:?}", other),
//! }
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! quicksort = { version = "0.1", default-features = false }
//! ```
//!
//! **Tips for embedded/no_std usage:**
//! - The recursive driver allocates nothing at all; the iterative driver
//!   allocates only its range stack (O(log n) entries) via `alloc`
//! - Prefer the `Iterative` strategy when input shape is untrusted, since
//!   adversarial input drives recursion depth to O(n)
//! - Counters add two increments per comparison; leave metrics off on hot
//!   paths
//!
//! ## References
//!
//! - Hoare, C. A. R. (1962). "Quicksort", The Computer Journal 5(1)
//! - Bentley, J. (1986). "Programming Pearls" (the Lomuto partition)
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - ranges, errors, counters.
mod primitives;

// Layer 2: Algorithms - exchange and Lomuto partition.
mod algorithms;

// Layer 3: Engine - drivers, validation, output types.
mod engine;

// High-level fluent API for in-place sorting.
mod api;

// Standard quicksort prelude.
pub mod prelude {
    pub use crate::api::{
        partition, quick_sort, swap, QuickSortBuilder as QuickSort, QuickSorter, SortError,
        SortMetrics, SortOutput,
        Strategy::{self, Iterative, Recursive},
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
