//! Layer 2: Algorithms
//!
//! This layer implements the core logic of partition-exchange sorting: the
//! element exchange and the Lomuto partition step. It contains the "business
//! logic" of quicksort but is orchestrated by the engine layer.

// Element exchange operations.
pub mod exchange;

// Lomuto partition scheme.
pub mod partition;
