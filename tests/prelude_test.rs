//! Tests for the public quicksort prelude.
//!
//! These tests exercise only the public surface (`quicksort::prelude`),
//! covering the documented call boundary and the contract properties:
//! - Sortedness and multiset preservation
//! - Idempotence on already-sorted input
//! - Boundary cases (empty, single-element, all-equal)
//! - The four concrete scenarios from the operation contracts
//!
//! ## Test Organization
//!
//! 1. **Concrete Scenarios** - Pinned input/output pairs
//! 2. **Contract Properties** - Permutation, idempotence, boundaries
//! 3. **Randomized Properties** - Agreement with the standard library
//! 4. **Error Surface** - Public error taxonomy

use rand::prelude::*;

use quicksort::prelude::*;

// ============================================================================
// Concrete Scenario Tests
// ============================================================================

/// Test sorting a reverse-sorted sequence.
///
/// Input [4,3,2,1] over the full range yields [1,2,3,4].
#[test]
fn test_scenario_reverse_sorted() {
    let mut arr = [4, 3, 2, 1];
    quick_sort(&mut arr, 0, 3).expect("sort should succeed");

    assert_eq!(arr, [1, 2, 3, 4]);
}

/// Test sorting an all-equal sequence.
///
/// Input [1,1,1] is handled without infinite recursion and unchanged.
#[test]
fn test_scenario_all_equal() {
    let mut arr = [1, 1, 1];
    quick_sort(&mut arr, 0, 2).expect("sort should succeed");

    assert_eq!(arr, [1, 1, 1]);
}

/// Test the exact partition trace.
///
/// `partition([5,2,8,1], 0, 3)` has pivot 1; no other element is <= 1,
/// so the pivot is placed at index 0 and the array becomes [1,2,8,5].
#[test]
fn test_scenario_partition_trace() {
    let mut arr = [5, 2, 8, 1];
    let p = partition(&mut arr, 0, 3).expect("partition should succeed");

    assert_eq!(p, 0);
    assert_eq!(arr, [1, 2, 8, 5]);
}

/// Test the exchange scenario.
///
/// `swap([9,7], 0, 1)` yields [7,9].
#[test]
fn test_scenario_swap() {
    let mut arr = [9, 7];
    swap(&mut arr, 0, 1).expect("swap should succeed");

    assert_eq!(arr, [7, 9]);
}

// ============================================================================
// Contract Property Tests
// ============================================================================

/// Test idempotence.
///
/// Sorting an already-sorted sequence yields the same sequence.
#[test]
fn test_idempotence() {
    let mut arr = [1, 2, 3, 5, 8];
    quick_sort(&mut arr, 0, 4).expect("first sort");
    assert_eq!(arr, [1, 2, 3, 5, 8]);

    quick_sort(&mut arr, 0, 4).expect("second sort");
    assert_eq!(arr, [1, 2, 3, 5, 8]);
}

/// Test boundary sequences.
///
/// Empty and single-element ranges are no-ops.
#[test]
fn test_boundary_sequences() {
    let mut empty: [i32; 0] = [];
    quick_sort(&mut empty, 0, 0).expect("empty range is a no-op");

    let mut single = [42];
    quick_sort(&mut single, 0, 0).expect("single-element range is a no-op");
    assert_eq!(single, [42]);
}

/// Test sub-range sorting leaves the rest untouched.
///
/// Only `[low, high]` is reordered.
#[test]
fn test_sub_range_sorting() {
    let mut arr = [9, 5, 3, 1, 7];
    quick_sort(&mut arr, 1, 3).expect("range sort should succeed");

    assert_eq!(arr, [9, 1, 3, 5, 7]);
}

/// Test duplicate-heavy input.
///
/// Verifies termination and correct ordering with few distinct values.
#[test]
fn test_duplicate_heavy_input() {
    let mut arr = [2, 1, 2, 0, 1, 2, 0, 0, 1];
    let high = arr.len() - 1;
    quick_sort(&mut arr, 0, high).expect("sort should succeed");

    assert_eq!(arr, [0, 0, 0, 1, 1, 1, 2, 2, 2]);
}

/// Test the builder workflow end to end.
///
/// Verifies the fluent path sorts and reports metrics.
#[test]
fn test_builder_workflow() {
    let mut data = vec![4, 3, 2, 1];

    let sorter = QuickSort::new()
        .strategy(Iterative)
        .collect_metrics()
        .build()
        .expect("build should succeed");

    let output = sorter.sort(&mut data).expect("sort should succeed");

    assert_eq!(data, vec![1, 2, 3, 4]);
    assert_eq!(output.len, 4);
    assert_eq!(output.strategy, Strategy::Iterative);
    assert!(output.has_metrics());
}

// ============================================================================
// Randomized Property Tests
// ============================================================================

/// Test agreement with the standard library on random input.
///
/// Sorting must yield the same permutation as `sort_unstable`, which
/// also establishes multiset preservation.
#[test]
fn test_random_agreement_with_std() {
    let mut rng = StdRng::seed_from_u64(1962);

    for round in 0..16 {
        let n = rng.gen_range(0..200);
        let original: Vec<i64> = (0..n).map(|_| rng.gen_range(-50..50)).collect();

        let mut expected = original.clone();
        expected.sort_unstable();

        let mut actual = original.clone();
        if !actual.is_empty() {
            let high = actual.len() - 1;
            quick_sort(&mut actual, 0, high).expect("sort should succeed");
        }

        assert_eq!(actual, expected, "round {round} diverged on {original:?}");
    }
}

/// Test multiset preservation explicitly.
///
/// No value is created, lost, or duplicated by sorting.
#[test]
fn test_multiset_preservation() {
    let mut rng = StdRng::seed_from_u64(7);
    let original: Vec<i32> = (0..300).map(|_| rng.gen_range(-10..10)).collect();

    let mut sorted = original.clone();
    let high = sorted.len() - 1;
    quick_sort(&mut sorted, 0, high).expect("sort should succeed");

    for value in -10..10 {
        let before = original.iter().filter(|&&v| v == value).count();
        let after = sorted.iter().filter(|&&v| v == value).count();
        assert_eq!(before, after, "count of {value} changed");
    }
}

/// Test generic integer widths.
///
/// The sort covers any primitive integer, signed or not.
#[test]
fn test_integer_widths() {
    let mut bytes: [u8; 5] = [200, 3, 255, 0, 17];
    let sorter = QuickSort::new().build().expect("build");
    sorter.sort(&mut bytes).expect("u8 sort");
    assert_eq!(bytes, [0, 3, 17, 200, 255]);

    let mut wide: [i128; 3] = [1 << 100, -(1 << 90), 0];
    sorter.sort(&mut wide).expect("i128 sort");
    assert_eq!(wide, [-(1 << 90), 0, 1 << 100]);
}

// ============================================================================
// Error Surface Tests
// ============================================================================

/// Test the public error taxonomy.
///
/// `partition` rejects inverted ranges; every entry point rejects
/// out-of-bounds indices; `quick_sort` treats inverted ranges as empty.
#[test]
fn test_error_taxonomy() {
    let mut arr = [3, 1, 2];

    let res = partition(&mut arr, 2, 0);
    assert!(
        matches!(res, Err(SortError::InvalidRange { low: 2, high: 0 })),
        "partition must reject inverted ranges"
    );

    let res = partition(&mut arr, 0, 9);
    assert!(
        matches!(res, Err(SortError::IndexOutOfBounds { index: 9, len: 3 })),
        "partition must reject out-of-bounds high"
    );

    let res = quick_sort(&mut arr, 0, 9);
    assert!(
        matches!(res, Err(SortError::IndexOutOfBounds { index: 9, len: 3 })),
        "quick_sort must reject out-of-bounds high"
    );

    quick_sort(&mut arr, 2, 0).expect("inverted range is an empty no-op");
    assert_eq!(arr, [3, 1, 2], "failed and empty calls must not move elements");
}
