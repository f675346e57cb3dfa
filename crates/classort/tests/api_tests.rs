//! Tests for the fluent sorting plan API.
//!
//! These tests verify the builder and plan for:
//! - Defaults and configuration flow
//! - Duplicate-parameter and bucket-count validation at build time
//! - Capability routing: each entry point accepts only the algorithms
//!   it can drive
//! - Plan reuse across calls and element types
//!
//! ## Test Organization
//!
//! 1. **Builder Defaults and Validation**
//! 2. **Ordering Dispatch** - `sort`
//! 3. **Keyed Dispatch** - `sort_by_key`
//! 4. **Float Dispatch** - `sort_floats`

use classort::prelude::*;

// ============================================================================
// Builder Defaults and Validation
// ============================================================================

/// An unconfigured builder defaults to quick sort.
#[test]
fn test_builder_defaults() {
    let plan = Sorter::new().build().unwrap();
    assert_eq!(plan.algorithm(), SortAlgorithm::Quick);

    let mut data = vec![3, 1, 2];
    plan.sort(&mut data).unwrap();
    assert_eq!(data, vec![1, 2, 3]);
}

/// Setting the same parameter twice fails at build time.
#[test]
fn test_builder_duplicate_parameter() {
    let err = Sorter::new()
        .algorithm(SortAlgorithm::Merge)
        .algorithm(SortAlgorithm::Heap)
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        SortError::DuplicateParameter {
            parameter: "algorithm"
        }
    );

    let err = Sorter::new().buckets(4).buckets(8).build().unwrap_err();
    assert_eq!(
        err,
        SortError::DuplicateParameter {
            parameter: "buckets"
        }
    );
}

/// A zero bucket count fails at build time, not at sort time.
#[test]
fn test_builder_zero_buckets() {
    let err = Sorter::new()
        .algorithm(SortAlgorithm::Bucket)
        .buckets(0)
        .build()
        .unwrap_err();

    assert_eq!(err, SortError::InvalidBucketCount(0));
}

/// The duplicate-parameter message is descriptive.
#[test]
fn test_duplicate_parameter_display() {
    let err = SortError::DuplicateParameter {
        parameter: "buckets",
    };
    assert_eq!(
        format!("{}", err),
        "Parameter 'buckets' was set multiple times. Each parameter can only be configured once."
    );
}

// ============================================================================
// Ordering Dispatch
// ============================================================================

/// Every comparison algorithm runs through `sort`.
#[test]
fn test_plan_sort_comparison_algorithms() {
    let algorithms = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Shell,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
    ];

    for algorithm in algorithms {
        let plan = Sorter::new().algorithm(algorithm).build().unwrap();

        let mut data = vec![5, 3, 8, 1, 9, 2];
        plan.sort(&mut data).unwrap();
        assert_eq!(data, vec![1, 2, 3, 5, 8, 9], "{} failed", algorithm.name());
    }
}

/// The keyed and bucket algorithms cannot be driven by an ordering
/// alone.
#[test]
fn test_plan_sort_rejects_keyed_algorithms() {
    for algorithm in [
        SortAlgorithm::Counting,
        SortAlgorithm::Radix,
        SortAlgorithm::Bucket,
    ] {
        let plan = Sorter::new().algorithm(algorithm).build().unwrap();

        let original = vec![3, 1, 2];
        let mut data = original.clone();
        let err = plan.sort(&mut data).unwrap_err();

        assert!(
            matches!(err, SortError::UnsupportedAlgorithm { .. }),
            "{} should not dispatch via sort",
            algorithm.name()
        );
        assert_eq!(data, original, "rejected dispatch must not mutate");
    }
}

// ============================================================================
// Keyed Dispatch
// ============================================================================

/// Counting and radix plans run through `sort_by_key`.
#[test]
fn test_plan_sort_by_key() {
    for algorithm in [SortAlgorithm::Counting, SortAlgorithm::Radix] {
        let plan = Sorter::new().algorithm(algorithm).build().unwrap();

        let mut pairs = vec![(802, 'h'), (2, 'l'), (170, 'm')];
        plan.sort_by_key(&mut pairs, |p| p.0).unwrap();

        let keys: Vec<i64> = pairs.iter().map(|p| p.0).collect();
        assert_eq!(keys, vec![2, 170, 802], "{} failed", algorithm.name());
    }
}

/// Comparison and bucket plans reject `sort_by_key`.
#[test]
fn test_plan_sort_by_key_rejects_others() {
    for algorithm in [SortAlgorithm::Quick, SortAlgorithm::Bucket] {
        let plan = Sorter::new().algorithm(algorithm).build().unwrap();

        let mut pairs = vec![(2i64, 'a'), (1, 'b')];
        let err = plan.sort_by_key(&mut pairs, |p| p.0).unwrap_err();
        assert!(matches!(err, SortError::UnsupportedAlgorithm { .. }));
    }
}

/// Key-contract violations surface through the plan unchanged.
#[test]
fn test_plan_sort_by_key_negative_key() {
    let plan = Sorter::new()
        .algorithm(SortAlgorithm::Counting)
        .build()
        .unwrap();

    let mut pairs = vec![(2i64, 'a'), (-1, 'b')];
    let err = plan.sort_by_key(&mut pairs, |p| p.0).unwrap_err();
    assert_eq!(err, SortError::NegativeKey { index: 1, key: -1 });
}

// ============================================================================
// Float Dispatch
// ============================================================================

/// A bucket plan runs through `sort_floats` with its configured count.
#[test]
fn test_plan_sort_floats() {
    let plan = Sorter::new()
        .algorithm(SortAlgorithm::Bucket)
        .buckets(5)
        .build()
        .unwrap();

    let mut values = vec![0.42, 0.32, 0.23, 0.52, 0.25, 0.47, 0.51];
    plan.sort_floats(&mut values).unwrap();
    assert_eq!(values, vec![0.23, 0.25, 0.32, 0.42, 0.47, 0.51, 0.52]);
}

/// Non-bucket plans reject `sort_floats`.
#[test]
fn test_plan_sort_floats_rejects_others() {
    let plan = Sorter::new().algorithm(SortAlgorithm::Merge).build().unwrap();

    let mut values = vec![0.2f64, 0.1];
    let err = plan.sort_floats(&mut values).unwrap_err();
    assert!(matches!(err, SortError::UnsupportedAlgorithm { .. }));
}

/// The unsupported-algorithm message names the algorithm and the
/// missing capability.
#[test]
fn test_unsupported_algorithm_display() {
    let plan = Sorter::new()
        .algorithm(SortAlgorithm::Counting)
        .build()
        .unwrap();

    let err = plan.sort(&mut [3, 1, 2]).unwrap_err();
    assert_eq!(
        format!("{}", err),
        "Algorithm 'counting' requires an integer key extractor (use sort_by_key)"
    );
}

// ============================================================================
// Plan Reuse
// ============================================================================

/// One plan sorts repeatedly across element types.
#[test]
fn test_plan_reuse() {
    let plan = Sorter::new().algorithm(SortAlgorithm::Heap).build().unwrap();

    let mut numbers = vec![3, 1, 2];
    plan.sort(&mut numbers).unwrap();
    assert_eq!(numbers, vec![1, 2, 3]);

    let mut words = vec!["pear", "apple", "fig"];
    plan.sort(&mut words).unwrap();
    assert_eq!(words, vec!["apple", "fig", "pear"]);

    let mut again = vec![9, 8, 7];
    plan.sort(&mut again).unwrap();
    assert_eq!(again, vec![7, 8, 9]);
}
