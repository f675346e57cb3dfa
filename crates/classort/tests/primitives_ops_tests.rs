#![cfg(feature = "dev")]
//! Tests for the array operation primitives.
//!
//! These tests verify the ops module for:
//! - Bounds-checked swap and bounded copy
//! - Range reset to default values
//! - Single-pass extreme scans (raw and key-extracted)
//! - Failure cases leaving slices unmodified
//!
//! ## Test Organization
//!
//! 1. **Swap** - valid and out-of-bounds indices
//! 2. **Copy Range** - offsets, exact fits, overruns
//! 3. **Reset Range** - partial and full resets
//! 4. **Extreme Scans** - max/min, keyed variants, empty input

use classort::internals::primitives::errors::SortError;
use classort::internals::primitives::ops::{
    copy_range, max_element, max_key, min_element, min_key, reset_range, swap,
};

// ============================================================================
// Swap Tests
// ============================================================================

/// Swapping two valid indices exchanges the elements.
#[test]
fn test_swap_basic() {
    let mut data = [1, 2, 3, 4];
    swap(&mut data, 0, 3).unwrap();
    assert_eq!(data, [4, 2, 3, 1]);
}

/// Swapping an index with itself is a no-op.
#[test]
fn test_swap_same_index() {
    let mut data = [1, 2, 3];
    swap(&mut data, 1, 1).unwrap();
    assert_eq!(data, [1, 2, 3]);
}

/// Either index out of bounds fails and leaves the slice unmodified.
#[test]
fn test_swap_out_of_bounds() {
    let mut data = [1, 2, 3];

    let err = swap(&mut data, 3, 0).unwrap_err();
    assert_eq!(err, SortError::IndexOutOfBounds { index: 3, len: 3 });

    let err = swap(&mut data, 0, 7).unwrap_err();
    assert_eq!(err, SortError::IndexOutOfBounds { index: 7, len: 3 });

    assert_eq!(data, [1, 2, 3]);
}

// ============================================================================
// Copy Range Tests
// ============================================================================

/// Copies `dest.len()` elements starting at the offset.
#[test]
fn test_copy_range_basic() {
    let src = [10, 20, 30, 40, 50];
    let mut dest = [0; 3];

    copy_range(&src, &mut dest, 1).unwrap();
    assert_eq!(dest, [20, 30, 40]);
}

/// A zero offset copies the prefix; an exact-fit copy consumes the
/// whole source.
#[test]
fn test_copy_range_fits() {
    let src = [1, 2, 3];

    let mut prefix = [0; 2];
    copy_range(&src, &mut prefix, 0).unwrap();
    assert_eq!(prefix, [1, 2]);

    let mut whole = [0; 3];
    copy_range(&src, &mut whole, 0).unwrap();
    assert_eq!(whole, [1, 2, 3]);
}

/// An empty destination is always satisfiable.
#[test]
fn test_copy_range_empty_dest() {
    let src = [1, 2, 3];
    let mut dest: [i64; 0] = [];
    copy_range(&src, &mut dest, 3).unwrap();
}

/// Overrunning the source fails with the full context.
#[test]
fn test_copy_range_out_of_bounds() {
    let src = [1, 2, 3];
    let mut dest = [0; 3];

    let err = copy_range(&src, &mut dest, 1).unwrap_err();
    assert_eq!(
        err,
        SortError::CopyOutOfBounds {
            offset: 1,
            needed: 3,
            available: 3,
        }
    );
    assert_eq!(dest, [0; 3], "failed copy must not write");
}

// ============================================================================
// Reset Range Tests
// ============================================================================

/// Resets the first `n` slots to the default value.
#[test]
fn test_reset_range_partial() {
    let mut data = [7, 7, 7, 7];
    reset_range(&mut data, 2).unwrap();
    assert_eq!(data, [0, 0, 7, 7]);
}

/// A full-length reset clears the whole slice; zero resets nothing.
#[test]
fn test_reset_range_bounds() {
    let mut data = [5, 5];
    reset_range(&mut data, 2).unwrap();
    assert_eq!(data, [0, 0]);

    let mut data = [5, 5];
    reset_range(&mut data, 0).unwrap();
    assert_eq!(data, [5, 5]);
}

/// A count past the slice length fails.
#[test]
fn test_reset_range_out_of_bounds() {
    let mut data = [1, 2];
    let err = reset_range(&mut data, 3).unwrap_err();
    assert_eq!(err, SortError::IndexOutOfBounds { index: 3, len: 2 });
    assert_eq!(data, [1, 2]);
}

// ============================================================================
// Extreme Scan Tests
// ============================================================================

/// Max and min scan the slice once, seeded with the first element.
#[test]
fn test_max_min_basic() {
    let data = [3, 9, 1, 7];
    assert_eq!(max_element(&data), Some(9));
    assert_eq!(min_element(&data), Some(1));

    let single = [4];
    assert_eq!(max_element(&single), Some(4));
    assert_eq!(min_element(&single), Some(4));
}

/// Empty slices yield no extreme.
#[test]
fn test_max_min_empty() {
    let data: [i64; 0] = [];
    assert_eq!(max_element(&data), None);
    assert_eq!(min_element(&data), None);
}

/// The keyed variants return the extracted key, not the element.
#[test]
fn test_keyed_scans() {
    let words = ["aa", "aaaa", "a"];

    assert_eq!(max_key(&words, |w| w.len() as i64), Some(4));
    assert_eq!(min_key(&words, |w| w.len() as i64), Some(1));

    let empty: [&str; 0] = [];
    assert_eq!(max_key(&empty, |w| w.len() as i64), None);
    assert_eq!(min_key(&empty, |w| w.len() as i64), None);
}

/// Negative keys are legal for the raw scans; sign policy belongs to
/// the keyed sorts.
#[test]
fn test_keyed_scans_negative_keys() {
    let data = [(-5i64, 'a'), (3, 'b'), (-9, 'c')];

    assert_eq!(max_key(&data, |p| p.0), Some(3));
    assert_eq!(min_key(&data, |p| p.0), Some(-9));
}
