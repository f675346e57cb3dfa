#![cfg(feature = "dev")]
//! Tests for the keyed-sort scratch buffers.
//!
//! These tests verify the buffer module for:
//! - Vector assignment helpers (resize-and-fill, slice replacement)
//! - Scratch preparation (output mirror, zeroed digit table)
//! - Capacity reuse across repeated preparations

use classort::internals::primitives::buffer::{KeyedScratch, VecExt};

// ============================================================================
// VecExt Tests
// ============================================================================

/// `assign` resizes to the requested length and fills with the value.
#[test]
fn test_assign_resizes_and_fills() {
    let mut v: Vec<usize> = Vec::new();
    v.assign(4, 7);
    assert_eq!(v, vec![7, 7, 7, 7]);

    v.assign(2, 1);
    assert_eq!(v, vec![1, 1]);
}

/// `assign` at the same length refills in place.
#[test]
fn test_assign_same_length_refills() {
    let mut v = vec![1, 2, 3];
    v.assign(3, 0);
    assert_eq!(v, vec![0, 0, 0]);
}

/// `assign_slice` replaces the contents, reusing capacity.
#[test]
fn test_assign_slice() {
    let mut v = vec![9, 9, 9, 9];
    let capacity = v.capacity();

    v.assign_slice(&[1, 2]);
    assert_eq!(v, vec![1, 2]);
    assert_eq!(v.capacity(), capacity);
}

// ============================================================================
// KeyedScratch Tests
// ============================================================================

/// `prepare` mirrors the input and zeroes the digit table.
#[test]
fn test_scratch_prepare() {
    let items = [5, 1, 4];
    let mut scratch = KeyedScratch::new();

    scratch.prepare(&items, 10);

    assert_eq!(scratch.out, vec![5, 1, 4]);
    assert_eq!(scratch.counts, vec![0; 10]);
}

/// Repeated preparation resizes correctly for a new input.
#[test]
fn test_scratch_reprepare() {
    let mut scratch = KeyedScratch::new();

    scratch.prepare(&[1, 2, 3, 4], 10);
    scratch.counts[3] = 9;

    scratch.prepare(&[8, 7], 10);
    assert_eq!(scratch.out, vec![8, 7]);
    assert_eq!(scratch.counts, vec![0; 10], "digit table must be re-zeroed");
}
