//! Recursive merge sort.
//!
//! ## Purpose
//!
//! This module implements top-down merge sort: split at the midpoint,
//! sort each half, and merge the sorted halves through a pair of
//! transient buffers.
//!
//! ## Design notes
//!
//! * **Midpoint**: Computed as `left + (right - left) / 2` to avoid
//!   overflow on large indices.
//! * **Stability**: The merge takes the left element on a `<=`
//!   comparison, so equal elements keep their input order.
//! * **Buffers**: The two halves are copied into call-scoped vectors and
//!   merged back into the original slice; nothing is exposed to the
//!   caller.
//!
//! ## Invariants
//!
//! * Recursion depth is O(log n); auxiliary space is O(n).
//! * Empty and single-element slices return without allocating.
//!
//! ## Non-goals
//!
//! * Bottom-up (iterative) merging.
//! * In-place merging.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// ============================================================================
// Merge Sort
// ============================================================================

/// Merge sort: divides the slice into halves, sorts each, and merges the
/// sorted halves back together.
///
/// Time: O(n log n) in all cases. Space: O(n). Stable.
pub fn merge_sort<T: Ord + Clone>(items: &mut [T]) {
    if items.len() <= 1 {
        return;
    }

    merge_sort_range(items, 0, items.len() - 1);
}

/// Sort the inclusive range `[left, right]`.
fn merge_sort_range<T: Ord + Clone>(items: &mut [T], left: usize, right: usize) {
    if left < right {
        let mid = left + (right - left) / 2;

        // sort the first and second halves
        merge_sort_range(items, left, mid);
        merge_sort_range(items, mid + 1, right);

        // merge the sorted halves
        merge_halves(items, left, mid, right);
    }
}

/// Merge the sorted runs `[left, mid]` and `[mid + 1, right]`.
fn merge_halves<T: Ord + Clone>(items: &mut [T], left: usize, mid: usize, right: usize) {
    // copy the two runs into temporary buffers
    let lower: Vec<T> = items[left..=mid].to_vec();
    let upper: Vec<T> = items[mid + 1..=right].to_vec();

    // current index into each run and the main slice
    let (mut i, mut j, mut k) = (0, 0, left);

    // take the smaller head element of the two runs until one run is
    // exhausted; the `<=` keeps equal elements in input order
    while i < lower.len() && j < upper.len() {
        if lower[i] <= upper[j] {
            items[k] = lower[i].clone();
            i += 1;
        } else {
            items[k] = upper[j].clone();
            j += 1;
        }
        k += 1;
    }

    // copy the remaining elements of the lower run
    while i < lower.len() {
        items[k] = lower[i].clone();
        i += 1;
        k += 1;
    }

    // copy the remaining elements of the upper run
    while j < upper.len() {
        items[k] = upper[j].clone();
        j += 1;
        k += 1;
    }
}
