//! Lomuto-partition quick sort.
//!
//! ## Purpose
//!
//! This module implements recursive quick sort with the last element as
//! the pivot and a Lomuto partition: elements strictly less than the
//! pivot are moved left of the partition index.
//!
//! ## Design notes
//!
//! * **Pivot**: Always the rightmost element of the range; no
//!   randomization.
//! * **Recursion**: Expected depth O(log n). Adversarial (already
//!   sorted) input degrades to O(n) depth and O(n^2) time; this is an
//!   accepted property of the fixed pivot, not mitigated here.
//!
//! ## Invariants
//!
//! * After a partition, the pivot element is at its final sorted
//!   position.
//!
//! ## Non-goals
//!
//! * Randomized or median-of-three pivot selection.
//! * Explicit-stack (iterative) recursion flattening.

// ============================================================================
// Quick Sort
// ============================================================================

/// Quick sort: partitions around the last element, then recursively
/// sorts the ranges on either side of the pivot.
///
/// Time: best O(n log n), average O(n log n), worst O(n^2). Space:
/// O(log n) recursion. Not stable.
pub fn quick_sort<T: Ord>(items: &mut [T]) {
    if items.len() <= 1 {
        return;
    }

    quick_sort_range(items, 0, items.len() - 1);
}

/// Sort the inclusive range `[left, right]`.
fn quick_sort_range<T: Ord>(items: &mut [T], left: usize, right: usize) {
    if left >= right {
        return;
    }

    // place the pivot so smaller elements are on its left and greater
    // elements on its right
    let pivot = partition(items, left, right);

    // recurse on each side of the pivot
    if pivot > left {
        quick_sort_range(items, left, pivot - 1);
    }
    if pivot < right {
        quick_sort_range(items, pivot + 1, right);
    }
}

/// Lomuto partition of `[left, right]` around `items[right]`.
///
/// Returns the pivot's final index.
fn partition<T: Ord>(items: &mut [T], left: usize, right: usize) -> usize {
    // next slot for an element smaller than the pivot
    let mut boundary = left;

    for probe in left..right {
        if items[probe] < items[right] {
            items.swap(boundary, probe);
            boundary += 1;
        }
    }

    // move the pivot between the two regions
    items.swap(boundary, right);
    boundary
}
