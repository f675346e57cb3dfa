//! Binary search over a sorted slice.
//!
//! ## Purpose
//!
//! This module implements binary search: repeated bisection of a slice
//! that is already sorted ascending by the same order used for
//! comparison.
//!
//! ## Design notes
//!
//! * **Precondition**: The slice must be sorted ascending; the function
//!   does not verify this (a full check would defeat the O(log n)
//!   bound).
//! * **Bounds**: The search window is the half-open range `[low, high)`;
//!   the midpoint is computed as `low + (high - low) / 2` to avoid
//!   overflow.
//!
//! ## Invariants
//!
//! * The returned index, when present, compares equal to the target.
//! * An empty slice returns `None` without comparing.
//!
//! ## Non-goals
//!
//! * Leftmost/rightmost match selection among equal elements (any
//!   matching index may be returned).

// External dependencies
use core::cmp::Ordering;

// ============================================================================
// Binary Search
// ============================================================================

/// Binary search in a slice sorted ascending.
///
/// Returns the index of an element equal to `target`, or `None` when the
/// window is exhausted.
///
/// Time: best O(1), average O(log n), worst O(log n). Space: O(1).
pub fn binary_search<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    let mut low = 0;
    let mut high = items.len();

    // bisect until the window is empty
    while low < high {
        let mid = low + (high - low) / 2;

        match items[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            // the target is in the upper half
            Ordering::Less => low = mid + 1,
            // the target is in the lower half
            Ordering::Greater => high = mid,
        }
    }

    None
}
