//! Linear and sentinel-linear search.
//!
//! ## Purpose
//!
//! This module implements sequential search by equality: the plain
//! variant checks every index against the bounds, the sentinel variant
//! removes the per-iteration bounds check by temporarily planting the
//! target in the final slot.
//!
//! ## Design notes
//!
//! * **Sentinel round-trip**: The sentinel variant overwrites the last
//!   element and restores it before returning, found or not. The slice
//!   is identical to its pre-call state on return; this is a correctness
//!   property, not an optimization detail.
//! * **First match**: Both variants scan from index 0 and report the
//!   first equal element.
//!
//! ## Invariants
//!
//! * An empty slice returns `None` without scanning.
//! * A returned index is always within `[0, len)`.
//!
//! ## Non-goals
//!
//! * Reverse or multi-match scans.

// ============================================================================
// Linear Search
// ============================================================================

/// Linear search by equality, scanning from index 0.
///
/// Returns the first matching index, or `None`.
///
/// Time: O(n). Space: O(1).
pub fn linear_search<T: PartialEq>(items: &[T], target: &T) -> Option<usize> {
    for (index, item) in items.iter().enumerate() {
        if item == target {
            return Some(index);
        }
    }

    None
}

// ============================================================================
// Sentinel Linear Search
// ============================================================================

/// Linear search with a sentinel: the final slot temporarily holds the
/// target so the scan loop needs no bounds check.
///
/// The original final element is restored before returning; the slice is
/// unchanged from its pre-call state whether or not the target was
/// found. A hit is reported only if the match landed before the final
/// slot, or if the restored final element itself equals the target.
///
/// Time: O(n). Space: O(1).
pub fn sentinel_linear_search<T: PartialEq + Clone>(items: &mut [T], target: &T) -> Option<usize> {
    let n = items.len();
    if n == 0 {
        return None;
    }

    // store the last element and plant the target in its place
    let last = items[n - 1].clone();
    items[n - 1] = target.clone();

    // scan until the target is reached; the sentinel guarantees
    // termination without an index comparison
    let mut index = 0;
    while items[index] != *target {
        index += 1;
    }

    // put the last element back
    items[n - 1] = last;

    if index < n - 1 || items[n - 1] == *target {
        Some(index)
    } else {
        None
    }
}
