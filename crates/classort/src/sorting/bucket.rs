//! Bucket sort over floating-point values.
//!
//! ## Purpose
//!
//! This module implements bucket sort: values are scattered into `k`
//! caller-chosen buckets by their position within the value range, each
//! bucket is insertion-sorted, and the buckets are concatenated back in
//! order.
//!
//! ## Design notes
//!
//! * **Bucket index**: `(x - min) / range` truncated toward zero, where
//!   `range = (max - min) / k`. The maximum value computes to
//!   `index == k` and is folded into bucket `k - 1`.
//! * **Degenerate range**: When `range == 0` (all values equal) the
//!   slice is already sorted and the call is a no-op.
//! * **Validation**: The bucket count is checked first (`k == 0` is a
//!   contract violation regardless of the data); values are checked
//!   finite in the same pass that finds the extremes, before any
//!   mutation.
//! * **Per-bucket sort**: Insertion sort, so the whole algorithm stays
//!   stable and degrades to O(n^2) only when the distribution collapses
//!   into one bucket.
//!
//! ## Invariants
//!
//! * Bucket indices are always within `[0, k)` after the fold.
//! * The concatenation writes exactly `n` elements.
//!
//! ## Non-goals
//!
//! * Non-uniform bucket boundaries.
//! * NaN ordering (non-finite input is rejected, not sorted).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SortError;

// ============================================================================
// Bucket Sort
// ============================================================================

/// Bucket sort: scatters values into `buckets` groups by range position,
/// sorts each group, and gathers them back in bucket order.
///
/// Time: best O(n + k), average O(n + k), worst O(n^2). Space: O(n).
/// Stable.
pub fn bucket_sort<T: Float>(values: &mut [T], buckets: usize) -> Result<(), SortError> {
    if buckets == 0 {
        return Err(SortError::InvalidBucketCount(buckets));
    }

    let n = values.len();
    if n <= 1 {
        return Ok(());
    }

    // find the extremes, rejecting non-finite values in the same pass
    let mut min = values[0];
    let mut max = values[0];
    for (index, &x) in values.iter().enumerate() {
        if !x.is_finite() {
            return Err(SortError::NonFiniteValue { index });
        }
        if x < min {
            min = x;
        }
        if x > max {
            max = x;
        }
    }

    // the range of each bucket; zero means every value is equal and the
    // slice is already sorted
    let range = (max - min) / T::from(buckets).unwrap();
    if range == T::zero() {
        return Ok(());
    }

    let mut bins: Vec<Vec<T>> = vec![Vec::new(); buckets];

    // scatter each value into its bucket; the maximum value lands on
    // index == buckets and is folded into the last bucket
    for &x in values.iter() {
        let index = ((x - min) / range).to_usize().unwrap_or(0);

        if index < buckets {
            bins[index].push(x);
        } else {
            bins[index - 1].push(x);
        }
    }

    // sort individual buckets, then gather them back in order
    let mut write = 0;
    for bin in bins.iter_mut() {
        sort_bin(bin);

        for &x in bin.iter() {
            values[write] = x;
            write += 1;
        }
    }

    Ok(())
}

/// Insertion sort for one bucket of finite values.
fn sort_bin<T: Float>(bin: &mut [T]) {
    for step in 1..bin.len() {
        let mut j = step;

        while j > 0 && bin[j - 1] > bin[j] {
            bin.swap(j - 1, j);
            j -= 1;
        }
    }
}
