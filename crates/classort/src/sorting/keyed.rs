//! Counting sort and LSD radix sort over integer keys.
//!
//! ## Purpose
//!
//! This module implements the two linear-time keyed sorts. Both order
//! elements by a non-negative integer key — either the element itself
//! (the direct `i64` entry points) or a caller-supplied extractor.
//!
//! ## Design notes
//!
//! * **Key contract**: Every key is validated non-negative in the same
//!   pass that finds the maximum, before any placement mutates the
//!   input. A negative key fails with [`SortError::NegativeKey`].
//! * **Stability**: The placement pass walks the input in reverse index
//!   order, so equal keys keep their relative input order.
//! * **Radix passes**: Decimal digits, least significant first; the
//!   outer loop terminates when `max / place` drops to zero, giving
//!   exactly `digits(max)` passes. The place value advances by
//!   `saturating_mul`, which terminates on the same predicate instead of
//!   overflowing for keys near `i64::MAX`.
//! * **Buffers**: Radix sort recycles one output slot and one ten-slot
//!   digit table across all passes ([`KeyedScratch`]); counting sort
//!   allocates its count table once, sized `max + 1`.
//!
//! ## Key concepts
//!
//! * **Extractor purity**: The key extractor must be deterministic and
//!   side-effect-free for the duration of the call; correctness is only
//!   guaranteed under that contract.
//!
//! ## Invariants
//!
//! * The input is never partially mutated on failure: validation
//!   completes before the first placement.
//!
//! ## Non-goals
//!
//! * Negative-key support (offset-shifting is the caller's concern).
//! * Non-decimal radixes.

// Internal dependencies
use crate::primitives::buffer::KeyedScratch;
use crate::primitives::errors::SortError;
use crate::primitives::ops::{copy_range, reset_range};

/// Digit table width for the decimal radix passes.
const RADIX: usize = 10;

// ============================================================================
// Counting Sort
// ============================================================================

/// Counting sort over plain integer values.
///
/// Time: O(n + k), k = max value + 1. Space: O(k). Stable.
pub fn counting_sort(values: &mut [i64]) -> Result<(), SortError> {
    counting_sort_by_key(values, |&v| v)
}

/// Counting sort ordering elements by an extracted non-negative key.
///
/// Counts the occurrences of each key, accumulates the counts into
/// positions, and places elements in reverse input order to preserve
/// stability.
///
/// Time: O(n + k), k = max key + 1. Space: O(k). Stable.
pub fn counting_sort_by_key<T, F>(items: &mut [T], key: F) -> Result<(), SortError>
where
    T: Clone,
    F: Fn(&T) -> i64,
{
    let n = items.len();
    if n <= 1 {
        return Ok(());
    }

    let max = validated_max_key(items, &key)?;

    // count each key occurrence
    let mut counts = vec![0usize; max as usize + 1];
    for item in items.iter() {
        counts[key(item) as usize] += 1;
    }

    // accumulate counts into final positions
    for i in 1..counts.len() {
        counts[i] += counts[i - 1];
    }

    // place elements in sorted order, iterating in reverse to keep
    // equal keys in input order
    let mut output = items.to_vec();
    for item in items.iter().rev() {
        let slot = key(item) as usize;
        output[counts[slot] - 1] = item.clone();
        counts[slot] -= 1;
    }

    copy_range(&output, items, 0)
}

// ============================================================================
// Radix Sort
// ============================================================================

/// LSD radix sort over plain integer values.
///
/// Time: O(nk), k = digits of the maximum value. Space: O(n + k). Stable.
pub fn radix_sort(values: &mut [i64]) -> Result<(), SortError> {
    radix_sort_by_key(values, |&v| v)
}

/// LSD radix sort ordering elements by an extracted non-negative key.
///
/// Runs a stable counting pass per decimal place value, least
/// significant digit first, until every key's remaining digits are
/// exhausted.
///
/// Time: O(nk), k = digits of the maximum key. Space: O(n + k). Stable.
pub fn radix_sort_by_key<T, F>(items: &mut [T], key: F) -> Result<(), SortError>
where
    T: Clone,
    F: Fn(&T) -> i64,
{
    let n = items.len();
    if n <= 1 {
        return Ok(());
    }

    let max = validated_max_key(items, &key)?;

    // one output slot and one digit table, recycled across passes
    let mut scratch = KeyedScratch::new();
    scratch.prepare(items, RADIX);

    let mut place = 1i64;
    while max / place > 0 {
        radix_pass(items, &key, &mut scratch, place)?;
        place = place.saturating_mul(10);
    }

    Ok(())
}

/// One stable counting pass over the digit selected by `place`.
fn radix_pass<T, F>(
    items: &mut [T],
    key: &F,
    scratch: &mut KeyedScratch<T>,
    place: i64,
) -> Result<(), SortError>
where
    T: Clone,
    F: Fn(&T) -> i64,
{
    // reset the digit table instead of reallocating
    reset_range(&mut scratch.counts, RADIX)?;

    // count each digit occurrence at this place value
    for item in items.iter() {
        let digit = ((key(item) / place) % 10) as usize;
        scratch.counts[digit] += 1;
    }

    // accumulate counts into final positions
    for digit in 1..RADIX {
        scratch.counts[digit] += scratch.counts[digit - 1];
    }

    // place elements in sorted order, iterating in reverse to keep
    // equal digits in input order
    for item in items.iter().rev() {
        let digit = ((key(item) / place) % 10) as usize;
        scratch.out[scratch.counts[digit] - 1] = item.clone();
        scratch.counts[digit] -= 1;
    }

    copy_range(&scratch.out, items, 0)
}

// ============================================================================
// Key Validation
// ============================================================================

/// Largest extracted key, validating every key non-negative in the same
/// scan.
fn validated_max_key<T, F>(items: &[T], key: &F) -> Result<i64, SortError>
where
    F: Fn(&T) -> i64,
{
    let mut max = 0i64;

    for (index, item) in items.iter().enumerate() {
        let candidate = key(item);
        if candidate < 0 {
            return Err(SortError::NegativeKey {
                index,
                key: candidate,
            });
        }
        if index == 0 || candidate > max {
            max = candidate;
        }
    }

    Ok(max)
}
