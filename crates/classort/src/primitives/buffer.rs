//! Scratch buffers for the keyed sorting algorithms.
//!
//! ## Purpose
//!
//! This module provides the reusable working memory for radix sort. Each
//! digit pass needs an output slot the size of the input and a small
//! digit-count table; allocating them once per call and recycling them
//! across passes keeps the per-pass cost down to the placement work itself.
//!
//! ## Design notes
//!
//! * **Call-scoped**: A scratch value is owned by one executing call and
//!   discarded on return; it is never shared or cached globally.
//! * **Lazy sizing**: Buffers are sized on `prepare` and reused unchanged
//!   for every subsequent pass of the same call.
//!
//! ## Invariants
//!
//! * After `prepare`, `out` mirrors the input slice and `counts` holds
//!   exactly `radix` zeroed slots.
//!
//! ## Non-goals
//!
//! * Thread-local or cross-call buffer caching.
//! * The counting passes themselves (owned by the keyed sort module).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// ============================================================================
// Vector Extension
// ============================================================================

/// Helper trait to simplify resizing and filling vectors.
pub trait VecExt<T> {
    /// Resize the vector to `n` and fill with `val`.
    fn assign(&mut self, n: usize, val: T);
    /// Replaces the vector contents with `slice`, reusing capacity.
    fn assign_slice(&mut self, slice: &[T]);
}

impl<T: Clone> VecExt<T> for Vec<T> {
    fn assign(&mut self, n: usize, val: T) {
        if self.len() != n {
            self.clear();
            self.resize(n, val);
        } else {
            self.fill(val);
        }
    }

    fn assign_slice(&mut self, slice: &[T]) {
        self.clear();
        self.extend_from_slice(slice);
    }
}

// ============================================================================
// Keyed Scratch
// ============================================================================

/// Working memory for a single radix sort call.
#[derive(Debug, Clone)]
pub struct KeyedScratch<T> {
    /// Output slot, one element per input element.
    pub out: Vec<T>,

    /// Digit occurrence counts, one slot per digit value.
    pub counts: Vec<usize>,
}

impl<T> Default for KeyedScratch<T> {
    fn default() -> Self {
        Self {
            out: Vec::new(),
            counts: Vec::new(),
        }
    }
}

impl<T: Clone> KeyedScratch<T> {
    /// Create an empty scratch; `prepare` sizes it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Size the scratch for `items` and a digit table of `radix` slots.
    pub fn prepare(&mut self, items: &[T], radix: usize) {
        self.out.assign_slice(items);
        self.counts.assign(radix, 0);
    }
}
