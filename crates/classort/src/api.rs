//! High-level API for configured sorting plans.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point when the
//! algorithm choice is configuration-driven. It implements a fluent
//! builder for selecting an algorithm and its parameters, validated once
//! at `build()` into a reusable [`SortPlan`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all
//!   parameters.
//! * **Validated**: Parameters are validated when `.build()` is called,
//!   not per sort.
//! * **Duplicate detection**: Setting the same parameter twice is
//!   reported at build time rather than silently last-wins.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SorterBuilder`] via `Sorter::new()`.
//! 2. Chain configuration methods (`.algorithm()`, `.buckets()`).
//! 3. Call `.build()` to obtain a validated [`SortPlan`].
//! 4. Run `.sort()`, `.sort_by_key()`, or `.sort_floats()` any number of
//!    times.
//!
//! The search functions carry no configuration and are re-exported here
//! as plain functions.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{SortConfig, SortExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::primitives::errors::SortError;
pub use crate::primitives::ops::{
    copy_range, max_element, max_key, min_element, min_key, reset_range, swap,
};
pub use crate::searching::binary::binary_search;
pub use crate::searching::linear::{linear_search, sentinel_linear_search};
pub use crate::sorting::algorithm::{Growth, SortAlgorithm, TimeComplexity};
pub use crate::sorting::bucket::bucket_sort;
pub use crate::sorting::comparison::{bubble_sort, insertion_sort, selection_sort, shell_sort};
pub use crate::sorting::heap::heap_sort;
pub use crate::sorting::keyed::{
    counting_sort, counting_sort_by_key, radix_sort, radix_sort_by_key,
};
pub use crate::sorting::merge::merge_sort;
pub use crate::sorting::quick::quick_sort;

/// Default bucket count when none is configured.
const DEFAULT_BUCKET_COUNT: usize = 16;

// ============================================================================
// Sorter Builder
// ============================================================================

/// Fluent builder for configuring a sorting plan.
#[derive(Debug, Clone, Default)]
pub struct SorterBuilder {
    /// The algorithm to run (default: quick sort).
    pub algorithm: Option<SortAlgorithm>,

    /// Bucket count for bucket sort.
    pub buckets: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl SorterBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the algorithm to run.
    pub fn algorithm(mut self, algorithm: SortAlgorithm) -> Self {
        if self.algorithm.is_some() {
            self.duplicate_param = Some("algorithm");
        }
        self.algorithm = Some(algorithm);
        self
    }

    /// Set the bucket count for bucket sort.
    pub fn buckets(mut self, buckets: usize) -> Self {
        if self.buckets.is_some() {
            self.duplicate_param = Some("buckets");
        }
        self.buckets = Some(buckets);
        self
    }

    /// Validate the configuration and build a reusable [`SortPlan`].
    pub fn build(self) -> Result<SortPlan, SortError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate bucket count
        let buckets = self.buckets.unwrap_or(DEFAULT_BUCKET_COUNT);
        Validator::validate_bucket_count(buckets)?;

        Ok(SortPlan {
            config: SortConfig {
                algorithm: self.algorithm.unwrap_or_default(),
                buckets,
            },
        })
    }
}

// ============================================================================
// Sort Plan
// ============================================================================

/// A validated, reusable sorting plan.
#[derive(Debug, Clone, Copy)]
pub struct SortPlan {
    config: SortConfig,
}

impl SortPlan {
    /// The configured algorithm.
    pub fn algorithm(&self) -> SortAlgorithm {
        self.config.algorithm
    }

    /// Sort an ordered slice in place with the configured algorithm.
    ///
    /// Fails with [`SortError::UnsupportedAlgorithm`] when the plan is
    /// configured for a keyed or bucket algorithm.
    pub fn sort<T: Ord + Clone>(&self, items: &mut [T]) -> Result<(), SortError> {
        SortExecutor::run(&self.config, items)
    }

    /// Sort a slice in place by an extracted non-negative integer key.
    ///
    /// Fails with [`SortError::UnsupportedAlgorithm`] unless the plan is
    /// configured for counting or radix sort.
    pub fn sort_by_key<T, F>(&self, items: &mut [T], key: F) -> Result<(), SortError>
    where
        T: Clone,
        F: Fn(&T) -> i64,
    {
        SortExecutor::run_by_key(&self.config, items, key)
    }

    /// Sort a slice of floating-point values in place.
    ///
    /// Fails with [`SortError::UnsupportedAlgorithm`] unless the plan is
    /// configured for bucket sort.
    pub fn sort_floats<T: Float>(&self, items: &mut [T]) -> Result<(), SortError> {
        SortExecutor::run_floats(&self.config, items)
    }
}
