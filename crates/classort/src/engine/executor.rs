//! Plan dispatch onto the sorting entry points.
//!
//! ## Purpose
//!
//! This module maps a validated sorting configuration onto the Layer 2
//! entry points. Each entry point family supplies one element
//! capability: a total order, an integer key extractor, or
//! floating-point values. An algorithm routed through an entry point
//! that cannot supply its capability fails with
//! [`SortError::UnsupportedAlgorithm`] instead of silently degrading.
//!
//! ## Design notes
//!
//! * **Single dispatch site**: Capability routing lives here and nowhere
//!   else; the algorithm modules stay free of configuration concerns.
//! * **No partial work**: A capability mismatch is detected before any
//!   element is touched.
//!
//! ## Non-goals
//!
//! * This module does not validate configuration values (handled by
//!   `validator` at build time).
//! * This module does not implement any algorithm.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SortError;
use crate::sorting::algorithm::SortAlgorithm;
use crate::sorting::bucket::bucket_sort;
use crate::sorting::comparison::{bubble_sort, insertion_sort, selection_sort, shell_sort};
use crate::sorting::heap::heap_sort;
use crate::sorting::keyed::{counting_sort_by_key, radix_sort_by_key};
use crate::sorting::merge::merge_sort;
use crate::sorting::quick::quick_sort;

// ============================================================================
// Configuration
// ============================================================================

/// Validated configuration for a sorting plan.
#[derive(Debug, Clone, Copy)]
pub struct SortConfig {
    /// The algorithm to run.
    pub algorithm: SortAlgorithm,

    /// Bucket count (bucket sort only).
    pub buckets: usize,
}

// ============================================================================
// Executor
// ============================================================================

/// Dispatcher from a validated configuration to the algorithm entry
/// points.
pub struct SortExecutor;

impl SortExecutor {
    /// Run a comparison-based algorithm over an ordered slice.
    ///
    /// The keyed and bucket algorithms cannot be driven by an ordering
    /// alone and fail with [`SortError::UnsupportedAlgorithm`].
    pub fn run<T: Ord + Clone>(config: &SortConfig, items: &mut [T]) -> Result<(), SortError> {
        match config.algorithm {
            SortAlgorithm::Bubble => bubble_sort(items),
            SortAlgorithm::Selection => selection_sort(items),
            SortAlgorithm::Insertion => insertion_sort(items),
            SortAlgorithm::Shell => shell_sort(items),
            SortAlgorithm::Merge => merge_sort(items),
            SortAlgorithm::Quick => quick_sort(items),
            SortAlgorithm::Heap => heap_sort(items),
            SortAlgorithm::Counting | SortAlgorithm::Radix => {
                return Err(SortError::UnsupportedAlgorithm {
                    algorithm: config.algorithm.name(),
                    required: "an integer key extractor (use sort_by_key)",
                });
            }
            SortAlgorithm::Bucket => {
                return Err(SortError::UnsupportedAlgorithm {
                    algorithm: config.algorithm.name(),
                    required: "floating-point values (use sort_floats)",
                });
            }
        }

        Ok(())
    }

    /// Run a keyed algorithm, ordering elements by an extracted
    /// non-negative integer key.
    pub fn run_by_key<T, F>(config: &SortConfig, items: &mut [T], key: F) -> Result<(), SortError>
    where
        T: Clone,
        F: Fn(&T) -> i64,
    {
        match config.algorithm {
            SortAlgorithm::Counting => counting_sort_by_key(items, key),
            SortAlgorithm::Radix => radix_sort_by_key(items, key),
            other => Err(SortError::UnsupportedAlgorithm {
                algorithm: other.name(),
                required: "ordering or floating-point dispatch (use sort or sort_floats)",
            }),
        }
    }

    /// Run the bucket algorithm over floating-point values.
    pub fn run_floats<T: Float>(config: &SortConfig, items: &mut [T]) -> Result<(), SortError> {
        match config.algorithm {
            SortAlgorithm::Bucket => bucket_sort(items, config.buckets),
            other => Err(SortError::UnsupportedAlgorithm {
                algorithm: other.name(),
                required: "ordering or keyed dispatch (use sort or sort_by_key)",
            }),
        }
    }
}
