//! # classort — Classic Sorting and Searching Algorithms for Rust
//!
//! A small, allocation-conscious library of the classic array algorithms:
//! bubble, selection, insertion, shell, merge, quick, heap, counting,
//! radix (LSD), and bucket sort, plus binary, linear, and sentinel-linear
//! search — all as pure functions over generic slices.
//!
//! ## What is it for?
//!
//! Every algorithm here carries an explicit contract: time and space
//! complexity, stability, and edge-case behavior are part of the API, not
//! an implementation accident. The library is intended for callers who
//! need a *specific* algorithm with *known* properties (a stable sort, a
//! linear-time keyed sort, a branch-light search) rather than a general
//! replacement for `slice::sort`.
//!
//! ## Quick Start
//!
//! ### Sorting
//!
//! ```rust
//! use classort::prelude::*;
//!
//! let mut data = vec![5, 3, 8, 1, 9, 2];
//! quick_sort(&mut data);
//! assert_eq!(data, vec![1, 2, 3, 5, 8, 9]);
//! ```
//!
//! ### Keyed sorting
//!
//! Counting and radix sort order elements by a caller-supplied
//! non-negative integer key:
//!
//! ```rust
//! use classort::prelude::*;
//!
//! let mut pairs = vec![(3, "c"), (1, "a"), (2, "b")];
//! counting_sort_by_key(&mut pairs, |p| p.0)?;
//! assert_eq!(pairs, vec![(1, "a"), (2, "b"), (3, "c")]);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### Searching
//!
//! ```rust
//! use classort::prelude::*;
//!
//! let data = [1, 3, 5, 7, 9];
//! assert_eq!(binary_search(&data, &7), Some(3));
//! assert_eq!(binary_search(&data, &4), None);
//! ```
//!
//! ### Configured plans
//!
//! When the algorithm choice is data- or configuration-driven, build a
//! reusable plan instead of hard-coding an entry point:
//!
//! ```rust
//! use classort::prelude::*;
//!
//! let plan = Sorter::new()
//!     .algorithm(SortAlgorithm::Merge) // stable, O(n log n)
//!     .build()?;
//!
//! let mut words = vec!["pear", "apple", "fig"];
//! plan.sort(&mut words)?;
//! assert_eq!(words, vec!["apple", "fig", "pear"]);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Fallible operations return `Result<_, SortError>`. Failures are always
//! caused by an invalid call (a negative key, a zero bucket count, an
//! out-of-bounds index), never by a transient condition, so the `?`
//! operator is idiomatic:
//!
//! ```rust
//! use classort::prelude::*;
//!
//! let mut readings = vec![170, 45, 75, 90, 802, 24, 2, 66];
//! radix_sort(&mut readings)?;
//! assert_eq!(readings, vec![2, 24, 45, 66, 75, 90, 170, 802]);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! Degenerate inputs are not errors: empty and single-element slices are
//! already sorted and return immediately, and bucket sort on an
//! all-equal slice is a documented no-op.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! classort = { version = "0.1", default-features = false }
//! ```
//!
//! The comparison sorts and searches allocate nothing (merge sort and the
//! keyed sorts use transient `alloc` buffers scoped to the call).
//!
//! ## References
//!
//! - Knuth, D. E. (1998). "The Art of Computer Programming, Vol. 3:
//!   Sorting and Searching"
//! - Hoare, C. A. R. (1962). "Quicksort"
//! - Shell, D. L. (1959). "A High-Speed Sorting Procedure"
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors, array operations, scratch buffers.
mod primitives;

// Layer 2: Sorting - the ten sorting algorithms.
mod sorting;

// Layer 3: Searching - binary, linear, and sentinel-linear search.
mod searching;

// Layer 4: Engine - validation and plan dispatch.
mod engine;

// High-level fluent API for configured sorting plans.
mod api;

// Standard classort prelude.
pub mod prelude {
    pub use crate::api::{
        binary_search, bubble_sort, bucket_sort, copy_range, counting_sort, counting_sort_by_key,
        heap_sort, insertion_sort, linear_search, max_element, max_key, merge_sort, min_element,
        min_key, quick_sort, radix_sort, radix_sort_by_key, reset_range, selection_sort,
        sentinel_linear_search, shell_sort, swap, Growth, SortAlgorithm, SortError, SortPlan,
        SorterBuilder as Sorter, TimeComplexity,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod sorting {
        pub use crate::sorting::*;
    }
    pub mod searching {
        pub use crate::searching::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
