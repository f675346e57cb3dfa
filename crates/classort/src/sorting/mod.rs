//! Layer 2: Sorting
//!
//! This layer implements the ten sorting algorithms. Each is a pure
//! function over a mutable slice; the comparison-based family is bounded
//! on `Ord`, the keyed family on a caller-supplied integer key extractor,
//! and bucket sort on `num_traits::Float`.

// Algorithm catalog and contract metadata.
pub mod algorithm;

// Quadratic-family comparison sorts (bubble, selection, insertion, shell).
pub mod comparison;

// Recursive merge sort.
pub mod merge;

// Lomuto-partition quick sort.
pub mod quick;

// Heap sort with bottom-up heap construction.
pub mod heap;

// Counting sort and LSD radix sort over integer keys.
pub mod keyed;

// Bucket sort over floating-point values.
pub mod bucket;
