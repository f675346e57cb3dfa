//! Layer 3: Searching
//!
//! This layer implements the three search algorithms. Searches never
//! reorder their input; the sentinel variant mutates transiently but
//! restores the slice before returning. All return `Option<usize>`,
//! with `None` as the "not found" sentinel.

// Binary search over a sorted slice.
pub mod binary;

// Linear and sentinel-linear search.
pub mod linear;
