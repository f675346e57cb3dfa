//! Error types for sorting and searching operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur during sorting,
//! including input-contract violations, parameter constraints, and
//! capability mismatches between an algorithm and its entry point.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the offending
//!   index and the slice length).
//! * **No-std**: All variants are allocation-free, so `no_std` builds need
//!   no `alloc` support for error reporting.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Bounds violations**: Swap or bounded-copy indices outside the slice.
//! 2. **Key-contract violations**: Negative keys from a key extractor,
//!    non-finite values fed to bucket sort.
//! 3. **Configuration errors**: Invalid bucket counts, duplicate builder
//!    parameters, algorithms dispatched through the wrong entry point.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sorting and searching operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SortError {
    /// A swap index was outside the valid range `[0, len)`.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Length of the slice.
        len: usize,
    },

    /// A bounded copy would read past the end of the source slice.
    CopyOutOfBounds {
        /// Starting offset into the source slice.
        offset: usize,
        /// Number of elements the destination requires.
        needed: usize,
        /// Number of elements the source actually holds.
        available: usize,
    },

    /// A key extractor produced a negative key; counting and radix sort
    /// require non-negative integer keys.
    NegativeKey {
        /// Index of the element whose key was negative.
        index: usize,
        /// The extracted key.
        key: i64,
    },

    /// Bucket sort was given a NaN or infinite value.
    NonFiniteValue {
        /// Index of the non-finite element.
        index: usize,
    },

    /// Bucket sort requires at least one bucket.
    InvalidBucketCount(usize),

    /// The configured algorithm cannot run through this entry point
    /// because it needs a capability the entry point does not supply.
    UnsupportedAlgorithm {
        /// Name of the configured algorithm.
        algorithm: &'static str,
        /// The capability the algorithm requires.
        required: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "Index {index} out of bounds for length {len}")
            }
            Self::CopyOutOfBounds {
                offset,
                needed,
                available,
            } => {
                write!(
                    f,
                    "Copy out of bounds: need {needed} elements from offset {offset}, source has {available}"
                )
            }
            Self::NegativeKey { index, key } => {
                write!(
                    f,
                    "Invalid key: element at index {index} produced key {key} (keys must be non-negative)"
                )
            }
            Self::NonFiniteValue { index } => {
                write!(f, "Non-finite value at index {index}")
            }
            Self::InvalidBucketCount(count) => {
                write!(f, "Invalid bucket count: {count} (must be at least 1)")
            }
            Self::UnsupportedAlgorithm {
                algorithm,
                required,
            } => {
                write!(f, "Algorithm '{algorithm}' requires {required}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SortError {}
