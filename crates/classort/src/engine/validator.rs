//! Input validation for sorting configuration.
//!
//! ## Purpose
//!
//! This module provides validation for sorting plan configuration. It
//! checks bucket counts and builder hygiene before a plan is built.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Checks are cheap**: Configuration checks are O(1); data-dependent
//!   checks (key signs, finiteness) live with the algorithms that own
//!   them, fused into their scan passes.
//!
//! ## Non-goals
//!
//! * This module does not validate element data.
//! * This module does not perform the sorting itself.

// Internal dependencies
use crate::primitives::errors::SortError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sorting configuration.
///
/// Provides static methods returning `Result<(), SortError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate the bucket count for bucket sort.
    pub fn validate_bucket_count(buckets: usize) -> Result<(), SortError> {
        if buckets == 0 {
            return Err(SortError::InvalidBucketCount(buckets));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SortError> {
        if let Some(parameter) = duplicate_param {
            return Err(SortError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
