//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer validates sorting configurations and dispatches a
//! validated plan onto the algorithm entry points. It is the single
//! place that knows which algorithm needs which element capability.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Searching
//!   ↓
//! Layer 2: Sorting
//!   ↓
//! Layer 1: Primitives
//! ```

/// Validation utilities.
pub mod validator;

/// Plan dispatch onto the sorting entry points.
pub mod executor;
