//! Core sample and error types.
//!
//! This module provides:
//! - `samples`: Borrowed, shape-validated views over `(x, y)` sample pairs
//! - `error`: Structured error type for resampling operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`SampleSet`] from `samples`
//! - [`ResampleError`] from `error`

pub mod error;
pub mod samples;

// Re-export commonly used types at module level
pub use error::ResampleError;
pub use samples::SampleSet;
