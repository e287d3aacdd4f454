//! Error types for structured error handling.
//!
//! This module provides:
//! - `ResampleError`: Errors from resampling operations
//!
//! Zero-width bracketing intervals and empty aggregation windows are not
//! errors. They are resolved by the documented policies of the individual
//! resamplers and never surface here.

use thiserror::Error;

/// Resampling-related errors.
///
/// Every variant is reported before any output slot is written, so a failed
/// call leaves the caller's result buffer untouched.
///
/// # Variants
/// - `InvalidInput`: Empty sample set, mismatched lengths, or a bad width
/// - `DomainError`: A value outside the domain of a log transform
/// - `NonMonotonicData`: Sample abscissas decrease (adaptation-layer check)
///
/// # Examples
/// ```
/// use resample_core::types::ResampleError;
///
/// let err = ResampleError::DomainError { index: 2, value: -1.0 };
/// assert!(format!("{}", err).contains("index 2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResampleError {
    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Value outside the domain of the logarithm.
    #[error("Domain error: value {value} at index {index} must be strictly positive")]
    DomainError {
        /// Index of the first offending value
        index: usize,
        /// The offending value
        value: f64,
    },

    /// Sample abscissas are not non-decreasing.
    #[error("Data is not monotonic at index {index}")]
    NonMonotonicData {
        /// Index where monotonicity violation was detected
        index: usize,
    },
}

impl ResampleError {
    /// Build an `InvalidInput` error for two sequences whose lengths differ.
    pub(crate) fn length_mismatch(left: &str, right: &str, got: (usize, usize)) -> Self {
        ResampleError::InvalidInput(format!(
            "{} and {} must have same length: got {} and {}",
            left, right, got.0, got.1
        ))
    }

    /// Returns true for precondition failures on shape or parameters.
    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ResampleError::InvalidInput(_))
    }

    /// Returns true for log-transform domain failures.
    #[inline]
    pub fn is_domain_error(&self) -> bool {
        matches!(self, ResampleError::DomainError { .. })
    }
}
