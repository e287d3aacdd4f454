//! Borrowed views over sample and query sequences.
//!
//! [`SampleSet`] is the validated form of the `(x, y)` pair every resampler
//! reads. Construction checks shape only: the abscissas are expected to be
//! non-decreasing, but ordering is the caller's contract and is checked only
//! on request via [`SampleSet::check_non_decreasing`].

use super::ResampleError;
use num_traits::Float;

/// Paired sample abscissas and ordinates.
///
/// # Invariants
///
/// - `x.len() == y.len()`
/// - `x.len() >= 1`
///
/// # Example
///
/// ```
/// use resample_core::types::SampleSet;
///
/// let samples = SampleSet::new(&[0.0, 1.0, 2.0], &[5.0, 6.0, 7.0]).unwrap();
/// assert_eq!(samples.len(), 3);
/// assert_eq!(samples.domain(), (0.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SampleSet<'a, T: Float> {
    x: &'a [T],
    y: &'a [T],
}

impl<'a, T: Float> SampleSet<'a, T> {
    /// Validate and wrap a pair of sample sequences.
    ///
    /// # Errors
    ///
    /// * `ResampleError::InvalidInput` - lengths differ or `x` is empty
    pub fn new(x: &'a [T], y: &'a [T]) -> Result<Self, ResampleError> {
        if x.len() != y.len() {
            return Err(ResampleError::length_mismatch("x", "y", (x.len(), y.len())));
        }
        if x.is_empty() {
            return Err(ResampleError::InvalidInput(
                "sample set must contain at least one point".to_string(),
            ));
        }
        Ok(Self { x, y })
    }

    /// Sample abscissas.
    #[inline]
    pub fn x(&self) -> &'a [T] {
        self.x
    }

    /// Sample ordinates.
    #[inline]
    pub fn y(&self) -> &'a [T] {
        self.y
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false for a constructed set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Returns `(x_0, x_{n-1})`.
    #[inline]
    pub fn domain(&self) -> (T, T) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    /// Verify that `x` never decreases.
    ///
    /// Resamplers do not call this; it is offered to adaptation layers
    /// that must reject malformed input before invoking them.
    ///
    /// # Errors
    ///
    /// * `ResampleError::NonMonotonicData` - `index` is the first position
    ///   whose abscissa is below its predecessor (or is NaN)
    pub fn check_non_decreasing(&self) -> Result<(), ResampleError> {
        if self.x[0].is_nan() {
            return Err(ResampleError::NonMonotonicData { index: 0 });
        }
        match self.x.windows(2).position(|w| !(w[1] >= w[0])) {
            Some(i) => Err(ResampleError::NonMonotonicData { index: i + 1 }),
            None => Ok(()),
        }
    }

    /// Verify that every ordinate is strictly positive.
    ///
    /// # Errors
    ///
    /// * `ResampleError::DomainError` - first `y_i` that is `<= 0` or NaN
    pub fn check_positive_y(&self) -> Result<(), ResampleError> {
        check_positive(self.y)
    }

    /// Verify that every abscissa is strictly positive.
    ///
    /// # Errors
    ///
    /// * `ResampleError::DomainError` - first `x_i` that is `<= 0` or NaN
    pub fn check_positive_x(&self) -> Result<(), ResampleError> {
        check_positive(self.x)
    }
}

fn check_positive<T: Float>(values: &[T]) -> Result<(), ResampleError> {
    match values.iter().position(|&v| !(v > T::zero())) {
        Some(index) => Err(ResampleError::DomainError {
            index,
            value: values[index].to_f64().unwrap_or(f64::NAN),
        }),
        None => Ok(()),
    }
}

/// Check that a query sequence and its result buffer line up.
pub(crate) fn check_queries<T: Float>(new_x: &[T], new_y: &[T]) -> Result<(), ResampleError> {
    if new_x.len() != new_y.len() {
        return Err(ResampleError::length_mismatch(
            "new_x",
            "new_y",
            (new_x.len(), new_y.len()),
        ));
    }
    Ok(())
}

/// Check a non-negative, finite scalar parameter such as a window width.
pub(crate) fn check_extent<T: Float>(name: &str, value: T) -> Result<(), ResampleError> {
    if !value.is_finite() {
        return Err(ResampleError::InvalidInput(format!(
            "{} must be finite",
            name
        )));
    }
    if value < T::zero() {
        return Err(ResampleError::InvalidInput(format!(
            "{} must be non-negative: got {}",
            name,
            value.to_f64().unwrap_or(f64::NAN)
        )));
    }
    Ok(())
}
