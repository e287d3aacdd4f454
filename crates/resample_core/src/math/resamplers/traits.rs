//! Common trait for resampling strategies.

use crate::types::ResampleError;
use num_traits::Float;

/// A strategy that maps samples `(x, y)` onto query abscissas `new_x`.
///
/// Implementations are stateless between calls and write exactly one value
/// per query into the caller's buffer.
///
/// # Contract
///
/// - `x` is non-decreasing; it is never sorted or checked for order here.
/// - `x.len() == y.len() >= 1` and `new_x.len() == new_y.len()`, otherwise
///   `ResampleError::InvalidInput` is returned.
/// - On error nothing has been written to `new_y`.
///
/// # Example
///
/// ```
/// use resample_core::math::resamplers::{LinearResampler, Resampler};
///
/// let mut out = [0.0; 2];
/// LinearResampler
///     .resample_into(&[0.0, 2.0], &[0.0, 4.0], &[1.0, 3.0], &mut out)
///     .unwrap();
/// assert_eq!(out, [2.0, 4.0]);
/// ```
pub trait Resampler<T: Float> {
    /// Fill `new_y` with one value per query in `new_x`.
    fn resample_into(
        &self,
        x: &[T],
        y: &[T],
        new_x: &[T],
        new_y: &mut [T],
    ) -> Result<(), ResampleError>;

    /// Allocating form of [`Resampler::resample_into`].
    fn resample(&self, x: &[T], y: &[T], new_x: &[T]) -> Result<Vec<T>, ResampleError> {
        let mut new_y = vec![T::zero(); new_x.len()];
        self.resample_into(x, y, new_x, &mut new_y)?;
        Ok(new_y)
    }
}
