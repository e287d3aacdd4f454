//! Extrapolation from averaged end segments.

use super::Resampler;
use crate::types::samples::{check_extent, check_queries};
use crate::types::{ResampleError, SampleSet};
use num_traits::Float;

/// Answers each query with the mean of the samples near the closer end.
///
/// The low-end mean covers samples with `x_i <= x_0 + index_interval` and the
/// high-end mean covers samples with `x_i >= x_{n-1} - index_interval`. Both
/// bounds are closed, so a sample lying exactly `index_interval` from the low
/// end counts toward the low mean just as its mirror does at the high end,
/// and a zero interval still averages the end sample itself rather than an
/// empty set. A query takes the high-end mean when it is
/// strictly closer to `x_{n-1}` than to `x_0`, and the low-end mean otherwise.
///
/// Meant for extrapolating beyond the sampled range; interior queries follow
/// the same nearest-end rule.
///
/// # Example
///
/// ```
/// use resample_core::math::resamplers::{EndAverager, Resampler};
///
/// let x = [0.0, 1.0, 2.0, 8.0, 9.0, 10.0];
/// let y = [1.0, 2.0, 3.0, 7.0, 8.0, 9.0];
/// let new_y = EndAverager::new(1.0).resample(&x, &y, &[-5.0, 15.0]).unwrap();
/// assert_eq!(new_y, vec![1.5, 8.5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndAverager<T: Float> {
    /// Distance from each end within which samples are averaged.
    pub index_interval: T,
}

impl<T: Float> EndAverager<T> {
    /// Create an averager over the given end distance.
    pub fn new(index_interval: T) -> Self {
        Self { index_interval }
    }
}

impl<T: Float> Resampler<T> for EndAverager<T> {
    fn resample_into(
        &self,
        x: &[T],
        y: &[T],
        new_x: &[T],
        new_y: &mut [T],
    ) -> Result<(), ResampleError> {
        end_average_into(x, y, new_x, new_y, self.index_interval)
    }
}

fn mean_where<T: Float>(x: &[T], y: &[T], keep: impl Fn(T) -> bool) -> T {
    let (sum, count) = x
        .iter()
        .zip(y.iter())
        .filter(|&(&xi, _)| keep(xi))
        .fold((T::zero(), T::zero()), |(s, c), (_, &yi)| (s + yi, c + T::one()));
    if count == T::zero() {
        T::zero()
    } else {
        sum / count
    }
}

/// Nearest-end averaged resample, writing into `new_y`.
///
/// # Errors
///
/// * `ResampleError::InvalidInput` - empty samples, mismatched lengths, or an
///   `index_interval` that is negative or not finite
pub fn end_average_into<T: Float>(
    x: &[T],
    y: &[T],
    new_x: &[T],
    new_y: &mut [T],
    index_interval: T,
) -> Result<(), ResampleError> {
    let samples = SampleSet::new(x, y)?;
    check_queries(new_x, new_y)?;
    check_extent("index_interval", index_interval)?;

    let (x_first, x_last) = samples.domain();
    let low_edge = x_first + index_interval;
    let high_edge = x_last - index_interval;
    let y_low = mean_where(x, y, |xi| xi <= low_edge);
    let y_high = mean_where(x, y, |xi| xi >= high_edge);

    for (&q, out) in new_x.iter().zip(new_y.iter_mut()) {
        *out = if q.is_nan() {
            q
        } else if (q - x_first).abs() > (q - x_last).abs() {
            y_high
        } else {
            y_low
        };
    }
    Ok(())
}

/// Allocating form of [`end_average_into`].
pub fn end_average<T: Float>(
    x: &[T],
    y: &[T],
    new_x: &[T],
    index_interval: T,
) -> Result<Vec<T>, ResampleError> {
    EndAverager::new(index_interval).resample(x, y, new_x)
}

/// Fill every output slot with NaN.
///
/// The explicit "no model" strategy; it never fails.
pub fn fill_nan<T: Float>(new_y: &mut [T]) {
    new_y.iter_mut().for_each(|v| *v = T::nan());
}
