//! Sample-and-hold resampling.

use super::Resampler;
use crate::types::samples::check_queries;
use crate::types::{ResampleError, SampleSet};
use num_traits::Float;

/// Absolute slack when deciding whether a sample lies at or below a query.
pub const STEP_TOLERANCE: f64 = 1e-10;

/// Holds the value of the most recent sample at or below each query.
///
/// A sample counts as "at or below" `q` when `x_i < q + STEP_TOLERANCE`, so
/// queries that land a hair short of a knot still pick that knot up. Queries
/// below `x_0` take `y_0`.
///
/// # Example
///
/// ```
/// use resample_core::math::resamplers::{Resampler, StepResampler};
///
/// let new_y = StepResampler
///     .resample(&[0.0, 1.0, 2.0], &[5.0, 6.0, 7.0], &[-1.0, 0.9, 1.0, 8.0])
///     .unwrap();
/// assert_eq!(new_y, vec![5.0, 5.0, 6.0, 7.0]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepResampler;

impl<T: Float> Resampler<T> for StepResampler {
    fn resample_into(
        &self,
        x: &[T],
        y: &[T],
        new_x: &[T],
        new_y: &mut [T],
    ) -> Result<(), ResampleError> {
        step_into(x, y, new_x, new_y)
    }
}

/// Sample-and-hold resample of `(x, y)` onto `new_x`, writing into `new_y`.
///
/// # Errors
///
/// * `ResampleError::InvalidInput` - empty samples or mismatched lengths
pub fn step_into<T: Float>(
    x: &[T],
    y: &[T],
    new_x: &[T],
    new_y: &mut [T],
) -> Result<(), ResampleError> {
    let samples = SampleSet::new(x, y)?;
    check_queries(new_x, new_y)?;

    let n = samples.len();
    let tolerance = T::from(STEP_TOLERANCE).unwrap_or_else(T::epsilon);
    let mut i = 0usize;

    for (&q, out) in new_x.iter().zip(new_y.iter_mut()) {
        if q.is_nan() {
            *out = q;
            continue;
        }
        let limit = q + tolerance;
        while i + 1 < n && x[i + 1] < limit {
            i += 1;
        }
        while i > 0 && x[i] >= limit {
            i -= 1;
        }
        *out = y[i];
    }
    Ok(())
}

/// Allocating form of [`step_into`].
pub fn step<T: Float>(x: &[T], y: &[T], new_x: &[T]) -> Result<Vec<T>, ResampleError> {
    StepResampler.resample(x, y, new_x)
}
