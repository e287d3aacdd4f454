//! Piecewise-linear resampling with constant extrapolation.

use super::Resampler;
use crate::types::samples::check_queries;
use crate::types::{ResampleError, SampleSet};
use num_traits::Float;

/// Piecewise-linear resampler.
///
/// For each query `q`:
/// - `q <= x_0` yields `y_0` and `q >= x_{n-1}` yields `y_{n-1}`
/// - otherwise the bracketing interval `[x_i, x_{i+1}]` is located and
///   `y_i + (y_{i+1} - y_i) * (q - x_i) / (x_{i+1} - x_i)` is returned
/// - a zero-width bracket (`x_{i+1} == x_i`) yields `y_i`
/// - a NaN query yields NaN
///
/// The bracket index is carried from one query to the next, so ascending
/// queries cost O(n + m) in total. Unsorted queries are still answered
/// correctly; the index simply walks back as needed.
///
/// # Example
///
/// ```
/// use resample_core::math::resamplers::{LinearResampler, Resampler};
///
/// let x = [0.0, 1.0, 2.0, 3.0];
/// let y = [0.0, 10.0, 20.0, 30.0];
/// let new_y = LinearResampler.resample(&x, &y, &[-1.0, 0.5, 1.5, 3.5]).unwrap();
/// assert_eq!(new_y, vec![0.0, 5.0, 15.0, 30.0]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearResampler;

impl<T: Float> Resampler<T> for LinearResampler {
    fn resample_into(
        &self,
        x: &[T],
        y: &[T],
        new_x: &[T],
        new_y: &mut [T],
    ) -> Result<(), ResampleError> {
        linear_into(x, y, new_x, new_y)
    }
}

/// Linearly resample `(x, y)` onto `new_x`, writing into `new_y`.
///
/// # Errors
///
/// * `ResampleError::InvalidInput` - empty samples or mismatched lengths
pub fn linear_into<T: Float>(
    x: &[T],
    y: &[T],
    new_x: &[T],
    new_y: &mut [T],
) -> Result<(), ResampleError> {
    let samples = SampleSet::new(x, y)?;
    check_queries(new_x, new_y)?;

    let (y_first, y_last) = (y[0], y[y.len() - 1]);
    scan_brackets(samples.x(), new_x, new_y, y_first, y_last, |i, q| {
        blend(x[i], x[i + 1], y[i], y[i + 1], q)
    });
    Ok(())
}

/// Allocating form of [`linear_into`].
///
/// # Example
///
/// ```
/// use resample_core::math::resamplers::linear;
///
/// let new_y: Vec<f64> = linear(&[0.0, 1.0], &[0.0, 2.0], &[0.25]).unwrap();
/// assert!((new_y[0] - 0.5).abs() < 1e-12);
/// ```
pub fn linear<T: Float>(x: &[T], y: &[T], new_x: &[T]) -> Result<Vec<T>, ResampleError> {
    LinearResampler.resample(x, y, new_x)
}

/// Interpolate between `(x0, y0)` and `(x1, y1)` at `q`.
///
/// Assumes `x0 <= q <= x1`. A degenerate interval returns `y0` and a query on
/// the right knot returns `y1` exactly.
#[inline]
pub(crate) fn blend<T: Float>(x0: T, x1: T, y0: T, y1: T, q: T) -> T {
    let dx = x1 - x0;
    if dx == T::zero() {
        y0
    } else if q == x1 {
        y1
    } else {
        y0 + (y1 - y0) * (q - x0) / dx
    }
}

/// Walk `new_x` against sorted `x`, resolving each query to a bracket.
///
/// Queries at or below `x_0` receive `below`, queries at or above `x_{n-1}`
/// receive `above`, NaN queries receive NaN. Every other query is handed to
/// `interior(i, q)` with `x[i] <= q <= x[i + 1]` and `i + 1 < x.len()`.
///
/// `x` must be non-empty.
pub(crate) fn scan_brackets<T, F>(
    x: &[T],
    new_x: &[T],
    new_y: &mut [T],
    below: T,
    above: T,
    mut interior: F,
) where
    T: Float,
    F: FnMut(usize, T) -> T,
{
    let last = x.len() - 1;
    let (x_first, x_last) = (x[0], x[last]);
    let mut i = 0usize;

    for (&q, out) in new_x.iter().zip(new_y.iter_mut()) {
        *out = if q.is_nan() {
            q
        } else if q <= x_first {
            below
        } else if q >= x_last {
            above
        } else {
            // x_first < q < x_last keeps both walks inside [0, last - 1]
            while x[i + 1] < q {
                i += 1;
            }
            while x[i] > q {
                i -= 1;
            }
            interior(i, q)
        };
    }
}
