//! Interpolation in logarithmic space.
//!
//! - [`LogResampler`]: linear in `(x, ln y)`, for quantities that vary
//!   multiplicatively along a linear axis
//! - [`LogLogResampler`]: linear in `(ln x, ln y)`, for power-law data such as
//!   spectra sampled on a logarithmic axis
//!
//! Both share the bracket walk and constant extrapolation of
//! [`LinearResampler`](super::LinearResampler). Positivity is checked over the
//! whole input before the first output slot is written.

use super::linear::{blend, scan_brackets};
use super::Resampler;
use crate::types::samples::check_queries;
use crate::types::{ResampleError, SampleSet};
use num_traits::Float;

/// Resampler that interpolates `ln(y)` linearly and exponentiates the result.
///
/// Equivalent to `exp(linear(x, ln(y), q))` for every query. Requires every
/// `y_i > 0`.
///
/// # Example
///
/// ```
/// use resample_core::math::resamplers::{LogResampler, Resampler};
///
/// // Halfway between 1 and 100 in x gives the geometric mean 10.
/// let new_y: Vec<f64> = LogResampler.resample(&[0.0, 2.0], &[1.0, 100.0], &[1.0]).unwrap();
/// assert!((new_y[0] - 10.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogResampler;

impl<T: Float> Resampler<T> for LogResampler {
    fn resample_into(
        &self,
        x: &[T],
        y: &[T],
        new_x: &[T],
        new_y: &mut [T],
    ) -> Result<(), ResampleError> {
        logarithmic_into(x, y, new_x, new_y)
    }
}

/// Resampler that interpolates linearly in `(ln x, ln y)`.
///
/// Requires every `x_i > 0` and `y_i > 0`. Queries at or below `x_0`
/// (including non-positive ones) take `y_0`.
///
/// # Example
///
/// ```
/// use resample_core::math::resamplers::{LogLogResampler, Resampler};
///
/// let q = 10f64.sqrt();
/// let new_y = LogLogResampler.resample(&[1.0, 10.0], &[1.0, 100.0], &[q]).unwrap();
/// assert!((new_y[0] - 10.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogLogResampler;

impl<T: Float> Resampler<T> for LogLogResampler {
    fn resample_into(
        &self,
        x: &[T],
        y: &[T],
        new_x: &[T],
        new_y: &mut [T],
    ) -> Result<(), ResampleError> {
        log_log_into(x, y, new_x, new_y)
    }
}

/// Resample in `ln(y)` space, writing into `new_y`.
///
/// # Errors
///
/// * `ResampleError::InvalidInput` - empty samples or mismatched lengths
/// * `ResampleError::DomainError` - some `y_i <= 0`
pub fn logarithmic_into<T: Float>(
    x: &[T],
    y: &[T],
    new_x: &[T],
    new_y: &mut [T],
) -> Result<(), ResampleError> {
    let samples = SampleSet::new(x, y)?;
    check_queries(new_x, new_y)?;
    samples.check_positive_y()?;

    let (y_first, y_last) = (y[0], y[y.len() - 1]);
    scan_brackets(x, new_x, new_y, y_first, y_last, |i, q| {
        blend(x[i], x[i + 1], y[i].ln(), y[i + 1].ln(), q).exp()
    });
    Ok(())
}

/// Allocating form of [`logarithmic_into`].
pub fn logarithmic<T: Float>(x: &[T], y: &[T], new_x: &[T]) -> Result<Vec<T>, ResampleError> {
    LogResampler.resample(x, y, new_x)
}

/// Resample in `(ln x, ln y)` space, writing into `new_y`.
///
/// # Errors
///
/// * `ResampleError::InvalidInput` - empty samples or mismatched lengths
/// * `ResampleError::DomainError` - some `x_i <= 0` or `y_i <= 0`
pub fn log_log_into<T: Float>(
    x: &[T],
    y: &[T],
    new_x: &[T],
    new_y: &mut [T],
) -> Result<(), ResampleError> {
    let samples = SampleSet::new(x, y)?;
    check_queries(new_x, new_y)?;
    samples.check_positive_x()?;
    samples.check_positive_y()?;

    let (y_first, y_last) = (y[0], y[y.len() - 1]);
    scan_brackets(x, new_x, new_y, y_first, y_last, |i, q| {
        blend(
            x[i].ln(),
            x[i + 1].ln(),
            y[i].ln(),
            y[i + 1].ln(),
            q.ln(),
        )
        .exp()
    });
    Ok(())
}

/// Allocating form of [`log_log_into`].
pub fn log_log<T: Float>(x: &[T], y: &[T], new_x: &[T]) -> Result<Vec<T>, ResampleError> {
    LogLogResampler.resample(x, y, new_x)
}

#[cfg(test)]
mod tests {
    use super::super::linear;
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_logarithmic_matches_exp_of_linear_on_log() {
        let x = [0.0, 1.0, 2.5, 4.0];
        let y = [1.0, 3.0, 0.5, 20.0];
        let ln_y: Vec<f64> = y.iter().map(|v| v.ln()).collect();
        let new_x = [-1.0, 0.2, 1.0, 1.7, 3.3, 4.0, 9.0];

        let got = logarithmic(&x, &y, &new_x).unwrap();
        let want: Vec<f64> = linear(&x, &ln_y, &new_x)
            .unwrap()
            .into_iter()
            .map(f64::exp)
            .collect();

        for (g, w) in got.iter().zip(want.iter()) {
            assert_relative_eq!(*g, *w, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_logarithmic_geometric_midpoint() {
        let new_y = logarithmic(&[1.0, 10.0], &[1.0, 100.0], &[5.5]).unwrap();
        assert_relative_eq!(new_y[0], 10.0, max_relative = 1e-12);
    }

    #[test]
    fn test_logarithmic_constant_extrapolation_is_exact() {
        let new_y = logarithmic(&[1.0, 2.0], &[3.0, 7.0], &[0.0, 5.0]).unwrap();
        assert_eq!(new_y, vec![3.0, 7.0]);
    }

    #[test]
    fn test_logarithmic_rejects_non_positive_before_writing() {
        let mut out = [-1.0; 2];
        let err = logarithmic_into(&[0.0, 1.0, 2.0], &[1.0, 0.0, 2.0], &[0.5, 1.5], &mut out)
            .unwrap_err();
        assert_eq!(
            err,
            ResampleError::DomainError {
                index: 1,
                value: 0.0
            }
        );
        assert_eq!(out, [-1.0, -1.0]);
    }

    #[test]
    fn test_logarithmic_rejects_nan_ordinate() {
        let err = logarithmic(&[0.0, 1.0], &[f64::NAN, 2.0], &[0.5]).unwrap_err();
        assert!(err.is_domain_error());
    }

    #[test]
    fn test_logarithmic_single_sample() {
        let new_y = logarithmic(&[1.0], &[4.0], &[0.0, 1.0, 2.0]).unwrap();
        assert_eq!(new_y, vec![4.0, 4.0, 4.0]);
    }

    #[test]
    fn test_log_log_geometric_midpoint() {
        let new_y = log_log(&[1.0, 10.0], &[1.0, 100.0], &[10f64.powf(0.5)]).unwrap();
        assert_relative_eq!(new_y[0], 10.0, max_relative = 1e-12);
    }

    #[test]
    fn test_log_log_power_law_is_exact() {
        // y = 3 x^2 is a straight line in log-log space
        let x = [1.0, 2.0, 8.0, 50.0];
        let y: Vec<f64> = x.iter().map(|v| 3.0 * v * v).collect();
        let new_x = [1.5, 4.0, 20.0];
        let new_y = log_log(&x, &y, &new_x).unwrap();
        for (q, v) in new_x.iter().zip(new_y.iter()) {
            assert_relative_eq!(*v, 3.0 * q * q, max_relative = 1e-10);
        }
    }

    #[test]
    fn test_log_log_non_positive_query_clamps_low() {
        let new_y = log_log(&[1.0, 10.0], &[2.0, 5.0], &[0.0, -3.0]).unwrap();
        assert_eq!(new_y, vec![2.0, 2.0]);
    }

    #[test]
    fn test_log_log_rejects_non_positive_x() {
        let err = log_log(&[0.0, 10.0], &[1.0, 2.0], &[5.0]).unwrap_err();
        assert_eq!(
            err,
            ResampleError::DomainError {
                index: 0,
                value: 0.0
            }
        );
    }
}
