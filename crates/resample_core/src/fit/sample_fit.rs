//! Owned samples bound to a resampling method.

use super::ResampleMethod;
use crate::types::ResampleError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A fitted data set: owned samples plus the method used to evaluate them.
///
/// Unlike the slice procedures, a fit tolerates under-specified data:
///
/// | samples | every query yields |
/// |---------|--------------------|
/// | 0       | NaN                |
/// | 1       | the single `y_0`   |
/// | 2+      | the chosen method  |
///
/// # Example
///
/// ```
/// use resample_core::fit::{ResampleMethod, SampleFit};
///
/// let fit = SampleFit::new(vec![0.0, 2.0], vec![1.0, 5.0], ResampleMethod::Linear).unwrap();
/// assert_eq!(fit.evaluate(&[1.0]).unwrap(), vec![3.0]);
///
/// let empty = SampleFit::new(vec![], vec![], ResampleMethod::Linear).unwrap();
/// assert!(empty.evaluate(&[1.0]).unwrap()[0].is_nan());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleFit {
    x: Vec<f64>,
    y: Vec<f64>,
    method: ResampleMethod,
}

impl SampleFit {
    /// Bind samples to a method.
    ///
    /// # Errors
    ///
    /// * `ResampleError::InvalidInput` - `x` and `y` lengths differ
    pub fn new(x: Vec<f64>, y: Vec<f64>, method: ResampleMethod) -> Result<Self, ResampleError> {
        if x.len() != y.len() {
            return Err(ResampleError::length_mismatch("x", "y", (x.len(), y.len())));
        }
        Ok(Self { x, y, method })
    }

    /// Replace the samples, keeping the method.
    ///
    /// # Errors
    ///
    /// * `ResampleError::InvalidInput` - `x` and `y` lengths differ; the fit
    ///   is left unchanged
    pub fn set_xy(&mut self, x: Vec<f64>, y: Vec<f64>) -> Result<(), ResampleError> {
        if x.len() != y.len() {
            return Err(ResampleError::length_mismatch("x", "y", (x.len(), y.len())));
        }
        self.x = x;
        self.y = y;
        Ok(())
    }

    /// Sample abscissas.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Sample ordinates.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// The evaluation method.
    pub fn method(&self) -> ResampleMethod {
        self.method
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True when the fit holds no samples.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// True when evaluation bypasses the method (fewer than two samples).
    pub fn is_degenerate(&self) -> bool {
        self.x.len() < 2
    }

    /// Evaluate the fit at every query, writing into `new_y`.
    ///
    /// # Errors
    ///
    /// * `ResampleError::InvalidInput` - `new_x` and `new_y` lengths differ
    /// * anything the underlying method reports
    pub fn evaluate_into(&self, new_x: &[f64], new_y: &mut [f64]) -> Result<(), ResampleError> {
        if new_x.len() != new_y.len() {
            return Err(ResampleError::length_mismatch(
                "new_x",
                "new_y",
                (new_x.len(), new_y.len()),
            ));
        }
        debug!(
            method = %self.method,
            samples = self.x.len(),
            queries = new_x.len(),
            "Evaluating sample fit"
        );

        match self.x.len() {
            0 => new_y.iter_mut().for_each(|v| *v = f64::NAN),
            1 => new_y.iter_mut().for_each(|v| *v = self.y[0]),
            _ => self.method.resample_into(&self.x, &self.y, new_x, new_y)?,
        }
        Ok(())
    }

    /// Allocating form of [`SampleFit::evaluate_into`].
    pub fn evaluate(&self, new_x: &[f64]) -> Result<Vec<f64>, ResampleError> {
        let mut new_y = vec![0.0; new_x.len()];
        self.evaluate_into(new_x, &mut new_y)?;
        Ok(new_y)
    }
}
