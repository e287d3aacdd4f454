//! Resampling several series that share one abscissa.
//!
//! Each row of `rows` is an independent `y` series over the common `x`. Rows
//! are resampled in parallel with rayon; the batch succeeds only if every row
//! does.

use super::ResampleMethod;
use crate::types::ResampleError;
use rayon::prelude::*;
use tracing::debug;

/// Resample every row of `rows` against the shared `x` onto `new_x`.
///
/// Returns one output vector per input row, in the same order.
///
/// # Errors
///
/// A row whose length differs from `x` is reported by index. Otherwise the
/// error of one failing row is returned (which one is unspecified when
/// several fail). No partial results are returned.
///
/// # Example
///
/// ```
/// use resample_core::fit::{resample_rows, ResampleMethod};
///
/// let x = [0.0, 1.0, 2.0];
/// let rows = vec![vec![0.0, 1.0, 2.0], vec![0.0, 10.0, 20.0]];
/// let out = resample_rows(ResampleMethod::Linear, &x, &rows, &[0.5, 1.5]).unwrap();
/// assert_eq!(out, vec![vec![0.5, 1.5], vec![5.0, 15.0]]);
/// ```
pub fn resample_rows<R>(
    method: ResampleMethod,
    x: &[f64],
    rows: &[R],
    new_x: &[f64],
) -> Result<Vec<Vec<f64>>, ResampleError>
where
    R: AsRef<[f64]> + Sync,
{
    debug!(
        method = %method,
        rows = rows.len(),
        samples = x.len(),
        queries = new_x.len(),
        "Resampling rows"
    );

    // Shape errors name the row, so check them before fanning out
    if let Some(row) = rows.iter().position(|r| r.as_ref().len() != x.len()) {
        return Err(ResampleError::InvalidInput(format!(
            "row {} has {} values but x has {}",
            row,
            rows[row].as_ref().len(),
            x.len()
        )));
    }

    rows.par_iter()
        .map(|row| method.resample(x, row.as_ref(), new_x))
        .collect()
}
