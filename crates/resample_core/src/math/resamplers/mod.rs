//! Resampling methods for sampled 1-D functions.
//!
//! This module maps paired samples `(x, y)` with non-decreasing `x` onto a
//! new set of query abscissas. Every method is a stateless pass that writes
//! one value per query into a caller-owned buffer.
//!
//! ## Available Resamplers
//!
//! - [`LinearResampler`]: Piecewise-linear interpolation, constant extrapolation
//! - [`LogResampler`]: Linear interpolation of `ln(y)`, exponentiated back
//! - [`LogLogResampler`]: Linear interpolation in `(ln x, ln y)`
//! - [`WindowAverager`]: Mean of samples within `width / 2` of each query
//! - [`BlockAverageAbove`]: Mean of samples between consecutive queries
//! - [`StepResampler`]: Value of the last sample at or below each query
//! - [`EndAverager`]: Mean of the samples near the closer end of the domain
//!
//! ## Core Trait
//!
//! All resamplers implement the [`Resampler`] trait, which defines:
//! - `resample_into(x, y, new_x, new_y)`: Fill a pre-allocated result buffer
//! - `resample(x, y, new_x) -> Vec<T>`: Allocating convenience form
//!
//! Free functions (`linear_into`, `linear`, ...) mirror each resampler.
//!
//! ## Preconditions
//!
//! `x` must be sorted ascending; it is never sorted or order-checked here.
//! Shape problems (empty samples, mismatched lengths) and bad parameters are
//! rejected before anything is written to the result buffer.
//!
//! ## Example
//!
//! ```
//! use resample_core::math::resamplers::{linear_into, window_average};
//!
//! let x = [0.0, 1.0, 2.0, 3.0];
//! let y = [0.0, 10.0, 20.0, 30.0];
//!
//! let mut new_y = [0.0; 4];
//! linear_into(&x, &y, &[-1.0, 0.5, 1.5, 3.5], &mut new_y).unwrap();
//! assert_eq!(new_y, [0.0, 5.0, 15.0, 30.0]);
//!
//! let smoothed = window_average(&x, &y, &[1.5], 2.0).unwrap();
//! assert_eq!(smoothed, vec![15.0]);
//! ```

mod block_average;
mod end_average;
mod linear;
mod logarithmic;
mod step;
mod traits;
mod window_average;

// Re-export public types at module level
pub use block_average::{block_average_above, block_average_above_into, BlockAverageAbove};
pub use end_average::{end_average, end_average_into, fill_nan, EndAverager};
pub use linear::{linear, linear_into, LinearResampler};
pub use logarithmic::{
    log_log, log_log_into, logarithmic, logarithmic_into, LogLogResampler, LogResampler,
};
pub use step::{step, step_into, StepResampler, STEP_TOLERANCE};
pub use traits::Resampler;
pub use window_average::{window_average, window_average_into, WindowAverager};
