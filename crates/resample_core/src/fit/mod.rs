//! Method selection, owned fits, and multi-series batches.
//!
//! This layer sits on top of [`crate::math::resamplers`] and works on `f64`
//! data:
//! - [`ResampleMethod`]: a serialisable choice of resampler and parameters
//! - [`SampleFit`]: owned samples with a method and a policy for fewer than
//!   two samples
//! - [`resample_rows`]: many `y` series over one `x`, in parallel

mod method;
mod rows;
mod sample_fit;

pub use method::{ResampleMethod, DEFAULT_INDEX_INTERVAL, DEFAULT_WINDOW_WIDTH};
pub use rows::resample_rows;
pub use sample_fit::SampleFit;
