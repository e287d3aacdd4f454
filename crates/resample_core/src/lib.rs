//! # resample_core: Resampling of Sampled 1-D Functions
//!
//! Given samples `(x, y)` with `x` sorted ascending, resample onto arbitrary
//! query abscissas `new_x` without building a continuous model.
//!
//! ## Layout
//!
//! - Slice resamplers over `T: num_traits::Float` (`math::resamplers`)
//! - Sample views and the error taxonomy (`types`)
//! - Runtime method selection, owned fits, and parallel multi-series
//!   batches over `f64` (`fit`)
//!
//! ## Resource Model
//!
//! Every resampler is a single synchronous pass with no state kept between
//! calls. The `*_into` forms write into a caller-owned buffer and allocate
//! nothing, so disjoint buffers may be filled from many threads at once.
//!
//! ## Usage Examples
//!
//! ```rust
//! use resample_core::math::resamplers::{block_average_above, linear, logarithmic};
//!
//! let x = [0.0, 1.0, 2.0, 3.0];
//! let y = [0.0, 10.0, 20.0, 30.0];
//! assert_eq!(linear(&x, &y, &[-1.0, 0.5, 1.5, 3.5]).unwrap(), vec![0.0, 5.0, 15.0, 30.0]);
//!
//! // Bin dense samples onto coarser thresholds
//! let binned = block_average_above(&x, &y, &[1.0, 3.0]).unwrap();
//! assert_eq!(binned, vec![5.0, 25.0]);
//!
//! // Log-space interpolation needs strictly positive y
//! assert!(logarithmic(&x, &y, &[0.5]).is_err());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod fit;
pub mod math;
pub mod types;
