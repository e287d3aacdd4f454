//! Numerical routines.
//!
//! - `resamplers`: Interpolating and aggregating resamplers over sorted samples

pub mod resamplers;
