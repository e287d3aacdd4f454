//! Block averaging between consecutive query thresholds.

use super::Resampler;
use crate::types::samples::check_queries;
use crate::types::{ResampleError, SampleSet};
use num_traits::Float;

/// Mean of the samples falling in the block ending at each query.
///
/// The block for query `j` is every sample with
/// `new_x[j-1] < x_i <= new_x[j]`, where the threshold before the first
/// query is negative infinity. Empty blocks yield zero. For non-decreasing
/// `new_x` the blocks partition the samples at or below the last query, so
/// dense data can be binned onto a coarser series.
///
/// `new_x` is expected to be non-decreasing; this is not checked. A query
/// below its predecessor has an empty block, and the scan restarts from that
/// query so the following block is exactly `(new_x[j], new_x[j+1]]`.
///
/// # Example
///
/// ```
/// use resample_core::math::resamplers::{BlockAverageAbove, Resampler};
///
/// let x = [0.0, 1.0, 2.0, 3.0, 4.0];
/// let y = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let new_y = BlockAverageAbove.resample(&x, &y, &[1.0, 3.0]).unwrap();
/// assert_eq!(new_y, vec![1.5, 3.5]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockAverageAbove;

impl<T: Float> Resampler<T> for BlockAverageAbove {
    fn resample_into(
        &self,
        x: &[T],
        y: &[T],
        new_x: &[T],
        new_y: &mut [T],
    ) -> Result<(), ResampleError> {
        block_average_above_into(x, y, new_x, new_y)
    }
}

/// Average `y` over the block ending at each query, writing into `new_y`.
///
/// NaN queries yield NaN and do not move the previous threshold.
///
/// # Errors
///
/// * `ResampleError::InvalidInput` - empty samples or mismatched lengths
pub fn block_average_above_into<T: Float>(
    x: &[T],
    y: &[T],
    new_x: &[T],
    new_y: &mut [T],
) -> Result<(), ResampleError> {
    let samples = SampleSet::new(x, y)?;
    check_queries(new_x, new_y)?;

    let n = samples.len();
    // First sample above the previous threshold
    let mut start = 0usize;
    let mut threshold = T::neg_infinity();

    for (&q, out) in new_x.iter().zip(new_y.iter_mut()) {
        if q.is_nan() {
            *out = q;
            continue;
        }
        if q < threshold {
            *out = T::zero();
            start = x.partition_point(|&xi| xi <= q);
            threshold = q;
            continue;
        }

        let mut sum = T::zero();
        let mut count = T::zero();
        let mut end = start;
        while end < n && x[end] <= q {
            sum = sum + y[end];
            count = count + T::one();
            end += 1;
        }

        *out = if end == start { T::zero() } else { sum / count };
        start = end;
        threshold = q;
    }
    Ok(())
}

/// Allocating form of [`block_average_above_into`].
pub fn block_average_above<T: Float>(
    x: &[T],
    y: &[T],
    new_x: &[T],
) -> Result<Vec<T>, ResampleError> {
    BlockAverageAbove.resample(x, y, new_x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_block_concrete_scenario() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [1.0, 2.0, 3.0, 4.0, 5.0];
        let new_y = block_average_above(&x, &y, &[1.0, 3.0]).unwrap();
        assert_eq!(new_y, vec![1.5, 3.5]);
    }

    #[test]
    fn test_block_first_threshold_is_unbounded_below() {
        let x = [-100.0, -50.0, 0.0];
        let y = [2.0, 4.0, 9.0];
        let new_y = block_average_above(&x, &y, &[-10.0]).unwrap();
        assert_relative_eq!(new_y[0], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_block_dense_downsampling() {
        let x: Vec<f64> = (0..3000).map(|i| i as f64).collect();
        let new_x: Vec<f64> = (0..1500).map(|j| (j * 2) as f64).collect();
        let new_y = block_average_above(&x, &x, &new_x).unwrap();
        // (-inf, 0] -> {0}; (0, 2] -> {1, 2}; (2, 4] -> {3, 4}; ...
        assert_relative_eq!(new_y[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(new_y[1], 1.5, epsilon = 1e-12);
        assert_relative_eq!(new_y[2], 3.5, epsilon = 1e-12);
        assert_relative_eq!(new_y[3], 5.5, epsilon = 1e-12);
        assert_relative_eq!(new_y[1499], 2997.5, epsilon = 1e-12);
    }

    #[test]
    fn test_block_empty_blocks_yield_zero() {
        let x = [0.0, 10.0];
        let y = [4.0, 6.0];
        let new_y = block_average_above(&x, &y, &[-1.0, 5.0, 6.0, 10.0]).unwrap();
        assert_eq!(new_y, vec![0.0, 4.0, 0.0, 6.0]);
    }

    #[test]
    fn test_block_repeated_threshold_is_empty() {
        let x = [0.0, 1.0, 2.0];
        let y = [1.0, 2.0, 3.0];
        let new_y = block_average_above(&x, &y, &[1.0, 1.0, 2.0]).unwrap();
        assert_eq!(new_y, vec![1.5, 0.0, 3.0]);
    }

    #[test]
    fn test_block_samples_above_last_query_are_unused() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [1.0, 1.0, 100.0, 100.0];
        let new_y = block_average_above(&x, &y, &[1.0]).unwrap();
        assert_eq!(new_y, vec![1.0]);
    }

    #[test]
    fn test_block_descending_query_restarts_scan() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [1.0, 2.0, 3.0, 4.0, 5.0];
        // 3.0 -> (-inf, 3]; 1.0 -> (3, 1] empty; 2.0 -> (1, 2] = {2}
        let new_y = block_average_above(&x, &y, &[3.0, 1.0, 2.0]).unwrap();
        assert_eq!(new_y, vec![2.5, 0.0, 3.0]);
    }

    #[test]
    fn test_block_single_sample() {
        let new_y = block_average_above(&[1.0], &[8.0], &[0.0, 1.0, 2.0]).unwrap();
        assert_eq!(new_y, vec![0.0, 8.0, 0.0]);
    }

    #[test]
    fn test_block_nan_query_keeps_threshold() {
        let x = [0.0, 1.0, 2.0];
        let y = [1.0, 2.0, 3.0];
        let new_y = block_average_above(&x, &y, &[0.0, f64::NAN, 2.0]).unwrap();
        assert_eq!(new_y[0], 1.0);
        assert!(new_y[1].is_nan());
        assert_eq!(new_y[2], 2.5);
    }

    #[test]
    fn test_block_rejects_mismatched_lengths() {
        let err = block_average_above(&[0.0, 1.0], &[0.0], &[0.5]).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
