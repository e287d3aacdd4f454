//! Windowed local averaging.
//!
//! Each query `q` takes the unweighted mean of every `y_i` whose `x_i` lies in
//! the closed window `[q - width / 2, q + width / 2]`. A window holding no
//! samples yields zero.
//!
//! The window is tracked as a half-open index range `[lo, hi)` into `x` with a
//! compensated running sum and count. For non-decreasing queries both ends only move
//! forward, so the whole pass is O(n + m). When a query's window starts below
//! the previous one the range is rebuilt from a binary search.

use super::Resampler;
use crate::types::samples::{check_extent, check_queries};
use crate::types::{ResampleError, SampleSet};
use num_traits::Float;

/// Arithmetic mean of the samples within `width / 2` of each query.
///
/// # Example
///
/// ```
/// use resample_core::math::resamplers::{Resampler, WindowAverager};
///
/// let x = [0.0, 1.0, 2.0, 3.0, 4.0];
/// let y = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let new_y = WindowAverager::new(2.0).resample(&x, &y, &[2.0]).unwrap();
/// assert_eq!(new_y, vec![3.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowAverager<T: Float> {
    /// Full width of the window centred on each query.
    pub width: T,
}

impl<T: Float> WindowAverager<T> {
    /// Create an averager with the given full window width.
    pub fn new(width: T) -> Self {
        Self { width }
    }
}

impl<T: Float> Resampler<T> for WindowAverager<T> {
    fn resample_into(
        &self,
        x: &[T],
        y: &[T],
        new_x: &[T],
        new_y: &mut [T],
    ) -> Result<(), ResampleError> {
        window_average_into(x, y, new_x, new_y, self.width)
    }
}

/// Running state of the sliding window.
///
/// Finite values are accumulated with Neumaier compensation so that a large
/// sample leaving the window does not wipe out the small ones still inside.
/// NaN and infinite values are counted rather than summed, so they stop
/// affecting the mean as soon as they leave.
struct Window<T> {
    lo: usize,
    hi: usize,
    sum: T,
    compensation: T,
    count: usize,
    nan: usize,
    pos_inf: usize,
    neg_inf: usize,
    bottom: T,
}

impl<T: Float> Window<T> {
    fn new() -> Self {
        Self {
            lo: 0,
            hi: 0,
            sum: T::zero(),
            compensation: T::zero(),
            count: 0,
            nan: 0,
            pos_inf: 0,
            neg_inf: 0,
            bottom: T::neg_infinity(),
        }
    }

    fn clear(&mut self) {
        self.sum = T::zero();
        self.compensation = T::zero();
        self.count = 0;
        self.nan = 0;
        self.pos_inf = 0;
        self.neg_inf = 0;
    }

    fn reset_at(&mut self, x: &[T], bottom: T) {
        self.lo = x.partition_point(|&xi| xi < bottom);
        self.hi = self.lo;
        self.clear();
    }

    fn accumulate(&mut self, v: T) {
        let t = self.sum + v;
        let lost = if self.sum.abs() >= v.abs() {
            (self.sum - t) + v
        } else {
            (v - t) + self.sum
        };
        self.compensation = self.compensation + lost;
        self.sum = t;
    }

    fn admit(&mut self, v: T) {
        match classify(v) {
            Class::Nan => self.nan += 1,
            Class::PosInf => self.pos_inf += 1,
            Class::NegInf => self.neg_inf += 1,
            Class::Finite => self.accumulate(v),
        }
        self.count += 1;
    }

    fn evict(&mut self, v: T) {
        match classify(v) {
            Class::Nan => self.nan -= 1,
            Class::PosInf => self.pos_inf -= 1,
            Class::NegInf => self.neg_inf -= 1,
            Class::Finite => self.accumulate(-v),
        }
        self.count -= 1;
        if self.count == 0 {
            self.clear();
        }
    }

    fn mean(&self) -> T {
        if self.count == 0 {
            return T::zero();
        }
        if self.nan > 0 || (self.pos_inf > 0 && self.neg_inf > 0) {
            return T::nan();
        }
        if self.pos_inf > 0 {
            return T::infinity();
        }
        if self.neg_inf > 0 {
            return T::neg_infinity();
        }
        match T::from(self.count) {
            Some(n) => (self.sum + self.compensation) / n,
            None => T::nan(),
        }
    }
}

enum Class {
    Nan,
    PosInf,
    NegInf,
    Finite,
}

fn classify<T: Float>(v: T) -> Class {
    if v.is_nan() {
        Class::Nan
    } else if v == T::infinity() {
        Class::PosInf
    } else if v == T::neg_infinity() {
        Class::NegInf
    } else {
        Class::Finite
    }
}

/// Average `y` over a window of `width` around each query, writing into `new_y`.
///
/// NaN queries yield NaN and leave the window where it was. A NaN sample
/// makes every window containing it NaN; an infinite sample makes it that
/// infinity (NaN when both signs are present).
///
/// # Errors
///
/// * `ResampleError::InvalidInput` - empty samples, mismatched lengths, or a
///   width that is negative or not finite
pub fn window_average_into<T: Float>(
    x: &[T],
    y: &[T],
    new_x: &[T],
    new_y: &mut [T],
    width: T,
) -> Result<(), ResampleError> {
    let samples = SampleSet::new(x, y)?;
    check_queries(new_x, new_y)?;
    check_extent("width", width)?;

    let n = samples.len();
    let half = width / (T::one() + T::one());
    let mut window = Window::new();

    for (&q, out) in new_x.iter().zip(new_y.iter_mut()) {
        if q.is_nan() {
            *out = q;
            continue;
        }
        let bottom = q - half;
        let top = q + half;

        if bottom < window.bottom {
            window.reset_at(x, bottom);
        }
        window.bottom = bottom;

        // Drop samples that fell below the window
        while window.lo < n && x[window.lo] < bottom {
            if window.lo < window.hi {
                window.evict(y[window.lo]);
            }
            window.lo += 1;
        }
        if window.hi < window.lo {
            window.hi = window.lo;
        }

        // Admit samples up to the top edge
        while window.hi < n && x[window.hi] <= top {
            window.admit(y[window.hi]);
            window.hi += 1;
        }

        *out = window.mean();
    }
    Ok(())
}

/// Allocating form of [`window_average_into`].
pub fn window_average<T: Float>(
    x: &[T],
    y: &[T],
    new_x: &[T],
    width: T,
) -> Result<Vec<T>, ResampleError> {
    WindowAverager::new(width).resample(x, y, new_x)
}
