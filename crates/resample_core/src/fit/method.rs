//! Runtime selection of a resampling method.

use crate::math::resamplers::{
    block_average_above_into, end_average_into, fill_nan, linear_into, log_log_into,
    logarithmic_into, step_into, window_average_into,
};
use crate::types::ResampleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default full window width for [`ResampleMethod::WindowAverage`].
pub const DEFAULT_WINDOW_WIDTH: f64 = 10.0;

/// Default end distance for [`ResampleMethod::EndAverage`].
pub const DEFAULT_INDEX_INTERVAL: f64 = 30.0;

/// A resampling strategy chosen at runtime, with its parameters.
///
/// Serialises as an internally tagged table, e.g.
/// `{ kind = "window_average", width = 2.0 }` in TOML.
///
/// # Example
///
/// ```
/// use resample_core::fit::ResampleMethod;
///
/// let method: ResampleMethod = "window_average".parse().unwrap();
/// assert_eq!(method, ResampleMethod::WindowAverage { width: 10.0 });
///
/// let mut out = [0.0; 1];
/// ResampleMethod::Linear
///     .resample_into(&[0.0, 1.0], &[0.0, 4.0], &[0.25], &mut out)
///     .unwrap();
/// assert_eq!(out, [1.0]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResampleMethod {
    /// Piecewise-linear interpolation
    #[default]
    Linear,
    /// Linear interpolation of `ln(y)`
    Logarithmic,
    /// Linear interpolation in `(ln x, ln y)`
    LogLog,
    /// Mean over a window centred on each query
    WindowAverage {
        /// Full window width
        width: f64,
    },
    /// Mean over the block between consecutive queries
    BlockAverageAbove,
    /// Sample-and-hold
    Step,
    /// Mean of the samples near the closer end
    EndAverage {
        /// Distance from each end within which samples are averaged
        index_interval: f64,
    },
    /// NaN for every query
    FillNan,
}

impl ResampleMethod {
    /// All method names accepted by [`FromStr`], in display order.
    pub const NAMES: [&'static str; 8] = [
        "linear",
        "logarithmic",
        "log_log",
        "window_average",
        "block_average_above",
        "step",
        "end_average",
        "fill_nan",
    ];

    /// Canonical name of the method.
    pub fn name(&self) -> &'static str {
        match self {
            ResampleMethod::Linear => "linear",
            ResampleMethod::Logarithmic => "logarithmic",
            ResampleMethod::LogLog => "log_log",
            ResampleMethod::WindowAverage { .. } => "window_average",
            ResampleMethod::BlockAverageAbove => "block_average_above",
            ResampleMethod::Step => "step",
            ResampleMethod::EndAverage { .. } => "end_average",
            ResampleMethod::FillNan => "fill_nan",
        }
    }

    /// True when the method takes logarithms of `y`.
    pub fn requires_positive_y(&self) -> bool {
        matches!(self, ResampleMethod::Logarithmic | ResampleMethod::LogLog)
    }

    /// True when the method takes logarithms of `x`.
    pub fn requires_positive_x(&self) -> bool {
        matches!(self, ResampleMethod::LogLog)
    }

    /// Replace the window width if this is a window average.
    pub fn with_width(self, width: f64) -> Self {
        match self {
            ResampleMethod::WindowAverage { .. } => ResampleMethod::WindowAverage { width },
            other => other,
        }
    }

    /// Replace the end distance if this is an end average.
    pub fn with_index_interval(self, index_interval: f64) -> Self {
        match self {
            ResampleMethod::EndAverage { .. } => ResampleMethod::EndAverage { index_interval },
            other => other,
        }
    }

    /// Run the method over `(x, y)` and fill `new_y`.
    ///
    /// # Errors
    ///
    /// Whatever the underlying resampler reports; see
    /// [`resamplers`](crate::math::resamplers).
    pub fn resample_into(
        &self,
        x: &[f64],
        y: &[f64],
        new_x: &[f64],
        new_y: &mut [f64],
    ) -> Result<(), ResampleError> {
        match *self {
            ResampleMethod::Linear => linear_into(x, y, new_x, new_y),
            ResampleMethod::Logarithmic => logarithmic_into(x, y, new_x, new_y),
            ResampleMethod::LogLog => log_log_into(x, y, new_x, new_y),
            ResampleMethod::WindowAverage { width } => {
                window_average_into(x, y, new_x, new_y, width)
            }
            ResampleMethod::BlockAverageAbove => block_average_above_into(x, y, new_x, new_y),
            ResampleMethod::Step => step_into(x, y, new_x, new_y),
            ResampleMethod::EndAverage { index_interval } => {
                end_average_into(x, y, new_x, new_y, index_interval)
            }
            ResampleMethod::FillNan => {
                if new_x.len() != new_y.len() {
                    return Err(ResampleError::length_mismatch(
                        "new_x",
                        "new_y",
                        (new_x.len(), new_y.len()),
                    ));
                }
                fill_nan(new_y);
                Ok(())
            }
        }
    }

    /// Allocating form of [`ResampleMethod::resample_into`].
    pub fn resample(&self, x: &[f64], y: &[f64], new_x: &[f64]) -> Result<Vec<f64>, ResampleError> {
        let mut new_y = vec![0.0; new_x.len()];
        self.resample_into(x, y, new_x, &mut new_y)?;
        Ok(new_y)
    }
}

impl FromStr for ResampleMethod {
    type Err = ResampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase().replace('-', "_");
        match normalised.as_str() {
            "linear" => Ok(ResampleMethod::Linear),
            "logarithmic" | "log" => Ok(ResampleMethod::Logarithmic),
            "log_log" | "loglog" => Ok(ResampleMethod::LogLog),
            "window_average" | "window" => Ok(ResampleMethod::WindowAverage {
                width: DEFAULT_WINDOW_WIDTH,
            }),
            "block_average_above" | "block_average" => Ok(ResampleMethod::BlockAverageAbove),
            "step" | "block" => Ok(ResampleMethod::Step),
            "end_average" => Ok(ResampleMethod::EndAverage {
                index_interval: DEFAULT_INDEX_INTERVAL,
            }),
            "fill_nan" => Ok(ResampleMethod::FillNan),
            _ => Err(ResampleError::InvalidInput(format!(
                "Unknown resample method: {}. Supported: {}",
                s,
                Self::NAMES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for ResampleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_name() {
        for name in ResampleMethod::NAMES {
            let method: ResampleMethod = name.parse().unwrap();
            assert_eq!(method.name(), name);
            assert_eq!(format!("{}", method), name);
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(
            "LOG".parse::<ResampleMethod>().unwrap(),
            ResampleMethod::Logarithmic
        );
        assert_eq!(
            "log-log".parse::<ResampleMethod>().unwrap(),
            ResampleMethod::LogLog
        );
        assert_eq!(
            " block ".parse::<ResampleMethod>().unwrap(),
            ResampleMethod::Step
        );
    }

    #[test]
    fn test_parse_defaults() {
        assert_eq!(
            "window_average".parse::<ResampleMethod>().unwrap(),
            ResampleMethod::WindowAverage { width: 10.0 }
        );
        assert_eq!(
            "end_average".parse::<ResampleMethod>().unwrap(),
            ResampleMethod::EndAverage {
                index_interval: 30.0
            }
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "cubic".parse::<ResampleMethod>().unwrap_err();
        assert!(format!("{}", err).contains("Unknown resample method: cubic"));
    }

    #[test]
    fn test_with_parameters() {
        let method = ResampleMethod::WindowAverage { width: 10.0 }.with_width(2.0);
        assert_eq!(method, ResampleMethod::WindowAverage { width: 2.0 });
        assert_eq!(ResampleMethod::Linear.with_width(2.0), ResampleMethod::Linear);
        assert_eq!(
            ResampleMethod::EndAverage {
                index_interval: 30.0
            }
            .with_index_interval(1.0),
            ResampleMethod::EndAverage {
                index_interval: 1.0
            }
        );
    }

    #[test]
    fn test_positivity_requirements() {
        assert!(ResampleMethod::Logarithmic.requires_positive_y());
        assert!(!ResampleMethod::Logarithmic.requires_positive_x());
        assert!(ResampleMethod::LogLog.requires_positive_x());
        assert!(!ResampleMethod::Linear.requires_positive_y());
    }

    #[test]
    fn test_dispatch() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [1.0, 2.0, 3.0, 4.0, 5.0];

        assert_eq!(
            ResampleMethod::Linear.resample(&x, &y, &[0.5]).unwrap(),
            vec![1.5]
        );
        assert_eq!(
            ResampleMethod::BlockAverageAbove
                .resample(&x, &y, &[1.0, 3.0])
                .unwrap(),
            vec![1.5, 3.5]
        );
        assert_eq!(
            ResampleMethod::WindowAverage { width: 2.0 }
                .resample(&x, &y, &[2.0])
                .unwrap(),
            vec![3.0]
        );
        assert_eq!(
            ResampleMethod::Step.resample(&x, &y, &[2.5]).unwrap(),
            vec![3.0]
        );
        assert!(ResampleMethod::FillNan
            .resample(&x, &y, &[1.0])
            .unwrap()[0]
            .is_nan());
    }

    #[test]
    fn test_serde_tagged_representation() {
        let method = ResampleMethod::WindowAverage { width: 2.5 };
        let json = serde_json::to_string(&method).unwrap();
        assert_eq!(json, r#"{"kind":"window_average","width":2.5}"#);

        let back: ResampleMethod = serde_json::from_str(r#"{"kind":"log_log"}"#).unwrap();
        assert_eq!(back, ResampleMethod::LogLog);
    }
}
