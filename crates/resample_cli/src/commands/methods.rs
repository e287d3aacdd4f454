//! Methods command implementation

use resample_core::fit::ResampleMethod;
use std::io::Write;

use crate::Result;

fn describe(name: &str) -> &'static str {
    match name {
        "linear" => "piecewise-linear, clamped to the end values",
        "logarithmic" => "linear in ln(y); y must be positive",
        "log_log" => "linear in (ln x, ln y); x and y must be positive",
        "window_average" => "mean over a window of --width around each query",
        "block_average_above" => "mean over (previous query, query]",
        "step" => "value of the last sample at or below the query",
        "end_average" => "mean of samples within --index-interval of the nearer end",
        "fill_nan" => "NaN for every query",
        _ => "",
    }
}

/// Write the available method names and a one-line summary of each
pub fn write_methods<W: Write>(mut out: W) -> Result<()> {
    for name in ResampleMethod::NAMES {
        writeln!(out, "{:<20} {}", name, describe(name))?;
    }
    Ok(())
}

/// Run the methods command
pub fn run() -> Result<()> {
    write_methods(std::io::stdout().lock())
}
