//! Check command implementation
//!
//! Validates a samples file against the configured method without resampling.

use resample_core::fit::ResampleMethod;
use resample_core::types::{ResampleError, SampleSet};
use std::path::Path;
use tracing::info;

use crate::config::ResampleConfig;
use crate::io::{read_samples, SampleTable};
use crate::{CliError, Result};

/// Summary of a validated samples file
#[derive(Debug, Clone, PartialEq)]
pub struct SampleReport {
    /// Number of sample rows
    pub samples: usize,
    /// Number of series columns
    pub series: usize,
    /// First and last abscissa
    pub domain: (f64, f64),
}

/// Check shape, order and positivity of every series in `table`.
///
/// Order is only enforced when `require_sorted` is set. Positivity follows
/// what `method` needs.
pub fn validate_table(
    path: &Path,
    table: &SampleTable,
    method: ResampleMethod,
    require_sorted: bool,
) -> Result<SampleReport> {
    let invalid = |name: &str, err: ResampleError| CliError::InvalidData {
        path: path.display().to_string(),
        message: format!("{}: {}", name, err),
    };

    let mut domain = (f64::NAN, f64::NAN);
    for (name, y) in table.names.iter().zip(table.series.iter()) {
        let samples = SampleSet::new(&table.x, y).map_err(|e| invalid(name, e))?;
        if require_sorted {
            samples
                .check_non_decreasing()
                .map_err(|e| invalid(&table.x_name, e))?;
        }
        if method.requires_positive_x() {
            samples
                .check_positive_x()
                .map_err(|e| invalid(&table.x_name, e))?;
        }
        if method.requires_positive_y() {
            samples.check_positive_y().map_err(|e| invalid(name, e))?;
        }
        domain = samples.domain();
    }

    Ok(SampleReport {
        samples: table.x.len(),
        series: table.series.len(),
        domain,
    })
}

/// Run the check command
pub fn run(samples: &Path, config: &ResampleConfig) -> Result<()> {
    let method = config.resolved_method();
    info!("Checking samples...");
    info!("  Samples: {}", samples.display());
    info!("  Method: {}", method);

    let table = read_samples(samples, config.delimiter_byte())?;
    let report = validate_table(samples, &table, method, config.require_sorted)?;

    info!(
        samples = report.samples,
        series = report.series,
        x_min = report.domain.0,
        x_max = report.domain.1,
        "Samples valid"
    );
    println!(
        "{}: {} samples, {} series, x in [{}, {}]",
        samples.display(),
        report.samples,
        report.series,
        report.domain.0,
        report.domain.1
    );
    Ok(())
}
