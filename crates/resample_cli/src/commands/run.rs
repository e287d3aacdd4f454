//! Run command implementation
//!
//! Resamples every series of a samples file onto the abscissas of a queries
//! file using resample_core.

use resample_core::fit::{resample_rows, ResampleMethod};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::{info, warn};

use super::check::validate_table;
use crate::config::ResampleConfig;
use crate::io::{read_queries, read_samples, write_table};
use crate::Result;

/// Run the resample command
pub fn run(
    samples: &Path,
    queries: &Path,
    output: Option<&Path>,
    config: &ResampleConfig,
) -> Result<()> {
    let method = config.resolved_method();
    info!("Starting resampling...");
    info!("  Samples: {}", samples.display());
    info!("  Queries: {}", queries.display());
    info!("  Method: {:?}", method);

    let delimiter = config.delimiter_byte();
    let table = read_samples(samples, delimiter)?;
    let new_x = read_queries(queries, delimiter)?;

    let report = validate_table(samples, &table, method, config.require_sorted)?;
    info!(
        samples = report.samples,
        series = report.series,
        queries = new_x.len(),
        "Inputs loaded"
    );

    if method == ResampleMethod::BlockAverageAbove && !is_non_decreasing(&new_x) {
        warn!("Queries are not sorted; block averages restart at each descent");
    }

    let columns = resample_rows(method, &table.x, &table.series, &new_x)?;

    match output {
        Some(path) => {
            info!("Writing results to: {}", path.display());
            let file = BufWriter::new(File::create(path)?);
            write_table(
                file,
                delimiter,
                config.precision,
                &table.x_name,
                &table.names,
                &new_x,
                &columns,
            )?;
        }
        None => write_table(
            std::io::stdout().lock(),
            delimiter,
            config.precision,
            &table.x_name,
            &table.names,
            &new_x,
            &columns,
        )?,
    }

    info!("Resampling complete");
    Ok(())
}

fn is_non_decreasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[1] >= w[0])
}
