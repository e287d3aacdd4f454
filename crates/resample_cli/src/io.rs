//! CSV input and output
//!
//! Samples files carry a header row, the abscissa in the first column and one
//! or more series in the remaining columns. Queries files carry a header row
//! and the query abscissas in the first column; further columns are ignored.
//! Empty fields read as NaN.

use crate::{CliError, Result};
use std::io::Write;
use std::path::Path;

/// Series read from a samples file, sharing one abscissa
#[derive(Debug, Clone, PartialEq)]
pub struct SampleTable {
    /// Header of the abscissa column
    pub x_name: String,
    /// Header of each series column
    pub names: Vec<String>,
    /// Sample abscissas
    pub x: Vec<f64>,
    /// One ordinate vector per series, each as long as `x`
    pub series: Vec<Vec<f64>>,
}

fn reader(path: &Path, delimiter: u8) -> Result<csv::Reader<std::fs::File>> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    Ok(csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?)
}

fn parse_field(path: &Path, record: &csv::StringRecord, column: usize) -> Result<f64> {
    let field = record.get(column).unwrap_or("");
    if field.is_empty() {
        return Ok(f64::NAN);
    }
    field.parse().map_err(|_| {
        let line = record.position().map_or(0, |p| p.line());
        CliError::InvalidData {
            path: path.display().to_string(),
            message: format!("line {}: {:?} is not a number", line, field),
        }
    })
}

/// Read a samples file.
pub fn read_samples(path: &Path, delimiter: u8) -> Result<SampleTable> {
    let mut rdr = reader(path, delimiter)?;
    let headers = rdr.headers()?.clone();
    if headers.len() < 2 {
        return Err(CliError::InvalidData {
            path: path.display().to_string(),
            message: format!(
                "expected an x column and at least one series, found {} column(s)",
                headers.len()
            ),
        });
    }

    let mut table = SampleTable {
        x_name: headers[0].to_string(),
        names: headers.iter().skip(1).map(str::to_string).collect(),
        x: Vec::new(),
        series: vec![Vec::new(); headers.len() - 1],
    };

    for record in rdr.records() {
        let record = record?;
        table.x.push(parse_field(path, &record, 0)?);
        for (column, values) in table.series.iter_mut().enumerate() {
            values.push(parse_field(path, &record, column + 1)?);
        }
    }

    Ok(table)
}

/// Read the query abscissas from the first column of a queries file.
pub fn read_queries(path: &Path, delimiter: u8) -> Result<Vec<f64>> {
    let mut rdr = reader(path, delimiter)?;
    rdr.records()
        .map(|record| parse_field(path, &record?, 0))
        .collect()
}

fn format_value(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{:.*}", p, value),
        None => value.to_string(),
    }
}

/// Write `x` followed by one column per series.
///
/// `columns[k][j]` is series `k` at query `j`.
pub fn write_table<W: Write>(
    writer: W,
    delimiter: u8,
    precision: Option<usize>,
    x_name: &str,
    names: &[String],
    new_x: &[f64],
    columns: &[Vec<f64>],
) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    let mut header = vec![x_name.to_string()];
    header.extend(names.iter().cloned());
    wtr.write_record(&header)?;

    for (j, &q) in new_x.iter().enumerate() {
        let mut record = Vec::with_capacity(columns.len() + 1);
        record.push(format_value(q, precision));
        record.extend(columns.iter().map(|c| format_value(c[j], precision)));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
