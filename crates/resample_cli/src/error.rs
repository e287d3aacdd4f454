//! CLI error types

use crate::config::ConfigError;
use resample_core::types::ResampleError;
use thiserror::Error;

/// Errors surfaced by the `resample` binary
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// CSV content that parsed but is not usable
    #[error("Invalid data in {path}: {message}")]
    InvalidData {
        /// File the data came from
        path: String,
        /// What was wrong, with the line when known
        message: String,
    },

    /// CSV reader or writer failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be built
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Resampling rejected the data
    #[error("Resampling failed: {0}")]
    Resample(#[from] ResampleError),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
