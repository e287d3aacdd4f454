//! Resample CLI - Command Line Resampling of CSV Series
//!
//! Operational entry point for the resample_core library.
//!
//! # Commands
//!
//! - `resample run --samples <file> --queries <file>` - Resample every series
//!   onto new abscissas
//! - `resample check --samples <file>` - Validate a samples file
//! - `resample methods` - List available resampling methods
//!
//! # Configuration
//!
//! Settings come from an optional TOML file (`--config`), then `RESAMPLE_*`
//! environment variables, then command-line flags, each overriding the last.
//! `RUST_LOG` takes precedence over the configured log level.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod io;

pub use error::{CliError, Result};

use config::{build_config, CliArgs};

/// Resample sampled 1-D series onto new abscissas
#[derive(Parser)]
#[command(name = "resample")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug log level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resample every series of a samples file onto query abscissas
    Run {
        /// Samples CSV: header, x column, one or more series columns
        #[arg(short, long)]
        samples: PathBuf,

        /// Queries CSV: header, query abscissas in the first column
        #[arg(short, long)]
        queries: PathBuf,

        /// Resampling method (see `resample methods`)
        #[arg(short, long)]
        method: Option<String>,

        /// Full window width for window_average
        #[arg(short, long)]
        width: Option<f64>,

        /// End distance for end_average
        #[arg(long)]
        index_interval: Option<f64>,

        /// Output CSV (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a samples file against the configured method
    Check {
        /// Samples CSV to validate
        #[arg(short, long)]
        samples: PathBuf,
    },

    /// List available resampling methods
    Methods,
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut args = CliArgs {
        config_file: cli.config,
        log_level: cli.verbose.then(|| "debug".to_string()),
        ..Default::default()
    };
    if let Commands::Run {
        method,
        width,
        index_interval,
        ..
    } = &cli.command
    {
        args.method = method.clone();
        args.window_width = *width;
        args.index_interval = *index_interval;
    }

    let config = build_config(&args)?;
    init_tracing(config.log_level.as_filter_str());

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Run {
            samples,
            queries,
            output,
            ..
        } => commands::run::run(&samples, &queries, output.as_deref(), &config),
        Commands::Check { samples } => commands::check::run(&samples, &config),
        Commands::Methods => commands::methods::run(),
    }
}
