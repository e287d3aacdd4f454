//! CLI configuration management
//!
//! Handles loading configuration from TOML files, `RESAMPLE_*` environment
//! variables, and CLI arguments.

use resample_core::fit::{ResampleMethod, DEFAULT_INDEX_INTERVAL, DEFAULT_WINDOW_WIDTH};
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Log level override
pub const ENV_LOG_LEVEL: &str = "RESAMPLE_LOG_LEVEL";
/// Method name override
pub const ENV_METHOD: &str = "RESAMPLE_METHOD";
/// Window width override
pub const ENV_WINDOW_WIDTH: &str = "RESAMPLE_WINDOW_WIDTH";
/// End-average distance override
pub const ENV_INDEX_INTERVAL: &str = "RESAMPLE_INDEX_INTERVAL";
/// CSV delimiter override
pub const ENV_DELIMITER: &str = "RESAMPLE_DELIMITER";
/// Sortedness requirement override
pub const ENV_REQUIRE_SORTED: &str = "RESAMPLE_REQUIRE_SORTED";
/// Output precision override
pub const ENV_PRECISION: &str = "RESAMPLE_PRECISION";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid method: {0}")]
    InvalidMethod(String),

    #[error("Invalid {name}: {value}. Must be finite and non-negative")]
    InvalidExtent { name: &'static str, value: f64 },

    #[error("Invalid delimiter: {0:?}. Must be a single ASCII character")]
    InvalidDelimiter(char),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Verbosity of the tracing subscriber, named as `EnvFilter` directives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

/// Directive name for every level, most verbose first
const LOG_LEVEL_NAMES: [(LogLevel, &str); 5] = [
    (LogLevel::Trace, "trace"),
    (LogLevel::Debug, "debug"),
    (LogLevel::Info, "info"),
    (LogLevel::Warn, "warn"),
    (LogLevel::Error, "error"),
];

impl LogLevel {
    /// Directive passed to `EnvFilter` when `RUST_LOG` is unset
    pub fn as_filter_str(&self) -> &'static str {
        LOG_LEVEL_NAMES
            .iter()
            .find(|(level, _)| level == self)
            .map_or("info", |(_, name)| *name)
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    /// Case-insensitive lookup by directive name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LOG_LEVEL_NAMES
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(s.trim()))
            .map(|(level, _)| *level)
            .ok_or_else(|| ConfigError::InvalidLogLevel(s.to_string()))
    }
}

impl TryFrom<String> for LogLevel {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, <LogLevel as TryFrom<String>>::Error> {
        s.parse()
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// Resampling configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ResampleConfig {
    /// Log level
    pub log_level: LogLevel,
    /// Resampling method; its parameters come from the fields below
    #[serde(deserialize_with = "deserialize_method")]
    pub method: ResampleMethod,
    /// Full window width for window averaging
    pub window_width: f64,
    /// End distance for end averaging
    pub index_interval: f64,
    /// CSV field delimiter
    pub delimiter: char,
    /// Reject samples whose abscissas decrease
    pub require_sorted: bool,
    /// Decimal places in the output; full precision when unset
    pub precision: Option<usize>,
}

fn deserialize_method<'de, D>(deserializer: D) -> Result<ResampleMethod, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_method(&s).map_err(serde::de::Error::custom)
}

fn parse_method(s: &str) -> Result<ResampleMethod, ConfigError> {
    ResampleMethod::from_str(s).map_err(|e| ConfigError::InvalidMethod(e.to_string()))
}

impl Default for ResampleConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            method: ResampleMethod::Linear,
            window_width: DEFAULT_WINDOW_WIDTH,
            index_interval: DEFAULT_INDEX_INTERVAL,
            delimiter: ',',
            require_sorted: true,
            precision: None,
        }
    }
}

impl ResampleConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: ResampleConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Override fields whose variable is set, reading values through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(method) = lookup(ENV_METHOD) {
            self.method = parse_method(&method)?;
        }
        if let Some(width) = lookup(ENV_WINDOW_WIDTH) {
            self.window_width = parse_env(ENV_WINDOW_WIDTH, &width)?;
        }
        if let Some(interval) = lookup(ENV_INDEX_INTERVAL) {
            self.index_interval = parse_env(ENV_INDEX_INTERVAL, &interval)?;
        }
        if let Some(delimiter) = lookup(ENV_DELIMITER) {
            let mut chars = delimiter.chars();
            self.delimiter = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(ConfigError::EnvError(format!(
                        "{} must be a single character, got {:?}",
                        ENV_DELIMITER, delimiter
                    )))
                }
            };
        }
        if let Some(required) = lookup(ENV_REQUIRE_SORTED) {
            self.require_sorted = required.to_lowercase() == "true";
        }
        if let Some(precision) = lookup(ENV_PRECISION) {
            self.precision = Some(parse_env(ENV_PRECISION, &precision)?);
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("window_width", self.window_width),
            ("index_interval", self.index_interval),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidExtent { name, value });
            }
        }

        if !self.delimiter.is_ascii() {
            return Err(ConfigError::InvalidDelimiter(self.delimiter));
        }

        Ok(())
    }

    /// The configured method with its parameters filled in
    pub fn resolved_method(&self) -> ResampleMethod {
        self.method
            .with_width(self.window_width)
            .with_index_interval(self.index_interval)
    }

    /// The delimiter as the byte the CSV reader expects
    pub fn delimiter_byte(&self) -> u8 {
        // validate() guarantees ASCII
        self.delimiter as u8
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if let Some(method) = &cli.method {
            self.method = parse_method(method)?;
        }
        if let Some(width) = cli.window_width {
            self.window_width = width;
        }
        if let Some(interval) = cli.index_interval {
            self.index_interval = interval;
        }
        Ok(())
    }
}

fn parse_env<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{} has invalid value {:?}", key, value)))
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Method name override
    pub method: Option<String>,
    /// Window width override
    pub window_width: Option<f64>,
    /// End distance override
    pub index_interval: Option<f64>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<ResampleConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<ResampleConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = if let Some(config_path) = &cli.config_file {
        ResampleConfig::from_file(config_path)?
    } else {
        ResampleConfig::default()
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;

    // Final validation
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ResampleConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.method, ResampleMethod::Linear);
        assert_eq!(config.window_width, 10.0);
        assert_eq!(config.index_interval, 30.0);
        assert_eq!(config.delimiter, ',');
        assert!(config.require_sorted);
        assert_eq!(config.precision, None);
    }

    #[test]
    fn test_log_level_names_round_trip() {
        for (level, name) in LOG_LEVEL_NAMES {
            assert_eq!(level.to_string(), name);
            assert_eq!(name.parse::<LogLevel>().unwrap(), level);
            assert_eq!(name.to_uppercase().parse::<LogLevel>().unwrap(), level);
        }
        assert_eq!(" Warn ".parse::<LogLevel>().unwrap(), LogLevel::Warn);
    }

    #[test]
    fn test_log_level_rejects_unknown_names() {
        for bad in ["", "verbose", "warning", "off"] {
            let err = bad.parse::<LogLevel>().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidLogLevel(ref s) if s == bad));
        }
        assert!(toml::from_str::<ResampleConfig>("log_level = \"loud\"").is_err());
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            log_level = "debug"
            method = "window_average"
            window_width = 2.5
            index_interval = 4.0
            delimiter = ";"
            require_sorted = false
            precision = 3
        "#;

        let config: ResampleConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.window_width, 2.5);
        assert_eq!(config.index_interval, 4.0);
        assert_eq!(config.delimiter, ';');
        assert!(!config.require_sorted);
        assert_eq!(config.precision, Some(3));
        assert_eq!(
            config.resolved_method(),
            ResampleMethod::WindowAverage { width: 2.5 }
        );
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config: ResampleConfig = toml::from_str(r#"method = "log_log""#).unwrap();
        // Should use defaults for unspecified fields
        assert_eq!(config.method, ResampleMethod::LogLog);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.window_width, 10.0);
    }

    #[test]
    fn test_toml_rejects_unknown_method() {
        let result: Result<ResampleConfig, _> = toml::from_str(r#"method = "cubic""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_extents() {
        let mut config = ResampleConfig::default();
        config.window_width = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidExtent {
                name: "window_width",
                ..
            })
        ));

        config.window_width = 0.0;
        config.index_interval = f64::INFINITY;
        assert!(config.validate().is_err());

        config.index_interval = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_delimiter() {
        let mut config = ResampleConfig::default();
        config.delimiter = 'é';
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDelimiter('é'))
        ));
        config.delimiter = '\t';
        assert!(config.validate().is_ok());
        assert_eq!(config.delimiter_byte(), b'\t');
    }

    #[test]
    fn test_resolved_method_keeps_parameterless_methods() {
        let mut config = ResampleConfig::default();
        config.method = ResampleMethod::Step;
        config.window_width = 3.0;
        assert_eq!(config.resolved_method(), ResampleMethod::Step);

        config.method = ResampleMethod::EndAverage {
            index_interval: 30.0,
        };
        config.index_interval = 5.0;
        assert_eq!(
            config.resolved_method(),
            ResampleMethod::EndAverage {
                index_interval: 5.0
            }
        );
    }

    #[test]
    fn test_apply_env() {
        let mut config = ResampleConfig::default();
        config
            .apply_env(env_of(&[
                (ENV_LOG_LEVEL, "warn"),
                (ENV_METHOD, "block"),
                (ENV_WINDOW_WIDTH, "1.5"),
                (ENV_DELIMITER, "|"),
                (ENV_REQUIRE_SORTED, "FALSE"),
                (ENV_PRECISION, "6"),
            ]))
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.method, ResampleMethod::Step);
        assert_eq!(config.window_width, 1.5);
        assert_eq!(config.index_interval, 30.0);
        assert_eq!(config.delimiter, '|');
        assert!(!config.require_sorted);
        assert_eq!(config.precision, Some(6));
    }

    #[test]
    fn test_apply_env_rejects_bad_values() {
        let mut config = ResampleConfig::default();
        assert!(matches!(
            config.apply_env(env_of(&[(ENV_WINDOW_WIDTH, "wide")])),
            Err(ConfigError::EnvError(_))
        ));
        assert!(matches!(
            config.apply_env(env_of(&[(ENV_DELIMITER, ";;")])),
            Err(ConfigError::EnvError(_))
        ));
        assert!(matches!(
            config.apply_env(env_of(&[(ENV_METHOD, "spline")])),
            Err(ConfigError::InvalidMethod(_))
        ));
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = ResampleConfig::default();
        let cli = CliArgs {
            log_level: Some("debug".to_string()),
            method: Some("window".to_string()),
            window_width: Some(4.0),
            index_interval: Some(2.0),
            config_file: None,
        };

        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.window_width, 4.0);
        assert_eq!(config.index_interval, 2.0);
        assert_eq!(
            config.resolved_method(),
            ResampleMethod::WindowAverage { width: 4.0 }
        );
    }

    #[test]
    fn test_build_config_priority() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "method = \"step\"\nwindow_width = 1.0\nprecision = 2").unwrap();

        let cli = CliArgs {
            config_file: Some(file.path().to_path_buf()),
            window_width: Some(3.0),
            ..Default::default()
        };
        let config = build_config_with(
            &cli,
            env_of(&[(ENV_METHOD, "linear"), (ENV_WINDOW_WIDTH, "2.0")]),
        )
        .unwrap();

        // env beats file, CLI beats env, untouched file values survive
        assert_eq!(config.method, ResampleMethod::Linear);
        assert_eq!(config.window_width, 3.0);
        assert_eq!(config.precision, Some(2));
    }

    #[test]
    fn test_build_config_with_defaults() {
        let config = build_config_with(&CliArgs::default(), env_of(&[])).unwrap();
        assert_eq!(config, ResampleConfig::default());
    }

    #[test]
    fn test_build_config_validates_merged_result() {
        let cli = CliArgs {
            window_width: Some(-2.0),
            ..Default::default()
        };
        assert!(build_config_with(&cli, env_of(&[])).is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let cli = CliArgs {
            config_file: Some(PathBuf::from("/nonexistent/resample.toml")),
            ..Default::default()
        };
        assert!(matches!(
            build_config_with(&cli, env_of(&[])),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidLogLevel("bad".to_string());
        assert!(err.to_string().contains("Invalid log level"));

        let err = ConfigError::InvalidExtent {
            name: "window_width",
            value: -1.0,
        };
        assert!(err.to_string().contains("window_width"));
    }
}
