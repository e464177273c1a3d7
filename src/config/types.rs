//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, MAX_CONCURRENCY_LIMIT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Checker configuration.
///
/// Parsed from the command line by the binary, but it can also be constructed
/// programmatically by library users.
///
/// # Examples
///
/// ```no_run
/// use site_monitor::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     files: vec![PathBuf::from("sites.yaml")],
///     max_concurrency: 4,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "site_monitor",
    version,
    about = "Checks DNS records and HTTP endpoints against JSON/YAML site descriptors"
)]
pub struct Config {
    /// Config documents (.json, .yaml, .yml) listing the sites to check
    #[arg(required = true, value_name = "CONFIG_FILES")]
    pub files: Vec<PathBuf>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-check timeout in seconds (HTTP request timeout and DNS deadline)
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Number of entries of one config file checked concurrently
    #[arg(long, default_value_t = 1)]
    pub max_concurrency: usize,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Show per-check timing statistics at the end of the run
    #[arg(long)]
    pub show_timing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            max_concurrency: 1,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            show_timing: false,
        }
    }
}

impl Config {
    /// Validates option ranges.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid option.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_concurrency == 0 {
            return Err("max_concurrency must be at least 1".to_string());
        }
        if self.max_concurrency > MAX_CONCURRENCY_LIMIT {
            return Err(format!(
                "max_concurrency must be at most {MAX_CONCURRENCY_LIMIT} (got {})",
                self.max_concurrency
            ));
        }
        if self.timeout_seconds == 0 {
            return Err("timeout_seconds must be at least 1".to_string());
        }
        Ok(())
    }
}
