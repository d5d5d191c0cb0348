//! Configuration types and CLI options.
//!
//! This module defines the `Config` struct parsed from the command line and
//! the enums used for logging options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_GEOCODER_URL, DEFAULT_OUTPUT_FILE, DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT,
};

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
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Run configuration, parsed from the command line.
///
/// Can also be constructed programmatically (all fields are public and a
/// `Default` impl mirrors the CLI defaults), which is how the integration
/// tests drive the pipeline.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "geo_sift",
    about = "Filters a compressed stream of geotagged records down to those located in Africa"
)]
pub struct Config {
    /// Compressed line-delimited JSON input file (.zst, .gz, or plain text)
    #[arg(long)]
    pub input_file: PathBuf,

    /// Path for the output container holding the filtered records
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: PathBuf,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Debug)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Reverse-geocoding endpoint
    #[arg(long, default_value = DEFAULT_GEOCODER_URL)]
    pub geocoder_url: String,

    /// HTTP User-Agent sent to the geocoder
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Per-call geocoder timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: PathBuf::new(),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            log_level: LogLevel::Debug,
            log_format: LogFormat::Plain,
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}
