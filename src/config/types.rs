//! Configuration types.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and library configuration.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{
    API_KEY_ENV_VARS, DEFAULT_API_BASE, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use crate::models::Region;

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

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use seo_insight::Config;
///
/// let config = Config {
///     api_key: Some("my-key".to_string()),
///     timeout_seconds: 90,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the generative backend
    pub api_key: Option<String>,

    /// Model identifier sent with every request
    pub model: String,

    /// Base URL of the generative backend
    pub api_base: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Region used when a caller does not name one
    pub default_region: Region,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Directory CSV exports are written to (disabled when `None`)
    pub export_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_region: Region::default(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            export_dir: None,
        }
    }
}

/// Resolves the API key from an explicit value or the environment.
///
/// An explicit, non-blank value wins; otherwise the first non-blank variable
/// from [`API_KEY_ENV_VARS`] is used.
pub fn resolve_api_key(explicit: Option<String>) -> Option<String> {
    explicit
        .filter(|key| !key.trim().is_empty())
        .or_else(|| {
            API_KEY_ENV_VARS
                .iter()
                .filter_map(|var| std::env::var(var).ok())
                .find(|key| !key.trim().is_empty())
        })
}
