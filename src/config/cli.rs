//! Command-line options.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::constants::{
    DEFAULT_API_BASE, DEFAULT_DASHBOARD_PORT, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};
use crate::config::types::{resolve_api_key, Config, LogFormat, LogLevel};
use crate::models::{AnalysisMode, Region};

/// Command-line options and configuration.
///
/// # Examples
///
/// ```bash
/// # Keyword or domain, detected from the query
/// seo_insight search "best coffee maker" --region MX
///
/// # Force keyword mode for dotted text
/// seo_insight keyword node.js
///
/// # Write every result table as CSV
/// seo_insight domain apple.com --export-dir ./exports
///
/// # Serve the JSON dashboard API
/// seo_insight serve --port 8787
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "seo_insight",
    version,
    about = "Keyword and domain SEO research backed by a generative model."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Market to analyze: US, ES, MX, UK, AR, CO or BR
    #[arg(long, short, global = true, default_value = "US")]
    pub region: Region,

    /// API key (falls back to GEMINI_API_KEY, then API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Model identifier
    #[arg(long, global = true, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the Generative Language API
    #[arg(long, global = true, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Directory to write CSV exports of the result tables to
    #[arg(long, global = true, value_parser)]
    pub export_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Analyze a query; text with a dot or an http prefix is treated as a domain
    Search {
        query: String,

        /// Force keyword-overview or domain-overview
        #[arg(long)]
        mode: Option<AnalysisMode>,
    },
    /// Keyword overview, even for dotted text like `node.js`
    Keyword { keyword: String },
    /// Domain overview
    Domain { domain: String },
    /// List supported regions
    Regions,
    /// Serve the JSON dashboard API
    Serve {
        #[arg(long, default_value_t = DEFAULT_DASHBOARD_PORT)]
        port: u16,
    },
}

impl Command {
    /// Query text and forced mode for the search commands.
    pub fn search_request(&self) -> Option<(&str, Option<AnalysisMode>)> {
        match self {
            Command::Search { query, mode } => Some((query, *mode)),
            Command::Keyword { keyword } => Some((keyword, Some(AnalysisMode::KeywordOverview))),
            Command::Domain { domain } => Some((domain, Some(AnalysisMode::DomainOverview))),
            Command::Regions | Command::Serve { .. } => None,
        }
    }
}

impl Cli {
    /// Library configuration for these options.
    pub fn config(&self) -> Config {
        Config {
            api_key: resolve_api_key(self.api_key.clone()),
            model: self.model.clone(),
            api_base: self.api_base.clone(),
            timeout_seconds: self.timeout_seconds,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_region: self.region,
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            export_dir: self.export_dir.clone(),
        }
    }
}
