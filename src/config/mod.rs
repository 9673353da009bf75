//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (model, endpoint, timeouts, history capacity)
//! - Library configuration and logging option types
//! - Command-line options for the binary

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::{Cli, Command};
pub use constants::*;
pub use types::{resolve_api_key, Config, LogFormat, LogLevel};
