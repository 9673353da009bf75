//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use reqwest::ClientBuilder;

/// Initializes the HTTP client used for backend requests.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Per-request timeout from the configuration
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub async fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
