//! Configuration constants.
//!
//! Defaults for the generative backend, the HTTP client and the view state.

/// Default generative model used for both analysis contracts.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Base URL of the Generative Language API.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// API version path segment for `generateContent` calls.
pub const API_VERSION: &str = "v1beta";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Environment variables consulted (in order) for the API key.
pub const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

/// Per-request timeout in seconds.
///
/// Grounded (search-augmented) generation is slow; a full keyword analysis
/// regularly takes 15-30 seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// User-Agent sent with backend requests.
pub const DEFAULT_USER_AGENT: &str = concat!("seo_insight/", env!("CARGO_PKG_VERSION"));

/// Maximum number of entries kept in the recent-search history.
pub const HISTORY_CAPACITY: usize = 10;

/// Message shown when a failed search carries no message of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "Error processing request.";

/// Default port of the dashboard API.
pub const DEFAULT_DASHBOARD_PORT: u16 = 8787;

/// Number of monthly samples requested for keyword trends.
pub const TREND_MONTHS: usize = 12;

/// Number of SERP positions requested.
pub const SERP_DEPTH: usize = 10;

/// Suggestions offered while the search history is empty.
pub const STARTER_QUERIES: &[&str] = &["seo tools", "digital marketing", "apple.com"];
