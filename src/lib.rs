//! seo_insight library: keyword and domain research over a generative model
//!
//! A free-text query is classified as a keyword or a domain, turned into a
//! region-aware prompt and sent to the Gemini `generateContent` API together
//! with a strict JSON output schema. The answer is validated against the same
//! schema and decoded into typed records, which a [`StateCoordinator`] merges
//! into a single view state with a deduplicated recent-search history.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use seo_insight::{Config, GeminiClient, Region, StateCoordinator};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     api_key: Some("my-key".to_string()),
//!     ..Default::default()
//! };
//! let backend = GeminiClient::from_config(&config).await?;
//! let coordinator = StateCoordinator::new(Arc::new(backend));
//!
//! coordinator.submit_search("best coffee maker", Region::Mx, None).await;
//! let view = coordinator.snapshot().await;
//! if let Some(result) = view.keyword_result {
//!     println!("{} searches/month", result.main_keyword.volume);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod app;
pub mod config;
pub mod coordinator;
pub mod dashboard;
pub mod dispatcher;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod models;
pub mod schema;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use coordinator::{StateCoordinator, SubmitOutcome, ViewState, ViewTab};
pub use dispatcher::{AnalysisBackend, AnalysisResult, GeminiClient};
pub use error_handling::{AnalysisError, ValidationError};
pub use models::{AnalysisMode, DomainAnalysis, KeywordAnalysis, Region, SearchHistory};
