//! Query dispatcher.
//!
//! Translates a free-text query plus a region into exactly one
//! schema-constrained request to the generative backend:
//! - `mode`: keyword vs. domain classification
//! - `prompt`: region-aware instructions
//! - `gemini`: the HTTP backend
//! - `response`: parse, validate and decode the answer

mod gemini;
mod mode;
mod prompt;
mod response;
mod wire;

use async_trait::async_trait;
use serde::Serialize;

use crate::error_handling::AnalysisError;
use crate::models::{AnalysisMode, DomainAnalysis, KeywordAnalysis, Region};

pub use gemini::{generate_content_url, GeminiClient};
pub use mode::{detect_mode, resolve_mode};
pub use prompt::{domain_prompt, keyword_prompt};
pub use response::{parse_domain_analysis, parse_keyword_analysis};

/// The two analysis contracts offered by a generative backend.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    async fn analyze_keyword(
        &self,
        keyword: &str,
        region: Region,
    ) -> Result<KeywordAnalysis, AnalysisError>;

    async fn analyze_domain(
        &self,
        domain: &str,
        region: Region,
    ) -> Result<DomainAnalysis, AnalysisError>;
}

/// Result of either contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum AnalysisResult {
    KeywordOverview(KeywordAnalysis),
    DomainOverview(DomainAnalysis),
}

impl AnalysisResult {
    pub fn mode(&self) -> AnalysisMode {
        match self {
            AnalysisResult::KeywordOverview(_) => AnalysisMode::KeywordOverview,
            AnalysisResult::DomainOverview(_) => AnalysisMode::DomainOverview,
        }
    }
}

/// Runs the contract matching `mode`.
pub async fn dispatch<B: AnalysisBackend + ?Sized>(
    backend: &B,
    mode: AnalysisMode,
    query: &str,
    region: Region,
) -> Result<AnalysisResult, AnalysisError> {
    match mode {
        AnalysisMode::KeywordOverview => backend
            .analyze_keyword(query, region)
            .await
            .map(AnalysisResult::KeywordOverview),
        AnalysisMode::DomainOverview => backend
            .analyze_domain(query, region)
            .await
            .map(AnalysisResult::DomainOverview),
    }
}
