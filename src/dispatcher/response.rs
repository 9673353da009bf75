//! Turning backend text into typed analysis records.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error_handling::AnalysisError;
use crate::models::{DomainAnalysis, KeywordAnalysis};
use crate::schema::{domain_analysis_schema, keyword_analysis_schema, validate, Schema};

/// Removes a Markdown code fence some models wrap JSON in.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = rest.strip_prefix("json").unwrap_or(rest);
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Parses, validates and decodes a response document.
pub fn parse_document<T: DeserializeOwned>(
    text: &str,
    schema: &Schema,
) -> Result<T, AnalysisError> {
    let mut document: Value = serde_json::from_str(strip_code_fence(text))?;
    validate(schema, &mut document)?;
    serde_json::from_value(document).map_err(AnalysisError::Decode)
}

pub fn parse_keyword_analysis(text: &str) -> Result<KeywordAnalysis, AnalysisError> {
    parse_document(text, keyword_analysis_schema())
}

pub fn parse_domain_analysis(text: &str) -> Result<DomainAnalysis, AnalysisError> {
    parse_document(text, domain_analysis_schema())
}
