//! Routing of raw input to an analysis mode.

use crate::models::AnalysisMode;

/// Classifies a query.
///
/// Anything containing a `.` or starting with `http` is treated as a domain;
/// everything else is a keyword.
pub fn detect_mode(query: &str) -> AnalysisMode {
    let trimmed = query.trim();
    if trimmed.contains('.') || trimmed.starts_with("http") {
        AnalysisMode::DomainOverview
    } else {
        AnalysisMode::KeywordOverview
    }
}

/// Uses `forced` when given, otherwise classifies the query.
pub fn resolve_mode(query: &str, forced: Option<AnalysisMode>) -> AnalysisMode {
    forced.unwrap_or_else(|| detect_mode(query))
}
