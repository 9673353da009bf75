//! Analysis mode tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which of the two analysis contracts a query is routed to.
///
/// The serialized tags double as the view identifiers of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisMode {
    /// Keyword overview: metrics, ideas and SERP for one keyword
    KeywordOverview,
    /// Domain overview: authority, traffic, keywords and competitors
    DomainOverview,
}

/// Error returned for an unrecognised mode tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown analysis mode {0:?} (expected keyword-overview or domain-overview)")]
pub struct UnknownMode(pub String);

impl AnalysisMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::KeywordOverview => "keyword-overview",
            AnalysisMode::DomainOverview => "domain-overview",
        }
    }

    /// Heading shown above the results of this mode.
    pub fn title(&self) -> &'static str {
        match self {
            AnalysisMode::KeywordOverview => "Keyword Intelligence",
            AnalysisMode::DomainOverview => "Domain Overview",
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keyword-overview" | "keyword" => Ok(AnalysisMode::KeywordOverview),
            "domain-overview" | "domain" => Ok(AnalysisMode::DomainOverview),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip_through_serde() {
        assert_eq!(
            serde_json::to_string(&AnalysisMode::DomainOverview).unwrap(),
            "\"domain-overview\""
        );
        let mode: AnalysisMode = serde_json::from_str("\"keyword-overview\"").unwrap();
        assert_eq!(mode, AnalysisMode::KeywordOverview);
    }

    #[test]
    fn test_parse_accepts_short_names() {
        assert_eq!("domain".parse::<AnalysisMode>(), Ok(AnalysisMode::DomainOverview));
        assert_eq!("Keyword".parse::<AnalysisMode>(), Ok(AnalysisMode::KeywordOverview));
        assert!("dashboard".parse::<AnalysisMode>().is_err());
    }
}
