//! Keyword analysis records.

use serde::{Deserialize, Serialize};

use super::lenient;
use super::Intent;

/// Metrics for the primary analyzed keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMetric {
    #[serde(deserialize_with = "lenient::text")]
    pub keyword: String,
    /// Estimated monthly searches
    #[serde(deserialize_with = "lenient::count")]
    pub volume: u64,
    /// Keyword difficulty, 0-100
    #[serde(deserialize_with = "lenient::score")]
    pub difficulty: u8,
    /// Average cost per click
    #[serde(deserialize_with = "lenient::non_negative")]
    pub cpc: f64,
    pub intent: Intent,
    /// One sample per month, oldest first
    #[serde(default, deserialize_with = "lenient::samples")]
    pub trend: Vec<f64>,
}

impl KeywordMetric {
    /// Human label for the difficulty score.
    pub fn difficulty_label(&self) -> &'static str {
        difficulty_label(self.difficulty)
    }
}

/// Buckets a 0-100 difficulty score.
pub(crate) fn difficulty_label(difficulty: u8) -> &'static str {
    match difficulty {
        0..=29 => "Easy",
        30..=49 => "Possible",
        50..=74 => "Hard",
        _ => "Very Hard",
    }
}

/// Lightweight keyword row used for variation, question and related lists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeywordIdea {
    #[serde(default, deserialize_with = "lenient::text")]
    pub keyword: String,
    #[serde(
        default,
        deserialize_with = "lenient::optional_intent",
        skip_serializing_if = "Option::is_none"
    )]
    pub intent: Option<Intent>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub volume: u64,
    #[serde(default, deserialize_with = "lenient::score")]
    pub difficulty: u8,
}

/// One organic result on the search engine results page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SerpResult {
    /// 1-based position
    #[serde(default, deserialize_with = "lenient::count")]
    pub rank: u64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub url: String,
    /// Authority score of the ranking page, 0-100
    #[serde(rename = "as", default, deserialize_with = "lenient::score")]
    pub authority: u8,
    #[serde(default, deserialize_with = "lenient::count")]
    pub traffic: u64,
    /// Number of keywords the page ranks for
    #[serde(default, deserialize_with = "lenient::count")]
    pub keywords: u64,
}

/// Complete keyword overview.
///
/// The four lists are always present; a backend that omits one yields an
/// empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysis {
    pub main_keyword: KeywordMetric,
    #[serde(default, deserialize_with = "lenient::list")]
    pub variations: Vec<KeywordIdea>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub questions: Vec<KeywordIdea>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub related: Vec<KeywordIdea>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub serp: Vec<SerpResult>,
}
