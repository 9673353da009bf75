//! Domain analysis records.

use serde::{Deserialize, Serialize};

use super::lenient;

/// One point of the monthly organic traffic trend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrafficPoint {
    #[serde(default, deserialize_with = "lenient::text")]
    pub month: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub value: f64,
}

/// An organic keyword the domain ranks for.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TopKeyword {
    #[serde(default, deserialize_with = "lenient::text")]
    pub keyword: String,
    #[serde(rename = "pos", default, deserialize_with = "lenient::count")]
    pub position: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub volume: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub traffic: u64,
}

/// A competing domain in the same market.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    #[serde(default, deserialize_with = "lenient::text")]
    pub domain: String,
    #[serde(default, deserialize_with = "lenient::count")]
    pub common_keywords: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub traffic: u64,
}

/// Complete domain overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainAnalysis {
    #[serde(deserialize_with = "lenient::text")]
    pub domain: String,
    #[serde(deserialize_with = "lenient::score")]
    pub authority_score: u8,
    #[serde(deserialize_with = "lenient::count")]
    pub organic_traffic: u64,
    #[serde(deserialize_with = "lenient::count")]
    pub backlinks: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub display_ads: u64,
    #[serde(default, deserialize_with = "lenient::list")]
    pub traffic_trend: Vec<TrafficPoint>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub top_keywords: Vec<TopKeyword>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub main_competitors: Vec<Competitor>,
}
