// Shared test helpers: canned backend answers and a scriptable fake backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::oneshot;

use seo_insight::{AnalysisBackend, AnalysisError, Config, DomainAnalysis, KeywordAnalysis, Region};

/// A keyword analysis document as the backend would produce it.
#[allow(dead_code)]
pub fn keyword_document(keyword: &str) -> Value {
    json!({
        "mainKeyword": {
            "keyword": keyword,
            "volume": 12100,
            "difficulty": 48,
            "cpc": 1.85,
            "intent": "Commercial",
            "trend": [10, 12, 14, 13, 15, 18, 20, 19, 22, 25, 24, 27]
        },
        "variations": [
            {"keyword": format!("best {keyword}"), "intent": "Commercial", "volume": 5400, "difficulty": 41},
            {"keyword": format!("{keyword} 2026"), "intent": "Informational", "volume": 880, "difficulty": 22}
        ],
        "questions": [
            {"keyword": format!("what is {keyword}"), "intent": "Informational", "volume": 720, "difficulty": 18}
        ],
        "related": [],
        "serp": [
            {"rank": 1, "title": "Top Picks", "url": "https://example.com/top", "as": 71, "traffic": 3100, "keywords": 540}
        ]
    })
}

/// A domain analysis document as the backend would produce it.
#[allow(dead_code)]
pub fn domain_document(domain: &str) -> Value {
    json!({
        "domain": domain,
        "authorityScore": 87,
        "organicTraffic": 2450000,
        "backlinks": 1200000,
        "displayAds": 35,
        "trafficTrend": [{"month": "Jan", "value": 2100000}, {"month": "Feb", "value": 2450000}],
        "topKeywords": [{"keyword": "iphone", "pos": 1, "volume": 1500000, "traffic": 420000}],
        "mainCompetitors": [{"domain": "samsung.com", "commonKeywords": 5400, "traffic": 1800000}]
    })
}

/// Wraps answer text in a `generateContent` response body.
#[allow(dead_code)]
pub fn gemini_answer(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}

/// Configuration pointing at a mock server.
#[allow(dead_code)]
pub fn mock_config(uri: &str) -> Config {
    Config {
        api_key: Some("test-key".to_string()),
        api_base: uri.to_string(),
        timeout_seconds: 5,
        ..Default::default()
    }
}

/// Builds a keyword analysis without going through the backend.
#[allow(dead_code)]
pub fn keyword_analysis(keyword: &str) -> KeywordAnalysis {
    serde_json::from_value(keyword_document(keyword)).expect("fixture decodes")
}

/// Builds a domain analysis without going through the backend.
#[allow(dead_code)]
pub fn domain_analysis(domain: &str) -> DomainAnalysis {
    serde_json::from_value(domain_document(domain)).expect("fixture decodes")
}

/// Fake backend that answers immediately, unless a query is held.
///
/// A held query blocks until the matching sender is released (or dropped),
/// which lets tests control the order responses arrive in.
#[derive(Default)]
#[allow(dead_code)]
pub struct FakeBackend {
    pub calls: AtomicUsize,
    held: Mutex<HashMap<String, oneshot::Receiver<()>>>,
    failing: Mutex<HashMap<String, String>>,
}

#[allow(dead_code)]
impl FakeBackend {
    /// Holds the next call for `query` until the returned sender fires.
    pub fn hold(&self, query: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.held.lock().unwrap().insert(query.to_string(), rx);
        tx
    }

    /// Makes calls for `query` fail with a 500 carrying `message`.
    pub fn fail(&self, query: &str, message: &str) {
        self.failing
            .lock()
            .unwrap()
            .insert(query.to_string(), message.to_string());
    }

    async fn answer(&self, query: &str) -> Result<(), AnalysisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let held = self.held.lock().unwrap().remove(query);
        if let Some(rx) = held {
            let _ = rx.await;
        }
        match self.failing.lock().unwrap().get(query) {
            Some(message) => Err(AnalysisError::Status {
                status: 500,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AnalysisBackend for FakeBackend {
    async fn analyze_keyword(
        &self,
        keyword: &str,
        _region: Region,
    ) -> Result<KeywordAnalysis, AnalysisError> {
        self.answer(keyword).await?;
        Ok(keyword_analysis(keyword))
    }

    async fn analyze_domain(
        &self,
        domain: &str,
        _region: Region,
    ) -> Result<DomainAnalysis, AnalysisError> {
        self.answer(domain).await?;
        Ok(domain_analysis(domain))
    }
}
