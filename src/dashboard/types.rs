//! Dashboard API data structures.

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::coordinator::{StateCoordinator, SubmitOutcome, ViewState, ViewTab};
use crate::error_handling::StatsSnapshot;
use crate::models::{AnalysisMode, Region};

/// Shared state for the dashboard server
#[derive(Clone)]
pub struct DashboardState {
    pub coordinator: Arc<StateCoordinator>,
    pub start_time: Arc<Instant>,
}

impl DashboardState {
    pub fn new(coordinator: Arc<StateCoordinator>) -> Self {
        Self {
            coordinator,
            start_time: Arc::new(Instant::now()),
        }
    }
}

/// Body of `POST /api/search`
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    /// Defaults to the currently selected region
    #[serde(default)]
    pub region: Option<Region>,
    #[serde(default)]
    pub mode: Option<AnalysisMode>,
}

/// Body of `POST /api/drill-down`
#[derive(Debug, Deserialize)]
pub struct DrillDownRequest {
    pub keyword: String,
}

/// Body of `POST /api/region`
#[derive(Debug, Deserialize)]
pub struct RegionRequest {
    pub region: Region,
}

/// Body of `POST /api/tab`
#[derive(Debug, Deserialize)]
pub struct TabRequest {
    pub tab: ViewTab,
}

/// Body of `POST /api/query-text`
#[derive(Debug, Deserialize)]
pub struct QueryTextRequest {
    pub text: String,
}

/// Response to any operation that submits a search
#[derive(Serialize)]
pub struct SearchResponse {
    pub outcome: SubmitOutcome,
    pub state: ViewState,
}

/// JSON response for `/api/stats`
#[derive(Serialize)]
pub struct StatsResponse {
    pub uptime_seconds: f64,
    #[serde(flatten)]
    pub searches: StatsSnapshot,
}

/// JSON error body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
