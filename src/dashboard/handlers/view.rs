//! View-state handlers.

use axum::extract::State;
use axum::Json;

use super::super::types::{
    DashboardState, QueryTextRequest, RegionRequest, StatsResponse, TabRequest,
};
use crate::coordinator::ViewState;
use crate::models::{Region, RegionInfo};

/// Current view-state snapshot
pub async fn state_handler(State(state): State<DashboardState>) -> Json<ViewState> {
    Json(state.coordinator.snapshot().await)
}

/// Region table in display order
pub async fn regions_handler() -> Json<Vec<RegionInfo>> {
    Json(Region::table())
}

pub async fn region_handler(
    State(state): State<DashboardState>,
    Json(body): Json<RegionRequest>,
) -> Json<ViewState> {
    state.coordinator.select_region(body.region).await;
    Json(state.coordinator.snapshot().await)
}

pub async fn region_picker_handler(State(state): State<DashboardState>) -> Json<ViewState> {
    state.coordinator.toggle_region_picker().await;
    Json(state.coordinator.snapshot().await)
}

pub async fn tab_handler(
    State(state): State<DashboardState>,
    Json(body): Json<TabRequest>,
) -> Json<ViewState> {
    state.coordinator.set_active_tab(body.tab).await;
    Json(state.coordinator.snapshot().await)
}

pub async fn query_text_handler(
    State(state): State<DashboardState>,
    Json(body): Json<QueryTextRequest>,
) -> Json<ViewState> {
    state.coordinator.set_query_text(&body.text).await;
    Json(state.coordinator.snapshot().await)
}

/// Search counters plus server uptime
pub async fn stats_handler(State(state): State<DashboardState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        uptime_seconds: state.start_time.elapsed().as_secs_f64(),
        searches: state.coordinator.stats().snapshot(),
    })
}
