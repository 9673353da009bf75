//! Search handlers.
//!
//! A failed search is still a successful HTTP exchange: the failure is part
//! of the returned outcome and view state.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::super::types::{DashboardState, DrillDownRequest, SearchRequest, SearchResponse};
use super::error_response;
use crate::coordinator::SubmitOutcome;

async fn respond(state: &DashboardState, outcome: SubmitOutcome) -> Response {
    Json(SearchResponse {
        outcome,
        state: state.coordinator.snapshot().await,
    })
    .into_response()
}

pub async fn search_handler(
    State(state): State<DashboardState>,
    Json(body): Json<SearchRequest>,
) -> Response {
    let outcome = match body.region {
        Some(region) => {
            state
                .coordinator
                .submit_search(&body.query, region, body.mode)
                .await
        }
        None => state.coordinator.search(&body.query, body.mode).await,
    };
    respond(&state, outcome).await
}

/// Keyword clicked in a result table
pub async fn drill_down_handler(
    State(state): State<DashboardState>,
    Json(body): Json<DrillDownRequest>,
) -> Response {
    let outcome = state.coordinator.drill_down(&body.keyword).await;
    respond(&state, outcome).await
}

/// Replays the history entry at `index` (0 = most recent)
pub async fn history_handler(
    State(state): State<DashboardState>,
    Path(index): Path<usize>,
) -> Response {
    match state.coordinator.rerun_history(index).await {
        Some(outcome) => respond(&state, outcome).await,
        None => error_response(
            StatusCode::NOT_FOUND,
            format!("No history entry at index {index}"),
        ),
    }
}
