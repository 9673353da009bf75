//! JSON dashboard API.
//!
//! Exposes the state coordinator to a browser front end:
//! - `GET  /api/state` - view-state snapshot
//! - `GET  /api/regions` - region table
//! - `POST /api/search` - run a search
//! - `POST /api/drill-down` - keyword search from a table click
//! - `POST /api/history/:index` - replay a history entry
//! - `POST /api/region`, `/api/region/picker`, `/api/tab`, `/api/query-text`
//! - `GET  /api/export/:list` - CSV of a result table
//! - `GET  /api/stats` - search counters

mod handlers;
mod types;

use std::future::Future;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

use handlers::{
    drill_down_handler, export_handler, history_handler, query_text_handler, region_handler,
    region_picker_handler, regions_handler, search_handler, state_handler, stats_handler,
    tab_handler,
};
pub use types::{
    DashboardState, DrillDownRequest, ErrorResponse, QueryTextRequest, RegionRequest,
    SearchRequest, SearchResponse, StatsResponse, TabRequest,
};

/// Builds the dashboard router
pub fn dashboard_router(state: DashboardState) -> Router {
    Router::new()
        .route("/api/state", get(state_handler))
        .route("/api/regions", get(regions_handler))
        .route("/api/search", post(search_handler))
        .route("/api/drill-down", post(drill_down_handler))
        .route("/api/history/:index", post(history_handler))
        .route("/api/region", post(region_handler))
        .route("/api/region/picker", post(region_picker_handler))
        .route("/api/tab", post(tab_handler))
        .route("/api/query-text", post(query_text_handler))
        .route("/api/export/:list", get(export_handler))
        .route("/api/stats", get(stats_handler))
        .with_state(state)
}

/// Serves the dashboard on an already bound listener until `shutdown` resolves.
///
/// Once `shutdown` resolves the listener stops accepting and requests already
/// being handled run to completion.
pub async fn serve_dashboard<F>(
    listener: TcpListener,
    state: DashboardState,
    shutdown: F,
) -> Result<(), anyhow::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, dashboard_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!("Dashboard server error: {}", e))
}

/// Creates and starts the dashboard server
pub async fn start_dashboard_server<F>(
    port: u16,
    state: DashboardState,
    shutdown: F,
) -> Result<(), anyhow::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind dashboard server to port {}: {}", port, e))?;

    log::info!("Dashboard API listening on http://127.0.0.1:{}/", port);
    log::info!("  - State: http://127.0.0.1:{}/api/state", port);
    log::info!("  - Stats: http://127.0.0.1:{}/api/stats", port);

    serve_dashboard(listener, state, shutdown).await
}
