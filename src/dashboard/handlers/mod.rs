//! Dashboard HTTP handlers.

mod export;
mod search;
mod view;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::types::ErrorResponse;

pub use export::export_handler;
pub use search::{drill_down_handler, history_handler, search_handler};
pub use view::{
    query_text_handler, region_handler, region_picker_handler, regions_handler, state_handler,
    stats_handler, tab_handler,
};

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}
