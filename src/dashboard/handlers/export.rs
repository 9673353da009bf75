//! CSV download handler.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use super::super::types::DashboardState;
use super::error_response;
use crate::export::{export_file_name, render_list, ExportError, ExportList};

/// CSV of one table of the current result
pub async fn export_handler(
    State(state): State<DashboardState>,
    Path(list): Path<String>,
) -> Response {
    let list: ExportList = match list.parse() {
        Ok(list) => list,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };
    let view = state.coordinator.snapshot().await;
    match render_list(list, &view) {
        Ok(bytes) => {
            let disposition = format!(
                "attachment; filename=\"{}\"",
                export_file_name(list, &view)
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                bytes,
            )
                .into_response()
        }
        Err(e @ ExportError::NotAvailable(_)) => {
            error_response(StatusCode::NOT_FOUND, e.to_string())
        }
        Err(e) => {
            log::error!("CSV export of {list} failed: {e}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
