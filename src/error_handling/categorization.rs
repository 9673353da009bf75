//! Error categorization.
//!
//! Maps transport errors and backend status codes onto [`ErrorType`].

use super::types::ErrorType;

/// Categorizes a backend HTTP status code.
pub fn categorize_status(status: u16) -> ErrorType {
    match status {
        400 => ErrorType::HttpBadRequest,
        401 | 403 => ErrorType::HttpUnauthorized,
        429 => ErrorType::HttpQuotaExceeded,
        500..=599 => ErrorType::HttpServerError,
        _ => ErrorType::HttpOtherStatus,
    }
}

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// Errors carrying a status are categorized like [`categorize_status`].
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if let Some(status) = error.status() {
        return categorize_status(status.as_u16());
    }

    if error.is_timeout() {
        ErrorType::HttpTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpConnectError
    } else if error.is_decode() || error.is_body() {
        ErrorType::MalformedJson
    } else {
        ErrorType::HttpRequestOtherError
    }
}
