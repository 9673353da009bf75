//! Error type definitions.
//!
//! This module defines the error enums surfaced by the library and the
//! categories used for search statistics.

use std::fmt;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured API base is not a usable URL.
    #[error("Invalid API base URL {0:?}: {1}")]
    InvalidApiBase(String, url::ParseError),
}

/// Why a response field failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationReason {
    /// A required field is absent or null.
    Missing,
    /// The field is present with the wrong JSON type.
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationReason::Missing => f.write_str("required field is missing"),
            ValidationReason::WrongType { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
        }
    }
}

/// A response document that does not satisfy the output schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{path}: {reason}")]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. `mainKeyword.cpc` or `serp[2]`
    pub path: String,
    pub reason: ValidationReason,
}

/// Errors produced by an analysis request.
///
/// All variants collapse to a single message string in the view state; the
/// variants exist for logging and statistics.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Query was empty after trimming.
    #[error("{0} must not be empty")]
    EmptyInput(&'static str),

    /// No API key was configured.
    #[error("No API key configured; set GEMINI_API_KEY or pass --api-key")]
    MissingApiKey,

    /// Network, TLS or timeout failure talking to the backend.
    #[error("Request to the generative backend failed: {0}")]
    Transport(#[from] ReqwestError),

    /// Backend answered with a non-success status (auth, quota, server error).
    #[error("Generative backend returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Backend refused to answer the prompt.
    #[error("Generative backend blocked the request: {0}")]
    Blocked(String),

    /// Backend answered without any text content.
    #[error("Generative backend returned an empty response")]
    EmptyResponse,

    /// Response text is not a JSON document.
    #[error("Response is not valid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// Response JSON is missing a required field or has a mistyped one.
    #[error("Response does not match the expected shape: {0}")]
    Validation(#[from] ValidationError),

    /// Response JSON passed validation but could not be decoded into records.
    #[error("Response could not be decoded: {0}")]
    Decode(serde_json::Error),
}

impl AnalysisError {
    /// Statistics category for this failure.
    pub fn error_type(&self) -> ErrorType {
        match self {
            AnalysisError::EmptyInput(_) => ErrorType::InvalidInput,
            AnalysisError::MissingApiKey => ErrorType::MissingApiKey,
            AnalysisError::Transport(e) => super::categorize_reqwest_error(e),
            AnalysisError::Status { status, .. } => super::categorize_status(*status),
            AnalysisError::Blocked(_) => ErrorType::ResponseBlocked,
            AnalysisError::EmptyResponse => ErrorType::EmptyResponse,
            AnalysisError::MalformedJson(_) => ErrorType::MalformedJson,
            AnalysisError::Validation(_) => ErrorType::SchemaValidation,
            AnalysisError::Decode(_) => ErrorType::DecodeError,
        }
    }
}

/// Categories of failed searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // Input / configuration
    InvalidInput,
    MissingApiKey,
    // Transport
    HttpConnectError,
    HttpTimeoutError,
    HttpRequestOtherError,
    // Backend status
    HttpUnauthorized,  // 401 / 403: bad or restricted key
    HttpQuotaExceeded, // 429
    HttpBadRequest,    // 400
    HttpServerError,   // 5xx
    HttpOtherStatus,
    // Response shape
    ResponseBlocked,
    EmptyResponse,
    MalformedJson,
    SchemaValidation,
    DecodeError,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::InvalidInput => "Invalid input",
            ErrorType::MissingApiKey => "Missing API key",
            ErrorType::HttpConnectError => "HTTP connect error",
            ErrorType::HttpTimeoutError => "HTTP timeout",
            ErrorType::HttpRequestOtherError => "HTTP request error",
            ErrorType::HttpUnauthorized => "Unauthorized (401/403)",
            ErrorType::HttpQuotaExceeded => "Quota exceeded (429)",
            ErrorType::HttpBadRequest => "Bad request (400)",
            ErrorType::HttpServerError => "Backend server error (5xx)",
            ErrorType::HttpOtherStatus => "Other HTTP status",
            ErrorType::ResponseBlocked => "Response blocked",
            ErrorType::EmptyResponse => "Empty response",
            ErrorType::MalformedJson => "Malformed JSON",
            ErrorType::SchemaValidation => "Schema validation failure",
            ErrorType::DecodeError => "Decode error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display_includes_path() {
        let err = ValidationError {
            path: "mainKeyword.cpc".to_string(),
            reason: ValidationReason::WrongType {
                expected: "number",
                found: "string",
            },
        };
        assert_eq!(err.to_string(), "mainKeyword.cpc: expected number, found string");

        let missing = ValidationError {
            path: "domain".to_string(),
            reason: ValidationReason::Missing,
        };
        assert_eq!(missing.to_string(), "domain: required field is missing");
    }

    #[test]
    fn test_analysis_error_messages_are_non_empty() {
        let errors = [
            AnalysisError::EmptyInput("Keyword"),
            AnalysisError::MissingApiKey,
            AnalysisError::Status {
                status: 429,
                message: "Resource has been exhausted".to_string(),
            },
            AnalysisError::Blocked("SAFETY".to_string()),
            AnalysisError::EmptyResponse,
        ];
        for err in errors {
            assert!(!err.to_string().is_empty());
        }
    }

    #[test]
    fn test_status_error_categories() {
        let quota = AnalysisError::Status {
            status: 429,
            message: String::new(),
        };
        assert_eq!(quota.error_type(), ErrorType::HttpQuotaExceeded);
        let auth = AnalysisError::Status {
            status: 403,
            message: String::new(),
        };
        assert_eq!(auth.error_type(), ErrorType::HttpUnauthorized);
    }
}
