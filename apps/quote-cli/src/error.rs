//! # API Error Type
//!
//! Unified error type printed by `medina-quote` when a request fails.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  bad JSON ───────────── serde_json::Error ──┐                           │
//! │  "12,5" as a price ──── ValidationError ────┤                           │
//! │  qty 1000 on merge ──── CoreError ──────────┼──► ApiError ──► stdout    │
//! │  MEDINA_SHIPPING_FEE=x ─ ConfigError ───────┤                           │
//! │  unreadable file ────── io::Error ──────────┘                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ```json
//! { "code": "VALIDATION_ERROR", "message": "unit price must be a number" }
//! ```

use medina_core::{ConfigError, CoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error, Serialize)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request body is not valid JSON or has the wrong shape
    InvalidRequest,

    /// A field failed validation
    ValidationError,

    /// Order draft rule violated (line limit, quantity cap)
    OrderError,

    /// Environment configuration is invalid
    ConfigError,

    /// Input could not be read
    Io,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => ApiError::from(e),
            other => ApiError::new(ErrorCode::OrderError, other.to_string()),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::new(ErrorCode::InvalidRequest, err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("Failed to read request: {}", err);
        ApiError::new(ErrorCode::Io, "Could not read the order request")
    }
}
