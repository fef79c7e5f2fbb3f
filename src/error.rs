//! Unified error types for the dog records service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Top-level operational error for the service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Seed file could not be loaded or parsed.
    #[error("failed to load seed data from {path}: {reason}")]
    Seed {
        /// Path to the seed file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Metrics recorder installation error.
    #[error("metrics error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Request-level error surfaced to HTTP clients.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The targeted record id does not exist.
    #[error("Dog with id {id} not found")]
    DogNotFound {
        /// The missing id.
        id: i64,
    },

    /// A required field was present but empty.
    #[error("{field} is required")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },
}

impl ApiError {
    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::DogNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::EmptyField { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Body text is part of the API contract, e.g.
        // "Dog with id 9999 not found" on a missing delete target.
        (self.status_code(), self.to_string()).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
