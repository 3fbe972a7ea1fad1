//! Unified error handling for the server.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Store error: {0}")]
    Store(#[from] clientbook_core::Error),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Error response body.
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        use clientbook_core::Error;

        let (status, error_message, details) = match &self {
            AppError::Store(e) => {
                if e.is_client_error() {
                    tracing::warn!("Rejected request: {}", e);
                } else {
                    tracing::error!("Store error: {:?}", e);
                }

                match e {
                    Error::Validation(field) => (
                        StatusCode::BAD_REQUEST,
                        "Validation failed".to_string(),
                        Some(format!("missing required field: {}", field)),
                    ),
                    Error::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string(), None),
                    Error::Storage(_) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Database error".to_string(),
                        None,
                    ),
                    Error::Export(_) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Export failed".to_string(),
                        None,
                    ),
                }
            }
            AppError::InvalidBody(msg) => {
                tracing::warn!("Rejected body: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    "Validation failed".to_string(),
                    Some(msg.clone()),
                )
            }
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "Invalid request".to_string(),
                Some(msg.clone()),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone(), None),
        };

        let body = Json(ErrorResponse {
            error: error_message,
            details,
        });

        (status, body).into_response()
    }
}

/// Result type alias for handlers.
pub type Result<T> = std::result::Result<T, AppError>;
