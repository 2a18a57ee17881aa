//! API error types and handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use dpql::DpqlError;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Bad request from client.
    BadRequest(String),
    /// Internal server error.
    Internal(String),
    /// Error from the dpql library.
    Dpql(DpqlError),
}

#[derive(Serialize)]
struct ErrorResponse {
    ok: bool,
    error: String,
    kind: &'static str,
}

impl ApiError {
    fn parts(self) -> (StatusCode, &'static str, String) {
        match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal", msg),
            ApiError::Dpql(e) if e.is_input_error() => {
                (StatusCode::BAD_REQUEST, "bad_request", e.to_string())
            }
            ApiError::Dpql(e) => (StatusCode::INTERNAL_SERVER_ERROR, "dpql_error", e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, error) = self.parts();
        if status.is_server_error() {
            tracing::error!(%kind, %error, "request failed");
        }

        (
            status,
            Json(ErrorResponse {
                ok: false,
                error,
                kind,
            }),
        )
            .into_response()
    }
}

impl From<DpqlError> for ApiError {
    fn from(err: DpqlError) -> Self {
        match err {
            DpqlError::DatasetNotFound(_) => ApiError::NotFound("Dataset not found".to_string()),
            err => ApiError::Dpql(err),
        }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Internal(format!("Discovery task failed: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
            ApiError::Dpql(e) => write!(f, "DPQL error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}
