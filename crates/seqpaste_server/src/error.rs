//! HTTP error mapping for API handlers.

use crate::{AppError, ErrorKind};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Handler error: either a core outcome or a boundary-level rejection.
#[derive(Debug)]
pub enum HttpError {
    /// Error surfaced by the paste service.
    App(AppError),
    /// Path id that does not parse as a 64-bit integer.
    InvalidId(String),
}

impl From<AppError> for HttpError {
    fn from(value: AppError) -> Self {
        Self::App(value)
    }
}

impl HttpError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            HttpError::InvalidId(raw) => (StatusCode::BAD_REQUEST, format!("invalid id {}", raw)),
            HttpError::App(err) => match err.kind() {
                ErrorKind::Validation => (StatusCode::BAD_REQUEST, err.to_string()),
                ErrorKind::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
                ErrorKind::Storage => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Storage error".to_string(),
                ),
            },
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!("Request failed: {:?}", self);
        } else {
            tracing::debug!("Request rejected ({}): {}", status, message);
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}
