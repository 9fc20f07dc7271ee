//! Errors surfaced to HTTP clients by the task routes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{debug, error};

use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Path parameter carries no `YYYY-MM-DD` date.
    #[error("no YYYY-MM-DD date in path")]
    InvalidDate,
    /// Request body is not JSON or does not match the expected shape.
    #[error("malformed request body: {0}")]
    MalformedBody(String),
    /// Update/delete referenced a task index beyond the list bounds.
    #[error("task id {id} out of range for a list of {len}")]
    IndexOutOfRange { id: usize, len: usize },
    /// The remote store could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidDate => StatusCode::NOT_FOUND,
            ApiError::MalformedBody(_) | ApiError::IndexOutOfRange { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        match &self {
            ApiError::Store(e) => error!("store request failed: {e}"),
            other => debug!("rejected request: {other}"),
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
