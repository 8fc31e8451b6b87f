use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the portal routes. Upstream failures of any kind
/// collapse into the single `ExplanationUnavailable` message; the distinct
/// causes are logged where they happen and never reach the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Medical term is required")]
    MissingTerm,
    #[error("Unable to retrieve medical explanation")]
    ExplanationUnavailable,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MissingTerm => StatusCode::BAD_REQUEST,
            ApiError::ExplanationUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
