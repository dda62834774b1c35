//! Engine errors mapped to HTTP responses with a `{"error": "message"}` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use engine::SearchError;
use serde_json::json;

#[derive(Debug)]
pub enum ApiError {
    /// 400
    BadRequest(String),
    /// 404
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };
        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::TermNotFound(_) | SearchError::DocumentIdOutOfRange { .. } => {
                ApiError::NotFound(err.to_string())
            }
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}
