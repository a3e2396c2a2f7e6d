//! API error responses
//!
//! The task API has exactly two error classes: validation failures map to
//! 400 with a field-error body, missing ids map to 404 with an empty body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use todo_core::task::FieldErrors;

#[derive(Debug, Error)]
pub enum TaskApiError {
    #[error("invalid task payload")]
    Validation(FieldErrors),

    #[error("task not found")]
    NotFound,
}

impl IntoResponse for TaskApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => (StatusCode::BAD_REQUEST, Json(errors)).into_response(),
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
        }
    }
}
