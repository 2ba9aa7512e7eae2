//! API error type
//!
//! Every failure of the chatbot endpoint collapses to one opaque response:
//! HTTP 500 `{"error": "AI error"}`. The internal detail is logged, never sent.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use janai::DomainError;

use crate::models::ErrorResponse;

pub const GENERIC_ERROR: &str = "AI error";

/// Unified API error type for route handlers
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(kind = self.0.kind(), error = %self.0, "Chatbot request failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: GENERIC_ERROR.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        ApiError(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError(DomainError::Validation(e.body_text()))
    }
}
