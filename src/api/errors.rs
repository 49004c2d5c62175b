//! HTTP error mapping.
//!
//! Two failure channels reach the wire: invalid input (the caller can
//! correct the payload) and a degraded store (the caller cannot). They
//! map to distinct status codes so clients can tell them apart.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::schema::{FieldViolation, ValidationError};
use crate::store::StoreError;

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced over HTTP.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request payload violated the record schema.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The storage accessor failed.
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Store(StoreError::Unavailable) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    /// Per-field violations; populated for validation failures.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<FieldViolation>,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        let code = err.status_code().as_u16();
        let error = err.to_string();
        let violations = match err {
            ApiError::Validation(validation) => validation.into_violations(),
            ApiError::Store(_) => Vec::new(),
        };
        Self {
            error,
            code,
            violations,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
