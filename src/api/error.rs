//! Error taxonomy for the HTTP surface
//!
//! Every failure leaves the service as `{"error": "<message>"}` with the
//! status code from [`ApiError::status`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Body does not match any accepted request shape.
    #[error("Invalid request format: {0}")]
    Validation(String),

    /// `operation` names something other than the three known operations.
    #[error("Invalid operation")]
    InvalidOperation,

    /// A required field was present but empty.
    #[error("{0}")]
    MissingField(&'static str),

    /// Semantically invalid request that passed shape validation.
    #[error("{0}")]
    BadRequest(&'static str),

    #[error("{0}")]
    NotFound(&'static str),

    /// The detail is logged, never returned to the caller.
    #[error("Internal server error")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_)
            | ApiError::InvalidOperation
            | ApiError::MissingField(_)
            | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Internal(detail) => tracing::error!(%detail, "Error processing request"),
            other => tracing::warn!(status = status.as_u16(), "{}", other),
        }
        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}
