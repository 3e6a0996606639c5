//! REST API handlers for the country data service
//!
//! These handlers use the shared CountryDataService.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use std::any::Any;
use std::sync::Arc;

use super::error::ApiError;
use super::request::{ContainerCheckRequest, CountryDataRequest};
use super::service::CountryDataService;

// ============================================================================
// Response Types
// ============================================================================

/// Success envelope, `{"data": ...}`
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    /// Serialization failures surface as `ApiError::Internal`.
    fn into_json(self) -> Result<Json<Value>, ApiError> {
        serde_json::to_value(self)
            .map(Json)
            .map_err(|e| ApiError::Internal(e.to_string()))
    }
}

// ============================================================================
// Handlers
// ============================================================================

pub type AppState = Arc<CountryDataService>;

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

/// POST /country-data
pub async fn country_data(
    State(service): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let body = read_body(payload)?;
    let request = CountryDataRequest::try_from(body)?;
    tracing::debug!(operation = request.operation(), "Dispatching");

    let outcome = service.execute(&request)?;
    DataResponse { data: outcome }.into_json()
}

/// POST /container-check
pub async fn container_check(
    State(service): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let body = read_body(payload)?;
    let request = ContainerCheckRequest::try_from(body)?;

    let result = service.check_containers(&request)?;
    DataResponse { data: result }.into_json()
}

/// Turns a handler panic into the generic 500 body.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    ApiError::Internal(detail).into_response()
}

fn read_body(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    let Json(body) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    tracing::info!(body = %body, "Received request body");
    Ok(body)
}
