//! Request handlers.
//!
//! Each verification request is an independent pure computation over the
//! posted record; handlers share nothing but the service identity strings.

use super::{
    errors::ApiError,
    middleware::RequestId,
    models::{HealthResponse, StatusResponse, VerifyResponse},
    render::render_message,
};
use crate::verify::{check_roll, RollRecord, Verdict};
use axum::{body::Bytes, extract::State, http::Uri, Extension, Json};
use std::sync::Arc;

/// Shared application state
pub struct AppState {
    pub service_name: String,
    pub version: String,
}

/// Health check handler - minimal response time
/// GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Running".to_string(),
    })
}

/// Service identity handler
/// GET /status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: state.service_name.clone(),
        version: state.version.clone(),
    })
}

/// Verify a roll record posted as raw JSON.
/// POST /verify
///
/// A body that does not parse into a record is an `invalid_input` verdict,
/// not an HTTP error: verification outcomes are data.
pub async fn verify_handler(
    Extension(request_id): Extension<RequestId>,
    body: Bytes,
) -> Result<Json<VerifyResponse>, ApiError> {
    let text = std::str::from_utf8(&body).map_err(|_| {
        ApiError::bad_request(
            request_id.0.clone(),
            "Request body is not valid UTF-8".to_string(),
        )
    })?;

    let verdict = match serde_json::from_str::<RollRecord>(text) {
        Ok(record) => check_roll(&record),
        Err(err) => {
            tracing::debug!(%err, request_id = %request_id.0, "unparseable roll data");
            Verdict::InvalidInput
        }
    };

    let message = render_message(&verdict);
    Ok(Json(VerifyResponse { verdict, message }))
}

/// Sample roll data for trying out the checker.
/// GET /sample
pub async fn sample_handler() -> Json<RollRecord> {
    Json(RollRecord::sample())
}

/// Fallback for unknown routes.
pub async fn fallback_handler(
    Extension(request_id): Extension<RequestId>,
    uri: Uri,
) -> ApiError {
    ApiError::not_found(request_id.0, format!("No route for {uri}"))
}
