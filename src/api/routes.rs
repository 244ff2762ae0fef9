//! Route definitions.

use super::handlers::{
    fallback_handler, health_handler, sample_handler, status_handler, verify_handler, AppState,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Build the API router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check (high priority)
        .route("/health", get(health_handler))
        // Service identity
        .route("/status", get(status_handler))
        // Roll verification
        .route("/verify", post(verify_handler))
        // Sample roll data for manual testing
        .route("/sample", get(sample_handler))
        // Structured 404s for everything else
        .fallback(fallback_handler)
        // Attach shared state
        .with_state(state)
}
