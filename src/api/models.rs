//! API response models.

use crate::verify::Verdict;
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Service identity response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub service: String,
    pub version: String,
}

/// Verification response: the structured verdict plus its display text.
///
/// The verdict's `status` tag is flattened into the top level, so clients
/// see `{"status": "verified", ..., "message": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    #[serde(flatten)]
    pub verdict: Verdict,
    pub message: String,
}
