//! DTOs for health and service metadata endpoints.

use serde::Serialize;

/// Liveness payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    /// Unix time in seconds, with sub-second precision.
    pub timestamp: f64,
}

/// Service metadata returned by `GET /`.
#[derive(Debug, Serialize)]
pub struct ServiceInfoResponse {
    pub service: String,
    pub status: String,
    pub version: String,
    pub endpoints: Vec<String>,
}
