//! Handlers for liveness and service metadata.

use axum::Json;
use chrono::Utc;

use crate::SERVICE_NAME;
use crate::api::dto::health::{HealthResponse, ServiceInfoResponse};

/// Endpoints advertised by `GET /`.
const ENDPOINTS: &[&str] = &["/health", "/resolve", "/resolve-batch"];

/// Returns service liveness.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// { "status": "healthy", "service": "URL Resolver", "timestamp": 1718122353.123 }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    let now = Utc::now();
    let timestamp = now.timestamp() as f64 + f64::from(now.timestamp_subsec_micros()) / 1e6;

    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        timestamp,
    })
}

/// Returns service metadata and the list of endpoints.
///
/// # Endpoint
///
/// `GET /`
pub async fn service_info_handler() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        service: SERVICE_NAME.to_string(),
        status: "running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}
