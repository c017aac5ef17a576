//! Handler for the Prometheus scrape endpoint.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// Renders resolution counters in the Prometheus text format.
///
/// # Endpoint
///
/// `GET /metrics`
///
/// # Errors
///
/// Returns 404 Not Found when no recorder is installed (`METRICS_ENABLED=false`).
pub async fn metrics_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let handle = state
        .metrics
        .as_ref()
        .ok_or_else(|| AppError::not_found("Endpoint not found"))?;

    Ok(([(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)], handle.render()).into_response())
}
