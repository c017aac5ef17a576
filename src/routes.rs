//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`               - Service metadata
//! - `GET  /health`         - Liveness
//! - `GET  /metrics`        - Prometheus counters (when a recorder is installed)
//! - `GET  /resolve`        - Single URL resolution
//! - `POST /resolve-batch`  - Batch resolution
//! - anything else          - 404 `{"error": "Endpoint not found"}`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - Handler panics become 500 `{"error": "Internal server error"}`
//! - **Rate limiting** - Per-IP token bucket on the resolution routes (optional)
//!
//! Trailing slash normalization is applied around the whole router in
//! [`crate::server::run`].

use crate::api;
use crate::api::handlers::{
    health_handler, metrics_handler, not_found_handler, service_info_handler,
};
use crate::api::middleware::{panic, rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limited` - when `true`, resolution routes are rate limited per peer IP;
///   this requires the router to be served with connect info
pub fn app_router(state: AppState, rate_limited: bool) -> Router {
    let resolve_router = if rate_limited {
        api::routes::resolve_routes().layer(rate_limit::layer())
    } else {
        api::routes::resolve_routes()
    };

    Router::new()
        .route("/", get(service_info_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .merge(resolve_router)
        .fallback(not_found_handler)
        .with_state(state)
        .layer(panic::layer())
        .layer(tracing::layer())
}
