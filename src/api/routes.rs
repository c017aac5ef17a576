//! Resolution route configuration.

use crate::api::handlers::{resolve_batch_handler, resolve_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes that trigger outbound resolution traffic.
///
/// # Endpoints
///
/// - `GET  /resolve?url=<url>` - Resolve a single URL
/// - `POST /resolve-batch`     - Resolve up to 10 URLs
pub fn resolve_routes() -> Router<AppState> {
    Router::new()
        .route("/resolve", get(resolve_handler))
        .route("/resolve-batch", post(resolve_batch_handler))
}
