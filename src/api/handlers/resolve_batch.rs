//! Handler for batch URL resolution.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::debug;

use crate::api::dto::resolve::{BatchRequest, BatchResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Resolves up to 10 URLs in one request.
///
/// # Endpoint
///
/// `POST /resolve-batch`
///
/// # Request Body
///
/// ```json
/// { "urls": ["https://bit.ly/abc", "https://news.google.com/rss/articles/CBMi..."] }
/// ```
///
/// # Batch Processing
///
/// URLs beyond the tenth are ignored. Results come back in request order and
/// each URL's failure is reported in its own entry.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON or has no `urls` array.
pub async fn resolve_batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchRequest>, JsonRejection>,
) -> Result<Json<BatchResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!(reason = %rejection.body_text(), "Rejected batch body");
        AppError::bad_request("Missing urls in JSON")
    })?;

    let results = state.resolution_service.resolve_batch(request.urls).await;

    Ok(Json(BatchResponse { results }))
}
