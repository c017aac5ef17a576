//! Handler for single URL resolution.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::dto::resolve::ResolveQuery;
use crate::domain::entities::ResolutionResult;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves one URL to its final destination.
///
/// # Endpoint
///
/// `GET /resolve?url=<url>`
///
/// # Response
///
/// ```json
/// {
///   "original": "https://news.google.com/rss/articles/CBMi...",
///   "final_url": "https://example.com/story",
///   "status_code": 200,
///   "method": "google_news"
/// }
/// ```
///
/// Resolution failures are reported in the body (`status_code: 500` and
/// `error`) with an HTTP 200 response.
///
/// # Errors
///
/// Returns 400 Bad Request if `url` is missing or empty. When `url` is
/// repeated, the first value is used.
pub async fn resolve_handler(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ResolutionResult>, AppError> {
    let url = query
        .ok()
        .and_then(|Query(pairs)| ResolveQuery::from_pairs(pairs).url)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| AppError::bad_request("Missing url parameter"))?;

    let result = state.resolution_service.resolve(&url).await;

    Ok(Json(result))
}
