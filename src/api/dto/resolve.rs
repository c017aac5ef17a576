//! DTOs for the resolution endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::ResolutionResult;

/// Query string of `GET /resolve`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ResolveQuery {
    pub url: Option<String>,
}

impl ResolveQuery {
    /// Builds the query from raw pairs; a repeated `url` keeps its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let url = pairs
            .into_iter()
            .find(|(key, _)| key == "url")
            .map(|(_, value)| value);

        Self { url }
    }
}

/// Body of `POST /resolve-batch`.
///
/// Only the first [`crate::domain::entities::MAX_BATCH_SIZE`] URLs are resolved.
#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub urls: Vec<String>,
}

/// Response of `POST /resolve-batch`, in request order.
#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub results: Vec<ResolutionResult>,
}
