//! Plain redirect-following resolution.

use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use crate::domain::entities::ResolutionResult;
use crate::domain::transport::{FetchRequest, HttpTransport};

/// Follows HTTP redirects and reports where the chain lands.
///
/// Never fails: transport errors become a result with `status_code = 500`
/// and an `error` message.
pub struct StandardResolver<T: HttpTransport> {
    transport: Arc<T>,
    timeout: Duration,
}

impl<T: HttpTransport> StandardResolver<T> {
    pub fn new(transport: Arc<T>, timeout: Duration) -> Self {
        Self { transport, timeout }
    }

    /// Issues one GET for `url` and reports the post-redirect URL and status.
    #[tracing::instrument(skip(self))]
    pub async fn resolve(&self, url: &str) -> ResolutionResult {
        let request = FetchRequest::get(url, self.timeout).without_body();

        match self.transport.fetch(request).await {
            Ok(response) => ResolutionResult::standard(url, response.final_url, response.status),
            Err(e) => {
                warn!(error = %e, "Standard resolution failed");
                ResolutionResult::failed(url, e.to_string())
            }
        }
    }
}
