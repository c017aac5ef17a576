//! URL classification, strategy selection, and batch orchestration.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::{debug, error, warn};

use crate::application::services::google_news::{GOOGLE_NEWS_BASE_URL, GoogleNewsDecoder};
use crate::application::services::standard::StandardResolver;
use crate::domain::entities::{BatchResult, MAX_BATCH_SIZE, ResolutionResult};
use crate::domain::error::ResolveError;
use crate::domain::transport::HttpTransport;
use crate::utils::url_classifier::{UrlKind, classify_url};

/// Tunables of the resolution engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverSettings {
    pub google_news_base_url: String,
    pub params_timeout: Duration,
    pub rpc_timeout: Duration,
    pub standard_timeout: Duration,
    /// Maximum in-flight resolutions within one batch. `1` is sequential.
    pub batch_concurrency: usize,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            google_news_base_url: GOOGLE_NEWS_BASE_URL.to_string(),
            params_timeout: Duration::from_secs(10),
            rpc_timeout: Duration::from_secs(15),
            standard_timeout: Duration::from_secs(10),
            batch_concurrency: 1,
        }
    }
}

/// Resolves URLs to their final destination.
///
/// # Strategy Selection
///
/// - Host contains `news.google.com`: try [`GoogleNewsDecoder`] first. A decoded
///   value starting with `http` is final (`method = google_news`).
/// - Otherwise, or when decoding yields nothing usable, the *original* URL goes
///   through [`StandardResolver`].
///
/// Every call produces a [`ResolutionResult`]; no per-URL failure escapes.
pub struct ResolutionService<T: HttpTransport> {
    decoder: GoogleNewsDecoder<T>,
    standard: StandardResolver<T>,
    batch_concurrency: usize,
}

impl<T: HttpTransport + 'static> ResolutionService<T> {
    /// Creates a service sharing `transport` between both strategies.
    pub fn new(transport: Arc<T>, settings: ResolverSettings) -> Self {
        Self {
            decoder: GoogleNewsDecoder::new(
                transport.clone(),
                settings.google_news_base_url,
                settings.params_timeout,
                settings.rpc_timeout,
            ),
            standard: StandardResolver::new(transport, settings.standard_timeout),
            batch_concurrency: settings.batch_concurrency.clamp(1, MAX_BATCH_SIZE),
        }
    }

    /// Resolves a single URL.
    #[tracing::instrument(skip(self))]
    pub async fn resolve(&self, url: &str) -> ResolutionResult {
        if classify_url(url) == UrlKind::GoogleNews {
            match self.decoder.decode(url).await {
                Ok(decoded) if decoded.starts_with("http") => {
                    debug!(final_url = %decoded, "Google News link decoded");
                    metrics::counter!("resolutions_total", "method" => "google_news")
                        .increment(1);
                    return ResolutionResult::google_news(url, decoded);
                }
                Ok(decoded) => {
                    warn!(decoded = %decoded, "Decoded value is not an absolute URL, falling back");
                }
                Err(ResolveError::NotApplicable) => {
                    debug!("No article token, falling back to standard resolution");
                }
                Err(e) => {
                    warn!(error = %e, "Google News decoding failed, falling back");
                }
            }
            metrics::counter!("google_news_fallbacks_total").increment(1);
        }

        let result = self.standard.resolve(url).await;

        if result.is_error() {
            metrics::counter!("resolution_errors_total").increment(1);
        } else {
            metrics::counter!("resolutions_total", "method" => "standard").increment(1);
        }

        result
    }

    /// Resolves up to [`MAX_BATCH_SIZE`] URLs, preserving input order.
    ///
    /// Extra URLs are dropped silently. Resolutions run with at most
    /// `batch_concurrency` in flight. Every failure, including a resolution
    /// task that panics, is reported in that URL's own result.
    pub async fn resolve_batch(self: &Arc<Self>, urls: Vec<String>) -> BatchResult {
        if urls.len() > MAX_BATCH_SIZE {
            debug!(
                received = urls.len(),
                limit = MAX_BATCH_SIZE,
                "Truncating batch"
            );
        }

        let semaphore = Arc::new(Semaphore::new(self.batch_concurrency));

        let tasks: Vec<_> = urls
            .into_iter()
            .take(MAX_BATCH_SIZE)
            .map(|url| {
                let service = Arc::clone(self);
                let semaphore = Arc::clone(&semaphore);
                let task_url = url.clone();
                let handle = tokio::spawn(async move {
                    let _permit = semaphore.acquire_owned().await.ok();
                    service.resolve(&task_url).await
                });
                (url, handle)
            })
            .collect();

        let mut results = Vec::with_capacity(tasks.len());
        for (url, handle) in tasks {
            let result = match handle.await {
                Ok(result) => result,
                Err(e) => {
                    error!(url = %url, error = %e, "Resolution task faulted");
                    metrics::counter!("resolution_errors_total").increment(1);
                    ResolutionResult::failed(url, format!("Unhandled fault: {e}"))
                }
            };
            results.push(result);
        }

        results
    }
}
