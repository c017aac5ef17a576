use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

use crate::application::services::ResolutionService;
use crate::infrastructure::http::ReqwestTransport;

/// Resolution service backed by the production HTTP client.
pub type Resolver = ResolutionService<ReqwestTransport>;

/// Shared, read-only application state.
#[derive(Clone)]
pub struct AppState {
    pub resolution_service: Arc<Resolver>,
    /// Render handle of the installed Prometheus recorder, if any.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(resolution_service: Arc<Resolver>) -> Self {
        Self {
            resolution_service,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
