//! HTTP server initialization and runtime setup.
//!
//! Builds the shared HTTP client and resolution service, then runs the Axum
//! server until Ctrl+C.

use crate::application::services::ResolutionService;
use crate::config::Config;
use crate::infrastructure::http::ReqwestTransport;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use metrics_exporter_prometheus::PrometheusBuilder;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Shared outbound HTTP client with the configured identity header
/// - Resolution service
/// - Prometheus recorder backing `GET /metrics` (when enabled)
/// - Axum HTTP server with trailing-slash normalization
///
/// # Errors
///
/// Returns an error if:
/// - HTTP client construction fails
/// - A global metrics recorder is already installed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let transport =
        ReqwestTransport::new(&config.user_agent).context("Failed to build HTTP client")?;

    let resolution_service = Arc::new(ResolutionService::new(
        Arc::new(transport),
        config.resolver_settings(),
    ));

    let mut state = AppState::new(resolution_service);

    if config.metrics_enabled {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .context("Failed to install metrics recorder")?;
        state = state.with_metrics(handle);
    }

    let app = NormalizePathLayer::trim_trailing_slash()
        .layer(app_router(state, config.rate_limit_enabled));

    let listen_addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("Failed to bind {listen_addr}"))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
