//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, optionally overridden by command
//! line flags, and validated before the server starts. It is read-only
//! afterwards.
//!
//! ## Variables
//!
//! - `HOST` - Bind host (default: `0.0.0.0`)
//! - `PORT` - Bind port (default: `5000`)
//! - `DEBUG` - Forces `debug` log level when `true`/`1` (default: `false`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `USER_AGENT` - Identity header sent on every outbound request
//!   (default: a desktop Chrome user agent)
//! - `GOOGLE_NEWS_BASE_URL` - Google News origin (default: `https://news.google.com`)
//! - `PARAMS_TIMEOUT_SECS` - Decoding parameter fetch timeout (default: 10)
//! - `RPC_TIMEOUT_SECS` - batchexecute RPC timeout (default: 15)
//! - `STANDARD_TIMEOUT_SECS` - Redirect resolution timeout (default: 10)
//! - `BATCH_CONCURRENCY` - In-flight resolutions per batch, 1-10 (default: 1)
//! - `RATE_LIMIT_ENABLED` - Per-IP rate limiting on resolve routes (default: `true`)
//! - `METRICS_ENABLED` - Prometheus recorder and `GET /metrics` (default: `true`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::application::services::ResolverSettings;
use crate::application::services::google_news::GOOGLE_NEWS_BASE_URL;
use crate::domain::entities::MAX_BATCH_SIZE;
use crate::infrastructure::http::DEFAULT_USER_AGENT;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Has no effect on resolution; only raises the log level.
    pub debug: bool,
    pub log_level: String,
    pub log_format: String,
    pub user_agent: String,
    pub google_news_base_url: String,
    pub params_timeout_secs: u64,
    pub rpc_timeout_secs: u64,
    pub standard_timeout_secs: u64,
    pub batch_concurrency: usize,
    pub rate_limit_enabled: bool,
    pub metrics_enabled: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match env::var("PORT") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got '{}'", v))?,
            Err(_) => 5000,
        };

        let debug = parse_flag("DEBUG").unwrap_or(false);
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let user_agent = env::var("USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        let google_news_base_url =
            env::var("GOOGLE_NEWS_BASE_URL").unwrap_or_else(|_| GOOGLE_NEWS_BASE_URL.to_string());

        let params_timeout_secs = env::var("PARAMS_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let rpc_timeout_secs = env::var("RPC_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(15);

        let standard_timeout_secs = env::var("STANDARD_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let batch_concurrency = env::var("BATCH_CONCURRENCY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1);

        let rate_limit_enabled = parse_flag("RATE_LIMIT_ENABLED").unwrap_or(true);
        let metrics_enabled = parse_flag("METRICS_ENABLED").unwrap_or(true);

        Ok(Self {
            host,
            port,
            debug,
            log_level,
            log_format,
            user_agent,
            google_news_base_url,
            params_timeout_secs,
            rpc_timeout_secs,
            standard_timeout_secs,
            batch_concurrency,
            rate_limit_enabled,
            metrics_enabled,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `port` is 0 or `host` is empty
    /// - `log_format` is not `text` or `json`
    /// - any timeout is 0
    /// - `batch_concurrency` is outside `1..=10`
    /// - `google_news_base_url` is not an http(s) URL
    /// - `user_agent` is empty
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            anyhow::bail!("HOST must not be empty");
        }

        if self.port == 0 {
            anyhow::bail!("PORT must be greater than 0");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.params_timeout_secs == 0 {
            anyhow::bail!("PARAMS_TIMEOUT_SECS must be greater than 0");
        }
        if self.rpc_timeout_secs == 0 {
            anyhow::bail!("RPC_TIMEOUT_SECS must be greater than 0");
        }
        if self.standard_timeout_secs == 0 {
            anyhow::bail!("STANDARD_TIMEOUT_SECS must be greater than 0");
        }

        if self.batch_concurrency == 0 || self.batch_concurrency > MAX_BATCH_SIZE {
            anyhow::bail!(
                "BATCH_CONCURRENCY must be between 1 and {}, got {}",
                MAX_BATCH_SIZE,
                self.batch_concurrency
            );
        }

        if !self.google_news_base_url.starts_with("http://")
            && !self.google_news_base_url.starts_with("https://")
        {
            anyhow::bail!(
                "GOOGLE_NEWS_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.google_news_base_url
            );
        }

        if self.user_agent.trim().is_empty() {
            anyhow::bail!("USER_AGENT must not be empty");
        }

        Ok(())
    }

    /// Bind address in `host:port` form, bracketing IPv6 hosts.
    pub fn listen_addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Log filter directive, `debug` when the debug toggle is on.
    pub fn effective_log_level(&self) -> &str {
        if self.debug { "debug" } else { &self.log_level }
    }

    /// Settings handed to the resolution engine.
    pub fn resolver_settings(&self) -> ResolverSettings {
        ResolverSettings {
            google_news_base_url: self.google_news_base_url.clone(),
            params_timeout: Duration::from_secs(self.params_timeout_secs),
            rpc_timeout: Duration::from_secs(self.rpc_timeout_secs),
            standard_timeout: Duration::from_secs(self.standard_timeout_secs),
            batch_concurrency: self.batch_concurrency,
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Log level: {}", self.effective_log_level());
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Google News origin: {}", self.google_news_base_url);
        tracing::info!(
            "  Timeouts: params {}s, rpc {}s, standard {}s",
            self.params_timeout_secs,
            self.rpc_timeout_secs,
            self.standard_timeout_secs
        );
        tracing::info!("  Batch concurrency: {}", self.batch_concurrency);
        tracing::info!(
            "  Rate limiting: {}",
            if self.rate_limit_enabled { "enabled" } else { "disabled" }
        );
        tracing::info!(
            "  Metrics: {}",
            if self.metrics_enabled { "enabled" } else { "disabled" }
        );
    }
}

/// Reads a boolean flag: `true`/`1` is on, `false`/`0` is off.
fn parse_flag(name: &str) -> Option<bool> {
    let value = env::var(name).ok()?;
    if value.eq_ignore_ascii_case("true") || value == "1" {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") || value == "0" {
        Some(false)
    } else {
        None
    }
}
