//! reqwest-backed [`HttpTransport`].

use async_trait::async_trait;
use reqwest::{Client, Method, redirect};
use std::time::Duration;
use tracing::debug;

use crate::domain::transport::{
    FetchMethod, FetchRequest, FetchResponse, HttpTransport, TransportError,
};

/// Browser identity sent with every request unless overridden per request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const CONNECT_TIMEOUT_SECS: u64 = 10;
const MAX_REDIRECTS: usize = 10;

/// Shared HTTP client with a fixed identity header.
///
/// Built once at startup and cloned cheaply into every resolution; the
/// underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport that identifies itself as `user_agent`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Request`] if the TLS backend or client
    /// configuration cannot be initialized.
    pub fn new(user_agent: &str) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .gzip(true)
            .build()
            .map_err(|e| TransportError::Request(format!("HTTP client construction failed: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn fetch(&self, request: FetchRequest) -> Result<FetchResponse, TransportError> {
        let method = match request.method {
            FetchMethod::Get => Method::GET,
            FetchMethod::Post => Method::POST,
        };

        let mut builder = self
            .client
            .request(method, request.url.as_str())
            .timeout(request.timeout);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();

        debug!(url = %request.url, final_url = %final_url, status, "fetch completed");

        let body = if request.read_body {
            response.text().await.map_err(map_reqwest_error)?
        } else {
            String::new()
        };

        Ok(FetchResponse {
            status,
            final_url,
            body,
        })
    }
}

fn map_reqwest_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout(e.to_string())
    } else if e.is_connect() {
        TransportError::Connect(e.to_string())
    } else if e.is_builder() {
        TransportError::InvalidUrl(e.to_string())
    } else {
        TransportError::Request(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_with_default_identity() {
        assert!(ReqwestTransport::new(DEFAULT_USER_AGENT).is_ok());
    }

    #[tokio::test]
    async fn test_invalid_url_is_reported() {
        let transport = ReqwestTransport::new(DEFAULT_USER_AGENT).unwrap();

        let result = transport
            .fetch(FetchRequest::get("not a url", Duration::from_secs(1)))
            .await;

        assert!(matches!(result, Err(TransportError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_unsupported_scheme_is_an_error() {
        let transport = ReqwestTransport::new(DEFAULT_USER_AGENT).unwrap();

        let result = transport
            .fetch(FetchRequest::get("ftp://example.com/file", Duration::from_secs(1)))
            .await;

        assert!(result.is_err());
    }
}
