//! Outbound HTTP transport contract.
//!
//! The resolution engine never talks to an HTTP client directly. It builds a
//! [`FetchRequest`] and hands it to an [`HttpTransport`], which makes the
//! strategies testable against mocks and keeps the client configuration in one
//! place.

use async_trait::async_trait;
use std::time::Duration;

/// HTTP method used by the resolution engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMethod {
    Get,
    Post,
}

/// A single outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub method: FetchMethod,
    pub url: String,
    /// Extra headers. A `User-Agent` entry here overrides the transport identity.
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub timeout: Duration,
    /// When false the response body is not downloaded and `FetchResponse::body` is empty.
    pub read_body: bool,
}

impl FetchRequest {
    /// GET request that follows redirects and reads the body.
    pub fn get(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            method: FetchMethod::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
            timeout,
            read_body: true,
        }
    }

    /// POST request carrying `body`.
    pub fn post(url: impl Into<String>, body: impl Into<String>, timeout: Duration) -> Self {
        Self {
            method: FetchMethod::Post,
            url: url.into(),
            headers: Vec::new(),
            body: Some(body.into()),
            timeout,
            read_body: true,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn without_body(mut self) -> Self {
        self.read_body = false;
        self
    }
}

/// Response after all redirects were followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    /// URL of the last response in the redirect chain.
    pub final_url: String,
    pub body: String,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport-level failures. Non-2xx statuses are not errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Request failed: {0}")]
    Request(String),
}

/// Issues outbound HTTP requests on behalf of the resolution strategies.
///
/// Implementations must be safe to share across concurrent requests and must
/// follow redirects for GET requests.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::ReqwestTransport`] - reqwest-backed client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Executes `request`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] on timeout, connection failure, an unusable
    /// URL, or any other transport-level fault.
    async fn fetch(&self, request: FetchRequest) -> Result<FetchResponse, TransportError>;
}
