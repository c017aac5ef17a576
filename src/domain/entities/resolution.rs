//! Resolution result entity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of URLs resolved per batch. Longer batches are truncated.
pub const MAX_BATCH_SIZE: usize = 10;

/// Strategy that produced a [`ResolutionResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionMethod {
    /// Plain HTTP redirect following.
    Standard,
    /// Google News token exchanged through the batchexecute RPC.
    GoogleNews,
}

impl ResolutionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::GoogleNews => "google_news",
        }
    }
}

impl fmt::Display for ResolutionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of resolving a single URL.
///
/// Either `final_url` or `error` is set, never both. Failures are reported
/// with `status_code = 500`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    #[serde(rename = "original")]
    pub original_url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_url: Option<String>,

    pub status_code: u16,

    pub method: ResolutionMethod,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResolutionResult {
    /// Result of a successful Google News decode. The status is always 200
    /// since no HTTP request was made against the destination.
    pub fn google_news(original_url: impl Into<String>, final_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            final_url: Some(final_url.into()),
            status_code: 200,
            method: ResolutionMethod::GoogleNews,
            error: None,
        }
    }

    /// Result of a completed redirect chain. `status_code` is the landing
    /// page status, reported verbatim.
    pub fn standard(
        original_url: impl Into<String>,
        final_url: impl Into<String>,
        status_code: u16,
    ) -> Self {
        Self {
            original_url: original_url.into(),
            final_url: Some(final_url.into()),
            status_code,
            method: ResolutionMethod::Standard,
            error: None,
        }
    }

    /// Result of a resolution that could not reach any destination.
    pub fn failed(original_url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            final_url: None,
            status_code: 500,
            method: ResolutionMethod::Standard,
            error: Some(error.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Ordered results of a batch, one per accepted input URL.
pub type BatchResult = Vec<ResolutionResult>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_google_news_result_serialization() {
        let result = ResolutionResult::google_news(
            "https://news.google.com/rss/articles/ABC",
            "https://example.com/story",
        );

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "original": "https://news.google.com/rss/articles/ABC",
                "final_url": "https://example.com/story",
                "status_code": 200,
                "method": "google_news"
            })
        );
    }

    #[test]
    fn test_failed_result_omits_final_url() {
        let result = ResolutionResult::failed("https://bad.invalid", "connection refused");

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["status_code"], 500);
        assert_eq!(value["error"], "connection refused");
        assert_eq!(value["method"], "standard");
        assert!(value.get("final_url").is_none());
        assert!(result.is_error());
    }

    #[test]
    fn test_standard_result_keeps_status_verbatim() {
        let result = ResolutionResult::standard("http://a.test", "http://b.test/404", 404);

        assert_eq!(result.status_code, 404);
        assert!(!result.is_error());
        assert_eq!(result.method.to_string(), "standard");
    }
}
