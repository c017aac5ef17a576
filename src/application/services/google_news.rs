//! Google News article token decoder.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::domain::entities::DecodingParameters;
use crate::domain::error::ResolveError;
use crate::domain::transport::{FetchRequest, HttpTransport};
use crate::utils::batchexecute::{encode_form_body, parse_response};
use crate::utils::decoding_params::extract_signed_attributes;
use crate::utils::url_classifier::extract_article_token;

/// Default Google News origin.
pub const GOOGLE_NEWS_BASE_URL: &str = "https://news.google.com";

const BATCHEXECUTE_PATH: &str = "/_/DotsSplashUi/data/batchexecute";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=UTF-8";

/// Recovers the real destination of a Google News article link.
///
/// # Protocol
///
/// 1. **Parameter retrieval**: fetch `/rss/articles/{token}` (falling back once
///    to `/articles/{token}` on a non-200 status) and read the signature and
///    timestamp attributes from the `c-wiz > div` fragment.
/// 2. **RPC decode**: POST the signed `garturlreq` envelope to the batchexecute
///    endpoint and pull the URL out of the response.
///
/// Every failure is returned as a [`ResolveError`]; the caller decides whether
/// to fall back.
pub struct GoogleNewsDecoder<T: HttpTransport> {
    transport: Arc<T>,
    base_url: String,
    params_timeout: Duration,
    rpc_timeout: Duration,
}

impl<T: HttpTransport> GoogleNewsDecoder<T> {
    /// Creates a decoder talking to `base_url` (normally [`GOOGLE_NEWS_BASE_URL`]).
    pub fn new(
        transport: Arc<T>,
        base_url: impl Into<String>,
        params_timeout: Duration,
        rpc_timeout: Duration,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            params_timeout,
            rpc_timeout,
        }
    }

    /// Decodes a Google News article URL into its destination URL.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::NotApplicable`] if the URL has no article token
    /// - [`ResolveError::DecodingUnavailable`] if step 1 fails
    /// - [`ResolveError::RpcDecodeFailure`] if step 2 fails
    /// - [`ResolveError::Network`] on transport failures in either step
    #[tracing::instrument(skip(self))]
    pub async fn decode(&self, url: &str) -> Result<String, ResolveError> {
        let token = extract_article_token(url).ok_or(ResolveError::NotApplicable)?;

        let params = self.fetch_decoding_params(&token).await?;
        self.decode_with_params(&params).await
    }

    /// Step 1: retrieves the signed parameters for `token`.
    ///
    /// Retries exactly once against the alternate `/articles/` path when the
    /// RSS path does not answer 200.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::DecodingUnavailable`] when the final status is
    /// not 200 or the fragment is missing or incomplete.
    pub async fn fetch_decoding_params(
        &self,
        token: &str,
    ) -> Result<DecodingParameters, ResolveError> {
        let rss_url = format!("{}/rss/articles/{}", self.base_url, token);
        let mut response = self
            .transport
            .fetch(FetchRequest::get(rss_url, self.params_timeout))
            .await?;

        if response.status != 200 {
            debug!(
                status = response.status,
                "RSS article path rejected, retrying alternate path"
            );
            let alt_url = format!("{}/articles/{}", self.base_url, token);
            response = self
                .transport
                .fetch(FetchRequest::get(alt_url, self.params_timeout))
                .await?;
        }

        if response.status != 200 {
            return Err(ResolveError::DecodingUnavailable(format!(
                "article page returned status {}",
                response.status
            )));
        }

        let attrs = extract_signed_attributes(&response.body)
            .map_err(|e| ResolveError::DecodingUnavailable(e.to_string()))?;

        Ok(DecodingParameters::new(attrs.signature, attrs.timestamp, token))
    }

    /// Step 2: exchanges signed parameters for the destination URL.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::RpcDecodeFailure`] on a non-2xx status or an
    /// unparseable response.
    pub async fn decode_with_params(
        &self,
        params: &DecodingParameters,
    ) -> Result<String, ResolveError> {
        let request = FetchRequest::post(
            format!("{}{}", self.base_url, BATCHEXECUTE_PATH),
            encode_form_body(params),
            self.rpc_timeout,
        )
        .header("Content-Type", FORM_CONTENT_TYPE)
        .header("Referer", format!("{}/", self.base_url));

        let response = self.transport.fetch(request).await?;

        if !response.is_success() {
            warn!(status = response.status, "batchexecute rejected request");
            return Err(ResolveError::RpcDecodeFailure(format!(
                "batchexecute returned status {}",
                response.status
            )));
        }

        parse_response(&response.body).map_err(|e| ResolveError::RpcDecodeFailure(e.to_string()))
    }
}
