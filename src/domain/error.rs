//! Typed failures raised while resolving a single URL.
//!
//! None of these are fatal. The resolution service turns every per-URL variant
//! into either a fallback to standard resolution or an error field on the
//! result; none of them reaches the HTTP layer.

use crate::domain::transport::TransportError;

/// Errors produced by the resolution strategies.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The URL has no `articles` path segment, so there is no token to decode.
    #[error("URL does not carry a Google News article token")]
    NotApplicable,

    /// Step 1 failed: no usable HTML fragment, or a signed attribute is missing.
    #[error("Decoding parameters unavailable: {0}")]
    DecodingUnavailable(String),

    /// Step 2 failed: the RPC response was rejected, short, or malformed.
    #[error("RPC decode failed: {0}")]
    RpcDecodeFailure(String),

    /// Transport-level failure (timeout, DNS, refused connection).
    #[error(transparent)]
    Network(#[from] TransportError),
}
