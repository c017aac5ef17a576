//! Signed parameters required to decode a Google News article token.

/// Signature and timestamp bound to one article token.
///
/// Extracted from the article HTML fragment. All three fields are required by
/// the batchexecute RPC call, so this type only exists once both attributes
/// were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodingParameters {
    pub signature: String,
    pub timestamp: String,
    pub article_id: String,
}

impl DecodingParameters {
    pub fn new(
        signature: impl Into<String>,
        timestamp: impl Into<String>,
        article_id: impl Into<String>,
    ) -> Self {
        Self {
            signature: signature.into(),
            timestamp: timestamp.into(),
            article_id: article_id.into(),
        }
    }
}
