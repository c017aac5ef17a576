//! Google batchexecute RPC envelope encoding and response decoding.
//!
//! The `Fbv4je` RPC exchanges a signed article token for the article URL. The
//! remote endpoint validates the argument shape, so every constant below must
//! stay exactly as is.

use serde_json::{Value, json};

use crate::domain::entities::DecodingParameters;

/// RPC identifier for the article URL lookup.
pub const RPC_ID: &str = "Fbv4je";

/// Form field carrying the serialized envelope.
pub const FORM_FIELD: &str = "f.req";

/// Delimiter between response chunks.
const RESPONSE_DELIMITER: &str = "\n\n";

/// Ways a batchexecute response can fail to yield a URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RpcParseError {
    #[error("response has {0} part(s), expected at least 2")]
    TooFewParts(usize),

    #[error("response payload is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("unexpected response shape: {0}")]
    UnexpectedShape(&'static str),
}

/// Builds the JSON-encoded argument string of the `garturlreq` call.
///
/// The timestamp is emitted as a JSON number when it is an integer, which is
/// how the endpoint expects it; any other value is passed as a string.
pub fn build_args(params: &DecodingParameters) -> String {
    let timestamp = params
        .timestamp
        .parse::<i64>()
        .map(Value::from)
        .unwrap_or_else(|_| Value::from(params.timestamp.as_str()));

    json!([
        "garturlreq",
        [
            [
                "X", "X", ["X", "X"], null, null, 1, 1, "US:en", null, 1, null, null, null,
                null, null, 0, 1
            ],
            "X", "X", 1, [1, 1, 1], 1, 1, null, 0, 0, null, 0
        ],
        params.article_id,
        timestamp,
        params.signature
    ])
    .to_string()
}

/// Builds the full RPC envelope: `[[["Fbv4je", args]]]`.
pub fn build_envelope(params: &DecodingParameters) -> Value {
    json!([[[RPC_ID, build_args(params)]]])
}

/// Serializes the envelope as an `application/x-www-form-urlencoded` body.
pub fn encode_form_body(params: &DecodingParameters) -> String {
    let envelope = build_envelope(params).to_string();
    format!("{}={}", FORM_FIELD, urlencoding::encode(&envelope))
}

/// Extracts the decoded destination URL from a batchexecute response body.
///
/// # Response Layout
///
/// ```text
/// )]}'
///
/// [["wrb.fr","Fbv4je","[\"garturlres\",\"https://example.com/story\",1]",null,...]]
/// ```
///
/// The second chunk is parsed, then element `[0][2]` (itself a JSON string)
/// is parsed again and its element `[1]` is the URL.
///
/// # Errors
///
/// Returns [`RpcParseError`] when any stage of the layout is missing or malformed.
pub fn parse_response(body: &str) -> Result<String, RpcParseError> {
    let parts: Vec<&str> = body.split(RESPONSE_DELIMITER).collect();
    if parts.len() < 2 {
        return Err(RpcParseError::TooFewParts(parts.len()));
    }

    let outer: Value =
        serde_json::from_str(parts[1]).map_err(|e| RpcParseError::InvalidJson(e.to_string()))?;

    let first = outer
        .as_array()
        .and_then(|items| items.first())
        .ok_or(RpcParseError::UnexpectedShape("payload is not a non-empty array"))?;

    let inner = first
        .as_array()
        .filter(|items| items.len() > 2)
        .ok_or(RpcParseError::UnexpectedShape(
            "first entry has fewer than 3 elements",
        ))?;

    let encoded = inner[2]
        .as_str()
        .ok_or(RpcParseError::UnexpectedShape("entry payload is not a string"))?;

    let decoded: Value =
        serde_json::from_str(encoded).map_err(|e| RpcParseError::InvalidJson(e.to_string()))?;

    decoded
        .get(1)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(RpcParseError::UnexpectedShape("decoded payload has no URL"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> DecodingParameters {
        DecodingParameters::new("sig", "123", "ABC")
    }

    #[test]
    fn test_args_exact_shape() {
        assert_eq!(
            build_args(&params()),
            r#"["garturlreq",[["X","X",["X","X"],null,null,1,1,"US:en",null,1,null,null,null,null,null,0,1],"X","X",1,[1,1,1],1,1,null,0,0,null,0],"ABC",123,"sig"]"#
        );
    }

    #[test]
    fn test_args_are_deterministic() {
        let first = build_args(&params());
        let second = build_args(&params());
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_non_numeric_timestamp_is_quoted() {
        let args = build_args(&DecodingParameters::new("sig", "12a", "ABC"));
        assert!(args.ends_with(r#""ABC","12a","sig"]"#));
    }

    #[test]
    fn test_envelope_wraps_single_command() {
        let envelope = build_envelope(&params());

        assert_eq!(envelope[0][0][0], RPC_ID);
        assert_eq!(envelope[0][0][1], build_args(&params()));
        assert_eq!(envelope.as_array().unwrap().len(), 1);
        assert_eq!(envelope[0].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_form_body_is_percent_encoded() {
        let body = encode_form_body(&params());

        assert!(body.starts_with("f.req=%5B%5B%5B%22Fbv4je%22"));
        assert!(!body[6..].contains('"'));
        assert!(!body[6..].contains(' '));

        let decoded = urlencoding::decode(&body[6..]).unwrap();
        assert_eq!(decoded, build_envelope(&params()).to_string());
    }

    #[test]
    fn test_parse_valid_response() {
        let body = concat!(
            ")]}'\n\n",
            r#"[["wrb.fr","Fbv4je","[\"garturlres\",\"https://example.com/story\",1]",null,null,null,"generic"]]"#,
            "\n\n",
            r#"[["di",42]]"#
        );

        assert_eq!(parse_response(body).unwrap(), "https://example.com/story");
    }

    #[test]
    fn test_parse_without_delimiter() {
        assert_eq!(
            parse_response(r#"[["wrb.fr","Fbv4je","[]"]]"#),
            Err(RpcParseError::TooFewParts(1))
        );
    }

    #[test]
    fn test_parse_malformed_json() {
        assert!(matches!(
            parse_response(")]}'\n\n[[not json"),
            Err(RpcParseError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(matches!(
            parse_response(")]}'\n\n[]"),
            Err(RpcParseError::UnexpectedShape(_))
        ));
    }

    #[test]
    fn test_parse_short_entry() {
        assert!(matches!(
            parse_response(")]}'\n\n[[\"wrb.fr\",\"Fbv4je\"]]"),
            Err(RpcParseError::UnexpectedShape(_))
        ));
    }

    #[test]
    fn test_parse_null_payload() {
        assert!(matches!(
            parse_response(")]}'\n\n[[\"wrb.fr\",\"Fbv4je\",null]]"),
            Err(RpcParseError::UnexpectedShape(_))
        ));
    }

    #[test]
    fn test_parse_decoded_payload_without_url() {
        assert!(matches!(
            parse_response(")]}'\n\n[[\"wrb.fr\",\"Fbv4je\",\"[\\\"garturlres\\\"]\"]]"),
            Err(RpcParseError::UnexpectedShape(_))
        ));
    }
}
