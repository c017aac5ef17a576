//! Extraction of Google News decoding attributes from article HTML.

use scraper::{Html, Selector};
use std::sync::LazyLock;

const PARAMS_SELECTOR_STR: &str = "c-wiz > div";

/// Attribute carrying the article signature.
pub const SIGNATURE_ATTR: &str = "data-n-a-sg";

/// Attribute carrying the signing timestamp.
pub const TIMESTAMP_ATTR: &str = "data-n-a-ts";

static PARAMS_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(PARAMS_SELECTOR_STR).expect("Failed to parse c-wiz selector - this is a bug")
});

/// Signed attributes found in an article page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedAttributes {
    pub signature: String,
    pub timestamp: String,
}

/// Reasons the HTML did not yield decoding attributes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("no `c-wiz > div` element in document")]
    FragmentMissing,

    #[error("attribute `{0}` missing on `c-wiz > div`")]
    AttributeMissing(&'static str),
}

/// Reads the signature and timestamp from the first `div` that is a direct
/// child of a `c-wiz` element.
///
/// # Errors
///
/// Returns [`ExtractError::FragmentMissing`] when no such element exists and
/// [`ExtractError::AttributeMissing`] when either attribute is absent.
pub fn extract_signed_attributes(html: &str) -> Result<SignedAttributes, ExtractError> {
    let document = Html::parse_document(html);

    let element = document
        .select(&PARAMS_SELECTOR)
        .next()
        .ok_or(ExtractError::FragmentMissing)?;

    let signature = element
        .attr(SIGNATURE_ATTR)
        .ok_or(ExtractError::AttributeMissing(SIGNATURE_ATTR))?;
    let timestamp = element
        .attr(TIMESTAMP_ATTR)
        .ok_or(ExtractError::AttributeMissing(TIMESTAMP_ATTR))?;

    Ok(SignedAttributes {
        signature: signature.to_string(),
        timestamp: timestamp.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_both_attributes() {
        let html = r#"<html><body><c-wiz jsrenderer="x">
            <div jscontroller="aLI87" data-n-a-sg="AZ5r3eS" data-n-a-ts="1718122353"></div>
        </c-wiz></body></html>"#;

        let attrs = extract_signed_attributes(html).unwrap();
        assert_eq!(attrs.signature, "AZ5r3eS");
        assert_eq!(attrs.timestamp, "1718122353");
    }

    #[test]
    fn test_missing_fragment() {
        let html = "<html><body><div data-n-a-sg=\"s\" data-n-a-ts=\"1\"></div></body></html>";

        assert_eq!(
            extract_signed_attributes(html),
            Err(ExtractError::FragmentMissing)
        );
    }

    #[test]
    fn test_nested_div_is_not_direct_child() {
        let html = r#"<c-wiz><span><div data-n-a-sg="s" data-n-a-ts="1"></div></span></c-wiz>"#;

        assert_eq!(
            extract_signed_attributes(html),
            Err(ExtractError::FragmentMissing)
        );
    }

    #[test]
    fn test_missing_signature() {
        let html = r#"<c-wiz><div data-n-a-ts="1718122353"></div></c-wiz>"#;

        assert_eq!(
            extract_signed_attributes(html),
            Err(ExtractError::AttributeMissing(SIGNATURE_ATTR))
        );
    }

    #[test]
    fn test_missing_timestamp() {
        let html = r#"<c-wiz><div data-n-a-sg="sig"></div></c-wiz>"#;

        assert_eq!(
            extract_signed_attributes(html),
            Err(ExtractError::AttributeMissing(TIMESTAMP_ATTR))
        );
    }

    #[test]
    fn test_only_first_fragment_is_inspected() {
        let html = r#"<c-wiz><div class="first"></div></c-wiz>
            <c-wiz><div data-n-a-sg="sig" data-n-a-ts="1"></div></c-wiz>"#;

        assert!(extract_signed_attributes(html).is_err());
    }
}
