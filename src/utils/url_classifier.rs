//! Input URL classification and Google News token extraction.

use url::Url;

/// Host fragment identifying Google News links.
pub const GOOGLE_NEWS_HOST: &str = "news.google.com";

/// Path segment that marks a Google News article link.
const ARTICLES_SEGMENT: &str = "articles";

/// Resolution strategy selected for an input URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlKind {
    /// Host contains `news.google.com`: try the token decoder first.
    GoogleNews,
    /// Everything else, including URLs that fail to parse.
    Standard,
}

/// Classifies a URL by its host.
///
/// Unparseable input is classified as [`UrlKind::Standard`] so it still gets a
/// resolution attempt (which reports the failure on the result).
///
/// # Examples
///
/// ```ignore
/// assert_eq!(classify_url("https://news.google.com/rss/articles/CBMi"), UrlKind::GoogleNews);
/// assert_eq!(classify_url("https://example.com/a"), UrlKind::Standard);
/// ```
pub fn classify_url(url: &str) -> UrlKind {
    let is_google_news = Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(|h| h.contains(GOOGLE_NEWS_HOST)))
        .unwrap_or(false);

    if is_google_news {
        UrlKind::GoogleNews
    } else {
        UrlKind::Standard
    }
}

/// Extracts the opaque article token from a Google News URL.
///
/// The token is the final path segment, and only exists when the path has an
/// `articles` segment. Query string and fragment are ignored.
///
/// Returns `None` when there is no `articles` segment or the last segment is
/// empty (trailing slash).
pub fn extract_article_token(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let segments: Vec<&str> = parsed.path_segments()?.collect();

    if !segments.contains(&ARTICLES_SEGMENT) {
        return None;
    }

    segments
        .last()
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
}
