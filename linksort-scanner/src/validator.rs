use crate::error::{Result, ScanError};
use tracing::debug;
use url::Url;

/// Strip a single trailing `/` and parse the candidate strictly.
///
/// The returned `Url` is the canonical form; its `as_str()` is what gets
/// stored, not the raw candidate text.
pub fn normalize_link(href: &str) -> Result<Url> {
    let trimmed = href.strip_suffix('/').unwrap_or(href);
    Url::parse(trimmed).map_err(|source| {
        debug!("Rejected candidate {}: {}", href, source);
        ScanError::InvalidUrl {
            href: href.to_string(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_simple() {
        let url = normalize_link("http://example.com/page").unwrap();
        assert_eq!(url.as_str(), "http://example.com/page");
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_normalize_strips_one_trailing_slash() {
        let url = normalize_link("http://example.com/docs/").unwrap();
        assert_eq!(url.as_str(), "http://example.com/docs");

        let url = normalize_link("http://example.com/docs//").unwrap();
        assert_eq!(url.as_str(), "http://example.com/docs/");
    }

    #[test]
    fn test_normalize_bare_host_gets_root_path() {
        let url = normalize_link("http://example.com/").unwrap();
        assert_eq!(url.as_str(), "http://example.com/");
    }

    #[test]
    fn test_normalize_lowercases_host() {
        let url = normalize_link("https://Example.COM/Path").unwrap();
        assert_eq!(url.as_str(), "https://example.com/Path");
    }

    #[test]
    fn test_invalid_port_is_rejected_with_raw_text() {
        let err = normalize_link("http://example.com:99999/").unwrap_err();
        match err {
            ScanError::InvalidUrl { href, source } => {
                assert_eq!(href, "http://example.com:99999/");
                assert_eq!(source, url::ParseError::InvalidPort);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
