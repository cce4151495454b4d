use crate::result::LinkMatch;
use once_cell::sync::Lazy;
use regex::Regex;

/// Coarse link pattern. It over-captures on purpose: whatever trails the host
/// stays in the match and `validator::normalize_link` decides what is real.
///
/// The boundary after the TLD is ASCII-only, so a host running straight into
/// non-ASCII text (`访问http://example.com了解`) still matches.
pub static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"https?://(?:www\.)?([-A-Za-z0-9_@:%._+~#=]{1,256}\.[A-Za-z0-9_()]{1,6})(?-u:\b)(?:[-A-Za-z0-9_()@:%+.~#?&/=!]*)",
    )
    .expect("URL pattern must compile")
});

/// Lazily yield every candidate link in `text`, left to right.
pub fn extract_links(text: &str) -> impl Iterator<Item = LinkMatch<'_>> + '_ {
    URL_PATTERN.captures_iter(text).filter_map(|caps| {
        let href = caps.get(0)?.as_str();
        let hostname = caps.get(1)?.as_str();
        Some(LinkMatch { href, hostname })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_in_order() {
        let text = "first https://b.org/x then http://a.com";
        let links: Vec<_> = extract_links(text).collect();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].href, "https://b.org/x");
        assert_eq!(links[0].hostname, "b.org");
        assert_eq!(links[1].href, "http://a.com");
        assert_eq!(links[1].hostname, "a.com");
    }

    #[test]
    fn test_www_prefix_not_captured_in_hostname() {
        let links: Vec<_> = extract_links("go to https://www.example.com/about").collect();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].href, "https://www.example.com/about");
        assert_eq!(links[0].hostname, "example.com");
    }

    #[test]
    fn test_path_and_query_stay_in_href() {
        let links: Vec<_> =
            extract_links("see http://example.com/page?id=1&x=2#top, thanks").collect();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].href, "http://example.com/page?id=1&x=2#top");
    }

    #[test]
    fn test_stops_at_whitespace_and_quotes() {
        let links: Vec<_> =
            extract_links(r#"<a href="http://example.com/a">x</a> http://example.com/b c"#)
                .collect();
        let hrefs: Vec<_> = links.iter().map(|l| l.href).collect();
        assert_eq!(hrefs, vec!["http://example.com/a", "http://example.com/b"]);
    }

    #[test]
    fn test_bare_scheme_does_not_match() {
        assert_eq!(extract_links("broken: http://").count(), 0);
    }

    #[test]
    fn test_scheme_must_be_lowercase() {
        assert_eq!(extract_links("HTTP://example.com").count(), 0);
        assert_eq!(extract_links("Https://example.com").count(), 0);
    }

    #[test]
    fn test_host_without_dot_does_not_match() {
        assert_eq!(extract_links("http://localhost:8080/").count(), 0);
    }

    #[test]
    fn test_repeated_links_are_all_yielded() {
        let text = "http://a.com http://a.com https://b.net/x http://c.io";
        assert_eq!(extract_links(text).count(), 4);
    }

    #[test]
    fn test_host_followed_by_cjk_text() {
        let links: Vec<_> = extract_links("访问http://example.com了解更多").collect();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].href, "http://example.com");
        assert_eq!(links[0].hostname, "example.com");
    }

    #[test]
    fn test_host_followed_by_accented_letter() {
        let links: Vec<_> = extract_links("http://example.coméx").collect();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].href, "http://example.com");
    }

    #[test]
    fn test_path_stops_before_non_ascii_text() {
        let links: Vec<_> = extract_links("见 https://b.org/docs/page说明").collect();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].href, "https://b.org/docs/page");
    }

    #[test]
    fn test_trailing_punctuation_is_kept_for_the_validator() {
        let links: Vec<_> = extract_links("(see http://example.com/a.)").collect();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].href, "http://example.com/a.)");
    }
}
