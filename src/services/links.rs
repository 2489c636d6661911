// src/services/links.rs

//! Absolute-URL extraction from fetched page text.

use std::sync::OnceLock;

use regex::Regex;

// Scheme, dotted host, optional path/query/fragment tail. The tail must
// end on a character that can legitimately close a URL, so trailing
// punctuation in prose is left behind.
const LINK_PATTERN: &str =
    r"(http|https)://([\w_-]+(?:(?:\.[\w_-]+)+))([\w.,@?^=%&:/~+#-]*[\w@?^=%&/~+#-])?";

fn link_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(LINK_PATTERN).expect("link pattern is valid"))
}

/// Extracts candidate links from page text.
///
/// Matches are returned in order of appearance, duplicates included.
/// Extracted strings are not validated, resolved, or deduplicated; a
/// page linking to itself yields its own URL again.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkExtractor;

impl LinkExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Scan `body` for absolute URLs.
    pub fn extract(&self, body: &str) -> Vec<String> {
        link_pattern()
            .find_iter(body)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_in_order_of_appearance() {
        let extractor = LinkExtractor::new();
        let links =
            extractor.extract("visit http://a.example/x and https://b.example/y?z=1 today");
        assert_eq!(
            links,
            vec!["http://a.example/x", "https://b.example/y?z=1"]
        );
    }

    #[test]
    fn keeps_duplicates() {
        let extractor = LinkExtractor::new();
        let links = extractor.extract("http://a.example http://a.example");
        assert_eq!(links, vec!["http://a.example", "http://a.example"]);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let extractor = LinkExtractor::new();
        let body = "<a href=\"https://b.example/p\">x</a> https://b.example/p";
        assert_eq!(extractor.extract(body), extractor.extract(body));
    }

    #[test]
    fn requires_dotted_host() {
        let extractor = LinkExtractor::new();
        assert!(extractor.extract("http://localhost/page").is_empty());
    }

    #[test]
    fn no_links_in_plain_text() {
        let extractor = LinkExtractor::new();
        assert!(extractor.extract("nothing to see here").is_empty());
    }

    #[test]
    fn bare_host_without_path_matches() {
        let extractor = LinkExtractor::new();
        assert_eq!(
            extractor.extract("see http://child.example for more"),
            vec!["http://child.example"]
        );
    }
}
