// src/extract/subscription.rs
// =============================================================================
// Finds subscription links in arbitrary text.
//
// A subscription link is any absolute http(s) URL ending in one of
// SUBSCRIPTION_SUFFIXES. The suffix is matched case-sensitively, so
// `.TXT` does not count. The middle of the URL is matched lazily, which means
// the shortest URL ending in a known suffix wins:
//
//   "https://a.com/x.yml.txt" -> "https://a.com/x.yml"
// =============================================================================

use once_cell::sync::Lazy;
use regex::Regex;

/// File endings that mark a URL as a subscription link.
pub const SUBSCRIPTION_SUFFIXES: &[&str] = &[".yaml", ".yml", ".txt"];

// The URL body stops at whitespace, quotes, angle brackets and parentheses,
// which covers href="...", <a>...</a> and markdown-style (...) wrappers.
static SUBSCRIPTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let suffixes = SUBSCRIPTION_SUFFIXES
        .iter()
        .map(|s| regex::escape(s))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r#"https?://[^\s"'<>()]+?(?:{suffixes})"#))
        .expect("subscription pattern is a valid regex")
});

/// Returns every subscription link in `text`, in order of appearance.
///
/// Duplicates are kept; the caller's link set takes care of them.
pub fn extract_subscription_links(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    SUBSCRIPTION_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_suffix_is_not_matched() {
        let text = "fetch https://x.com/a.yaml and https://x.com/b.TXT";
        assert_eq!(extract_subscription_links(text), vec!["https://x.com/a.yaml"]);
    }

    #[test]
    fn test_all_suffixes() {
        let text = "http://a.com/1.yaml https://b.com/2.yml https://c.com/3.txt";
        assert_eq!(
            extract_subscription_links(text),
            vec!["http://a.com/1.yaml", "https://b.com/2.yml", "https://c.com/3.txt"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_subscription_links("").is_empty());
        assert!(extract_subscription_links("no links here").is_empty());
    }

    #[test]
    fn test_shortest_match_wins() {
        let text = "https://a.com/x.yml.txt";
        assert_eq!(extract_subscription_links(text), vec!["https://a.com/x.yml"]);
    }

    #[test]
    fn test_stops_at_html_delimiters() {
        let html = r#"<a href="https://a.com/clash.yaml">sub</a>
            <code>https://b.com/v2ray.txt</code>
            [link](https://c.com/nodes.yml)
            <span data-x='https://d.com/d.txt'></span>"#;
        assert_eq!(
            extract_subscription_links(html),
            vec![
                "https://a.com/clash.yaml",
                "https://b.com/v2ray.txt",
                "https://c.com/nodes.yml",
                "https://d.com/d.txt",
            ]
        );
    }

    #[test]
    fn test_url_broken_by_whitespace_is_skipped() {
        // The first URL never reaches a suffix before the space
        let text = "https://a.com/page and then .yaml https://b.com/ok.yaml";
        assert_eq!(extract_subscription_links(text), vec!["https://b.com/ok.yaml"]);
    }

    #[test]
    fn test_duplicates_are_kept_in_order() {
        let text = "https://a.com/s.txt https://b.com/s.txt https://a.com/s.txt";
        assert_eq!(
            extract_subscription_links(text),
            vec!["https://a.com/s.txt", "https://b.com/s.txt", "https://a.com/s.txt"]
        );
    }

    #[test]
    fn test_reextracting_output_is_stable() {
        let text = r#"x "https://a.com/1.yaml" y https://b.com/2.yml.txt z <https://c.com/3.txt>"#;
        let first = extract_subscription_links(text);
        let second = extract_subscription_links(&first.join(" \n "));
        assert_eq!(first, second);
    }
}
