// src/extract/internal.rs
// =============================================================================
// Discovers same-site pages linked from a seed's homepage.
//
// Seed sites usually publish subscription links inside dated articles
// ("/2024/01/15/free-nodes"), not on the homepage itself. This module picks
// the anchors that look like such articles so the crawler can visit them.
//
// A candidate must:
// 1. come from an <a href="...">, resolved against the base URL
// 2. be http/https on exactly the same host as the base
// 3. carry no fragment ('#')
// 4. not point at a static asset (see ASSET_EXTENSIONS)
// 5. differ from the base URL
// 6. have a path longer than `min_path_len` characters (counted after
//    percent-decoding, so "/节点" is 3 characters, not 19 bytes)
//
// Results keep document order and the first occurrence of each URL.
// =============================================================================

use std::collections::HashSet;

use percent_encoding::percent_decode_str;
use scraper::{Html, Selector};
use url::Url;

/// Path endings that are never worth fetching as pages. Compared lowercase.
pub const ASSET_EXTENSIONS: &[&str] = &[
    ".css", ".js", ".png", ".jpg", ".jpeg", ".gif", ".ico", ".xml", ".json",
];

/// Returns candidate internal pages found in `html`, in document order.
///
/// Returns an empty list when `base_url` cannot be parsed or has no host.
pub fn discover_internal_links(base_url: &str, html: &str, min_path_len: usize) -> Vec<String> {
    let mut links = Vec::new();

    // Parse the base once; every href is resolved against it
    let base = match Url::parse(base_url) {
        Ok(url) => url,
        Err(_) => return links,
    };
    let base_host = match base.host_str() {
        Some(host) => host.to_string(),
        None => return links,
    };

    let document = Html::parse_document(html);
    // Constant selector, parsing cannot fail
    let selector = Selector::parse("a[href]").unwrap();

    // Tracks what is already in `links` so the first occurrence wins
    let mut seen = HashSet::new();

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let Some(candidate) = resolve_href(&base, href) else {
            continue;
        };

        if !is_internal_page(&base, &base_host, &candidate, min_path_len) {
            continue;
        }

        let candidate = candidate.to_string();
        if seen.insert(candidate.clone()) {
            links.push(candidate);
        }
    }

    links
}

// Absolute hrefs parse on their own; everything else is joined onto the base.
fn resolve_href(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();
    match Url::parse(href) {
        Ok(url) => Some(url),
        Err(_) => base.join(href).ok(),
    }
}

fn is_internal_page(base: &Url, base_host: &str, candidate: &Url, min_path_len: usize) -> bool {
    if candidate.scheme() != "http" && candidate.scheme() != "https" {
        return false;
    }

    // Exact host match: "www.site.com" and "site.com" are different sites
    if candidate.host_str() != Some(base_host) {
        return false;
    }

    // In-page anchors point back at a page we already have
    if candidate.as_str().contains('#') {
        return false;
    }

    let path = candidate.path();
    let lower_path = path.to_lowercase();
    if ASSET_EXTENSIONS.iter().any(|ext| lower_path.ends_with(ext)) {
        return false;
    }

    if candidate == base {
        return false;
    }

    decoded_len(path) > min_path_len
}

// Character count of a percent-encoded path as a reader would see it.
fn decoded_len(path: &str) -> usize {
    percent_decode_str(path).decode_utf8_lossy().chars().count()
}
