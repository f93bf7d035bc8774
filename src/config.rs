// src/config.rs
// =============================================================================
// Runtime configuration for a harvest run.
//
// Everything the crawler needs to know lives in one struct so that tests can
// point it at a mock server instead of the real seed sites. The defaults
// reproduce the fixed behaviour of the tool: ten seed sites, 15 internal
// pages per seed, a 15 second timeout and a one second pause between pages.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

/// Seed sites visited when no `--seed` flag is given.
pub const DEFAULT_SEEDS: &[&str] = &[
    "https://www.freeclashnode.com/",
    "https://wanzhuanmi.com/",
    "https://oneclash.cc/",
    "https://clashnodes.com/",
    "https://clashnode.cc/",
    "https://www.mibei77.com/",
    "https://www.cfmem.com/",
    "https://www.85la.com/",
    "https://github.com/Pawdroid/Free-servers",
    "https://nodecats.com/",
];

/// Browser-like identification so simple bot filters let us through.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub const DEFAULT_OUTPUT: &str = "nodes_list.txt";
pub const DEFAULT_MAX_INTERNAL_LINKS: usize = 15;
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_DELAY_MS: u64 = 1000;

/// Internal links whose path is this long or shorter are not followed.
/// Keeps `/`, `/en` and similar near-root pages out of the crawl.
pub const DEFAULT_MIN_PATH_LEN: usize = 4;

// A discovered link is dropped if it matches any of these.
// `robots.txt` is matched exactly, `license` in any case.
const DEFAULT_EXCLUDES: &[Exclusion] = &[
    Exclusion::Exact("robots.txt"),
    Exclusion::IgnoreCase("license"),
];

/// A substring rule that rejects a discovered subscription link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exclusion {
    /// Case-sensitive substring
    Exact(&'static str),
    /// Substring compared after lowercasing the link; the needle is lowercase
    IgnoreCase(&'static str),
}

impl Exclusion {
    pub fn matches(&self, link: &str) -> bool {
        match self {
            Exclusion::Exact(needle) => link.contains(needle),
            Exclusion::IgnoreCase(needle) => link.to_lowercase().contains(needle),
        }
    }
}

/// All knobs of a single run.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    pub seeds: Vec<String>,
    pub max_internal_links: usize,
    pub timeout: Duration,
    pub delay: Duration,
    pub user_agent: String,
    pub min_path_len: usize,
    pub output: PathBuf,
    pub exclude: Vec<Exclusion>,
}

impl CrawlConfig {
    /// Returns true if `link` should not enter the link set.
    pub fn is_excluded(&self, link: &str) -> bool {
        self.exclude.iter().any(|rule| rule.matches(link))
    }
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            seeds: DEFAULT_SEEDS.iter().map(|s| s.to_string()).collect(),
            max_internal_links: DEFAULT_MAX_INTERNAL_LINKS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            min_path_len: DEFAULT_MIN_PATH_LEN,
            output: PathBuf::from(DEFAULT_OUTPUT),
            exclude: DEFAULT_EXCLUDES.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CrawlConfig::default();
        assert_eq!(config.seeds.len(), 10);
        assert_eq!(config.max_internal_links, 15);
        assert_eq!(config.min_path_len, 4);
        assert_eq!(config.output, PathBuf::from("nodes_list.txt"));
    }

    #[test]
    fn test_robots_txt_excluded_exactly() {
        let config = CrawlConfig::default();
        assert!(config.is_excluded("https://x.com/robots.txt"));
        // Only the exact lowercase spelling is rejected
        assert!(!config.is_excluded("https://x.com/ROBOTS.txt"));
    }

    #[test]
    fn test_license_excluded_any_case() {
        let config = CrawlConfig::default();
        assert!(config.is_excluded("https://x.com/LICENSE.txt"));
        assert!(config.is_excluded("https://x.com/License.yaml"));
        assert!(!config.is_excluded("https://x.com/clash.yaml"));
    }
}
