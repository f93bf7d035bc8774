// src/output/writer.rs
// =============================================================================
// Writes the final link list.
//
// File format:
//
//   # Updated at: 2026-01-15 08:30:00
//   # Total links: 2
//
//   https://a.example/clash.yaml
//   https://b.example/v2ray.txt
//
// Links pointing at the local machine are dropped first, the rest are sorted.
// The file is overwritten on every run.
// =============================================================================

use std::fs;
use std::path::Path;

use chrono::Local;
use tracing::info;

use crate::crawl::LinkSet;
use crate::error::WriteError;

/// Substrings that mark a link as pointing at the local machine.
pub const LOOPBACK_MARKERS: &[&str] = &["localhost", "127.0.0.1"];

/// Filters, sorts and writes `links` to `path`. Returns the number written.
pub fn write_links(path: &Path, links: &LinkSet) -> Result<usize, WriteError> {
    let kept = prepare(links);
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let contents = render(&kept, &timestamp);

    fs::write(path, contents).map_err(|source| WriteError {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), count = kept.len(), "saved links");
    Ok(kept.len())
}

// Drops loopback links and sorts what is left.
fn prepare(links: &LinkSet) -> Vec<&str> {
    let mut kept: Vec<&str> = links
        .iter()
        .map(String::as_str)
        .filter(|link| !is_loopback(link))
        .collect();
    kept.sort_unstable();
    kept
}

fn is_loopback(link: &str) -> bool {
    LOOPBACK_MARKERS.iter().any(|marker| link.contains(marker))
}

fn render(links: &[&str], timestamp: &str) -> String {
    let mut out = format!("# Updated at: {}\n# Total links: {}\n\n", timestamp, links.len());
    for link in links {
        out.push_str(link);
        out.push('\n');
    }
    out
}
