// src/crawl/harvest.rs
// =============================================================================
// The crawl-and-extract loop.
//
// Seeds are processed one at a time, in the order given. For each seed:
// 1. fetch the homepage (skip the seed if that fails)
// 2. extract subscription links from it
// 3. discover internal links and keep the first `max_internal_links`
// 4. for each one: pause, fetch, extract
//
// Nothing runs concurrently. The pause before every internal fetch keeps
// the load on any one site low.
// =============================================================================

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::config::CrawlConfig;
use crate::error::FetchError;
use crate::extract::{discover_internal_links, extract_subscription_links};
use crate::fetch::Fetcher;

use super::report::SeedReport;

/// Every subscription link collected during one run.
pub type LinkSet = HashSet<String>;

pub struct Harvester {
    config: CrawlConfig,
    fetcher: Fetcher,
}

impl Harvester {
    pub fn new(config: CrawlConfig) -> Result<Self, FetchError> {
        let fetcher = Fetcher::new(&config)?;
        Ok(Self { config, fetcher })
    }

    /// Crawls every seed and returns the collected links plus one report per
    /// seed, in seed order.
    pub async fn run(&self) -> (LinkSet, Vec<SeedReport>) {
        let mut links = LinkSet::new();
        let mut reports = Vec::with_capacity(self.config.seeds.len());

        for seed in &self.config.seeds {
            let report = self.harvest_seed(seed, &mut links).await;
            reports.push(report);
        }

        info!(
            seeds = reports.len(),
            failed = reports.iter().filter(|r| !r.is_ok()).count(),
            unique_links = links.len(),
            "harvest finished"
        );

        (links, reports)
    }

    async fn harvest_seed(&self, seed: &str, links: &mut LinkSet) -> SeedReport {
        info!(%seed, "visiting seed");

        // Step 1: the homepage. Without it there is nothing to discover,
        // so a failure here ends this seed (but not the run)
        let homepage = match self.fetcher.fetch_text(seed).await {
            Ok(body) => body,
            Err(e) => {
                warn!(%seed, error = %e, "skipping seed");
                return SeedReport::failed(seed, e.to_string());
            }
        };

        let mut report = SeedReport::new(seed);
        report.pages_fetched += 1;

        // Step 2: subscription links published right on the homepage
        report.links_found += self.collect(seed, &homepage, links);

        // Step 3: article pages, in the order they appear on the homepage.
        // Earlier in the page usually means newer, so the first N are kept
        let candidates = discover_internal_links(seed, &homepage, self.config.min_path_len);
        let total = candidates.len();
        let selected: Vec<String> = candidates
            .into_iter()
            .take(self.config.max_internal_links)
            .collect();
        info!(%seed, found = total, following = selected.len(), "internal links");

        // Step 4: visit each selected page one at a time
        for page in &selected {
            // Politeness pause so we never hammer a single site
            tokio::time::sleep(self.config.delay).await;

            match self.fetcher.fetch_text(page).await {
                Ok(body) => {
                    report.pages_fetched += 1;
                    report.links_found += self.collect(page, &body, links);
                }
                Err(e) => {
                    // One bad page does not stop the rest of the seed
                    report.pages_failed += 1;
                    warn!(%page, error = %e, "failed to fetch internal page");
                }
            }
        }

        report
    }

    // Merges the page's subscription links into `links` and returns how many
    // were accepted (including ones already in the set).
    fn collect(&self, page: &str, body: &str, links: &mut LinkSet) -> usize {
        let found = extract_subscription_links(body);
        if found.is_empty() {
            debug!(%page, "no links found");
            return 0;
        }

        let mut accepted = 0;
        for link in found {
            // robots.txt, LICENSE files and similar are never subscriptions
            if self.config.is_excluded(&link) {
                debug!(%link, "excluded");
                continue;
            }
            // The set ignores links we already have from another page
            links.insert(link);
            accepted += 1;
        }

        info!(%page, accepted, "links found");
        accepted
    }
}
