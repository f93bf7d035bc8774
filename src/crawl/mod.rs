// src/crawl/mod.rs
// =============================================================================
// This module runs the harvest.
//
// For every seed: fetch the homepage, collect subscription links from it,
// then visit a bounded number of same-site pages one level deep and collect
// from those too. Everything found lands in a single deduplicated LinkSet.
//
// Failures never stop the run. A seed whose homepage cannot be fetched is
// reported as failed and skipped; an internal page that fails is counted and
// the seed carries on.
// =============================================================================

mod harvest;
mod report;

pub use harvest::{Harvester, LinkSet};
pub use report::{SeedOutcome, SeedReport};
