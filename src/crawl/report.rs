// src/crawl/report.rs
// =============================================================================
// Per-seed summary of a harvest run, printed at the end as a table or JSON.
// =============================================================================

use serde::Serialize;

/// How the seed's homepage fetch went.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SeedOutcome {
    /// Homepage fetched; internal pages may still have failed
    Ok,
    /// Homepage could not be fetched, the seed was skipped
    Failed { message: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct SeedReport {
    pub seed: String,
    #[serde(flatten)]
    pub outcome: SeedOutcome,
    /// Homepage plus internal pages that returned a body
    pub pages_fetched: usize,
    /// Internal pages whose fetch failed
    pub pages_failed: usize,
    /// Links accepted from this seed, before cross-seed deduplication
    pub links_found: usize,
}

impl SeedReport {
    pub fn new(seed: &str) -> Self {
        Self {
            seed: seed.to_string(),
            outcome: SeedOutcome::Ok,
            pages_fetched: 0,
            pages_failed: 0,
            links_found: 0,
        }
    }

    pub fn failed(seed: &str, message: String) -> Self {
        Self {
            outcome: SeedOutcome::Failed { message },
            ..Self::new(seed)
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, SeedOutcome::Ok)
    }
}
