// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Every flag is optional. Running `sub-harvest` with no arguments crawls the
// built-in seed list and writes `nodes_list.txt` in the current directory.
// The flags exist so a run can be pointed at other sites (or a local test
// server) without touching the code.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::{
    CrawlConfig, DEFAULT_DELAY_MS, DEFAULT_MAX_INTERNAL_LINKS, DEFAULT_MIN_PATH_LEN,
    DEFAULT_OUTPUT, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

// #[derive(Parser)] tells clap to generate the parsing code for us
#[derive(Parser, Debug)]
#[command(
    name = "sub-harvest",
    version = "0.1.0",
    about = "Crawl seed websites and collect proxy subscription links",
    long_about = "sub-harvest visits each seed site, follows a few same-site article links, \
                  and collects every URL ending in .yaml, .yml or .txt into a sorted file."
)]
pub struct Cli {
    /// Seed URL to crawl (repeat for several). Replaces the built-in list.
    ///
    /// Example: --seed https://example.com/ --seed https://other.org/
    #[arg(long = "seed", value_name = "URL")]
    pub seeds: Vec<String>,

    /// File the sorted link list is written to (overwritten every run)
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// How many internal pages to follow per seed
    #[arg(long, default_value_t = DEFAULT_MAX_INTERNAL_LINKS)]
    pub max_internal_links: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Pause before each internal page fetch, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// Internal links with a path this short or shorter are skipped
    #[arg(long, default_value_t = DEFAULT_MIN_PATH_LEN)]
    pub min_path_len: usize,

    /// User-Agent header sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Print the run report as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Turns parsed flags into the crawler configuration.
    pub fn to_config(&self) -> CrawlConfig {
        let mut config = CrawlConfig {
            max_internal_links: self.max_internal_links,
            timeout: Duration::from_secs(self.timeout_secs),
            delay: Duration::from_millis(self.delay_ms),
            user_agent: self.user_agent.clone(),
            min_path_len: self.min_path_len,
            output: self.output.clone(),
            ..CrawlConfig::default()
        };

        // An empty list means "use the defaults", not "crawl nothing"
        if !self.seeds.is_empty() {
            config.seeds = self.seeds.clone();
        }

        config
    }
}
