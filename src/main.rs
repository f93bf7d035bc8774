// src/main.rs
// =============================================================================
// This is the entry point of sub-harvest.
//
// What happens here:
// 1. Parse command-line flags into a CrawlConfig
// 2. Set up logging (level from RUST_LOG, default "info")
// 3. Crawl every seed and collect subscription links
// 4. Write the sorted list to the output file
// 5. Print a per-seed report and exit
//
// Logs go to stdout, except with --json: then stdout carries only the JSON
// report and logs move to stderr so the output can be piped to a parser.
//
// Exit codes: 0 once the output file is written, no matter how many seeds
// failed; 2 if the file could not be written.
// =============================================================================

mod cli;
mod config;
mod crawl;
mod error;
mod extract;
mod fetch;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;
use crawl::{Harvester, SeedOutcome, SeedReport};

#[tokio::main]
async fn main() {
    // --help and --version exit from here, before any logging is set up
    let cli = Cli::parse();
    init_logging(cli.json);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

fn init_logging(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    let layer = tracing_subscriber::fmt::layer().with_target(false);

    // Keep stdout clean for the JSON report
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry().with(filter).with(layer).init();
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.to_config();
    let output_path = config.output.clone();

    tracing::info!(seeds = config.seeds.len(), "starting harvest");

    let harvester = Harvester::new(config).context("could not set up the HTTP client")?;
    let (links, reports) = harvester.run().await;

    let written = output::write_links(&output_path, &links)?;

    if cli.json {
        // Nothing but the report on stdout
        println!("{}", json_report(&reports)?);
    } else {
        print_table(&reports);
        println!("\nSaved {} link(s) to {}", written, output_path.display());
    }

    Ok(())
}

fn json_report(reports: &[SeedReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

fn print_table(reports: &[SeedReport]) {
    println!();
    println!("{:<50} {:<8} {:>6} {:>7} {:>6}", "SEED", "STATUS", "PAGES", "FAILED", "LINKS");
    println!("{}", "=".repeat(81));

    for report in reports {
        let seed = if report.seed.chars().count() > 47 {
            format!("{}...", report.seed.chars().take(47).collect::<String>())
        } else {
            report.seed.clone()
        };
        let status = match &report.outcome {
            SeedOutcome::Ok => "ok",
            SeedOutcome::Failed { .. } => "failed",
        };

        println!(
            "{:<50} {:<8} {:>6} {:>7} {:>6}",
            seed, status, report.pages_fetched, report.pages_failed, report.links_found
        );
    }
}
