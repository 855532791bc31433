// src/main.rs
// CLI orchestrator: load the organization registry, reconcile one raw lead
// name against it, and print the result.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::time::Instant;

use matcher_lib::matching::rank::{best_match, rank_matches};
use matcher_lib::models::core::Organization;
use matcher_lib::models::matching::ScoredMatch;
use matcher_lib::registry::load_registry;
use matcher_lib::utils::config::MatcherConfig;
use matcher_lib::utils::env::load_env;

#[derive(Parser, Debug)]
#[command(
    name = "reconcile",
    about = "Reconcile a free-text business name against the organization registry"
)]
struct Cli {
    /// Raw business name as extracted from the lead source
    raw_name: String,

    /// Registry file (JSON array) or directory of JSON files
    #[arg(long, default_value = "registry")]
    registry: PathBuf,

    /// Minimum similarity score; overrides MATCH_THRESHOLD from the environment
    #[arg(long)]
    threshold: Option<f64>,

    /// Print every candidate at or above the threshold instead of only the best
    #[arg(long)]
    all: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    load_env();

    let cli = Cli::parse();
    let config = MatcherConfig::from_env().context("Invalid matcher configuration")?;
    config.log_config();
    let threshold = cli.threshold.unwrap_or(config.threshold);

    let start = Instant::now();
    let candidates = load_registry(&cli.registry).context("Failed to load organization registry")?;
    info!(
        "Loaded {} candidate organizations from {}",
        candidates.len(),
        cli.registry.display()
    );

    if cli.all {
        let ranked = rank_matches(&cli.raw_name, &candidates, threshold)?;
        if ranked.is_empty() {
            println!("No match for {:?} at threshold {:.2}", cli.raw_name, threshold);
        } else {
            print_match_table(&ranked);
        }
    } else {
        match best_match(&cli.raw_name, &candidates, threshold)? {
            Some(matched) => print_match_table(std::slice::from_ref(&matched)),
            None => println!("No match for {:?} at threshold {:.2}", cli.raw_name, threshold),
        }
    }

    info!("Matching completed in {:.2?}", start.elapsed());
    Ok(())
}

fn print_match_table(matches: &[ScoredMatch<'_, Organization>]) {
    println!("{:<8} {:<42} {}", "SCORE", "NAME", "ID");
    for m in matches {
        println!(
            "{:<8.3} {:<42} {}",
            m.score,
            m.candidate.name,
            m.candidate.id().unwrap_or("-")
        );
    }
}
