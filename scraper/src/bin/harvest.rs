use std::path::PathBuf;

use anyhow::{Context, Result};
use birthday_scraper::config::{DEFAULT_BASE_URL, DEFAULT_MIN_BODY_TEXT_NODES};
use birthday_scraper::{
    configured_days, default_months, DayHarvester, DayId, ExtractionMode, HarvestConfig,
    HttpFetcher, MismatchPolicy,
};
use chrono::Month;
use clap::Parser;

/// Scrape birthdays from encyclopedia day pages into one CSV per day
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory the per-day CSV files are written to
    #[arg(long, default_value = "birthdays")]
    out_dir: PathBuf,

    /// Month to harvest (repeatable). Defaults to January through September
    #[arg(long = "month", value_parser = parse_month)]
    months: Vec<Month>,

    /// Harvest a single day instead, e.g. March_14
    #[arg(long, conflicts_with = "months")]
    day: Option<DayId>,

    /// Minimum number of body text nodes for a profile to be kept
    #[arg(long, default_value_t = DEFAULT_MIN_BODY_TEXT_NODES)]
    min_body_text_nodes: usize,

    /// Site root the day pages and profile links hang off
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// How the births list is located on a day page
    #[arg(long, value_enum, default_value_t = ExtractionMode::Sectioned)]
    mode: ExtractionMode,

    /// Skip days whose names and links don't line up instead of stopping
    #[arg(long)]
    skip_misaligned: bool,
}

fn parse_month(s: &str) -> Result<Month, String> {
    s.parse::<Month>()
        .map_err(|_| format!("not a month name: {}", s))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let days = match cli.day {
        Some(day) => vec![day],
        None if cli.months.is_empty() => configured_days(&default_months()),
        None => configured_days(&cli.months),
    };

    let config = HarvestConfig {
        base_url: cli.base_url,
        min_body_text_nodes: cli.min_body_text_nodes,
        mode: cli.mode,
    };
    let policy = if cli.skip_misaligned {
        MismatchPolicy::Skip
    } else {
        MismatchPolicy::Abort
    };

    println!("Harvesting {} days into {}", days.len(), cli.out_dir.display());

    let harvester = DayHarvester::new(HttpFetcher::new(), config);
    let report = harvester
        .run(&days, &cli.out_dir, policy)
        .context("Harvest stopped")?;

    println!("\nWrote {} day files", report.written.len());
    if !report.skipped.is_empty() {
        println!("Skipped {} days:", report.skipped.len());
        for (day, err) in &report.skipped {
            println!("  {}: {}", day, err);
        }
    }

    Ok(())
}
