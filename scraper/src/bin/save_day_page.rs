use anyhow::{Context, Result};
use birthday_scraper::config::DEFAULT_BASE_URL;
use birthday_scraper::{day_page_url, extract_candidates, fetch_html, DayId, ExtractionMode};
use clap::Parser;
use std::fs;
use std::path::Path;

/// Save a day page as a regression fixture and check whether it extracts cleanly
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Day page to fetch, e.g. March_14
    day: DayId,

    /// Fixture name; defaults to the day identifier
    test_name: Option<String>,

    #[arg(long, value_enum, default_value_t = ExtractionMode::Sectioned)]
    mode: ExtractionMode,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let test_name = cli.test_name.unwrap_or_else(|| cli.day.to_string());

    let url = day_page_url(DEFAULT_BASE_URL, &cli.day);
    println!("Fetching HTML from {}...", url);
    let html = fetch_html(&url)?;

    // Create failures directory if it doesn't exist
    let failures_dir = Path::new("src/tests/fixtures/failures");
    fs::create_dir_all(failures_dir).context("Failed to create failures directory")?;

    let file_path = failures_dir.join(format!("{}.html", test_name));
    fs::write(&file_path, &html).context("Failed to write HTML file")?;
    println!(
        "Saved HTML to {} for regression testing",
        file_path.display()
    );

    let groups = extract_candidates(&html, cli.mode);
    println!("\nExtraction results ({:?} mode):", cli.mode);
    println!(
        "  - year-is-link: {} names, {} links",
        groups.year_is_link.names.len(),
        groups.year_is_link.links.len()
    );
    println!(
        "  - year-is-not-link: {} names, {} links",
        groups.year_is_not_link.names.len(),
        groups.year_is_not_link.links.len()
    );

    match groups.align(&cli.day) {
        Ok(candidates) => {
            println!("Lists align: {} candidates. This may not be a failure case.", candidates.len());
        }
        Err(e) => {
            println!("Extraction failed with error: {}", e);
            println!("\nThis page has been saved and will be included in regression tests.");
        }
    }

    Ok(())
}
