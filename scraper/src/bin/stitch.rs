use std::path::PathBuf;

use anyhow::Result;
use birthday_scraper::stitch_dir;
use clap::Parser;

/// Combine the per-day birthday files into one CSV sorted by date
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the per-day CSV files
    #[arg(long, default_value = "birthdays")]
    input_dir: PathBuf,

    /// Combined output file
    #[arg(long, default_value = "all_birthdays/birthday.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let rows = stitch_dir(&cli.input_dir, &cli.output)?;

    println!("Wrote {} rows to {}", rows, cli.output.display());
    Ok(())
}
