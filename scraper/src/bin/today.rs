use std::path::PathBuf;

use anyhow::Result;
use birthday_scraper::{pick_for_day, DayId};
use clap::Parser;

/// Show someone born on today's date, picked at random from the day files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the per-day CSV files
    #[arg(long, default_value = "birthdays")]
    dir: PathBuf,

    /// Day to pick from instead of today, e.g. March_14
    #[arg(long)]
    day: Option<DayId>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let day = match cli.day {
        Some(day) => day,
        None => DayId::from_date(chrono::Local::now().date_naive())?,
    };

    match pick_for_day(&cli.dir, &day, &mut rand::rng())? {
        Some(record) => {
            println!("{}", record.name);
            println!("{}", record.url);
        }
        None => println!("Nobody on file for {}", day),
    }
    Ok(())
}
