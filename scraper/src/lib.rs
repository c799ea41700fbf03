pub mod calendar;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod harvest;
pub mod profile;
pub mod stitch;
pub mod table;
pub mod today;

#[cfg(test)]
pub mod tests;

// Re-export key types and functions for easier access
pub use crate::calendar::{configured_days, default_months, DayId, CALENDAR_YEAR, MONTH_DAYS};
pub use crate::config::HarvestConfig;
pub use crate::error::{CandidateShape, HarvestError};
pub use crate::extract::{
    clean_other_links, clean_other_names, day_page_url, extract_candidates, resolve_link,
    Candidate, CandidateGroup, CandidateGroups, ExtractionMode,
};
pub use crate::fetch::{fetch_html, HttpFetcher, PageFetcher};
pub use crate::harvest::{DayHarvester, HarvestReport, MismatchPolicy};
pub use crate::profile::{inspect_profile, ProfileStats};
pub use crate::stitch::{stitch_dir, stitch_records};
pub use crate::table::{read_table, write_table, BirthdayRecord};
pub use crate::today::pick_for_day;
