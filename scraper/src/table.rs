use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::DayId;
use crate::error::{HarvestError, Result};

pub const HEADERS: [&str; 4] = ["name", "URL", "string_date", "birthday"];

/// One kept person, as stored in both the day files and the combined corpus.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BirthdayRecord {
    pub name: String,
    #[serde(rename = "URL")]
    pub url: String,
    pub string_date: String,
    pub birthday: NaiveDate,
}

pub fn day_file_path(out_dir: &Path, day: &DayId) -> PathBuf {
    out_dir.join(format!("{}.csv", day))
}

/// Write `records` to `path`, replacing any existing file. The header row is
/// written even when there are no records.
pub fn write_table(path: &Path, records: &[BirthdayRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let csv_error = |source| HarvestError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_error)?;
    writer.write_record(HEADERS).map_err(csv_error)?;
    for record in records {
        writer.serialize(record).map_err(csv_error)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn read_table(path: &Path) -> Result<Vec<BirthdayRecord>> {
    let csv_error = |source| HarvestError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(csv_error)?;
    reader
        .deserialize()
        .collect::<std::result::Result<Vec<BirthdayRecord>, _>>()
        .map_err(csv_error)
}
