use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::table::{read_table, write_table, BirthdayRecord};

/// Every `*.csv` directly inside `dir`, in file-name order, leaving out `exclude`.
pub fn day_files(dir: &Path, exclude: Option<&Path>) -> Result<Vec<PathBuf>> {
    let excluded = exclude.and_then(|p| p.canonicalize().ok());

    let mut files = Vec::new();
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() || path.extension().map_or(true, |ext| ext != "csv") {
            continue;
        }
        if excluded.is_some() && path.canonicalize().ok() == excluded {
            continue;
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}

/// Concatenate tables and stable-sort by birthday; equal dates keep input order.
pub fn stitch_records(tables: Vec<Vec<BirthdayRecord>>) -> Vec<BirthdayRecord> {
    let mut records: Vec<BirthdayRecord> = tables.into_iter().flatten().collect();
    records.sort_by_key(|record| record.birthday);
    records
}

/// Combine every day file in `input_dir` into `output`. Returns the row count.
pub fn stitch_dir(input_dir: &Path, output: &Path) -> Result<usize> {
    let files = day_files(input_dir, Some(output))?;
    if files.is_empty() {
        return Err(anyhow::anyhow!(
            "No day files to stitch in {}",
            input_dir.display()
        ));
    }
    info!("Stitching {} files from {}", files.len(), input_dir.display());

    let mut tables = Vec::with_capacity(files.len());
    for file in &files {
        let table = read_table(file)
            .with_context(|| format!("Failed to parse day file: {}", file.display()))?;
        debug!("{}: {} rows", file.display(), table.len());
        tables.push(table);
    }

    let records = stitch_records(tables);
    write_table(output, &records)
        .with_context(|| format!("Failed to write combined file: {}", output.display()))?;

    Ok(records.len())
}
