use std::path::Path;

use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::calendar::DayId;
use crate::error::Result;
use crate::table::{day_file_path, read_table, BirthdayRecord};

/// One random person from `day`'s file in `dir`, or `None` when the file has
/// no rows. A missing or malformed file is an error.
pub fn pick_for_day<R: Rng + ?Sized>(
    dir: &Path,
    day: &DayId,
    rng: &mut R,
) -> Result<Option<BirthdayRecord>> {
    let path = day_file_path(dir, day);
    let records = read_table(&path)?;
    debug!("{}: choosing from {} rows", path.display(), records.len());
    Ok(records.choose(rng).cloned())
}
