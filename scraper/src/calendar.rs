use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Month, NaiveDate};

use crate::error::{HarvestError, Result};

/// Year every birthday is stamped with. A leap year, so `February_29` is valid.
pub const CALENDAR_YEAR: i32 = 2020;

/// Months harvested by default and their day counts.
///
/// This stops at September. Whether that is a deliberate subset or an
/// unfinished table is unknown, so it is kept as-is; pass `--month` to reach
/// the rest of the year.
pub const MONTH_DAYS: [(Month, u32); 9] = [
    (Month::January, 31),
    (Month::February, 28),
    (Month::March, 31),
    (Month::April, 30),
    (Month::May, 31),
    (Month::June, 30),
    (Month::July, 31),
    (Month::August, 31),
    (Month::September, 30),
];

/// A single day page, e.g. `March_14`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayId {
    month: Month,
    day: u32,
}

impl DayId {
    pub fn new(month: Month, day: u32) -> Result<Self> {
        if NaiveDate::from_ymd_opt(CALENDAR_YEAR, month.number_from_month(), day).is_none() {
            return Err(HarvestError::InvalidDay(format!("{}_{}", month.name(), day)));
        }
        Ok(DayId { month, day })
    }

    /// Day page for the month and day of any date; the year is ignored.
    pub fn from_date(date: impl Datelike) -> Result<Self> {
        let month = u8::try_from(date.month())
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .ok_or_else(|| HarvestError::InvalidDay(format!("month {}", date.month())))?;
        DayId::new(month, date.day())
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Calendar date in [`CALENDAR_YEAR`].
    pub fn date(&self) -> NaiveDate {
        // Validated in `new`
        NaiveDate::from_ymd_opt(CALENDAR_YEAR, self.month.number_from_month(), self.day)
            .unwrap_or_default()
    }
}

impl fmt::Display for DayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.month.name(), self.day)
    }
}

impl FromStr for DayId {
    type Err = HarvestError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || HarvestError::InvalidDay(s.to_string());
        let (month, day) = s.split_once('_').ok_or_else(invalid)?;
        let month = month.parse::<Month>().map_err(|_| invalid())?;
        let day = day.parse::<u32>().map_err(|_| invalid())?;
        DayId::new(month, day).map_err(|_| invalid())
    }
}

/// Number of days harvested for `month`: the fixed table when it has an
/// entry, otherwise the month's real length in [`CALENDAR_YEAR`].
pub fn days_in_month(month: Month) -> u32 {
    if let Some((_, days)) = MONTH_DAYS.iter().find(|(m, _)| *m == month) {
        return *days;
    }
    let first_of_next = match month {
        Month::December => NaiveDate::from_ymd_opt(CALENDAR_YEAR + 1, 1, 1),
        _ => NaiveDate::from_ymd_opt(CALENDAR_YEAR, month.number_from_month() + 1, 1),
    };
    first_of_next
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(0)
}

/// Every day of `months`, in the order given.
pub fn configured_days(months: &[Month]) -> Vec<DayId> {
    months
        .iter()
        .flat_map(|&month| (1..=days_in_month(month)).map(move |day| DayId { month, day }))
        .collect()
}

/// The months in [`MONTH_DAYS`].
pub fn default_months() -> Vec<Month> {
    MONTH_DAYS.iter().map(|(m, _)| *m).collect()
}
