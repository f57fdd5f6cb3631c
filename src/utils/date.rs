//! Calendar dates for post metadata.
//!
//! Posts only record the day they were published. `PublishDate` keeps that
//! as a plain `const`-constructible value so the post tables can live in
//! `const` slices, and attaches a fixed UTC offset only when a feed needs a
//! full timestamp.
//!
//! # Examples
//!
//! ```ignore
//! let date = PublishDate::ymd(2022, 11, 1);
//! let dt = date.at_midnight(offset)?;
//!
//! assert_eq!(dt.to_rfc3339(), "2022-11-01T00:00:00-07:00");
//! ```

use anyhow::{Result, anyhow};
use chrono::{DateTime, FixedOffset, NaiveDate};
use std::fmt;

/// Calendar day a post was published, without time or zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PublishDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl PublishDate {
    pub const fn ymd(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Local midnight of this day in `offset`.
    ///
    /// Fails if the year, month and day do not name a real calendar day.
    pub fn at_midnight(self, offset: FixedOffset) -> Result<DateTime<FixedOffset>> {
        let date = NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
        .ok_or_else(|| anyhow!("{self} is not a calendar date"))?;

        date.and_hms_opt(0, 0, 0)
            .and_then(|naive| naive.and_local_timezone(offset).single())
            .ok_or_else(|| anyhow!("{self} has no midnight at {offset}"))
    }
}

impl fmt::Display for PublishDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
