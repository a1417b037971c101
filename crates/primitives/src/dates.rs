//! Conversions between calendar dates and epoch-day counts.
//!
//! Polars stores `Date` columns as days since the Unix epoch; these helpers
//! keep that conversion in one place.

use crate::Date;

/// Days since the Unix epoch for a calendar date.
#[must_use]
pub fn days_from_epoch(date: Date) -> i32 {
    (date - Date::default()).num_days() as i32
}

/// Calendar date for a days-since-epoch count.
#[must_use]
pub fn date_from_days(days: i32) -> Date {
    Date::default() + chrono::Duration::days(i64::from(days))
}
