//! Aggregated daily sentiment definitions.

use serde::{Deserialize, Serialize};

use crate::Date;

/// Mean compound sentiment for a single calendar date.
///
/// The score is the arithmetic mean of per-headline compound polarity
/// scores and therefore stays within [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailySentiment {
    /// Calendar date (unique key within a series).
    pub date: Date,
    /// Mean compound polarity score in [-1, 1].
    pub score: f64,
}

impl DailySentiment {
    /// Create a new daily sentiment value.
    #[must_use]
    pub fn new(date: Date, score: f64) -> Self {
        debug_assert!((-1.0..=1.0).contains(&score));
        Self { date, score }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_sentiment_fields() {
        let date = Date::from_ymd_opt(2022, 1, 3).unwrap();
        let daily = DailySentiment::new(date, 0.2);

        assert_eq!(daily.date, date);
        assert_eq!(daily.score, 0.2);
    }
}
