//! Market bar type definitions.

use serde::{Deserialize, Serialize};

use crate::Date;

/// A daily price bar for the reference instrument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketBar {
    /// Trading day.
    pub date: Date,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    pub volume: u64,
}

impl MarketBar {
    /// Create a new market bar.
    #[must_use]
    pub const fn new(date: Date, close: f64, volume: u64) -> Self {
        Self { date, close, volume }
    }

    /// Percentage return of this bar's close versus a prior close.
    ///
    /// Returns `None` when the prior close is not strictly positive.
    #[must_use]
    pub fn return_from(&self, prior_close: f64) -> Option<f64> {
        (prior_close > 0.0).then(|| self.close / prior_close - 1.0)
    }
}
