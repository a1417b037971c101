//! Normalized headline record definitions.

use serde::{Deserialize, Serialize};

use crate::Date;

/// A single normalized news headline.
///
/// Source-specific fields are discarded during normalization; only the
/// calendar date and the headline text survive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineRecord {
    /// Publication date (time of day discarded).
    pub date: Date,
    /// Headline text, non-empty after trimming.
    pub headline: String,
}

impl HeadlineRecord {
    /// Create a new headline record.
    #[must_use]
    pub fn new(date: Date, headline: impl Into<String>) -> Self {
        let headline = headline.into();
        debug_assert!(!headline.trim().is_empty());
        Self { date, headline }
    }
}
