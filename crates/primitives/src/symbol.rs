//! Reference instrument symbol newtype.

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Ticker symbol of the reference instrument.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, Into, Serialize, Deserialize)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// Symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Flattened `metric_symbol` column label, e.g. `close_SPY`.
    ///
    /// Single-level rendering of the provider's two-level label scheme.
    #[must_use]
    pub fn metric_column(&self, metric: &str) -> String {
        format!("{metric}_{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
