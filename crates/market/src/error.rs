//! Error types for market data retrieval.

/// Errors that can occur while fetching or shaping market data.
#[derive(Debug, thiserror::Error)]
pub enum MarketError {
    /// Yahoo Finance request or decode failure.
    #[error("yahoo finance error: {0}")]
    Yahoo(#[from] yahoo_finance_api::YahooError),

    /// No quotes returned for the requested symbol and range.
    #[error("no daily history for {symbol}")]
    EmptyHistory {
        /// Requested symbol.
        symbol: String,
    },

    /// Date outside the representable range.
    #[error("invalid date: {0}")]
    InvalidDate(#[from] time::error::ComponentRange),

    /// Polars error.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}
