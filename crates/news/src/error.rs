//! Error types for headline ingestion.

/// Errors that can occur while loading or aggregating headlines.
#[derive(Debug, thiserror::Error)]
pub enum NewsError {
    /// Required column absent after normalization.
    #[error("missing required column: {0}")]
    MissingColumn(String),

    /// No usable rows or frames.
    #[error("no headline data provided")]
    EmptyInput,

    /// Polars error.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}
