//! Error types for feature construction and model fitting.

use sentifactor_math::MathError;

/// Errors that can occur during feature construction or estimation.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Math error.
    #[error("math error: {0}")]
    Math(#[from] MathError),

    /// Polars error.
    #[error("data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Missing required column.
    #[error("missing required column: {0}")]
    MissingColumn(String),
}
