//! Merged feature table construction.

use polars::prelude::*;
use sentifactor_math::zscore;
use sentifactor_primitives::Symbol;

use crate::ModelError;

/// Target column: daily percentage return of the reference instrument.
pub const TARGET_COL: &str = "daily_return";
/// Mean compound sentiment for the date.
pub const SENTIMENT_COL: &str = "daily_sentiment";
/// Positional lag of the daily return (momentum feature).
pub const PREV_RETURN_COL: &str = "prev_return";
/// Whole-sample z-score of traded volume.
pub const VOLUME_SCALED_COL: &str = "volume_scaled";

/// Configuration for feature derivation.
#[derive(Debug, Clone)]
pub struct FeatureConfig {
    /// Positional lag in rows for the momentum feature.
    pub lag: i64,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self { lag: 1 }
    }
}

/// Build the merged feature table from market bars and daily sentiment.
///
/// Inner-joins both frames on `date` (dates present on one side only are
/// dropped), sorts by date, then derives:
///
/// * [`PREV_RETURN_COL`] - the prior merged row's daily return. This is a
///   positional lag over the merged rows, not the prior calendar day.
/// * [`VOLUME_SCALED_COL`] - z-score of volume with mean and sample
///   standard deviation taken over the entire merged table. The full-sample
///   statistics look ahead relative to any individual row; that matches
///   the explanatory (not predictive) intent of the model.
///
/// Rows with a null in any feature or target column are dropped, which
/// removes the first merged row (undefined lag).
///
/// # Errors
/// Returns an error if required columns are missing or the join fails.
pub fn build_feature_table(
    market: DataFrame,
    sentiment: DataFrame,
    symbol: &Symbol,
    config: &FeatureConfig,
) -> Result<DataFrame, ModelError> {
    let volume_col = symbol.metric_column("volume");

    let merged = market
        .lazy()
        .join(
            sentiment.lazy(),
            [col("date")],
            [col("date")],
            JoinArgs::new(JoinType::Inner),
        )
        .sort(["date"], SortMultipleOptions::default())
        .with_column(col(TARGET_COL).shift(lit(config.lag)).alias(PREV_RETURN_COL))
        .with_column(zscore(volume_col.as_str()).alias(VOLUME_SCALED_COL))
        .filter(
            col(TARGET_COL)
                .is_not_null()
                .and(col(SENTIMENT_COL).is_not_null())
                .and(col(PREV_RETURN_COL).is_not_null())
                .and(col(VOLUME_SCALED_COL).is_not_null()),
        )
        .collect()?;

    Ok(merged)
}
