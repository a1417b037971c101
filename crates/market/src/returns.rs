//! Daily return derivation.

use polars::prelude::*;
use sentifactor_primitives::Symbol;

use crate::MarketError;

/// Append `daily_return` as the percentage change of the close over the
/// immediately preceding row of the chronologically ordered series.
///
/// The first row has no prior close and is left null; the merger drops it
/// downstream.
///
/// # Errors
/// Returns an error if the close column for `symbol` is missing.
pub fn with_daily_return(df: DataFrame, symbol: &Symbol) -> Result<DataFrame, MarketError> {
    let close = symbol.metric_column("close");

    let out = df
        .lazy()
        .sort(["date"], SortMultipleOptions::default())
        .with_column(
            (col(close.as_str()) / col(close.as_str()).shift(lit(1)) - lit(1.0))
                .alias("daily_return"),
        )
        .collect()?;

    Ok(out)
}
