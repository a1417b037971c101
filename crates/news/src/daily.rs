//! Daily sentiment aggregation.

use polars::prelude::*;
use sentifactor_primitives::{DailySentiment, Date, date_from_days};

use crate::{NewsError, SentimentScorer};

/// Concatenate normalized headline frames in input order.
///
/// No de-duplication is performed across sources; repeated headlines all
/// enter the daily mean with equal weight.
///
/// # Errors
/// Returns an error if no frames are given or the schemas do not line up.
pub fn concat_sources(frames: Vec<DataFrame>) -> Result<DataFrame, NewsError> {
    let mut iter = frames.into_iter();
    let Some(mut combined) = iter.next() else {
        return Err(NewsError::EmptyInput);
    };
    for frame in iter {
        combined.vstack_mut(&frame)?;
    }

    Ok(combined)
}

/// Attach a `sentiment` column by scoring every headline.
///
/// # Errors
/// Returns an error if the `headline` column is missing.
pub fn score_headlines(
    df: &DataFrame,
    scorer: &dyn SentimentScorer,
) -> Result<DataFrame, NewsError> {
    let headlines = df.column("headline")?.str()?;
    let scores: Vec<f64> =
        headlines.into_iter().map(|text| text.map_or(0.0, |t| scorer.compound(t))).collect();

    let mut scored = df.clone();
    scored.with_column(Column::new("sentiment".into(), scores))?;

    Ok(scored)
}

/// Arithmetic mean compound score per calendar date, ascending by date.
///
/// Output frame: `| date | daily_sentiment |`, one row per date.
///
/// # Errors
/// Returns an error if the `date` or `sentiment` column is missing.
pub fn daily_mean_sentiment(scored: &DataFrame) -> Result<DataFrame, NewsError> {
    let daily = scored
        .clone()
        .lazy()
        .group_by([col("date")])
        .agg([col("sentiment").mean().alias("daily_sentiment")])
        .sort(["date"], SortMultipleOptions::default())
        .collect()?;

    Ok(daily)
}

/// Typed view of a daily sentiment frame, in frame order.
///
/// # Errors
/// Returns an error if the frame is empty or columns are missing.
pub fn daily_series(daily: &DataFrame) -> Result<Vec<DailySentiment>, NewsError> {
    let days = daily.column("date")?.cast(&DataType::Int32)?;
    let days = days.i32()?;
    let scores = daily.column("daily_sentiment")?.f64()?;

    let series: Vec<DailySentiment> = days
        .into_iter()
        .zip(scores.into_iter())
        .filter_map(|(day, score)| Some(DailySentiment::new(date_from_days(day?), score?)))
        .collect();

    if series.is_empty() {
        return Err(NewsError::EmptyInput);
    }

    Ok(series)
}

/// Inclusive date range covered by a daily sentiment frame.
///
/// # Errors
/// Returns an error if the frame is empty.
pub fn sentiment_date_range(daily: &DataFrame) -> Result<(Date, Date), NewsError> {
    let series = daily_series(daily)?;
    // daily_mean_sentiment sorts ascending, so the ends are the range
    let first = series.first().map(|s| s.date).ok_or(NewsError::EmptyInput)?;
    let last = series.last().map(|s| s.date).ok_or(NewsError::EmptyInput)?;

    Ok((first, last))
}
