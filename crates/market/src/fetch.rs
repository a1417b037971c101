//! Daily bar retrieval from Yahoo Finance.

use chrono::{DateTime, Datelike};
use polars::prelude::*;
use sentifactor_primitives::{Date, MarketBar, Symbol, days_from_epoch};
use time::OffsetDateTime;
use yahoo_finance_api as yahoo;

use crate::MarketError;

/// Fetch daily bars for `symbol` over the inclusive `[start, end]` range.
///
/// Quotes arrive chronologically ordered from the provider; they are
/// converted to typed bars with the calendar date of each quote's
/// timestamp.
///
/// # Errors
/// Returns an error if the request fails or no quotes come back.
pub async fn fetch_daily_bars(
    symbol: &Symbol,
    start: Date,
    end: Date,
) -> Result<Vec<MarketBar>, MarketError> {
    let provider = yahoo::YahooConnector::new()?;

    let response = provider
        .get_quote_history(symbol.as_str(), utc_day_start(start)?, utc_day_end(end)?)
        .await?;
    let quotes = response.quotes()?;

    if quotes.is_empty() {
        return Err(MarketError::EmptyHistory { symbol: symbol.to_string() });
    }

    Ok(bars_from_quotes(&quotes))
}

/// Convert raw quotes to typed daily bars.
#[must_use]
pub fn bars_from_quotes(quotes: &[yahoo::Quote]) -> Vec<MarketBar> {
    quotes
        .iter()
        .filter_map(|quote| {
            let date = DateTime::from_timestamp(quote.timestamp, 0)?.date_naive();
            Some(MarketBar::new(date, quote.close, quote.volume))
        })
        .collect()
}

/// Build the flat-labelled frame `| date | close_SYM | volume_SYM |`.
///
/// # Errors
/// Returns an error if the frame cannot be assembled.
pub fn bars_frame(bars: &[MarketBar], symbol: &Symbol) -> Result<DataFrame, MarketError> {
    let days: Vec<i32> = bars.iter().map(|bar| days_from_epoch(bar.date)).collect();
    let closes: Vec<f64> = bars.iter().map(|bar| bar.close).collect();
    let volumes: Vec<f64> = bars.iter().map(|bar| bar.volume as f64).collect();

    let dates = Series::new("date".into(), days).cast(&DataType::Date)?;
    let df = DataFrame::new(vec![
        dates.into(),
        Column::new(symbol.metric_column("close").into(), closes),
        Column::new(symbol.metric_column("volume").into(), volumes),
    ])?;

    Ok(df)
}

fn utc_day_start(date: Date) -> Result<OffsetDateTime, MarketError> {
    Ok(calendar_date(date)?.midnight().assume_utc())
}

fn utc_day_end(date: Date) -> Result<OffsetDateTime, MarketError> {
    Ok(calendar_date(date)?.with_hms(23, 59, 59)?.assume_utc())
}

fn calendar_date(date: Date) -> Result<time::Date, MarketError> {
    let month = time::Month::try_from(date.month() as u8)?;
    Ok(time::Date::from_calendar_date(date.year(), month, date.day() as u8)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(timestamp: i64, close: f64, volume: u64) -> yahoo::Quote {
        yahoo::Quote {
            timestamp,
            open: close,
            high: close,
            low: close,
            volume,
            close,
            adjclose: close,
        }
    }

    #[test]
    fn quotes_convert_to_dated_bars() {
        // 2022-01-03 14:30:00 UTC
        let quotes = vec![quote(1_641_220_200, 100.0, 1_000)];
        let bars = bars_from_quotes(&quotes);

        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].date, Date::from_ymd_opt(2022, 1, 3).unwrap());
        assert_eq!(bars[0].close, 100.0);
        assert_eq!(bars[0].volume, 1_000);
    }

    #[test]
    fn bars_frame_flattens_labels() {
        let symbol = Symbol::from("SPY");
        let bars = vec![
            MarketBar::new(Date::from_ymd_opt(2022, 1, 3).unwrap(), 100.0, 1_000),
            MarketBar::new(Date::from_ymd_opt(2022, 1, 4).unwrap(), 102.0, 1_500),
        ];

        let df = bars_frame(&bars, &symbol).unwrap();

        assert_eq!(df.height(), 2);
        assert!(df.column("close_SPY").is_ok());
        assert!(df.column("volume_SPY").is_ok());
        assert_eq!(df.column("date").unwrap().dtype(), &DataType::Date);
    }

    #[test]
    fn fetch_bounds_cover_whole_days() {
        let start = utc_day_start(Date::from_ymd_opt(2022, 1, 3).unwrap()).unwrap();
        let end = utc_day_end(Date::from_ymd_opt(2022, 1, 3).unwrap()).unwrap();

        assert_eq!(end.unix_timestamp() - start.unix_timestamp(), 86_399);
    }
}
