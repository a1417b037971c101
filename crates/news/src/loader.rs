//! Headline dataset loading and normalization.

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::*;
use sentifactor_primitives::{Date, HeadlineRecord, days_from_epoch};

use crate::NewsError;

/// Column synonyms mapped to canonical names, applied after lower-casing.
///
/// A synonym is only renamed when the canonical column is not already
/// present.
const COLUMN_SYNONYMS: &[(&str, &str)] = &[
    ("headlines", "headline"),
    ("text", "headline"),
    ("published", "date"),
    ("time", "date"),
];

/// Date-only shapes observed across the source exports.
const DATE_FORMATS: &[&str] =
    &["%Y-%m-%d", "%m/%d/%Y", "%d-%b-%y", "%b %d %Y", "%b %d, %Y", "%B %d, %Y"];

/// Datetime shapes; the time component is discarded after parsing.
const DATETIME_FORMATS: &[&str] =
    &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%m/%d/%Y %H:%M"];

/// Load one raw headline dataset and normalize it.
///
/// Column labels are lower-cased and known synonyms are mapped to the
/// canonical `headline`/`date` pair. Rows whose date fails to parse or
/// whose headline is empty are dropped without raising.
///
/// # Errors
/// Returns an error if the file cannot be read or lacks a
/// `headline`/`date` column after synonym mapping.
pub fn load_headlines(path: impl AsRef<Path>) -> Result<Vec<HeadlineRecord>, NewsError> {
    let mut df = CsvReadOptions::default()
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
        .finish()?;

    normalize_columns(&mut df)?;

    let dates = df.column("date")?.str()?;
    let headlines = df.column("headline")?.str()?;

    let mut records = Vec::with_capacity(df.height());
    for (raw_date, headline) in dates.into_iter().zip(headlines.into_iter()) {
        let (Some(raw_date), Some(headline)) = (raw_date, headline) else {
            continue;
        };
        let headline = headline.trim();
        if headline.is_empty() {
            continue;
        }
        let Some(date) = parse_date(raw_date) else {
            continue;
        };
        records.push(HeadlineRecord::new(date, headline));
    }

    Ok(records)
}

/// Build the canonical two-column frame `| date | headline |`.
///
/// # Errors
/// Returns an error if the frame cannot be assembled.
pub fn headline_frame(records: &[HeadlineRecord]) -> Result<DataFrame, NewsError> {
    let days: Vec<i32> = records.iter().map(|r| days_from_epoch(r.date)).collect();
    let headlines: Vec<&str> = records.iter().map(|r| r.headline.as_str()).collect();

    let dates = Series::new("date".into(), days).cast(&DataType::Date)?;
    let df = DataFrame::new(vec![dates.into(), Column::new("headline".into(), headlines)])?;

    Ok(df)
}

fn normalize_columns(df: &mut DataFrame) -> Result<(), NewsError> {
    let lowered: Vec<String> =
        df.get_column_names().iter().map(|name| name.to_lowercase()).collect();
    df.set_column_names(lowered)?;

    for &(synonym, canonical) in COLUMN_SYNONYMS {
        let names: Vec<String> =
            df.get_column_names().iter().map(|name| name.to_string()).collect();
        if names.iter().any(|name| name == canonical) {
            continue;
        }
        if names.iter().any(|name| name == synonym) {
            df.rename(synonym, canonical.into())?;
        }
    }

    for required in ["date", "headline"] {
        if df.column(required).is_err() {
            return Err(NewsError::MissingColumn(required.to_string()));
        }
    }

    Ok(())
}

/// Parse a raw date string to a calendar date, or `None`.
///
/// Whitespace runs are collapsed first; CNBC-style strings such as
/// `"7:51  PM ET Thu, 18 July 2019"` carry the date after the last comma.
fn parse_date(raw: &str) -> Option<Date> {
    let cleaned = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        return None;
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&cleaned, fmt) {
            return Some(date);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&cleaned, fmt) {
            return Some(dt.date());
        }
    }

    cleaned
        .rsplit_once(", ")
        .and_then(|(_, tail)| NaiveDate::parse_from_str(tail.trim(), "%d %B %Y").ok())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("2022-01-03", Some((2022, 1, 3)))]
    #[case("2022-01-03 14:05:00", Some((2022, 1, 3)))]
    #[case("18-Jul-19", Some((2019, 7, 18)))]
    #[case("Jul 18 2019", Some((2019, 7, 18)))]
    #[case("July 18, 2019", Some((2019, 7, 18)))]
    #[case("7:51  PM ET Thu, 18 July 2019", Some((2019, 7, 18)))]
    #[case("not a date", None)]
    #[case("", None)]
    fn parse_date_shapes(#[case] raw: &str, #[case] expected: Option<(i32, u32, u32)>) {
        let expected = expected.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap());
        assert_eq!(parse_date(raw), expected);
    }

    fn write_fixture(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("sentifactor-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn load_normalizes_synonyms_and_drops_bad_rows() {
        let path = write_fixture(
            "synonyms.csv",
            "Headlines,Time\n\
             Markets rally on jobs data,2022-01-03\n\
             ,2022-01-04\n\
             Fed holds rates steady,bogus date\n\
             Oil slides after inventory build,2022-01-05\n",
        );

        let records = load_headlines(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        // Survivors: the two rows with a parseable date and a headline
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].headline, "Markets rally on jobs data");
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2022, 1, 3).unwrap());
        assert_eq!(records[1].headline, "Oil slides after inventory build");
    }

    #[test]
    fn load_rejects_missing_headline_column() {
        let path = write_fixture("nocol.csv", "published,source\n2022-01-03,wire\n");

        let result = load_headlines(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(NewsError::MissingColumn(col)) if col == "headline"));
    }

    #[test]
    fn headline_frame_schema() {
        let records = vec![
            HeadlineRecord::new(
                NaiveDate::from_ymd_opt(2022, 1, 3).unwrap(),
                "Stocks open higher",
            ),
            HeadlineRecord::new(
                NaiveDate::from_ymd_opt(2022, 1, 4).unwrap(),
                "Bond yields climb",
            ),
        ];

        let df = headline_frame(&records).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.column("date").unwrap().dtype(), &DataType::Date);
        assert_eq!(df.column("headline").unwrap().dtype(), &DataType::String);
    }
}
