//! Feature table export.

use std::{fs::File, path::Path};

use polars::prelude::*;

use crate::ReportError;

/// Write the merged feature table to a comma-separated file with a header
/// row.
///
/// # Errors
/// Returns an error if the file cannot be created or serialization fails.
pub fn write_feature_csv(df: &DataFrame, path: impl AsRef<Path>) -> Result<(), ReportError> {
    let mut file = File::create(path)?;
    let mut out = df.clone();

    CsvWriter::new(&mut file).include_header(true).finish(&mut out)?;

    Ok(())
}
