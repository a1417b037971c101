//! Sentiment factor regression.

use std::fmt;

use ndarray::{Array1, Array2};
use polars::prelude::*;
use sentifactor_math::{OlsResult, ols};

use crate::{ModelError, PREV_RETURN_COL, SENTIMENT_COL, TARGET_COL, VOLUME_SCALED_COL};

/// Feature columns entering the design matrix, in coefficient order after
/// the intercept.
const FEATURE_COLS: [&str; 3] = [SENTIMENT_COL, PREV_RETURN_COL, VOLUME_SCALED_COL];

/// Fitted multifactor model with per-term labels.
#[derive(Debug, Clone)]
pub struct RegressionReport {
    /// Term names, intercept first.
    pub terms: Vec<String>,
    /// Underlying least squares fit.
    pub fit: OlsResult,
}

/// Regress the daily return on sentiment, lagged return and scaled volume.
///
/// A single in-sample ordinary least squares fit over the full feature
/// table; no regularization and no train/test split. A rank-deficient
/// design (constant column, too few rows) propagates as a hard error.
///
/// # Errors
/// Returns an error if a feature column is missing or the fit fails.
pub fn fit_sentiment_model(features: &DataFrame) -> Result<RegressionReport, ModelError> {
    let n = features.height();

    let y = extract_array(features, TARGET_COL)?;

    let mut x = Array2::zeros((n, FEATURE_COLS.len() + 1));
    for i in 0..n {
        x[[i, 0]] = 1.0;
    }
    for (j, name) in FEATURE_COLS.iter().enumerate() {
        let values = extract_array(features, name)?;
        for i in 0..n {
            x[[i, j + 1]] = values[i];
        }
    }

    let fit = ols(&y, &x)?;
    let terms = std::iter::once("const")
        .chain(FEATURE_COLS)
        .map(String::from)
        .collect();

    Ok(RegressionReport { terms, fit })
}

fn extract_array(df: &DataFrame, col_name: &str) -> Result<Array1<f64>, ModelError> {
    let series =
        df.column(col_name).map_err(|_| ModelError::MissingColumn(col_name.to_string()))?;

    let chunked = series
        .f64()
        .map_err(|_| ModelError::MissingColumn(format!("{col_name} (not f64)")))?;

    let values: Vec<f64> = chunked.into_iter().map(|opt| opt.unwrap_or(0.0)).collect();

    Ok(Array1::from_vec(values))
}

impl RegressionReport {
    /// Human-readable summary table, statsmodels-flavoured.
    #[must_use]
    pub fn summary(&self) -> String {
        let fit = &self.fit;
        let mut out = String::new();

        out.push_str(&format!("{:^72}\n", "OLS Regression Results"));
        out.push_str(&"=".repeat(72));
        out.push('\n');
        out.push_str(&format!(
            "{:<20} {:>14}    {:<22} {:>10}\n",
            "Dep. Variable:", TARGET_COL, "No. Observations:", fit.nobs
        ));
        out.push_str(&format!(
            "{:<20} {:>14.4}    {:<22} {:>10.4}\n",
            "R-squared:", fit.r_squared, "Adj. R-squared:", fit.adj_r_squared
        ));
        out.push_str(&format!(
            "{:<20} {:>14.4}    {:<22} {:>10.4}\n",
            "F-statistic:", fit.f_statistic, "Prob (F-statistic):", fit.f_pvalue
        ));
        out.push_str(&format!(
            "{:<20} {:>14}\n",
            "Df Residuals:", fit.df_resid
        ));
        out.push_str(&"-".repeat(72));
        out.push('\n');
        out.push_str(&format!(
            "{:<18} {:>12} {:>12} {:>12} {:>12}\n",
            "", "coef", "std err", "t", "P>|t|"
        ));
        out.push_str(&"-".repeat(72));
        out.push('\n');

        for (i, term) in self.terms.iter().enumerate() {
            out.push_str(&format!(
                "{:<18} {:>12.6} {:>12.6} {:>12.4} {:>12.4}\n",
                term,
                fit.coefficients[i],
                fit.std_errors[i],
                fit.t_values[i],
                fit.p_values[i]
            ));
        }

        out.push_str(&"=".repeat(72));
        out.push('\n');

        out
    }
}

impl fmt::Display for RegressionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
