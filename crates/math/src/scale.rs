//! Whole-sample standardization.

use ndarray::Array1;
use polars::prelude::*;

/// Standardize a column to zero mean and unit variance over the full frame.
///
/// The mean and sample standard deviation are taken over every row of the
/// frame, not a trailing window. Callers relying on this for predictive
/// features inherit the look-ahead that implies.
///
/// # Arguments
/// * `target_col` - Column to standardize
///
/// # Returns
/// Polars expression for the standardized values.
pub fn zscore(target_col: &str) -> Expr {
    (col(target_col) - col(target_col).mean()) / col(target_col).std(1)
}

/// Whole-sample z-score transform for arrays.
#[derive(Debug, Clone)]
pub struct ZScore {
    /// Delta degrees of freedom for the standard deviation.
    pub ddof: usize,
}

impl ZScore {
    /// Create a new z-score transform.
    #[must_use]
    pub const fn new(ddof: usize) -> Self {
        Self { ddof }
    }

    /// Apply standardization to an array.
    #[must_use]
    pub fn apply(&self, data: &Array1<f64>) -> Array1<f64> {
        if data.is_empty() {
            return data.clone();
        }

        let mean = data.mean().unwrap_or(0.0);
        let centered = data - mean;

        let std = self.compute_std(&centered);
        if std > 0.0 { &centered / std } else { centered }
    }

    fn compute_std(&self, centered: &Array1<f64>) -> f64 {
        let n = centered.len();
        if n <= self.ddof {
            return 0.0;
        }
        let variance: f64 =
            centered.iter().map(|x| x.powi(2)).sum::<f64>() / (n - self.ddof) as f64;
        variance.sqrt()
    }
}

impl Default for ZScore {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;
    use rstest::rstest;

    use super::*;

    #[test]
    fn zscore_removes_mean() {
        let data = array![1.0, 2.0, 3.0, 4.0, 5.0];
        let scaled = ZScore::default().apply(&data);
        assert_relative_eq!(scaled.mean().unwrap(), 0.0, epsilon = 1e-10);
    }

    #[rstest]
    #[case(array![1.0, 2.0, 3.0, 4.0, 5.0])]
    #[case(array![-10.0, 0.0, 25.0, 3.0])]
    fn zscore_unit_sample_variance(#[case] data: Array1<f64>) {
        let scaled = ZScore::default().apply(&data);

        let n = scaled.len() as f64;
        let mean = scaled.mean().unwrap();
        let variance: f64 = scaled.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
        assert_relative_eq!(variance, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn zscore_constant_input() {
        let data = array![5.0, 5.0, 5.0];
        let scaled = ZScore::default().apply(&data);
        // Zero variance: values are centered but left unscaled
        assert!(scaled.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn zscore_empty_input() {
        let empty: Array1<f64> = array![];
        assert!(ZScore::default().apply(&empty).is_empty());
    }

    #[test]
    fn zscore_expr_over_frame() {
        let df = df! {
            "volume" => &[10.0, 20.0, 30.0],
        }
        .unwrap();

        let scaled = df
            .lazy()
            .with_column(zscore("volume").alias("volume_scaled"))
            .collect()
            .unwrap();

        let values: Vec<f64> = scaled
            .column("volume_scaled")
            .unwrap()
            .f64()
            .unwrap()
            .into_no_null_iter()
            .collect();

        assert_relative_eq!(values[0], -1.0, epsilon = 1e-10);
        assert_relative_eq!(values[1], 0.0, epsilon = 1e-10);
        assert_relative_eq!(values[2], 1.0, epsilon = 1e-10);
    }
}
