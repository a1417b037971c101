//! Ordinary least squares with coefficient inference.

use ndarray::{Array1, Array2};
use statrs::distribution::{ContinuousCDF, FisherSnedecor, StudentsT};

use crate::MathError;

/// Result of an ordinary least squares fit.
///
/// Coefficient order follows the column order of the design matrix passed
/// to [`ols`], including any intercept column the caller prepended.
#[derive(Debug, Clone)]
pub struct OlsResult {
    /// Estimated coefficients.
    pub coefficients: Array1<f64>,
    /// Standard errors of the coefficients.
    pub std_errors: Array1<f64>,
    /// t statistics (coefficient / standard error).
    pub t_values: Array1<f64>,
    /// Two-sided p-values against Student's t with `df_resid` degrees of freedom.
    pub p_values: Array1<f64>,
    /// Residuals.
    pub residuals: Array1<f64>,
    /// R-squared.
    pub r_squared: f64,
    /// Adjusted R-squared.
    pub adj_r_squared: f64,
    /// F statistic for the joint test of all non-intercept coefficients.
    pub f_statistic: f64,
    /// p-value of the F statistic.
    pub f_pvalue: f64,
    /// Number of observations.
    pub nobs: usize,
    /// Residual degrees of freedom (observations minus parameters).
    pub df_resid: usize,
}

/// Perform ordinary least squares regression.
///
/// Solves `argmin_beta sum((y_i - X_i * beta)^2)` via the normal
/// equations; `(X'X)` is inverted with Gauss-Jordan elimination so the
/// inverse diagonal is available for standard errors.
///
/// # Arguments
/// * `y` - Response vector (n,)
/// * `x` - Design matrix (n x p), intercept column included by the caller
///
/// # Returns
/// OLS result with coefficients and the full inference set.
///
/// # Errors
/// Returns an error if dimensions mismatch, there are not strictly more
/// observations than parameters, or the design matrix is rank deficient.
pub fn ols(y: &Array1<f64>, x: &Array2<f64>) -> Result<OlsResult, MathError> {
    let n = y.len();
    let p = x.ncols();

    if x.nrows() != n {
        return Err(MathError::DimensionMismatch { expected: n, actual: x.nrows() });
    }
    if n == 0 {
        return Err(MathError::EmptyData);
    }
    if n <= p {
        return Err(MathError::InsufficientObservations { required: p + 1, actual: n });
    }

    // Normal equations: beta = (X'X)^-1 X'y
    let xtx = x.t().dot(x);
    let xty = x.t().dot(y);

    let xtx_inv = invert_matrix(&xtx)?;
    let coefficients = xtx_inv.dot(&xty);

    let fitted = x.dot(&coefficients);
    let residuals = y - &fitted;

    let y_mean = y.mean().unwrap_or(0.0);
    let ss_tot: f64 = y.iter().map(|yi| (yi - y_mean).powi(2)).sum();
    let ss_res: f64 = residuals.iter().map(|r| r.powi(2)).sum();
    let r_squared = if ss_tot > 0.0 { 1.0 - ss_res / ss_tot } else { 0.0 };

    let df_resid = n - p;
    let adj_r_squared = 1.0 - (1.0 - r_squared) * (n - 1) as f64 / df_resid as f64;

    // Coefficient covariance: sigma^2 (X'X)^-1
    let sigma2 = ss_res / df_resid as f64;
    let std_errors: Array1<f64> =
        (0..p).map(|j| (sigma2 * xtx_inv[[j, j]]).max(0.0).sqrt()).collect();

    let t_values: Array1<f64> = coefficients
        .iter()
        .zip(std_errors.iter())
        .map(|(&b, &se)| if se > 0.0 { b / se } else { f64::INFINITY.copysign(b) })
        .collect();

    let t_dist = StudentsT::new(0.0, 1.0, df_resid as f64)
        .map_err(|e| MathError::NumericalInstability(e.to_string()))?;
    let p_values: Array1<f64> = t_values
        .iter()
        .map(|&t| if t.is_finite() { 2.0 * (1.0 - t_dist.cdf(t.abs())) } else { 0.0 })
        .collect();

    let (f_statistic, f_pvalue) = f_test(r_squared, p, df_resid)?;

    Ok(OlsResult {
        coefficients,
        std_errors,
        t_values,
        p_values,
        residuals,
        r_squared,
        adj_r_squared,
        f_statistic,
        f_pvalue,
        nobs: n,
        df_resid,
    })
}

/// Joint F test of all non-intercept coefficients.
fn f_test(r_squared: f64, p: usize, df_resid: usize) -> Result<(f64, f64), MathError> {
    if p < 2 {
        // Intercept-only model: no slopes to test.
        return Ok((f64::NAN, f64::NAN));
    }

    let df_model = (p - 1) as f64;
    if r_squared >= 1.0 {
        return Ok((f64::INFINITY, 0.0));
    }

    let f = (r_squared / df_model) / ((1.0 - r_squared) / df_resid as f64);
    let f_dist = FisherSnedecor::new(df_model, df_resid as f64)
        .map_err(|e| MathError::NumericalInstability(e.to_string()))?;

    Ok((f, 1.0 - f_dist.cdf(f)))
}

/// Invert a square matrix with Gauss-Jordan elimination and partial pivoting.
fn invert_matrix(a: &Array2<f64>) -> Result<Array2<f64>, MathError> {
    let n = a.nrows();
    if n == 0 {
        return Err(MathError::EmptyData);
    }
    if a.ncols() != n {
        return Err(MathError::LinearAlgebra("matrix must be square".to_string()));
    }

    // Augmented matrix [A | I]
    let mut aug = Array2::zeros((n, 2 * n));
    for i in 0..n {
        for j in 0..n {
            aug[[i, j]] = a[[i, j]];
        }
        aug[[i, n + i]] = 1.0;
    }

    for col in 0..n {
        // Find pivot
        let mut max_row = col;
        let mut max_val = aug[[col, col]].abs();
        for row in (col + 1)..n {
            if aug[[row, col]].abs() > max_val {
                max_val = aug[[row, col]].abs();
                max_row = row;
            }
        }

        if max_val < 1e-12 {
            return Err(MathError::LinearAlgebra(
                "matrix is singular or nearly singular".to_string(),
            ));
        }

        // Swap rows
        if max_row != col {
            for j in 0..(2 * n) {
                let tmp = aug[[col, j]];
                aug[[col, j]] = aug[[max_row, j]];
                aug[[max_row, j]] = tmp;
            }
        }

        // Normalize pivot row
        let pivot = aug[[col, col]];
        for j in 0..(2 * n) {
            aug[[col, j]] /= pivot;
        }

        // Eliminate column from all other rows
        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = aug[[row, col]];
            if factor == 0.0 {
                continue;
            }
            for j in 0..(2 * n) {
                aug[[row, j]] -= factor * aug[[col, j]];
            }
        }
    }

    let mut inverse = Array2::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            inverse[[i, j]] = aug[[i, n + j]];
        }
    }

    Ok(inverse)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;

    use super::*;

    #[test]
    fn ols_exact_fit() {
        // y = 2 + 3x, zero residuals
        let x = Array2::from_shape_vec(
            (5, 2),
            vec![1.0, 1.0, 1.0, 2.0, 1.0, 3.0, 1.0, 4.0, 1.0, 5.0],
        )
        .unwrap();
        let y = array![5.0, 8.0, 11.0, 14.0, 17.0];

        let result = ols(&y, &x).unwrap();

        assert_relative_eq!(result.coefficients[0], 2.0, epsilon = 1e-10);
        assert_relative_eq!(result.coefficients[1], 3.0, epsilon = 1e-10);
        assert_relative_eq!(result.r_squared, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn ols_matches_hand_computed_inference() {
        // x = [0,1,2,3], y = [1,3,2,5]: slope 1.1, intercept 1.1,
        // ss_res = 2.7, sigma^2 = 1.35, se(slope) = sqrt(0.27)
        let x = Array2::from_shape_vec(
            (4, 2),
            vec![1.0, 0.0, 1.0, 1.0, 1.0, 2.0, 1.0, 3.0],
        )
        .unwrap();
        let y = array![1.0, 3.0, 2.0, 5.0];

        let result = ols(&y, &x).unwrap();

        assert_relative_eq!(result.coefficients[0], 1.1, epsilon = 1e-10);
        assert_relative_eq!(result.coefficients[1], 1.1, epsilon = 1e-10);
        assert_relative_eq!(result.std_errors[0], 0.945f64.sqrt(), epsilon = 1e-10);
        assert_relative_eq!(result.std_errors[1], 0.27f64.sqrt(), epsilon = 1e-10);
        assert_relative_eq!(result.r_squared, 1.0 - 2.7 / 8.75, epsilon = 1e-10);
        assert_relative_eq!(result.t_values[1], 1.1 / 0.27f64.sqrt(), epsilon = 1e-10);
        // Two-sided tail of t(2) at |t| = 2.11695
        assert_relative_eq!(result.p_values[1], 0.168478, epsilon = 1e-4);
        // With a single slope, F = t^2 and the p-values agree
        assert_relative_eq!(result.f_statistic, result.t_values[1].powi(2), epsilon = 1e-8);
        assert_relative_eq!(result.f_pvalue, result.p_values[1], epsilon = 1e-8);
        assert_eq!(result.nobs, 4);
        assert_eq!(result.df_resid, 2);
    }

    #[test]
    fn ols_three_feature_closed_form() {
        // y = 1 + 2a - 3b + 0.5c constructed exactly; the fit must
        // reproduce the generating coefficients.
        let a = [0.0, 1.0, 2.0, 0.5, 1.5, 3.0];
        let b = [1.0, 0.0, 1.0, 2.0, 0.5, 1.0];
        let c = [2.0, 2.0, 0.0, 1.0, 1.0, 4.0];

        let mut data = Vec::with_capacity(24);
        let mut y = Vec::with_capacity(6);
        for i in 0..6 {
            data.extend_from_slice(&[1.0, a[i], b[i], c[i]]);
            y.push(1.0 + 2.0 * a[i] - 3.0 * b[i] + 0.5 * c[i]);
        }
        let x = Array2::from_shape_vec((6, 4), data).unwrap();
        let y = Array1::from_vec(y);

        let result = ols(&y, &x).unwrap();

        assert_relative_eq!(result.coefficients[0], 1.0, epsilon = 1e-8);
        assert_relative_eq!(result.coefficients[1], 2.0, epsilon = 1e-8);
        assert_relative_eq!(result.coefficients[2], -3.0, epsilon = 1e-8);
        assert_relative_eq!(result.coefficients[3], 0.5, epsilon = 1e-8);
    }

    #[test]
    fn ols_collinear_design_errors() {
        // Third column duplicates the second
        let x = Array2::from_shape_vec(
            (5, 3),
            vec![
                1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 1.0, 3.0, 3.0, 1.0, 4.0, 4.0, 1.0, 5.0, 5.0,
            ],
        )
        .unwrap();
        let y = array![1.0, 2.0, 3.0, 4.0, 5.0];

        assert!(matches!(ols(&y, &x), Err(MathError::LinearAlgebra(_))));
    }

    #[test]
    fn ols_rejects_underdetermined_fit() {
        let x = Array2::from_shape_vec((3, 3), vec![1.0; 9]).unwrap();
        let y = array![1.0, 2.0, 3.0];

        assert!(matches!(
            ols(&y, &x),
            Err(MathError::InsufficientObservations { required: 4, actual: 3 })
        ));
    }

    #[test]
    fn invert_matrix_identity() {
        let a = array![[2.0, 0.0], [0.0, 4.0]];
        let inv = invert_matrix(&a).unwrap();

        assert_relative_eq!(inv[[0, 0]], 0.5, epsilon = 1e-12);
        assert_relative_eq!(inv[[1, 1]], 0.25, epsilon = 1e-12);
        assert_relative_eq!(inv[[0, 1]], 0.0, epsilon = 1e-12);
    }
}
