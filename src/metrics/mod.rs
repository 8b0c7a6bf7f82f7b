//! Evaluation of a fitted simple linear regression `y = intercept + beta * x`.
//!
//! The free functions take the model coefficients directly;
//! [`SimpleLinearModel`] bundles them for repeated use.

use crate::error::{PrepkitError, Result};
use crate::stats::mean;
use serde::{Deserialize, Serialize};

/// Point prediction `intercept + beta * x_i`.
///
/// ```
/// use prepkit::metrics::predict;
///
/// assert_eq!(predict(1.0, 2.0, 3.0), 7.0);
/// ```
#[must_use]
pub fn predict(intercept: f64, beta: f64, x_i: f64) -> f64 {
    intercept + beta * x_i
}

/// Residual of one sample, prediction minus actual.
#[must_use]
pub fn error(intercept: f64, beta: f64, x_i: f64, y_i: f64) -> f64 {
    predict(intercept, beta, x_i) - y_i
}

/// Sum of squared residuals over paired samples.
///
/// # Errors
///
/// Returns [`PrepkitError::DimensionMismatch`] if `x` and `y_actual` differ
/// in length.
///
/// # Examples
///
/// ```
/// use prepkit::metrics::sum_of_square_error;
///
/// let sse = sum_of_square_error(0.0, 1.0, &[1.0, 2.0], &[2.0, 2.0]).expect("same length");
/// assert_eq!(sse, 1.0);
/// ```
pub fn sum_of_square_error(intercept: f64, beta: f64, x: &[f64], y_actual: &[f64]) -> Result<f64> {
    if x.len() != y_actual.len() {
        return Err(PrepkitError::DimensionMismatch {
            expected: format!("{} values in x", x.len()),
            actual: format!("{} values in y", y_actual.len()),
        });
    }

    Ok(x.iter()
        .zip(y_actual.iter())
        .map(|(&x_i, &y_i)| error(intercept, beta, x_i, y_i).powi(2))
        .sum())
}

/// Total sum of squares of `y_actual` about its mean.
///
/// Zero for an empty slice.
#[must_use]
pub fn total_sum_of_squares(y_actual: &[f64]) -> f64 {
    if y_actual.is_empty() {
        return 0.0;
    }
    let y_mean = mean(y_actual);
    y_actual.iter().map(|y| (y - y_mean).powi(2)).sum()
}

/// Coefficient of determination, `1 - SSE / SST`.
///
/// Constant `y_actual` makes SST zero. The division is left to IEEE
/// semantics: a perfect fit gives NaN, anything else negative infinity.
///
/// # Errors
///
/// Returns [`PrepkitError::DimensionMismatch`] if `x` and `y_actual` differ
/// in length.
///
/// # Examples
///
/// ```
/// use prepkit::metrics::rsquared;
///
/// let x = [1.0, 2.0, 3.0, 4.0];
/// let y = [3.0, 5.0, 7.0, 9.0];
/// let r2 = rsquared(1.0, 2.0, &x, &y).expect("same length");
/// assert_eq!(r2, 1.0);
/// ```
pub fn rsquared(intercept: f64, beta: f64, x: &[f64], y_actual: &[f64]) -> Result<f64> {
    let sse = sum_of_square_error(intercept, beta, x, y_actual)?;
    let sst = total_sum_of_squares(y_actual);
    Ok(1.0 - sse / sst)
}

/// Coefficients of a one-feature linear model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimpleLinearModel {
    /// Value of `y` at `x = 0`
    pub intercept: f64,
    /// Slope
    pub beta: f64,
}

impl SimpleLinearModel {
    /// Creates a model from its coefficients.
    #[must_use]
    pub fn new(intercept: f64, beta: f64) -> Self {
        Self { intercept, beta }
    }

    /// See [`predict`].
    #[must_use]
    pub fn predict(&self, x_i: f64) -> f64 {
        predict(self.intercept, self.beta, x_i)
    }

    /// Predictions for every element of `x`.
    #[must_use]
    pub fn predict_all(&self, x: &[f64]) -> Vec<f64> {
        x.iter().map(|&x_i| self.predict(x_i)).collect()
    }

    /// See [`error`].
    #[must_use]
    pub fn error(&self, x_i: f64, y_i: f64) -> f64 {
        error(self.intercept, self.beta, x_i, y_i)
    }

    /// See [`sum_of_square_error`].
    ///
    /// # Errors
    ///
    /// Returns an error if the slices differ in length.
    pub fn sum_of_square_error(&self, x: &[f64], y_actual: &[f64]) -> Result<f64> {
        sum_of_square_error(self.intercept, self.beta, x, y_actual)
    }

    /// See [`rsquared`].
    ///
    /// # Errors
    ///
    /// Returns an error if the slices differ in length.
    pub fn rsquared(&self, x: &[f64], y_actual: &[f64]) -> Result<f64> {
        rsquared(self.intercept, self.beta, x, y_actual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_and_error() {
        assert_eq!(predict(0.5, -2.0, 4.0), -7.5);
        assert_eq!(error(0.5, -2.0, 4.0, -7.0), -0.5);
    }

    #[test]
    fn test_sum_of_square_error() {
        let x = [1.0, 2.0, 3.0];
        let y = [2.0, 2.0, 5.0];
        // y = 1 + x predicts 2, 3, 4
        let sse = sum_of_square_error(1.0, 1.0, &x, &y).expect("same length");
        assert!((sse - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_sum_of_square_error_mismatch() {
        let err = sum_of_square_error(0.0, 1.0, &[1.0, 2.0], &[1.0]).expect_err("2 != 1");
        assert!(matches!(err, PrepkitError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_sum_of_square_error_empty() {
        assert_eq!(sum_of_square_error(3.0, 4.0, &[], &[]).expect("empty pairs"), 0.0);
    }

    #[test]
    fn test_total_sum_of_squares() {
        assert!((total_sum_of_squares(&[1.0, 2.0, 3.0, 4.0]) - 5.0).abs() < 1e-12);
        assert_eq!(total_sum_of_squares(&[]), 0.0);
    }

    #[test]
    fn test_rsquared_imperfect_fit() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 4.0, 5.0, 8.0];
        // SST = 18.75; fitted y = 2x gives residuals 0, 0, 1, 0
        let r2 = rsquared(0.0, 2.0, &x, &y).expect("same length");
        assert!((r2 - (1.0 - 1.0 / 18.75)).abs() < 1e-12);
    }

    #[test]
    fn test_rsquared_worse_than_mean_is_negative() {
        let r2 = rsquared(100.0, 0.0, &[1.0, 2.0], &[1.0, 2.0]).expect("same length");
        assert!(r2 < 0.0);
    }

    #[test]
    fn test_rsquared_constant_target_unguarded() {
        let y = [3.0, 3.0, 3.0];
        let perfect = rsquared(3.0, 0.0, &[1.0, 2.0, 3.0], &y).expect("same length");
        assert!(perfect.is_nan());

        let off = rsquared(0.0, 1.0, &[1.0, 2.0, 3.0], &y).expect("same length");
        assert_eq!(off, f64::NEG_INFINITY);
    }

    #[test]
    fn test_rsquared_mismatch() {
        assert!(rsquared(0.0, 1.0, &[1.0], &[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_simple_linear_model() {
        let model = SimpleLinearModel::new(1.0, 2.0);
        let x = [0.0, 1.0, 2.0];
        let y = model.predict_all(&x);

        assert_eq!(y, vec![1.0, 3.0, 5.0]);
        assert_eq!(model.error(1.0, 4.0), -1.0);
        assert_eq!(model.sum_of_square_error(&x, &y).expect("same length"), 0.0);
        assert_eq!(model.rsquared(&x, &y).expect("same length"), 1.0);
    }
}
