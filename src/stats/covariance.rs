//! Covariance and correlation of paired samples.
//!
//! # Mathematical Background
//!
//! ## Covariance
//!
//! Sample covariance, with Bessel's correction:
//!
//! ```text
//! Cov(X, Y) = (1/(n-1)) Σ (x_i - x̄)(y_i - ȳ)
//! ```
//!
//! ## Correlation
//!
//! ```text
//! ρ(X, Y) = Cov(X, Y) / (σ_X σ_Y)
//! ```
//!
//! Where `σ_X` and `σ_Y` are population standard deviations. The mixed
//! normalization scales the result by n/(n-1) relative to Pearson's r, so
//! a perfectly linear pair of 5 samples scores 1.25 rather than 1.
//!
//! # Examples
//!
//! ```
//! use prepkit::stats::{correlation, covariance};
//!
//! let x = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = [2.0, 4.0, 6.0, 8.0, 10.0];
//!
//! let cov = covariance(&x, &y).expect("covariance should compute");
//! let corr = correlation(&x, &y).expect("correlation should compute");
//!
//! assert!((cov - 5.0).abs() < 1e-12);
//! assert!((corr - 1.25).abs() < 1e-12);
//! ```

use super::{center, std_dev};
use crate::error::{PrepkitError, Result};

fn check_pair(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(PrepkitError::DimensionMismatch {
            expected: format!("{} values in x", x.len()),
            actual: format!("{} values in y", y.len()),
        });
    }
    if x.is_empty() {
        return Err(PrepkitError::empty_input(
            "covariance needs at least one pair",
        ));
    }
    Ok(())
}

/// Sample covariance of `x` and `y` (divides by n - 1).
///
/// A single pair divides by zero and yields NaN.
///
/// # Errors
///
/// Returns error if the slices have different lengths or are empty.
///
/// # Examples
///
/// ```
/// use prepkit::stats::covariance;
///
/// let covariance = covariance(&[1.0, 2.0, 3.0], &[2.0, 4.0, 5.0]).expect("Should compute covariance");
/// assert!(covariance > 0.0);
/// ```
pub fn covariance(x: &[f64], y: &[f64]) -> Result<f64> {
    check_pair(x, y)?;

    let dot: f64 = center(x)
        .iter()
        .zip(center(y).iter())
        .map(|(a, b)| a * b)
        .sum();

    Ok(dot / (x.len() as f64 - 1.0))
}

/// Covariance scaled by the population standard deviations.
///
/// Returns `0.0` when either standard deviation is zero.
///
/// # Errors
///
/// Returns error if the slices have different lengths or are empty.
pub fn correlation(x: &[f64], y: &[f64]) -> Result<f64> {
    check_pair(x, y)?;

    let std_x = std_dev(x);
    let std_y = std_dev(y);
    if std_x > 0.0 && std_y > 0.0 {
        Ok(covariance(x, y)? / std_x / std_y)
    } else {
        Ok(0.0)
    }
}

#[cfg(test)]
#[path = "covariance_tests.rs"]
mod tests;
