//! Preprocessing transformers: feature scaling and label encoding.
//!
//! All transformers follow the same lifecycle: construct, `fit` on training
//! data, then `transform` the same or new data. Re-fitting replaces the
//! previous parameters entirely.
//!
//! # Example
//!
//! ```
//! use prepkit::prelude::*;
//!
//! // Column 1 is constant, so it has no scale to normalize by.
//! let data = vec![vec![1, 5, 0], vec![2, 5, 1], vec![3, 5, 2], vec![4, 5, 3]];
//!
//! let mut scaler = MinMaxScaler::new();
//! let scaled = scaler.fit_transform(&data).expect("fit_transform should succeed");
//!
//! assert!((scaled.get(1, 0) - 1.0 / 3.0).abs() < 1e-12);
//! assert!(scaled.get(1, 1).is_nan());
//! ```
//!
//! # Constant features
//!
//! A column whose fitted range (or standard deviation) is zero has no
//! scale. Both scalers emit NaN for every row of such a column instead of
//! failing, and any other non-finite quotient is reported as NaN too.

mod label;

pub use label::{FloatLabelEncoder, LabelEncoder, UNSEEN_LABEL};

use crate::coerce::NumericData;
use crate::error::{PrepkitError, Result};
use crate::primitives::Matrix;
use crate::traits::{FitState, Transformer};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

const STANDARD_SCALER: &str = "StandardScaler";
const MIN_MAX_SCALER: &str = "MinMaxScaler";

/// Maps infinities from a division to NaN; finite values and NaN pass through.
#[inline]
fn finite_or_nan(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        f64::NAN
    }
}

/// Only the `0 x 0` matrix of an empty nested sequence skips the check.
fn check_features(x: &Matrix<f64>, expected: usize) -> Result<()> {
    let (n_samples, n_features) = x.shape();
    if (n_samples, n_features) != (0, 0) && n_features != expected {
        return Err(PrepkitError::dimension_mismatch(
            "features",
            expected,
            n_features,
        ));
    }
    Ok(())
}

/// Parameters learned by [`StandardScaler::fit`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardParams {
    mean: Vec<f64>,
    std: Vec<f64>,
}

/// Standardizes features by removing the mean and scaling to unit variance.
///
/// The standard score of a sample x is: z = (x - mean) / std, where std is
/// the population standard deviation (divides by n).
///
/// # Example
///
/// ```
/// use prepkit::prelude::*;
///
/// let data = vec![vec![0.0, 0.0], vec![0.0, 0.0], vec![1.0, 1.0], vec![1.0, 1.0]];
///
/// let mut scaler = StandardScaler::new();
/// scaler.fit(&data).expect("fit should succeed");
/// assert_eq!(scaler.mean(), Some(&[0.5, 0.5][..]));
///
/// let scaled = scaler.transform(&vec![vec![2.0, 2.0]]).expect("scaler is fitted");
/// assert_eq!(scaled.to_rows(), vec![vec![3.0, 3.0]]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    state: FitState<StandardParams>,
    /// Whether to center the data (subtract mean).
    with_mean: bool,
    /// Whether to scale the data (divide by std).
    with_std: bool,
}

impl Default for StandardScaler {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardScaler {
    /// Creates a new `StandardScaler` with centering and scaling enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: FitState::Unfitted,
            with_mean: true,
            with_std: true,
        }
    }

    /// Sets whether to center the data by subtracting the mean.
    #[must_use]
    pub fn with_mean(mut self, with_mean: bool) -> Self {
        self.with_mean = with_mean;
        self
    }

    /// Sets whether to scale the data by dividing by standard deviation.
    #[must_use]
    pub fn with_std(mut self, with_std: bool) -> Self {
        self.with_std = with_std;
        self
    }

    /// Mean of each feature, once fitted.
    #[must_use]
    pub fn mean(&self) -> Option<&[f64]> {
        self.state.get().map(|p| p.mean.as_slice())
    }

    /// Population standard deviation of each feature, once fitted.
    #[must_use]
    pub fn std(&self) -> Option<&[f64]> {
        self.state.get().map(|p| p.std.as_slice())
    }

    /// Number of features seen at fit time.
    #[must_use]
    pub fn n_features_in(&self) -> Option<usize> {
        self.state.get().map(|p| p.mean.len())
    }

    /// Returns true if the scaler has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.state.is_fitted()
    }

    /// Transforms standardized data back to the original scale.
    ///
    /// A zero-variance column maps back to its fitted mean.
    ///
    /// # Errors
    ///
    /// Returns an error if the scaler is not fitted, the input can't be
    /// coerced, or the feature count differs from fit time.
    pub fn inverse_transform(&self, x: &dyn NumericData) -> Result<Matrix<f64>> {
        let x = x.to_matrix()?;
        let StandardParams { mean, std } = self.state.params(STANDARD_SCALER)?;
        check_features(&x, mean.len())?;

        let (n_samples, n_features) = (x.n_rows(), mean.len());
        let mut result = vec![0.0; n_samples * n_features];

        for i in 0..n_samples {
            for j in 0..n_features {
                result[i * n_features + j] = if self.with_std && std[j] == 0.0 {
                    mean[j]
                } else {
                    let mut val = x.get(i, j);
                    if self.with_std {
                        val *= std[j];
                    }
                    if self.with_mean {
                        val += mean[j];
                    }
                    val
                };
            }
        }

        Matrix::from_vec(n_samples, n_features, result)
    }
}

impl Transformer for StandardScaler {
    type Input<'a> = dyn NumericData + 'a;
    type Output = Matrix<f64>;

    /// Computes the mean and population standard deviation of each feature.
    fn fit<'a>(&mut self, x: &Self::Input<'a>) -> Result<()> {
        let x = x.to_matrix()?;
        let (n_samples, n_features) = x.shape();

        if n_samples == 0 {
            return Err(PrepkitError::empty_input(
                "StandardScaler needs at least one sample to fit",
            ));
        }

        let mut mean = vec![0.0; n_features];
        for (j, mean_j) in mean.iter_mut().enumerate() {
            let sum: f64 = (0..n_samples).map(|i| x.get(i, j)).sum();
            *mean_j = sum / n_samples as f64;
        }

        let mut std = vec![0.0; n_features];
        for (j, std_j) in std.iter_mut().enumerate() {
            let sum_sq: f64 = (0..n_samples)
                .map(|i| {
                    let diff = x.get(i, j) - mean[j];
                    diff * diff
                })
                .sum();
            *std_j = (sum_sq / n_samples as f64).sqrt();
        }

        debug!(n_samples, n_features, "fitted StandardScaler");
        self.state.replace(StandardParams { mean, std });

        Ok(())
    }

    /// Standardizes the data using fitted mean and std.
    fn transform<'a>(&self, x: &Self::Input<'a>) -> Result<Matrix<f64>> {
        let x = x.to_matrix()?;
        let StandardParams { mean, std } = self.state.params(STANDARD_SCALER)?;
        check_features(&x, mean.len())?;

        let (n_samples, n_features) = (x.n_rows(), mean.len());
        if self.with_std {
            let constant: Vec<usize> = (0..n_features).filter(|&j| std[j] == 0.0).collect();
            if !constant.is_empty() {
                debug!(columns = ?constant, "zero-variance features map to NaN");
            }
        }

        let mut result = vec![0.0; n_samples * n_features];

        for i in 0..n_samples {
            for j in 0..n_features {
                let mut val = x.get(i, j);

                if self.with_mean {
                    val -= mean[j];
                }

                if self.with_std {
                    val = finite_or_nan(val / std[j]);
                }

                result[i * n_features + j] = val;
            }
        }

        Matrix::from_vec(n_samples, n_features, result)
    }
}

/// Parameters learned by [`MinMaxScaler::fit`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinMaxParams {
    data_min: Vec<f64>,
    data_max: Vec<f64>,
}

/// Scales features to a given range (default [0, 1]).
///
/// The transformation is: X_scaled = (X - X_min) / (X_max - X_min)
///
/// Values outside the fitted range are extrapolated, not clipped: data
/// below the fitted minimum scales below 0, data above the maximum scales
/// above 1.
///
/// # Example
///
/// ```
/// use prepkit::prelude::*;
///
/// let data = vec![vec![-1.0, 2.0], vec![-0.5, 6.0], vec![0.0, 10.0], vec![1.0, 18.0]];
///
/// let mut scaler = MinMaxScaler::new();
/// scaler.fit(&data).expect("fit should succeed");
/// assert_eq!(scaler.minimum(), Some(&[-1.0, 2.0][..]));
/// assert_eq!(scaler.maximum(), Some(&[1.0, 18.0][..]));
///
/// let scaled = scaler.transform(&vec![vec![2.0, 2.0]]).expect("scaler is fitted");
/// assert_eq!(scaled.to_rows(), vec![vec![1.5, 0.0]]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScaler {
    state: FitState<MinMaxParams>,
    /// Target minimum for scaling (default 0.0).
    feature_min: f64,
    /// Target maximum for scaling (default 1.0).
    feature_max: f64,
}

impl Default for MinMaxScaler {
    fn default() -> Self {
        Self::new()
    }
}

impl MinMaxScaler {
    /// Creates a new `MinMaxScaler` with default range [0, 1].
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: FitState::Unfitted,
            feature_min: 0.0,
            feature_max: 1.0,
        }
    }

    /// Sets the target range for scaling.
    ///
    /// The range is validated by `fit`, which rejects `min >= max`.
    ///
    /// # Example
    ///
    /// ```
    /// use prepkit::preprocessing::MinMaxScaler;
    ///
    /// let scaler = MinMaxScaler::new().with_range(-1.0, 1.0);
    /// assert_eq!(scaler.feature_range(), (-1.0, 1.0));
    /// ```
    #[must_use]
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.feature_min = min;
        self.feature_max = max;
        self
    }

    /// Target range as `(min, max)`.
    #[must_use]
    pub fn feature_range(&self) -> (f64, f64) {
        (self.feature_min, self.feature_max)
    }

    /// Minimum of each feature, once fitted.
    #[must_use]
    pub fn minimum(&self) -> Option<&[f64]> {
        self.state.get().map(|p| p.data_min.as_slice())
    }

    /// Maximum of each feature, once fitted.
    #[must_use]
    pub fn maximum(&self) -> Option<&[f64]> {
        self.state.get().map(|p| p.data_max.as_slice())
    }

    /// Number of features seen at fit time.
    #[must_use]
    pub fn n_features_in(&self) -> Option<usize> {
        self.state.get().map(|p| p.data_min.len())
    }

    /// Returns true if the scaler has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.state.is_fitted()
    }

    /// Transforms scaled data back to the original range.
    ///
    /// A constant column maps back to its fitted value.
    ///
    /// # Errors
    ///
    /// Returns an error if the scaler is not fitted, the input can't be
    /// coerced, or the feature count differs from fit time.
    pub fn inverse_transform(&self, x: &dyn NumericData) -> Result<Matrix<f64>> {
        let x = x.to_matrix()?;
        let MinMaxParams { data_min, data_max } = self.state.params(MIN_MAX_SCALER)?;
        check_features(&x, data_min.len())?;

        let (n_samples, n_features) = (x.n_rows(), data_min.len());
        let feature_range = self.feature_max - self.feature_min;
        let mut result = vec![0.0; n_samples * n_features];

        for i in 0..n_samples {
            for j in 0..n_features {
                let data_range = data_max[j] - data_min[j];
                result[i * n_features + j] = if data_range == 0.0 {
                    data_min[j]
                } else {
                    (x.get(i, j) - self.feature_min) / feature_range * data_range + data_min[j]
                };
            }
        }

        Matrix::from_vec(n_samples, n_features, result)
    }
}

impl Transformer for MinMaxScaler {
    type Input<'a> = dyn NumericData + 'a;
    type Output = Matrix<f64>;

    /// Computes the min and max of each feature.
    ///
    /// A NaN anywhere in a column makes that column's min and max NaN.
    fn fit<'a>(&mut self, x: &Self::Input<'a>) -> Result<()> {
        if self.feature_min.partial_cmp(&self.feature_max) != Some(Ordering::Less) {
            return Err(PrepkitError::InvalidHyperparameter {
                param: "feature_range".to_string(),
                value: format!("({}, {})", self.feature_min, self.feature_max),
                constraint: "min < max".to_string(),
            });
        }

        let x = x.to_matrix()?;
        let (n_samples, n_features) = x.shape();

        if n_samples == 0 {
            return Err(PrepkitError::empty_input(
                "MinMaxScaler needs at least one sample to fit",
            ));
        }

        let mut data_min = vec![f64::INFINITY; n_features];
        let mut data_max = vec![f64::NEG_INFINITY; n_features];

        for i in 0..n_samples {
            for j in 0..n_features {
                let val = x.get(i, j);
                if val.is_nan() || val < data_min[j] {
                    data_min[j] = val;
                }
                if val.is_nan() || val > data_max[j] {
                    data_max[j] = val;
                }
            }
        }

        debug!(n_samples, n_features, "fitted MinMaxScaler");
        self.state.replace(MinMaxParams { data_min, data_max });

        Ok(())
    }

    /// Scales the data to the target range.
    fn transform<'a>(&self, x: &Self::Input<'a>) -> Result<Matrix<f64>> {
        let x = x.to_matrix()?;
        let MinMaxParams { data_min, data_max } = self.state.params(MIN_MAX_SCALER)?;
        check_features(&x, data_min.len())?;

        let (n_samples, n_features) = (x.n_rows(), data_min.len());
        let constant: Vec<usize> = (0..n_features)
            .filter(|&j| data_max[j] == data_min[j])
            .collect();
        if !constant.is_empty() {
            debug!(columns = ?constant, "constant features map to NaN");
        }

        let feature_range = self.feature_max - self.feature_min;
        let mut result = vec![0.0; n_samples * n_features];

        for i in 0..n_samples {
            for j in 0..n_features {
                let unit = finite_or_nan((x.get(i, j) - data_min[j]) / (data_max[j] - data_min[j]));
                result[i * n_features + j] = unit * feature_range + self.feature_min;
            }
        }

        Matrix::from_vec(n_samples, n_features, result)
    }
}
