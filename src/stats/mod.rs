//! Descriptive statistics for 1D numeric data.
//!
//! - Mean-centering and z-scores
//! - Quantiles and percentiles using the R-7 method (Hyndman & Fan 1996)
//! - A labeled summary (mean, median, std, min, max, quartiles)
//! - Covariance and correlation of paired samples
//!
//! Standard deviations here are population standard deviations (divide by
//! n), matching [`StandardScaler`](crate::preprocessing::StandardScaler).
//! [`covariance`] is the exception and divides by n - 1.
//!
//! # Examples
//!
//! ```
//! use prepkit::stats::DescriptiveStats;
//!
//! let data = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(&data);
//!
//! assert_eq!(stats.quantile(0.5).expect("median should be computable for valid data"), 3.0);
//! assert_eq!(stats.quantile(0.0).expect("min quantile should be computable for valid data"), 1.0);
//! assert_eq!(stats.quantile(1.0).expect("max quantile should be computable for valid data"), 5.0);
//! ```

pub mod covariance;

pub use covariance::{correlation, covariance};

use crate::error::{PrepkitError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Arithmetic mean. NaN for an empty slice.
#[must_use]
pub fn mean(x: &[f64]) -> f64 {
    if x.is_empty() {
        return f64::NAN;
    }
    x.iter().sum::<f64>() / x.len() as f64
}

/// Population standard deviation (divides by n). NaN for an empty slice.
#[must_use]
pub fn std_dev(x: &[f64]) -> f64 {
    let mu = mean(x);
    let var = x.iter().map(|v| (v - mu).powi(2)).sum::<f64>() / x.len() as f64;
    var.sqrt()
}

/// Subtracts the mean from every element.
///
/// ```
/// use prepkit::stats::center;
///
/// assert_eq!(center(&[1.0, 2.0, 3.0]), vec![-1.0, 0.0, 1.0]);
/// ```
#[must_use]
pub fn center(x: &[f64]) -> Vec<f64> {
    let mu = mean(x);
    x.iter().map(|v| v - mu).collect()
}

/// Standard score of every element, `(x - mean) / std`.
///
/// When the population standard deviation is zero every score is `0.0`.
/// Unlike the scalers, no NaN is produced for constant input.
///
/// ```
/// use prepkit::stats::zscore;
///
/// assert_eq!(zscore(&[7.0, 7.0, 7.0]), vec![0.0, 0.0, 0.0]);
/// assert_eq!(zscore(&[1.0, 3.0]), vec![-1.0, 1.0]);
/// ```
#[must_use]
pub fn zscore(x: &[f64]) -> Vec<f64> {
    let mu = mean(x);
    let sigma = std_dev(x);
    if sigma == 0.0 {
        return vec![0.0; x.len()];
    }
    x.iter().map(|v| (v - mu) / sigma).collect()
}

/// Descriptive statistics over a borrowed slice.
#[derive(Debug)]
pub struct DescriptiveStats<'a> {
    data: &'a [f64],
}

impl<'a> DescriptiveStats<'a> {
    /// Wraps `data` without copying.
    #[must_use]
    pub fn new(data: &'a [f64]) -> Self {
        Self { data }
    }

    fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.data.to_vec();
        sorted.sort_by(f64::total_cmp);
        sorted
    }

    /// Quantile by linear interpolation between closest ranks (R-7).
    ///
    /// # Errors
    ///
    /// Returns an error if the data is empty or `q` is not in [0, 1].
    pub fn quantile(&self, q: f64) -> Result<f64> {
        self.percentiles(&[q * 100.0])
            .map(|values| values[0])
    }

    /// Computes several percentiles (in [0, 100]) with a single sort.
    ///
    /// # Errors
    ///
    /// Returns an error if the data is empty or any percentile is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use prepkit::stats::DescriptiveStats;
    ///
    /// let data = [1.0, 2.0, 3.0, 4.0];
    /// let p = DescriptiveStats::new(&data)
    ///     .percentiles(&[25.0, 50.0, 75.0])
    ///     .expect("valid percentiles");
    /// assert_eq!(p, vec![1.75, 2.5, 3.25]);
    /// ```
    pub fn percentiles(&self, percentiles: &[f64]) -> Result<Vec<f64>> {
        if self.data.is_empty() {
            return Err(PrepkitError::empty_input(
                "cannot compute percentiles of empty data",
            ));
        }
        if let Some(&bad) = percentiles.iter().find(|p| !(0.0..=100.0).contains(*p)) {
            return Err(PrepkitError::InvalidHyperparameter {
                param: "percentile".to_string(),
                value: bad.to_string(),
                constraint: "0 <= p <= 100".to_string(),
            });
        }

        let sorted = self.sorted();
        let n = sorted.len();

        Ok(percentiles
            .iter()
            .map(|&p| {
                // R-7: h = (n - 1) * p
                let h = (n - 1) as f64 * (p / 100.0);
                let lo = h.floor() as usize;
                let hi = h.ceil() as usize;
                let fraction = h - lo as f64;
                if lo == hi {
                    sorted[lo]
                } else {
                    sorted[lo] + fraction * (sorted[hi] - sorted[lo])
                }
            })
            .collect())
    }

    /// The 50th percentile.
    ///
    /// # Errors
    ///
    /// Returns an error if the data is empty.
    pub fn median(&self) -> Result<f64> {
        self.quantile(0.5)
    }

    /// Mean, median, std, extremes and quartiles in one pass over the sorted data.
    ///
    /// # Errors
    ///
    /// Returns an error if the data is empty.
    pub fn summary(&self) -> Result<SummaryStatistics> {
        let p = self.percentiles(&[0.0, 25.0, 50.0, 75.0, 100.0])?;
        Ok(SummaryStatistics {
            mean: mean(self.data),
            median: p[2],
            std_dev: std_dev(self.data),
            min: p[0],
            max: p[4],
            q1: p[1],
            q3: p[3],
        })
    }
}

/// Labeled summary of a 1D sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Arithmetic mean
    pub mean: f64,
    /// 50th percentile
    pub median: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
    /// 25th percentile
    pub q1: f64,
    /// 75th percentile
    pub q3: f64,
}

impl SummaryStatistics {
    /// The summary keyed by statistic name.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("mean", self.mean),
            ("median", self.median),
            ("std_dev", self.std_dev),
            ("min", self.min),
            ("max", self.max),
            ("q1", self.q1),
            ("q3", self.q3),
        ])
    }
}

/// Summary statistics of `x`.
///
/// # Errors
///
/// Returns [`PrepkitError::EmptyInput`] for an empty slice.
///
/// # Examples
///
/// ```
/// use prepkit::stats::summary_statistics;
///
/// let s = summary_statistics(&[1.0, 2.0, 3.0, 4.0, 5.0]).expect("non-empty");
/// assert_eq!(s.median, 3.0);
/// assert_eq!(s.q1, 2.0);
/// assert_eq!(s.q3, 4.0);
/// assert!((s.std_dev - 2.0_f64.sqrt()).abs() < 1e-12);
/// assert_eq!(s.to_map()["max"], 5.0);
/// ```
pub fn summary_statistics(x: &[f64]) -> Result<SummaryStatistics> {
    DescriptiveStats::new(x).summary()
}
