//! Label encoding for 1D categorical targets.

use crate::error::{PrepkitError, Result};
use crate::traits::{FitState, Transformer};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

const LABEL_ENCODER: &str = "LabelEncoder";

/// Code returned by [`LabelEncoder::transform`] for a label not seen at fit time.
pub const UNSEEN_LABEL: i64 = -1;

/// Encodes labels as dense integer codes `0..n_classes`.
///
/// Codes follow the sorted order of the distinct labels seen by `fit`
/// (lexicographic for strings, numeric for integers). First-seen order
/// plays no part. A label missing from the fitted vocabulary encodes as
/// [`UNSEEN_LABEL`] instead of failing.
///
/// Float labels go through [`FloatLabelEncoder`], which keys classes by
/// [`OrderedFloat`].
///
/// # Example
///
/// ```
/// use prepkit::prelude::*;
///
/// let mut encoder = LabelEncoder::new();
/// encoder.fit(&["cat", "dog", "bird", "cat", "dog"]).expect("fit should succeed");
/// assert_eq!(encoder.classes(), Some(&["bird", "cat", "dog"][..]));
///
/// let codes = encoder.transform(&["fish", "dog", "cat"]).expect("encoder is fitted");
/// assert_eq!(codes, vec![-1, 2, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelEncoder<T> {
    /// Sorted, duplicate-free classes from the last fit.
    state: FitState<Vec<T>>,
}

impl<T> Default for LabelEncoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LabelEncoder<T> {
    /// Creates an unfitted encoder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: FitState::Unfitted,
        }
    }

    /// Distinct labels in code order, once fitted.
    #[must_use]
    pub fn classes(&self) -> Option<&[T]> {
        self.state.get().map(Vec::as_slice)
    }

    /// Number of distinct labels, once fitted.
    #[must_use]
    pub fn n_classes(&self) -> Option<usize> {
        self.state.get().map(Vec::len)
    }

    /// Returns true if the encoder has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.state.is_fitted()
    }
}

impl<T: Ord + Clone> LabelEncoder<T> {
    /// Maps codes back to their labels.
    ///
    /// # Errors
    ///
    /// Returns [`PrepkitError::NotFitted`] if unfitted, and
    /// [`PrepkitError::UnknownCode`] for any code outside `0..n_classes`,
    /// including [`UNSEEN_LABEL`].
    pub fn inverse_transform(&self, codes: &[i64]) -> Result<Vec<T>> {
        let classes = self.state.params(LABEL_ENCODER)?;

        codes
            .iter()
            .map(|&code| {
                usize::try_from(code)
                    .ok()
                    .and_then(|idx| classes.get(idx))
                    .cloned()
                    .ok_or(PrepkitError::UnknownCode {
                        code,
                        n_classes: classes.len(),
                    })
            })
            .collect()
    }
}

/// Encoder for `f64` labels, ordered numerically.
///
/// # Example
///
/// ```
/// use prepkit::preprocessing::FloatLabelEncoder;
///
/// let mut encoder = FloatLabelEncoder::new();
/// let codes = encoder.fit_transform_floats(&[2.5, 1.5, 2.5]).expect("finite labels");
/// assert_eq!(codes, vec![1, 0, 1]);
/// assert_eq!(encoder.transform_floats(&[3.5]).expect("fitted"), vec![-1]);
/// ```
pub type FloatLabelEncoder = LabelEncoder<OrderedFloat<f64>>;

fn float_keys(y: &[f64]) -> Vec<OrderedFloat<f64>> {
    y.iter().copied().map(OrderedFloat::from).collect()
}

impl LabelEncoder<OrderedFloat<f64>> {
    /// Fits on `f64` labels. `-0.0` and `0.0` are the same class.
    ///
    /// # Errors
    ///
    /// Returns [`PrepkitError::InvalidLabel`] for NaN or infinite labels,
    /// and [`PrepkitError::EmptyInput`] for no labels.
    pub fn fit_floats(&mut self, y: &[f64]) -> Result<()> {
        if let Some(bad) = y.iter().find(|v| !v.is_finite()) {
            return Err(PrepkitError::InvalidLabel {
                label: bad.to_string(),
                reason: "float labels must be finite",
            });
        }
        self.fit(&float_keys(y))
    }

    /// Encodes `f64` labels; non-finite or unseen values become [`UNSEEN_LABEL`].
    ///
    /// # Errors
    ///
    /// Returns [`PrepkitError::NotFitted`] if unfitted.
    pub fn transform_floats(&self, y: &[f64]) -> Result<Vec<i64>> {
        self.transform(&float_keys(y))
    }

    /// Fits on `y` and encodes it.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails.
    pub fn fit_transform_floats(&mut self, y: &[f64]) -> Result<Vec<i64>> {
        self.fit_floats(y)?;
        self.transform_floats(y)
    }

    /// Maps codes back to `f64` labels.
    ///
    /// # Errors
    ///
    /// Same as [`LabelEncoder::inverse_transform`].
    pub fn inverse_transform_floats(&self, codes: &[i64]) -> Result<Vec<f64>> {
        Ok(self
            .inverse_transform(codes)?
            .into_iter()
            .map(OrderedFloat::into_inner)
            .collect())
    }
}

fn encode<T: Ord>(classes: &[T], label: &T) -> i64 {
    classes
        .binary_search(label)
        .ok()
        .and_then(|idx| i64::try_from(idx).ok())
        .unwrap_or(UNSEEN_LABEL)
}

impl<T: Ord + Clone> Transformer for LabelEncoder<T> {
    type Input<'a> = [T];
    type Output = Vec<i64>;

    /// Collects the sorted distinct labels.
    fn fit<'a>(&mut self, y: &Self::Input<'a>) -> Result<()> {
        if y.is_empty() {
            return Err(PrepkitError::empty_input(
                "LabelEncoder needs at least one label to fit",
            ));
        }

        let mut classes = y.to_vec();
        classes.sort();
        classes.dedup();

        debug!(n_samples = y.len(), n_classes = classes.len(), "fitted LabelEncoder");
        self.state.replace(classes);

        Ok(())
    }

    /// Looks up the code of every label; unseen labels become [`UNSEEN_LABEL`].
    fn transform<'a>(&self, y: &Self::Input<'a>) -> Result<Vec<i64>> {
        let classes = self.state.params(LABEL_ENCODER)?;

        let codes: Vec<i64> = y.iter().map(|label| encode(classes, label)).collect();

        let unseen = codes.iter().filter(|&&c| c == UNSEEN_LABEL).count();
        if unseen > 0 {
            debug!(unseen, "labels outside the fitted classes");
        }

        Ok(codes)
    }
}

#[cfg(test)]
#[path = "label_tests.rs"]
mod tests;
