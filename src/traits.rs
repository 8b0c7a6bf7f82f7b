//! Core traits and state for fit/transform components.
//!
//! Every transformer starts [`FitState::Unfitted`], becomes
//! [`FitState::Fitted`] on each successful `fit`, and reads that state in
//! `transform`.

use crate::error::{PrepkitError, Result};
use serde::{Deserialize, Serialize};

/// Trait for data transformers (scalers, encoders).
///
/// # Examples
///
/// ```
/// use prepkit::prelude::*;
///
/// let mut scaler = StandardScaler::new();
/// let train = vec![vec![0.0, 0.0], vec![1.0, 1.0]];
/// let scaled = scaler.fit_transform(&train).expect("fit_transform should succeed");
/// assert_eq!(scaled.get(0, 0), -1.0);
///
/// let x_test = vec![vec![2.0, 2.0]];
/// let test_scaled = scaler.transform(&x_test).expect("scaler is fitted");
/// assert_eq!(test_scaled.get(0, 0), 3.0);
/// ```
pub trait Transformer {
    /// Data accepted by `fit` and `transform`, borrowed for `'a`.
    type Input<'a>: ?Sized;

    /// Result of `transform`.
    type Output;

    /// Fits the transformer to data, replacing any previous fit.
    ///
    /// # Errors
    ///
    /// Returns an error if the input can't be coerced or is empty.
    fn fit<'a>(&mut self, x: &Self::Input<'a>) -> Result<()>;

    /// Transforms data using fitted parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the transformer is not fitted or the input shape
    /// disagrees with the fitted shape.
    fn transform<'a>(&self, x: &Self::Input<'a>) -> Result<Self::Output>;

    /// Fits and transforms in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if either step fails.
    fn fit_transform<'a>(&mut self, x: &Self::Input<'a>) -> Result<Self::Output> {
        self.fit(x)?;
        self.transform(x)
    }
}

/// Lifecycle of a transformer's learned parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FitState<P> {
    /// `fit` has not been called.
    Unfitted,
    /// Parameters from the most recent `fit`.
    Fitted(P),
}

impl<P> Default for FitState<P> {
    fn default() -> Self {
        Self::Unfitted
    }
}

impl<P> FitState<P> {
    /// Returns true once `fit` has succeeded.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        matches!(self, Self::Fitted(_))
    }

    /// Fitted parameters, if any.
    #[must_use]
    pub fn get(&self) -> Option<&P> {
        match self {
            Self::Fitted(params) => Some(params),
            Self::Unfitted => None,
        }
    }

    /// Fitted parameters, or a not-fitted error naming `transformer`.
    ///
    /// # Errors
    ///
    /// Returns [`PrepkitError::NotFitted`] in the unfitted state.
    pub fn params(&self, transformer: &'static str) -> Result<&P> {
        self.get()
            .ok_or_else(|| PrepkitError::not_fitted(transformer))
    }

    /// Replaces the state with freshly fitted parameters.
    pub fn replace(&mut self, params: P) {
        *self = Self::Fitted(params);
    }
}
