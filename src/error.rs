//! Error types for prepkit operations.
//!
//! Every fallible call in the crate returns [`Result`], so callers see one
//! error type regardless of which transformer or helper failed.

use thiserror::Error;

/// Main error type for prepkit operations.
///
/// # Examples
///
/// ```
/// use prepkit::error::PrepkitError;
///
/// let err = PrepkitError::DimensionMismatch {
///     expected: "3 features".to_string(),
///     actual: "2 features".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Error)]
pub enum PrepkitError {
    /// An input element could not be interpreted as a number.
    #[error("Type conversion failed: cannot interpret {value:?} as {target}")]
    TypeConversion {
        /// Offending value, rendered as text
        value: String,
        /// Target numeric type
        target: &'static str,
    },

    /// `transform` (or an accessor needing fitted state) was called before `fit`.
    #[error("{transformer} is not fitted; call fit() first")]
    NotFitted {
        /// Name of the transformer
        transformer: &'static str,
    },

    /// Shapes or lengths don't agree.
    #[error("Input dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// An operation that needs at least one sample received none.
    #[error("Empty input: {context}")]
    EmptyInput {
        /// What was empty
        context: String,
    },

    /// Invalid hyperparameter value provided.
    #[error("Invalid hyperparameter: {param} = {value}, expected {constraint}")]
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// A code handed to `inverse_transform` names no fitted class.
    #[error("Unknown label code {code}: encoder has {n_classes} classes")]
    UnknownCode {
        /// The code that was looked up
        code: i64,
        /// Number of classes seen at fit time
        n_classes: usize,
    },

    /// A label can't be used as a class.
    #[error("Invalid label {label}: {reason}")]
    InvalidLabel {
        /// Offending label, rendered as text
        label: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Generic error with string message.
    #[error("{0}")]
    Other(String),
}

impl From<&str> for PrepkitError {
    fn from(msg: &str) -> Self {
        PrepkitError::Other(msg.to_string())
    }
}

impl From<String> for PrepkitError {
    fn from(msg: String) -> Self {
        PrepkitError::Other(msg)
    }
}

impl PrepkitError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::EmptyInput {
            context: context.to_string(),
        }
    }

    /// Create a not-fitted error for the named transformer
    #[must_use]
    pub fn not_fitted(transformer: &'static str) -> Self {
        Self::NotFitted { transformer }
    }

    /// Returns true for the not-fitted variant.
    #[must_use]
    pub fn is_not_fitted(&self) -> bool {
        matches!(self, Self::NotFitted { .. })
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, PrepkitError>;
