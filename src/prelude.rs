//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use prepkit::prelude::*;
//! ```

pub use crate::coerce::NumericData;
pub use crate::error::PrepkitError;
pub use crate::metrics::{
    error, predict, rsquared, sum_of_square_error, total_sum_of_squares, SimpleLinearModel,
};
pub use crate::preprocessing::{
    FloatLabelEncoder, LabelEncoder, MinMaxScaler, StandardScaler, UNSEEN_LABEL,
};
pub use crate::primitives::{Matrix, Vector};
pub use crate::stats::{
    center, correlation, covariance, summary_statistics, zscore, DescriptiveStats,
    SummaryStatistics,
};
pub use crate::traits::{FitState, Transformer};
