//! Prepkit: feature scaling, label encoding and descriptive statistics.
//!
//! Prepkit prepares tabular numeric data for model training and evaluates
//! simple linear fits, with a small fit/transform API over row-major
//! matrices.
//!
//! # Quick Start
//!
//! ```
//! use prepkit::prelude::*;
//!
//! let train = vec![vec![-1.0, 2.0], vec![-0.5, 6.0], vec![0.0, 10.0], vec![1.0, 18.0]];
//!
//! let mut scaler = MinMaxScaler::new();
//! scaler.fit(&train).expect("fit should succeed");
//!
//! // Out-of-range values extrapolate instead of clipping
//! let scaled = scaler.transform(&vec![vec![2.0, 2.0]]).expect("scaler is fitted");
//! assert_eq!(scaled.to_rows(), vec![vec![1.5, 0.0]]);
//!
//! let mut encoder = LabelEncoder::new();
//! let codes = encoder.fit_transform(&[1, 2, 3, 1, 2, 3, 4]).expect("fit_transform should succeed");
//! assert_eq!(codes, vec![0, 1, 2, 0, 1, 2, 3]);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`coerce`]: Conversion of list-like input to `f64` matrices
//! - [`preprocessing`]: Data transformers (scalers, encoders)
//! - [`stats`]: Descriptive statistics (centering, z-scores, quantiles, covariance)
//! - [`metrics`]: Evaluation of simple linear regression fits
//!
//! # Logging
//!
//! Fits and NaN-producing transforms emit `tracing` events at `debug`
//! level. Install any `tracing` subscriber to see them.

pub mod coerce;
pub mod error;
pub mod metrics;
pub mod prelude;
pub mod preprocessing;
pub mod primitives;
pub mod stats;
pub mod traits;

pub use error::{PrepkitError, Result};
pub use primitives::{Matrix, Vector};
pub use traits::{FitState, Transformer};
