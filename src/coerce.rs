//! Coercion of list-like input into `f64` arrays.
//!
//! Scalers accept `&dyn NumericData`, so nested `Vec`s, fixed-size arrays,
//! string cells and [`Matrix`] values can all be passed to `fit` and
//! `transform` directly. The conversion runs at the start of every call.
//!
//! # Examples
//!
//! ```
//! use prepkit::coerce::NumericData;
//!
//! let rows = vec![vec![1, 2], vec![3, 4]];
//! let m = rows.to_matrix().expect("integers are numeric");
//! assert_eq!(m.shape(), (2, 2));
//! assert_eq!(m.get(1, 0), 3.0);
//!
//! let bad = vec![vec!["1.5", "x"]];
//! assert!(bad.to_matrix().is_err());
//! ```

use crate::error::{PrepkitError, Result};
use crate::primitives::{Matrix, Vector};
use tracing::trace;

/// A scalar that can be read as `f64`.
pub trait Numeric {
    /// Converts the element.
    ///
    /// # Errors
    ///
    /// Returns [`PrepkitError::TypeConversion`] if the value is not numeric.
    fn to_f64(&self) -> Result<f64>;
}

macro_rules! impl_numeric_lossless {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn to_f64(&self) -> Result<f64> {
                    Ok(f64::from(*self))
                }
            }
        )*
    };
}

macro_rules! impl_numeric_cast {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline]
                #[allow(clippy::cast_precision_loss)]
                fn to_f64(&self) -> Result<f64> {
                    Ok(*self as f64)
                }
            }
        )*
    };
}

impl_numeric_lossless!(f32, f64, i8, i16, i32, u8, u16, u32);
impl_numeric_cast!(i64, i128, isize, u64, u128, usize);

impl Numeric for bool {
    fn to_f64(&self) -> Result<f64> {
        Ok(if *self { 1.0 } else { 0.0 })
    }
}

impl Numeric for str {
    fn to_f64(&self) -> Result<f64> {
        self.trim()
            .parse::<f64>()
            .map_err(|_| PrepkitError::TypeConversion {
                value: self.to_string(),
                target: "f64",
            })
    }
}

impl Numeric for String {
    fn to_f64(&self) -> Result<f64> {
        self.as_str().to_f64()
    }
}

impl<E: Numeric + ?Sized> Numeric for &E {
    fn to_f64(&self) -> Result<f64> {
        (**self).to_f64()
    }
}

/// One row of a feature matrix.
pub trait NumericRow {
    /// Converts every element of the row.
    ///
    /// # Errors
    ///
    /// Returns [`PrepkitError::TypeConversion`] on the first non-numeric element.
    fn to_row(&self) -> Result<Vec<f64>>;
}

impl<E: Numeric> NumericRow for [E] {
    fn to_row(&self) -> Result<Vec<f64>> {
        self.iter().map(Numeric::to_f64).collect()
    }
}

impl<E: Numeric> NumericRow for Vec<E> {
    fn to_row(&self) -> Result<Vec<f64>> {
        self.as_slice().to_row()
    }
}

impl<E: Numeric, const N: usize> NumericRow for [E; N] {
    fn to_row(&self) -> Result<Vec<f64>> {
        self.as_slice().to_row()
    }
}

impl<R: NumericRow + ?Sized> NumericRow for &R {
    fn to_row(&self) -> Result<Vec<f64>> {
        (**self).to_row()
    }
}

/// Anything that can be read as a `rows x cols` matrix of `f64`.
///
/// Object safe; transformers take `&dyn NumericData`.
pub trait NumericData {
    /// Produces the coerced matrix.
    ///
    /// # Errors
    ///
    /// - [`PrepkitError::TypeConversion`] if an element is not numeric
    /// - [`PrepkitError::DimensionMismatch`] if rows have different lengths
    fn to_matrix(&self) -> Result<Matrix<f64>>;
}

fn rows_to_matrix<R: NumericRow>(rows: &[R]) -> Result<Matrix<f64>> {
    let converted = rows
        .iter()
        .map(NumericRow::to_row)
        .collect::<Result<Vec<_>>>()?;
    let matrix = Matrix::from_rows(&converted)?;
    trace!(shape = ?matrix.shape(), "coerced nested rows");
    Ok(matrix)
}

impl<R: NumericRow> NumericData for [R] {
    fn to_matrix(&self) -> Result<Matrix<f64>> {
        rows_to_matrix(self)
    }
}

impl<R: NumericRow> NumericData for Vec<R> {
    fn to_matrix(&self) -> Result<Matrix<f64>> {
        rows_to_matrix(self)
    }
}

impl<R: NumericRow, const M: usize> NumericData for [R; M] {
    fn to_matrix(&self) -> Result<Matrix<f64>> {
        rows_to_matrix(self)
    }
}

impl<E: Numeric + Copy> NumericData for Matrix<E> {
    fn to_matrix(&self) -> Result<Matrix<f64>> {
        let (rows, cols) = self.shape();
        let data = self
            .as_slice()
            .iter()
            .map(Numeric::to_f64)
            .collect::<Result<Vec<_>>>()?;
        Matrix::from_vec(rows, cols, data)
    }
}

/// A flat vector is read as a single feature column.
impl<E: Numeric> NumericData for Vector<E> {
    fn to_matrix(&self) -> Result<Matrix<f64>> {
        let data = to_vector(self.as_slice())?;
        Matrix::from_vec(data.len(), 1, data)
    }
}

impl<D: NumericData + ?Sized> NumericData for &D {
    fn to_matrix(&self) -> Result<Matrix<f64>> {
        (**self).to_matrix()
    }
}

/// Coerces a flat sequence into `f64` values.
///
/// # Errors
///
/// Returns [`PrepkitError::TypeConversion`] on the first non-numeric element.
///
/// # Examples
///
/// ```
/// use prepkit::coerce::to_vector;
///
/// assert_eq!(to_vector(&["1", " 2.5 "]).expect("numeric strings"), vec![1.0, 2.5]);
/// assert!(to_vector(&["one"]).is_err());
/// ```
pub fn to_vector<E: Numeric>(values: &[E]) -> Result<Vec<f64>> {
    values.to_row()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_vec_of_ints() {
        let m = vec![vec![1_i32, 5, 0], vec![2, 5, 1]]
            .to_matrix()
            .expect("ints coerce");
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.as_slice(), &[1.0, 5.0, 0.0, 2.0, 5.0, 1.0]);
    }

    #[test]
    fn test_array_of_arrays_mixed_literals() {
        let data = [[-1.0, 2.0], [-0.5, 6.0], [0.0, 10.0], [1.0, 18.0]];
        let m = data.to_matrix().expect("floats coerce");
        assert_eq!(m.shape(), (4, 2));
        assert_eq!(m.get(1, 0), -0.5);
    }

    #[test]
    fn test_string_cells() {
        let data = vec![vec!["1".to_string(), "2e1".to_string()]];
        let m = data.to_matrix().expect("numeric strings coerce");
        assert_eq!(m.as_slice(), &[1.0, 20.0]);
    }

    #[test]
    fn test_non_numeric_string_fails() {
        let data = vec![vec!["1", "cat"]];
        let err = data.to_matrix().expect_err("cat is not a number");
        match err {
            PrepkitError::TypeConversion { value, target } => {
                assert_eq!(value, "cat");
                assert_eq!(target, "f64");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_ragged_rows_fail() {
        let data = vec![vec![1.0, 2.0], vec![3.0]];
        let err = data.to_matrix().expect_err("ragged input");
        assert!(matches!(err, PrepkitError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_empty_rows_give_empty_matrix() {
        let data: Vec<Vec<f64>> = Vec::new();
        let m = data.to_matrix().expect("empty is representable");
        assert_eq!(m.shape(), (0, 0));
    }

    #[test]
    fn test_vector_is_one_column() {
        let v = Vector::from_slice(&[3_u8, 1, 2]);
        let m = v.to_matrix().expect("u8 coerce");
        assert_eq!(m.shape(), (3, 1));
        assert_eq!(m.get(2, 0), 2.0);
    }

    #[test]
    fn test_matrix_passthrough() {
        let m = Matrix::from_vec(1, 2, vec![f64::NAN, 4.0]).expect("valid");
        let c = m.to_matrix().expect("f64 matrix");
        assert!(c.get(0, 0).is_nan());
        assert_eq!(c.get(0, 1), 4.0);
    }

    #[test]
    fn test_bool_and_wide_ints() {
        assert_eq!(true.to_f64().expect("bool"), 1.0);
        assert_eq!(7_u64.to_f64().expect("u64"), 7.0);
        assert_eq!((-3_i64).to_f64().expect("i64"), -3.0);
    }

    #[test]
    fn test_through_trait_object() {
        let rows = vec![[1_i16, 2], [3, 4]];
        let dynamic: &dyn NumericData = &rows;
        assert_eq!(dynamic.to_matrix().expect("i16").n_rows(), 2);
    }
}
