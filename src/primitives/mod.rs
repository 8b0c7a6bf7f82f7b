//! Core containers (Vector, Matrix).
//!
//! Every transformer and helper in the crate computes over these types in
//! `f64`.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
