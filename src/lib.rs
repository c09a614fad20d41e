//! Fixed-dimension matrix and vector containers.
//!
//! Shapes are const generic parameters, so mixing shapes in `+`, `-` or `*`
//! is a type error. The `try_*` forms accept independently shaped operands
//! and check the shapes at runtime instead.
//!
//! ```
//! use el::{Matrix, Vector};
//!
//! let mut m = Matrix::<f64, 2, 2>::new();
//! m.push(1.0)?.next(2.0)?.next(3.0)?.next(4.0)?;
//! assert_eq!(m, Matrix::from([[1.0, 2.0], [3.0, 4.0]]));
//!
//! let v = Vector::from_array([1.0, 1.0]);
//! assert_eq!((m * v).y(), 7.0);
//! # Ok::<(), el::Error>(())
//! ```
mod error;
mod initializer;
mod intrinsics;
mod matrix;
mod ops;
mod scalar;
mod vector;

#[cfg(feature = "approx")]
mod approx_ext;
#[cfg(feature = "glam")]
pub mod glam_ext;
#[cfg(feature = "rand")]
mod random;
#[cfg(feature = "serde")]
mod serialize;

#[cfg(test)]
mod proptests;

pub use error::{Error, Result};
pub use initializer::Initializer;
pub use intrinsics::K;
pub use matrix::Matrix;
pub use scalar::Scalar;
pub use vector::Vector;
