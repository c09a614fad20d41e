//! Conversions between this crate's containers and `glam` types.
//!
//! glam matrices are column-major, so every conversion transposes.

use crate::{Matrix, K};
use glam::{DMat3, DMat4, DVec3, DVec4, Mat3, Mat4, Vec3, Vec4};

macro_rules! impl_glam_mat {
    ($glam:ty, $t:ty, $n:literal) => {
        impl From<$glam> for Matrix<$t, $n, $n> {
            #[inline]
            fn from(m: $glam) -> Self {
                Matrix::<$t, $n, $n>::from(m.to_cols_array_2d()).transpose()
            }
        }

        impl From<Matrix<$t, $n, $n>> for $glam {
            #[inline]
            fn from(m: Matrix<$t, $n, $n>) -> Self {
                <$glam>::from_cols_array_2d(&m.transpose().rows)
            }
        }
    };
}

macro_rules! impl_glam_vec {
    ($glam:ty, $t:ty, $n:literal) => {
        impl From<$glam> for Matrix<$t, $n, 1> {
            #[inline]
            fn from(v: $glam) -> Self {
                Matrix::from_array(v.to_array())
            }
        }

        impl From<Matrix<$t, $n, 1>> for $glam {
            #[inline]
            fn from(v: Matrix<$t, $n, 1>) -> Self {
                <$glam>::from_array(v.to_array())
            }
        }
    };
}

impl_glam_mat!(Mat3, f32, 3);
impl_glam_mat!(Mat4, f32, 4);
impl_glam_mat!(DMat3, f64, 3);
impl_glam_mat!(DMat4, f64, 4);

impl_glam_vec!(Vec3, f32, 3);
impl_glam_vec!(Vec4, f32, 4);
impl_glam_vec!(DVec3, f64, 3);
impl_glam_vec!(DVec4, f64, 4);

impl From<K<f32>> for Mat3 {
    #[inline]
    fn from(k: K<f32>) -> Self {
        k.into_matrix().into()
    }
}

impl From<K<f64>> for DMat3 {
    #[inline]
    fn from(k: K<f64>) -> Self {
        k.into_matrix().into()
    }
}
