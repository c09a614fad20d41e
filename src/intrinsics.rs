use crate::{Matrix, Scalar};
use core::{
    fmt,
    ops::{Deref, DerefMut},
};

/// Camera intrinsics matrix.
///
/// ```text
/// [[fx,  0, ppx],
///  [ 0, fy, ppy],
///  [ 0,  0,   1]]
/// ```
///
/// Dereferences to the underlying `Matrix<T, 3, 3>`, so every matrix
/// operation is available. Starts out as the identity.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct K<T>(Matrix<T, 3, 3>);

impl<T: Scalar> K<T> {
    pub fn new() -> Self {
        let mut k = Self(Matrix::zero());
        k.set_identity();
        k
    }

    pub fn from_parameters(fx: T, fy: T, ppx: T, ppy: T) -> Self {
        let mut k = Self::new();
        *k.fx_mut() = fx;
        *k.fy_mut() = fy;
        *k.ppx_mut() = ppx;
        *k.ppy_mut() = ppy;
        k
    }

    /// Resets to unit focal lengths and a principal point at the origin.
    pub fn set_identity(&mut self) -> &mut Self {
        self.0 = Matrix::zero();
        for i in 0..3 {
            self.0.rows[i][i] = T::one();
        }
        self
    }

    /// Focal length along x.
    #[inline]
    pub fn fx(&self) -> T {
        self.0.rows[0][0]
    }

    /// Focal length along y.
    #[inline]
    pub fn fy(&self) -> T {
        self.0.rows[1][1]
    }

    /// Principal point, x coordinate.
    #[inline]
    pub fn ppx(&self) -> T {
        self.0.rows[0][2]
    }

    /// Principal point, y coordinate.
    #[inline]
    pub fn ppy(&self) -> T {
        self.0.rows[1][2]
    }

    #[inline]
    pub fn fx_mut(&mut self) -> &mut T {
        &mut self.0.rows[0][0]
    }

    #[inline]
    pub fn fy_mut(&mut self) -> &mut T {
        &mut self.0.rows[1][1]
    }

    #[inline]
    pub fn ppx_mut(&mut self) -> &mut T {
        &mut self.0.rows[0][2]
    }

    #[inline]
    pub fn ppy_mut(&mut self) -> &mut T {
        &mut self.0.rows[1][2]
    }

    #[inline]
    pub fn into_matrix(self) -> Matrix<T, 3, 3> {
        self.0
    }
}

impl<T: Scalar> Default for K<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for K<T> {
    type Target = Matrix<T, 3, 3>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for K<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> From<Matrix<T, 3, 3>> for K<T> {
    #[inline]
    fn from(m: Matrix<T, 3, 3>) -> Self {
        Self(m)
    }
}

impl<T> From<K<T>> for Matrix<T, 3, 3> {
    #[inline]
    fn from(k: K<T>) -> Self {
        k.0
    }
}

impl<T: fmt::Display> fmt::Display for K<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::K;
    use crate::{Matrix, Vector};

    #[test]
    fn starts_as_identity() {
        let k = K::<f64>::default();
        assert_eq!((k.fx(), k.fy(), k.ppx(), k.ppy()), (1.0, 1.0, 0.0, 0.0));
        assert_eq!(*k, Matrix::identity().unwrap());
        assert_eq!((k.rows(), k.cols(), k.size()), (3, 3, 9));
    }

    #[test]
    fn reset_after_editing() {
        let mut k = K::<f64>::new();
        *k.fx_mut() = 1280.12;
        *k.fy_mut() = 800.12;
        *k.ppx_mut() = 640.87;
        *k.ppy_mut() = 400.57;
        assert_eq!(k.at(0, 0), 1280.12);
        assert_eq!(k.at(1, 2), 400.57);

        k.set_identity();
        assert_eq!((k.fx(), k.fy(), k.ppx(), k.ppy()), (1.0, 1.0, 0.0, 0.0));
    }

    #[test]
    fn projects_through_matrix_ops() {
        let k = K::from_parameters(100.0, 200.0, 320.0, 240.0);
        let p = Vector::from_array([0.5, -0.25, 1.0]);
        let uv = *k * p;
        assert_eq!(uv.to_array(), [370.0, 190.0, 1.0]);

        let doubled: K<f64> = (k.into_matrix() * 2.0).into();
        assert_eq!(doubled.fx(), 200.0);
    }

    #[test]
    fn display_delegates_to_matrix() {
        let k = K::<i32>::new();
        assert_eq!(k.to_string(), "[[1, 0, 0],\n [0, 1, 0],\n [0, 0, 1]]");
    }
}
