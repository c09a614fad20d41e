use crate::{Error, Matrix, Result, Scalar};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    fn ensure_same_shape<const R2: usize, const C2: usize>() -> Result<()> {
        if R != R2 || C != C2 {
            log::debug!("shape mismatch: {}x{} vs {}x{}", R, C, R2, C2);
            return Err(Error::ShapeMismatch {
                lhs: (R, C),
                rhs: (R2, C2),
            });
        }
        Ok(())
    }

    // Callers guarantee `rhs` has at least `R` rows and `C` columns.
    fn zip_with<const R2: usize, const C2: usize>(
        &self,
        rhs: &Matrix<T, R2, C2>,
        f: impl Fn(T, T) -> T,
    ) -> Self {
        let mut tmp = *self;
        for r in 0..R {
            for c in 0..C {
                tmp.rows[r][c] = f(tmp.rows[r][c], rhs.rows[r][c]);
            }
        }
        tmp
    }

    // Callers guarantee `rhs` has `C` rows.
    fn product<const P: usize, const N: usize>(&self, rhs: &Matrix<T, P, N>) -> Matrix<T, R, N> {
        let mut tmp = Matrix::zero();
        for r in 0..R {
            for n in 0..N {
                let mut dot = T::zero();
                for k in 0..C {
                    dot = dot + self.rows[r][k] * rhs.rows[k][n];
                }
                tmp.rows[r][n] = dot;
            }
        }
        tmp
    }

    /// Element-wise sum of two matrices whose shapes are only known to agree
    /// at runtime.
    ///
    /// Fails with [`Error::ShapeMismatch`] when the rows or columns differ.
    pub fn try_add<const R2: usize, const C2: usize>(&self, rhs: &Matrix<T, R2, C2>) -> Result<Self> {
        Self::ensure_same_shape::<R2, C2>()?;
        Ok(self.zip_with(rhs, |a, b| a + b))
    }

    /// Element-wise difference, see [`Matrix::try_add`].
    pub fn try_sub<const R2: usize, const C2: usize>(&self, rhs: &Matrix<T, R2, C2>) -> Result<Self> {
        Self::ensure_same_shape::<R2, C2>()?;
        Ok(self.zip_with(rhs, |a, b| a - b))
    }

    pub fn try_add_assign<const R2: usize, const C2: usize>(
        &mut self,
        rhs: &Matrix<T, R2, C2>,
    ) -> Result<&mut Self> {
        *self = self.try_add(rhs)?;
        Ok(self)
    }

    pub fn try_sub_assign<const R2: usize, const C2: usize>(
        &mut self,
        rhs: &Matrix<T, R2, C2>,
    ) -> Result<&mut Self> {
        *self = self.try_sub(rhs)?;
        Ok(self)
    }

    /// Matrix product with a right operand of any shape.
    ///
    /// Fails with [`Error::DimensionMismatch`] unless `rhs` has `C` rows.
    pub fn try_mul<const P: usize, const N: usize>(
        &self,
        rhs: &Matrix<T, P, N>,
    ) -> Result<Matrix<T, R, N>> {
        if C != P {
            log::debug!("dimension mismatch: {} columns vs {} rows", C, P);
            return Err(Error::DimensionMismatch {
                lhs_cols: C,
                rhs_rows: P,
            });
        }
        Ok(self.product(rhs))
    }
}

impl<T: Scalar, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a + b)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a - b)
    }
}

impl<T: Scalar, const R: usize, const C: usize> AddAssign for Matrix<T, R, C> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar, const R: usize, const C: usize> SubAssign for Matrix<T, R, C> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar, const R: usize, const C: usize, const N: usize> Mul<Matrix<T, C, N>>
    for Matrix<T, R, C>
{
    type Output = Matrix<T, R, N>;
    #[inline]
    fn mul(self, rhs: Matrix<T, C, N>) -> Self::Output {
        self.product(&rhs)
    }
}

impl<T: Scalar, const R: usize, const C: usize> MulAssign<Matrix<T, C, C>> for Matrix<T, R, C> {
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix<T, C, C>) {
        // accumulate into a temporary, `rhs` may be a copy of `self`
        let tmp = self.product(&rhs);
        *self = tmp;
    }
}

impl<T: Scalar, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        let mut tmp = self;
        tmp *= rhs;
        tmp
    }
}

impl<T: Scalar, const R: usize, const C: usize> Div<T> for Matrix<T, R, C> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: T) -> Self {
        let mut tmp = self;
        tmp /= rhs;
        tmp
    }
}

impl<T: Scalar, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        for v in self.iter_mut() {
            *v = *v * rhs;
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> DivAssign<T> for Matrix<T, R, C> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        for v in self.iter_mut() {
            *v = *v / rhs;
        }
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl<const R: usize, const C: usize> Mul<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;
                #[inline]
                fn mul(self, rhs: Matrix<$t, R, C>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(test)]
mod tests {
    use crate::{Error, Matrix};

    fn m4() -> Matrix<i64, 4, 4> {
        Matrix::from([[3, 1, 4, 1], [5, 9, 2, 6], [5, 3, 5, 8], [9, 7, 9, 3]])
    }

    #[test]
    fn identity_round_trips() {
        let m = m4();
        let i = Matrix::identity().unwrap();
        assert_eq!(m + i - i, m);
        assert_eq!(m * i, m);
        assert_eq!(i * m, m);
    }

    #[test]
    fn add_and_sub_are_element_wise() {
        let a = Matrix::from([[1, 2], [3, 4]]);
        let b = Matrix::from([[10, 20], [30, 40]]);
        assert_eq!(a + b, Matrix::from([[11, 22], [33, 44]]));
        assert_eq!(b - a, Matrix::from([[9, 18], [27, 36]]));

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
    }

    #[test]
    fn product_of_rectangles() {
        let a = Matrix::from([[1, 2, 3], [4, 5, 6]]);
        let b = Matrix::from([[7, 8], [9, 10], [11, 12]]);
        assert_eq!(a * b, Matrix::from([[58, 64], [139, 154]]));
    }

    #[test]
    fn known_square_product() {
        let m = m4();
        let expected = Matrix::from([
            [43, 31, 43, 44],
            [124, 134, 102, 93],
            [127, 103, 123, 87],
            [134, 120, 122, 132],
        ]);
        assert_eq!(m * m, expected);
    }

    #[test]
    fn mul_assign_matches_product() {
        let mut m = m4();
        let expected = m * m;
        m *= m;
        assert_eq!(m, expected);
    }

    #[test]
    fn scalar_ops() {
        let x = Matrix::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(x * 4.0, 4.0f64 * x);
        let mut y = x;
        y *= 4.0;
        y /= 4.0;
        assert_eq!(y, x);
        assert_eq!(x / 2.0, Matrix::from([[0.5, 1.0, 1.5], [2.0, 2.5, 3.0], [3.5, 4.0, 4.5]]));
        assert_eq!(2i64 * m4() * 3, m4() * 6);
    }

    #[test]
    fn float_division_by_zero_is_ieee() {
        let m = Matrix::from([[1.0f64, -1.0, 0.0]]) / 0.0;
        assert_eq!(m[(0, 0)], f64::INFINITY);
        assert_eq!(m[(0, 1)], f64::NEG_INFINITY);
        assert!(m[(0, 2)].is_nan());
    }

    #[test]
    fn runtime_shape_checks() {
        let _ = env_logger::builder().is_test(true).try_init();
        let a = Matrix::<i32, 2, 2>::ones();
        let b = Matrix::<i32, 2, 3>::ones();
        let err = Error::ShapeMismatch {
            lhs: (2, 2),
            rhs: (2, 3),
        };
        assert_eq!(a.try_add(&b), Err(err));
        assert_eq!(a.try_sub(&b), Err(err));
        assert_eq!(a.try_add(&a), Ok(a * 2));
        assert_eq!(a.try_sub(&a), Ok(Matrix::zero()));

        let mut c = a;
        assert_eq!(c.try_add_assign(&b).err(), Some(err));
        c.try_add_assign(&a).unwrap().try_sub_assign(&a).unwrap();
        assert_eq!(c, a);
    }

    #[test]
    fn runtime_dimension_checks() {
        let a = Matrix::<i32, 2, 3>::ones();
        assert_eq!(
            a.try_mul(&a),
            Err(Error::DimensionMismatch {
                lhs_cols: 3,
                rhs_rows: 2
            })
        );
        assert_eq!(a.try_mul(&a.transpose()), Ok(Matrix::filled(3)));
    }
}
