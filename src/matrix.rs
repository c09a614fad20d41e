use crate::{Error, Result, Scalar, Vector};
use core::{
    fmt,
    ops::{Index, IndexMut},
};

/// A `R` x `C` matrix stored row-major in an owned array.
///
/// Rows and columns are part of the type. Indexing out of range panics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Matrix<T, const R: usize, const C: usize> {
    pub(crate) rows: [[T; C]; R],
}

/// Converts a small index-derived constant into the element type.
pub(crate) fn cast<T: Scalar>(n: usize) -> Result<T> {
    num_traits::cast::<usize, T>(n).ok_or(Error::Unrepresentable(n))
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    #[inline]
    pub fn new() -> Self {
        Self::zero()
    }

    #[inline]
    pub fn zero() -> Self {
        Self::filled(T::zero())
    }

    /// Every element set to one.
    #[inline]
    pub fn ones() -> Self {
        Self::filled(T::one())
    }

    #[inline]
    pub fn filled(value: T) -> Self {
        Self {
            rows: [[value; C]; R],
        }
    }

    /// Builds a matrix by evaluating `f(row, col)` for every cell.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut mat = Self::zero();
        for row in 0..R {
            for col in 0..C {
                mat.rows[row][col] = f(row, col);
            }
        }
        mat
    }

    #[inline]
    pub const fn rows(&self) -> usize {
        R
    }

    #[inline]
    pub const fn cols(&self) -> usize {
        C
    }

    /// Number of elements, `R * C`.
    #[inline]
    pub const fn size(&self) -> usize {
        R * C
    }

    #[inline]
    pub const fn is_square(&self) -> bool {
        R == C
    }

    fn ensure_square() -> Result<()> {
        if R != C {
            log::debug!("square-only constructor used on a {}x{} matrix", R, C);
            return Err(Error::NotSquare { rows: R, cols: C });
        }
        Ok(())
    }

    /// Identity matrix.
    ///
    /// Fails with [`Error::NotSquare`] unless `R == C`.
    #[inline]
    pub fn identity() -> Result<Self> {
        Self::identity_scaled(T::one())
    }

    /// Diagonal matrix with `scale` on the diagonal.
    pub fn identity_scaled(scale: T) -> Result<Self> {
        Self::ensure_square()?;
        let mut mat = Self::zero();
        for i in 0..R {
            mat.rows[i][i] = scale;
        }
        Ok(mat)
    }

    /// Exchange (reversal) matrix: ones on the anti-diagonal.
    #[inline]
    pub fn exchange() -> Result<Self> {
        Self::exchange_scaled(T::one())
    }

    pub fn exchange_scaled(scale: T) -> Result<Self> {
        Self::ensure_square()?;
        let mut mat = Self::zero();
        for i in 0..R {
            mat.rows[i][R - 1 - i] = scale;
        }
        Ok(mat)
    }

    /// Hilbert matrix, `H[i][j] = 1 / (i + j + 1)`.
    #[inline]
    pub fn hilbert() -> Result<Self> {
        Self::hilbert_scaled(T::one())
    }

    pub fn hilbert_scaled(scale: T) -> Result<Self> {
        Self::ensure_square()?;
        let mut mat = Self::zero();
        for i in 0..R {
            for j in 0..C {
                mat.rows[i][j] = scale / cast::<T>(i + j + 1)?;
            }
        }
        Ok(mat)
    }

    /// Lehmer matrix, `L[i][j] = (min(i, j) + 1) / (max(i, j) + 1)`.
    ///
    /// Integer element types truncate, leaving only the unit diagonal.
    pub fn lehmer() -> Result<Self> {
        Self::ensure_square()?;
        let mut mat = Self::zero();
        for i in 0..R {
            for j in 0..C {
                let num = cast::<T>(i.min(j) + 1)?;
                let den = cast::<T>(i.max(j) + 1)?;
                mat.rows[i][j] = num / den;
            }
        }
        Ok(mat)
    }

    /// Resets `self` to the identity in place.
    pub fn set_identity(&mut self) -> Result<&mut Self> {
        *self = Self::identity()?;
        Ok(self)
    }

    pub fn set_zero(&mut self) -> &mut Self {
        *self = Self::zero();
        self
    }

    /// Element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= R` or `col >= C`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> T {
        self.rows[row][col]
    }

    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.rows[row][col]
    }

    #[inline]
    pub fn row(&self, idx: usize) -> &[T; C] {
        &self.rows[idx]
    }

    #[inline]
    pub fn row_mut(&mut self, idx: usize) -> &mut [T; C] {
        &mut self.rows[idx]
    }

    /// Copy of column `idx` as a column vector.
    pub fn column(&self, idx: usize) -> Vector<T, R> {
        assert!(idx < C, "column index out of bounds");
        Matrix::from_fn(|row, _| self.rows[row][idx])
    }

    /// Elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.rows.iter().flat_map(|row| row.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.rows.iter_mut().flat_map(|row| row.iter_mut())
    }

    pub fn transpose(&self) -> Matrix<T, C, R> {
        let mut mat = Matrix::zero();
        for r in 0..R {
            for c in 0..C {
                mat.rows[c][r] = self.rows[r][c];
            }
        }
        mat
    }

    pub fn map<U, F>(&self, mut f: F) -> Matrix<U, R, C>
    where
        U: Scalar,
        F: FnMut(T) -> U,
    {
        Matrix::from_fn(|row, col| f(self.rows[row][col]))
    }
}

impl<T: Scalar, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    #[inline]
    fn from(rows: [[T; C]; R]) -> Self {
        Self { rows }
    }
}

impl<T, const R: usize, const C: usize> From<Matrix<T, R, C>> for [[T; C]; R] {
    #[inline]
    fn from(m: Matrix<T, R, C>) -> Self {
        m.rows
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.rows[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.rows[row][col]
    }
}

impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = [T; C];
    #[inline]
    fn index(&self, row: usize) -> &[T; C] {
        &self.rows[row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut [T; C] {
        &mut self.rows[row]
    }
}

impl<T, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i != 0 {
                f.write_str(",\n ")?;
            }
            f.write_str("[")?;
            for (j, value) in row.iter().enumerate() {
                if j != 0 {
                    f.write_str(", ")?;
                }
                match f.precision() {
                    Some(precision) => write!(f, "{:.*}", precision, value)?,
                    None => write!(f, "{}", value)?,
                }
            }
            f.write_str("]")?;
        }
        f.write_str("]")
    }
}
