use crate::{Error, Matrix, Result, Scalar};

/// Cursor returned by [`Matrix::push`] that keeps writing values in
/// row-major order.
///
/// ```
/// use el::Matrix;
///
/// let mut m = Matrix::<i32, 2, 2>::new();
/// m.push(1)?.next(2)?.next(3)?.next(4)?;
/// assert_eq!(m.row(1), &[3, 4]);
/// assert!(m.push(1)?.extend([2, 3, 4, 5]).is_err());
/// # Ok::<(), el::Error>(())
/// ```
#[derive(Debug)]
pub struct Initializer<'a, T, const R: usize, const C: usize> {
    matrix: &'a mut Matrix<T, R, C>,
    index: usize,
}

impl<'a, T: Scalar, const R: usize, const C: usize> Initializer<'a, T, R, C> {
    fn write(matrix: &'a mut Matrix<T, R, C>, index: usize, value: T) -> Result<Self> {
        if index >= R * C {
            log::debug!(
                "initializer overflow on a {}x{} matrix at value #{}",
                R,
                C,
                index + 1
            );
            return Err(Error::Overflow { capacity: R * C });
        }
        matrix.rows[index / C][index % C] = value;
        Ok(Self {
            matrix,
            index: index + 1,
        })
    }

    /// Writes `value` at the cursor position and advances.
    ///
    /// Fails with [`Error::Overflow`] once every element has been written.
    #[inline]
    pub fn next(self, value: T) -> Result<Self> {
        Self::write(self.matrix, self.index, value)
    }

    /// Writes every value of `values` in turn, stopping at the first overflow.
    pub fn extend<I>(self, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        values
            .into_iter()
            .try_fold(self, |cursor, value| cursor.next(value))
    }

    /// Flat index the next value will be written to.
    #[inline]
    pub fn position(&self) -> usize {
        self.index
    }

    /// How many more values fit.
    #[inline]
    pub fn remaining(&self) -> usize {
        R * C - self.index
    }
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Writes `value` as the first element and returns a cursor for the rest.
    ///
    /// Value `i` of the chain lands at `(i / C, i % C)`.
    pub fn push(&mut self, value: T) -> Result<Initializer<'_, T, R, C>> {
        Initializer::write(self, 0, value)
    }

    /// Fills from the first element with `values` in row-major order.
    ///
    /// Elements past the end of `values` keep their previous contents.
    pub fn assign<I>(&mut self, values: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = T>,
    {
        log::trace!("assigning {}x{} matrix from iterator", R, C);
        Initializer {
            matrix: &mut *self,
            index: 0,
        }
        .extend(values)?;
        Ok(self)
    }
}
