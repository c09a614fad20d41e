use crate::{Matrix, Scalar};

/// Column vector: a matrix with `N` rows and a single column.
pub type Vector<T, const N: usize> = Matrix<T, N, 1>;

impl<T: Scalar, const N: usize> Matrix<T, N, 1> {
    #[inline]
    pub fn from_array(values: [T; N]) -> Self {
        Self::from_fn(|row, _| values[row])
    }

    /// Element `i`, counting down the column.
    #[inline]
    pub fn get(&self, i: usize) -> T {
        self.rows[i][0]
    }

    #[inline]
    pub fn get_mut(&mut self, i: usize) -> &mut T {
        &mut self.rows[i][0]
    }

    /// First element.
    ///
    /// # Panics
    ///
    /// Panics if `N < 1`. The same holds for `y` (`N < 2`), `z` (`N < 3`)
    /// and `w` (`N < 4`) and their `_mut` forms.
    #[inline]
    pub fn x(&self) -> T {
        self.get(0)
    }

    #[inline]
    pub fn y(&self) -> T {
        self.get(1)
    }

    #[inline]
    pub fn z(&self) -> T {
        self.get(2)
    }

    #[inline]
    pub fn w(&self) -> T {
        self.get(3)
    }

    #[inline]
    pub fn x_mut(&mut self) -> &mut T {
        self.get_mut(0)
    }

    #[inline]
    pub fn y_mut(&mut self) -> &mut T {
        self.get_mut(1)
    }

    #[inline]
    pub fn z_mut(&mut self) -> &mut T {
        self.get_mut(2)
    }

    #[inline]
    pub fn w_mut(&mut self) -> &mut T {
        self.get_mut(3)
    }

    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self.iter()
            .zip(rhs.iter())
            .fold(T::zero(), |dot, (&lhs, &rhs)| dot + lhs * rhs)
    }

    #[inline]
    pub fn to_array(&self) -> [T; N] {
        let mut array = [T::zero(); N];
        for (dst, row) in array.iter_mut().zip(self.rows.iter()) {
            *dst = row[0];
        }
        array
    }
}
