use crate::{Matrix, Scalar};
use serde::{
    de::{self, Deserialize, Deserializer},
    ser::{Serialize, Serializer},
};

/// Serialized as a sequence of `R` rows, each a sequence of `C` elements.
impl<T: Serialize, const R: usize, const C: usize> Serialize for Matrix<T, R, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.rows.iter().map(|row| row.as_slice()))
    }
}

impl<'de, T, const R: usize, const C: usize> Deserialize<'de> for Matrix<T, R, C>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
        let expected = format!("{} rows of {} elements", R, C);
        if rows.len() != R {
            return Err(de::Error::invalid_length(rows.len(), &expected.as_str()));
        }

        let mut mat = Matrix::zero();
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != C {
                return Err(de::Error::invalid_length(row.len(), &expected.as_str()));
            }
            for (c, value) in row.into_iter().enumerate() {
                mat.rows[r][c] = value;
            }
        }
        Ok(mat)
    }
}
