use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Precondition violations reported by the fallible container operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The streaming initializer was given more values than the container holds.
    #[error("initializer overflow: container holds {capacity} elements")]
    Overflow { capacity: usize },

    /// Element-wise operation on operands of different shape.
    #[error("shape mismatch: {}x{} vs {}x{}", .lhs.0, .lhs.1, .rhs.0, .rhs.1)]
    ShapeMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    /// Matrix product where the left column count differs from the right row count.
    #[error("dimension mismatch: left has {lhs_cols} columns, right has {rhs_rows} rows")]
    DimensionMismatch { lhs_cols: usize, rhs_rows: usize },

    /// Square-only constructor used on a non-square shape.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("value {0} is not representable in the element type")]
    Unrepresentable(usize),
}
