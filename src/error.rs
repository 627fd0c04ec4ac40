//! Error types for crsmat

use thiserror::Error;

/// Result type alias using crsmat's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sparse matrix operations
///
/// Coordinates carried by errors are one-indexed, matching the
/// `insert`/`get` calling convention.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Operand shapes are incompatible for the operation
    #[error("Dimension mismatch in '{op}': {lhs:?} vs {rhs:?}")]
    DimensionMismatch {
        /// The operation name
        op: &'static str,
        /// Left-hand side shape (rows, cols)
        lhs: (usize, usize),
        /// Right-hand side shape (rows, cols)
        rhs: (usize, usize),
    },

    /// The matrix is still in its build phase
    #[error("Matrix has not been finalized")]
    NotFinalized,

    /// The matrix was already finalized and can no longer be modified
    #[error("Matrix is already finalized")]
    AlreadyFinalized,

    /// A one-indexed coordinate falls outside the matrix
    #[error("Index ({row}, {col}) out of range for {rows}×{cols} matrix")]
    IndexOutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// The operation requires a square matrix
    #[error("Expected a square matrix, got {rows}×{cols}")]
    NonSquareMatrix {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// A matrix dimension is zero
    #[error("Matrix dimensions must be positive, got {rows}×{cols}")]
    EmptyDimension {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// Raw compressed-row arrays are inconsistent
    #[error("Invalid compressed-row structure: {0}")]
    InvalidStructure(String),

    /// The configured worker pool could not be created
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::DimensionMismatch {
            op: "add",
            lhs: (2, 3),
            rhs: (3, 2),
        };
        assert_eq!(err.to_string(), "Dimension mismatch in 'add': (2, 3) vs (3, 2)");

        let err = Error::IndexOutOfRange {
            row: 0,
            col: 1,
            rows: 2,
            cols: 2,
        };
        assert_eq!(err.to_string(), "Index (0, 1) out of range for 2×2 matrix");
    }
}
