//! Scalar multiplication

use num_traits::Num;

use crate::error::Result;
use crate::matrix::SparseMatrix;

/// Computes `k * a`
///
/// Positions are preserved; products that come out zero are dropped by
/// the insert contract, so `scale(a, 0)` stores nothing.
pub fn scale<T: Copy + Num>(a: &SparseMatrix<T>, k: T) -> Result<SparseMatrix<T>> {
    a.ensure_finalized()?;

    let mut result = SparseMatrix::new(a.rows(), a.cols())?;
    for (row, col, value) in a.iter()? {
        result.insert(row + 1, col + 1, value * k)?;
    }
    result.finalize()?;

    Ok(result)
}

impl<T: Copy + Num> SparseMatrix<T> {
    /// Returns `k * self`
    pub fn scale(&self, k: T) -> Result<Self> {
        scale(self, k)
    }
}
