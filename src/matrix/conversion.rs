//! Conversion functions between SparseMatrix and external formats

use ndarray::{Array2, ArrayView2};
use num_traits::Num;
use sprs::CsMat;

use crate::error::Result;
use crate::matrix::SparseMatrix;

/// Converts a finalized matrix to an sprs CsMat in CSR layout
pub fn to_sprs<T>(matrix: &SparseMatrix<T>) -> Result<CsMat<T>>
where
    T: Copy + Num + Default,
{
    matrix.ensure_finalized()?;

    Ok(CsMat::new(
        matrix.shape(),
        matrix.row_offset().to_vec(),
        matrix.col_index().to_vec(),
        matrix.values().to_vec(),
    ))
}

/// Converts an sprs CsMat (CSR or CSC) into a finalized SparseMatrix
///
/// Explicitly stored zeros are dropped.
pub fn from_sprs<T>(matrix: CsMat<T>) -> Result<SparseMatrix<T>>
where
    T: Copy + Num + Default,
{
    // Ensure matrix is in CSR format
    let matrix = if matrix.is_csr() {
        matrix
    } else {
        matrix.to_csr()
    };

    let (rows, cols) = matrix.shape();
    let (indptr, indices, data) = matrix.into_raw_storage();

    let mut result = SparseMatrix::new(rows, cols)?;
    for r in 0..rows {
        for k in indptr[r]..indptr[r + 1] {
            result.insert(r + 1, indices[k] + 1, data[k])?;
        }
    }
    result.finalize()?;

    Ok(result)
}

impl<T: Copy + Num> SparseMatrix<T> {
    /// Expands a finalized matrix into a dense ndarray
    pub fn to_dense(&self) -> Result<Array2<T>> {
        let mut dense = Array2::zeros(self.shape());
        for (r, c, value) in self.iter()? {
            dense[[r, c]] = value;
        }
        Ok(dense)
    }

    /// Builds a finalized matrix from a dense ndarray, skipping zeros
    pub fn from_dense(dense: ArrayView2<'_, T>) -> Result<Self> {
        let (rows, cols) = dense.dim();
        let mut matrix = Self::new(rows, cols)?;
        for ((r, c), &value) in dense.indexed_iter() {
            matrix.insert(r + 1, c + 1, value)?;
        }
        matrix.finalize()?;
        Ok(matrix)
    }
}
