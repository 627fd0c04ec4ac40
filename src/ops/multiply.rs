//! Matrix multiplication through a transposed right operand
//!
//! CRS gives cheap row access but no column access, so the right-hand
//! matrix is transposed first. Each output entry (i, j) is then the sparse
//! dot product of row i of A with row j of Bᵀ, computed by the same
//! two-pointer walk that drives addition.

use num_traits::Num;

use crate::error::{Error, Result};
use crate::matrix::SparseMatrix;

/// Sparse dot product of two rows sorted by column
pub(crate) fn sparse_dot<T: Copy + Num>(
    (a_cols, a_vals): (&[usize], &[T]),
    (b_cols, b_vals): (&[usize], &[T]),
) -> T {
    let mut dot = T::zero();
    let (mut p, mut q) = (0, 0);

    while p < a_cols.len() && q < b_cols.len() {
        if a_cols[p] < b_cols[q] {
            p += 1;
        } else if a_cols[p] > b_cols[q] {
            q += 1;
        } else {
            dot = dot + a_vals[p] * b_vals[q];
            p += 1;
            q += 1;
        }
    }

    dot
}

/// Computes one output row of `A × B` given row `i` of A and `Bᵀ`
///
/// Empty rows of A and empty columns of B are skipped outright.
pub(crate) fn multiply_row<T: Copy + Num>(
    row: (&[usize], &[T]),
    b_transposed: &SparseMatrix<T>,
) -> Vec<(usize, T)> {
    let mut entries = Vec::new();
    if row.0.is_empty() {
        return entries;
    }

    for j in 0..b_transposed.rows() {
        let column = b_transposed.row_slices(j);
        if column.0.is_empty() {
            continue;
        }

        let dot = sparse_dot(row, column);
        if !dot.is_zero() {
            entries.push((j, dot));
        }
    }

    entries
}

pub(crate) fn check_multipliable<T>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<()> {
    a.ensure_finalized()?;
    b.ensure_finalized()?;
    if a.cols() != b.rows() {
        return Err(Error::DimensionMismatch {
            op: "multiply",
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }
    Ok(())
}

/// Computes `a × b`
///
/// Work is bounded by the pairwise overlap of A's rows with B's columns
/// rather than by the dense O(n³).
///
/// # Errors
///
/// [`Error::DimensionMismatch`] unless `a.cols() == b.rows()`.
pub fn multiply<T: Copy + Num>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
) -> Result<SparseMatrix<T>> {
    check_multipliable(a, b)?;

    let b_transposed = b.transpose()?;
    let mut result = SparseMatrix::new(a.rows(), b.cols())?;

    for i in 0..a.rows() {
        for (j, dot) in multiply_row(a.row_slices(i), &b_transposed) {
            result.insert(i + 1, j + 1, dot)?;
        }
    }
    result.finalize()?;

    Ok(result)
}

impl<T: Copy + Num> SparseMatrix<T> {
    /// Returns `self × other`. See [`multiply`].
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        multiply(self, other)
    }
}
