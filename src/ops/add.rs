//! Entrywise addition by sorted two-pointer merge

use num_traits::Num;

use crate::error::{Error, Result};
use crate::matrix::SparseMatrix;

/// Merges two sorted rows, summing entries that share a column
///
/// Both inputs must be strictly ascending by column. Cancelled sums are
/// dropped, so the output is strictly ascending with no zeros.
pub(crate) fn merge_rows<T: Copy + Num>(
    (a_cols, a_vals): (&[usize], &[T]),
    (b_cols, b_vals): (&[usize], &[T]),
) -> Vec<(usize, T)> {
    let mut merged = Vec::with_capacity(a_cols.len() + b_cols.len());
    let (mut p, mut q) = (0, 0);

    while p < a_cols.len() || q < b_cols.len() {
        if q >= b_cols.len() || (p < a_cols.len() && a_cols[p] < b_cols[q]) {
            merged.push((a_cols[p], a_vals[p]));
            p += 1;
        } else if p >= a_cols.len() || b_cols[q] < a_cols[p] {
            merged.push((b_cols[q], b_vals[q]));
            q += 1;
        } else {
            let summed = a_vals[p] + b_vals[q];
            if !summed.is_zero() {
                merged.push((a_cols[p], summed));
            }
            p += 1;
            q += 1;
        }
    }

    merged
}

pub(crate) fn check_same_shape<T>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<()> {
    a.ensure_finalized()?;
    b.ensure_finalized()?;
    if a.shape() != b.shape() {
        return Err(Error::DimensionMismatch {
            op: "add",
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }
    Ok(())
}

/// Computes `a + b`
///
/// Runs in O(nnz(a) + nnz(b)).
///
/// # Errors
///
/// [`Error::DimensionMismatch`] if the shapes differ, [`Error::NotFinalized`]
/// if either operand is still building.
pub fn sum<T: Copy + Num>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    check_same_shape(a, b)?;

    let mut result = SparseMatrix::new(a.rows(), a.cols())?;
    for i in 0..a.rows() {
        for (col, value) in merge_rows(a.row_slices(i), b.row_slices(i)) {
            result.insert(i + 1, col + 1, value)?;
        }
    }
    result.finalize()?;

    Ok(result)
}

/// Alias of [`sum`]
pub fn add<T: Copy + Num>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    sum(a, b)
}

impl<T: Copy + Num> SparseMatrix<T> {
    /// Returns `self + other`. See [`sum`].
    pub fn sum(&self, other: &Self) -> Result<Self> {
        sum(self, other)
    }
}
