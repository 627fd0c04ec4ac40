//! Determinants, minors and invertibility

use num_traits::{CheckedDiv, CheckedMul, CheckedSub, Num};

use crate::error::{Error, Result};
use crate::matrix::SparseMatrix;

impl<T: Copy + Num> SparseMatrix<T> {
    /// Returns the submatrix without zero-based row `exclude_row` and
    /// column `exclude_col`
    ///
    /// Entries past the excluded row/column shift up/left by one.
    pub fn minor(&self, exclude_row: usize, exclude_col: usize) -> Result<Self> {
        self.ensure_finalized()?;
        if exclude_row >= self.rows() || exclude_col >= self.cols() {
            return Err(Error::IndexOutOfRange {
                row: exclude_row + 1,
                col: exclude_col + 1,
                rows: self.rows(),
                cols: self.cols(),
            });
        }

        let mut minor = SparseMatrix::new(self.rows() - 1, self.cols() - 1)?;
        for (i, j, value) in self.iter()? {
            if i == exclude_row || j == exclude_col {
                continue;
            }
            let row = if i < exclude_row { i + 1 } else { i };
            let col = if j < exclude_col { j + 1 } else { j };
            minor.insert(row, col, value)?;
        }
        minor.finalize()?;

        Ok(minor)
    }

    /// Determinant by cofactor expansion. See [`determinant`].
    pub fn determinant(&self) -> Result<T> {
        determinant(self)
    }

    /// True when the determinant is non-zero
    pub fn is_invertible(&self) -> Result<bool> {
        is_invertible(self)
    }
}

/// Laplace expansion of an already-validated square matrix
pub(crate) fn expand<T: Copy + Num>(a: &SparseMatrix<T>) -> Result<T> {
    match a.rows() {
        1 => Ok(a.lookup(0, 0)),
        2 => Ok(a.lookup(0, 0) * a.lookup(1, 1) - a.lookup(0, 1) * a.lookup(1, 0)),
        n => {
            let mut det = T::zero();
            for col in 0..n {
                det = det + signed_cofactor(a, col)?;
            }
            Ok(det)
        }
    }
}

/// `(-1)^col * a[0][col] * det(minor(0, col))`
pub(crate) fn signed_cofactor<T: Copy + Num>(a: &SparseMatrix<T>, col: usize) -> Result<T> {
    let entry = a.lookup(0, col);
    if entry.is_zero() {
        return Ok(T::zero());
    }

    let term = entry * expand(&a.minor(0, col)?)?;
    Ok(if col % 2 == 0 { term } else { T::zero() - term })
}

/// Computes the determinant by cofactor expansion along the first row
///
/// Recurses on (n-1)×(n-1) minors down to the 2×2 closed form, so the
/// cost grows as O(n!). Zero entries of the first row skip their branch.
/// See [`bareiss_determinant`] for larger matrices.
///
/// # Errors
///
/// [`Error::NonSquareMatrix`] if `a` is not square.
pub fn cofactor_determinant<T: Copy + Num>(a: &SparseMatrix<T>) -> Result<T> {
    a.ensure_square()?;
    expand(a)
}

/// Computes the determinant by fraction-free (Bareiss) elimination
///
/// Every intermediate division is exact over the integers, so the result
/// matches [`cofactor_determinant`] in O(n³) time and O(n²) dense working
/// memory. Intermediate products can outgrow `T` even when the determinant
/// itself fits; when a step overflows the matrix is handed to cofactor
/// expansion instead.
pub fn bareiss_determinant<T>(a: &SparseMatrix<T>) -> Result<T>
where
    T: Copy + Num + CheckedMul + CheckedSub + CheckedDiv,
{
    a.ensure_square()?;

    match bareiss_checked(a)? {
        Some(det) => Ok(det),
        None => expand(a),
    }
}

/// Bareiss elimination that yields `None` as soon as a step overflows
fn bareiss_checked<T>(a: &SparseMatrix<T>) -> Result<Option<T>>
where
    T: Copy + Num + CheckedMul + CheckedSub + CheckedDiv,
{
    let n = a.rows();
    let mut m = vec![vec![T::zero(); n]; n];
    for (r, c, value) in a.iter()? {
        m[r][c] = value;
    }

    let mut negate = false;
    let mut prev_pivot = T::one();

    for k in 0..n - 1 {
        if m[k][k].is_zero() {
            match (k + 1..n).find(|&i| !m[i][k].is_zero()) {
                Some(i) => {
                    m.swap(k, i);
                    negate = !negate;
                }
                None => return Ok(Some(T::zero())),
            }
        }

        for i in k + 1..n {
            for j in k + 1..n {
                let step = m[i][j]
                    .checked_mul(&m[k][k])
                    .zip(m[i][k].checked_mul(&m[k][j]))
                    .and_then(|(lhs, rhs)| lhs.checked_sub(&rhs))
                    .and_then(|numerator| numerator.checked_div(&prev_pivot));
                match step {
                    Some(value) => m[i][j] = value,
                    None => return Ok(None),
                }
            }
        }
        prev_pivot = m[k][k];
    }

    let det = m[n - 1][n - 1];
    if negate {
        Ok(T::zero().checked_sub(&det))
    } else {
        Ok(Some(det))
    }
}

/// Computes the determinant of a square matrix
///
/// Uses cofactor expansion; see [`crate::determinant_with`] to select
/// elimination or the parallel expansion.
pub fn determinant<T: Copy + Num>(a: &SparseMatrix<T>) -> Result<T> {
    cofactor_determinant(a)
}

/// Returns whether `a` has an inverse, i.e. a non-zero determinant
pub fn is_invertible<T: Copy + Num>(a: &SparseMatrix<T>) -> Result<bool> {
    Ok(!determinant(a)?.is_zero())
}
