//! # Parallel Implementations
//!
//! Rows of a sum or product are independent, so each output row is
//! computed on its own rayon task and the results are stitched back
//! together with the usual count-then-prefix-sum assembly. Cofactor
//! expansion forks one task per top-level branch.

use num_traits::Num;
use rayon::prelude::*;

use crate::config::ParallelParameters;
use crate::error::{Error, Result};
use crate::matrix::SparseMatrix;
use crate::ops::{add, determinant, multiply};

/// Computes `a + b` with one rayon task per row
///
/// # Examples
///
/// ```
/// use crsmat::{SparseMatrix, sum_parallel};
///
/// let a = SparseMatrix::<i64>::identity(2).unwrap();
/// let b = SparseMatrix::<i64>::identity(2).unwrap();
///
/// let c = sum_parallel(&a, &b).unwrap();
/// assert_eq!(c.get(1, 1).unwrap(), 2);
/// assert_eq!(c.get(1, 2).unwrap(), 0);
/// ```
pub fn sum_parallel<T>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>>
where
    T: Copy + Num + Send + Sync,
{
    add::check_same_shape(a, b)?;

    let row_results: Vec<Vec<(usize, T)>> = (0..a.rows())
        .into_par_iter()
        .map(|i| add::merge_rows(a.row_slices(i), b.row_slices(i)))
        .collect();

    SparseMatrix::from_sorted_rows(a.rows(), a.cols(), row_results)
}

/// Computes `a × b` with one rayon task per output row
pub fn multiply_parallel<T>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>>
where
    T: Copy + Num + Send + Sync,
{
    multiply::check_multipliable(a, b)?;

    let b_transposed = b.transpose()?;
    let row_results: Vec<Vec<(usize, T)>> = (0..a.rows())
        .into_par_iter()
        .map(|i| multiply::multiply_row(a.row_slices(i), &b_transposed))
        .collect();

    SparseMatrix::from_sorted_rows(a.rows(), b.cols(), row_results)
}

/// Cofactor expansion with the first-row branches evaluated in parallel
///
/// Produces exactly the value of [`crate::cofactor_determinant`].
pub fn determinant_parallel<T>(a: &SparseMatrix<T>) -> Result<T>
where
    T: Copy + Num + Send + Sync,
{
    a.ensure_square()?;
    if a.rows() <= 2 {
        return determinant::expand(a);
    }

    let terms: Vec<T> = (0..a.cols())
        .into_par_iter()
        .map(|col| determinant::signed_cofactor(a, col))
        .collect::<Result<Vec<T>>>()?;

    Ok(terms.into_iter().fold(T::zero(), |acc, term| acc + term))
}

/// Runs `op` on a pool sized by `params.n_threads`
///
/// The global rayon pool is reused when it already has that many workers.
pub fn run_in_pool<R, F>(params: &ParallelParameters, op: F) -> Result<R>
where
    R: Send,
    F: FnOnce() -> R + Send,
{
    if params.n_threads == rayon::current_num_threads() {
        return Ok(op());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(params.n_threads)
        .build()
        .map_err(|e| Error::ThreadPool(e.to_string()))?;

    Ok(pool.install(op))
}
