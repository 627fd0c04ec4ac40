//! # crsmat: sparse integer matrices in compressed-row form
//!
//! Matrices are stored in Compressed Row Storage (CRS): the non-zero values,
//! their column indices and one offset per row delimiting each row's slice.
//!
//! ## Overview
//!
//! A [`SparseMatrix`] goes through two phases:
//!
//! 1. **Building**: one-indexed `insert(row, col, value)` calls append
//!    entries and count them per row. Zeros are ignored.
//! 2. **Finalized**: `finalize()` turns the counts into offsets with a
//!    prefix sum, buckets the entries by row and sorts each row by column.
//!    The matrix is read-only from then on.
//!
//! On top of that storage the crate provides:
//!
//! - **Element access**: `get` and `trace`
//! - **Merge-based arithmetic**: [`sum`], [`scale`] and [`multiply`]
//!   (the latter through a transposed right operand)
//! - **Determinants**: cofactor expansion over minors, fraction-free
//!   elimination, and invertibility
//! - **Parallel variants** built on rayon, selected through [`EngineConfig`]
//!
//! ## Usage
//!
//! ```
//! use crsmat::SparseMatrix;
//!
//! let mut a = SparseMatrix::<i64>::new(2, 2).unwrap();
//! a.insert(1, 1, 1).unwrap();
//! a.insert(1, 2, 2).unwrap();
//! a.insert(2, 1, 3).unwrap();
//! a.insert(2, 2, 4).unwrap();
//! a.finalize().unwrap();
//!
//! assert_eq!(a.get(2, 1).unwrap(), 3);
//! assert_eq!(a.trace().unwrap(), 5);
//! assert_eq!(a.determinant().unwrap(), -2);
//!
//! let identity = SparseMatrix::identity(2).unwrap();
//! assert_eq!(a.multiply(&identity).unwrap(), a);
//! ```

pub mod config;
pub mod error;
pub mod matrix;
pub mod ops;
pub mod parallel;

// Re-export primary components
pub use config::{DeterminantMethod, EngineConfig, ParallelParameters};
pub use error::{Error, Result};
pub use matrix::{from_sprs, to_sprs, Phase, SparseMatrix};
pub use ops::{bareiss_determinant, cofactor_determinant, determinant, is_invertible};
pub use ops::{add, multiply, scale, sum};
pub use parallel::{determinant_parallel, multiply_parallel, run_in_pool, sum_parallel};

use num_traits::{CheckedDiv, CheckedMul, CheckedSub, Num};

/// Computes `a + b`, running rows in parallel once `a` has at least
/// `config.parallel.min_rows_for_parallel` rows
pub fn sum_with<T>(a: &SparseMatrix<T>, b: &SparseMatrix<T>, config: &EngineConfig) -> Result<SparseMatrix<T>>
where
    T: Copy + Num + Send + Sync,
{
    if a.rows() >= config.parallel.min_rows_for_parallel {
        run_in_pool(&config.parallel, || sum_parallel(a, b))?
    } else {
        sum(a, b)
    }
}

/// Computes `a × b`, running rows in parallel once `a` has at least
/// `config.parallel.min_rows_for_parallel` rows
///
/// # Examples
///
/// ```
/// use crsmat::{SparseMatrix, EngineConfig, multiply_with};
///
/// let a = SparseMatrix::<i64>::from_triplets(2, 2, vec![(1, 2, 3), (2, 1, 4)]).unwrap();
/// let c = multiply_with(&a, &a, &EngineConfig::default()).unwrap();
///
/// assert_eq!(c.get(1, 1).unwrap(), 12);
/// assert_eq!(c.get(2, 2).unwrap(), 12);
/// ```
pub fn multiply_with<T>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
    config: &EngineConfig,
) -> Result<SparseMatrix<T>>
where
    T: Copy + Num + Send + Sync,
{
    if a.rows() >= config.parallel.min_rows_for_parallel {
        run_in_pool(&config.parallel, || multiply_parallel(a, b))?
    } else {
        multiply(a, b)
    }
}

/// Computes the determinant with the method named by `config`
///
/// Cofactor expansion forks its top-level branches once the order reaches
/// `config.parallel.min_order_for_parallel_det`. Both methods return the
/// same exact value for integer matrices.
pub fn determinant_with<T>(a: &SparseMatrix<T>, config: &EngineConfig) -> Result<T>
where
    T: Copy + Num + CheckedMul + CheckedSub + CheckedDiv + Send + Sync,
{
    match config.determinant_method {
        DeterminantMethod::Bareiss => bareiss_determinant(a),
        DeterminantMethod::Cofactor if a.rows() >= config.parallel.min_order_for_parallel_det => {
            run_in_pool(&config.parallel, || determinant_parallel(a))?
        }
        DeterminantMethod::Cofactor => cofactor_determinant(a),
    }
}

/// Version information for the crsmat library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
