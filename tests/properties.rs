//! Property-based tests for the algebraic identities of the CRS engine

use crsmat::{bareiss_determinant, cofactor_determinant, multiply, scale, sum, SparseMatrix};
use proptest::prelude::*;

/// Dense grid of small integers with roughly half the entries zero
fn dense_grid(rows: usize, cols: usize) -> impl Strategy<Value = Vec<Vec<i64>>> {
    let cell = prop_oneof![Just(0i64), -9i64..=9];
    prop::collection::vec(prop::collection::vec(cell, cols), rows)
}

fn shape() -> impl Strategy<Value = (usize, usize)> {
    (1usize..=6, 1usize..=6)
}

fn to_sparse(grid: &[Vec<i64>]) -> SparseMatrix<i64> {
    let mut matrix = SparseMatrix::new(grid.len(), grid[0].len()).unwrap();
    for (i, row) in grid.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            matrix.insert(i + 1, j + 1, value).unwrap();
        }
    }
    matrix.finalize().unwrap();
    matrix
}

fn same_shape_pair() -> impl Strategy<Value = (Vec<Vec<i64>>, Vec<Vec<i64>>)> {
    shape().prop_flat_map(|(r, c)| (dense_grid(r, c), dense_grid(r, c)))
}

fn chain_triple() -> impl Strategy<Value = (Vec<Vec<i64>>, Vec<Vec<i64>>, Vec<Vec<i64>>)> {
    (1usize..=5, 1usize..=5, 1usize..=5, 1usize..=5)
        .prop_flat_map(|(m, n, p, q)| (dense_grid(m, n), dense_grid(n, p), dense_grid(p, q)))
}

fn square_grid() -> impl Strategy<Value = Vec<Vec<i64>>> {
    (1usize..=5).prop_flat_map(|n| dense_grid(n, n))
}

proptest! {
    #[test]
    fn sum_is_entrywise((a, b) in same_shape_pair()) {
        let (sa, sb) = (to_sparse(&a), to_sparse(&b));
        let c = sum(&sa, &sb).unwrap();
        for i in 0..a.len() {
            for j in 0..a[0].len() {
                prop_assert_eq!(c.get(i + 1, j + 1).unwrap(), a[i][j] + b[i][j]);
            }
        }
    }

    #[test]
    fn sum_commutes_and_has_identity((a, b) in same_shape_pair()) {
        let (sa, sb) = (to_sparse(&a), to_sparse(&b));
        prop_assert_eq!(sum(&sa, &sb).unwrap(), sum(&sb, &sa).unwrap());

        let zero = SparseMatrix::zeros(sa.rows(), sa.cols()).unwrap();
        prop_assert_eq!(sum(&sa, &zero).unwrap(), sa);
    }

    #[test]
    fn scale_by_one_and_zero(grid in shape().prop_flat_map(|(r, c)| dense_grid(r, c))) {
        let a = to_sparse(&grid);
        prop_assert_eq!(scale(&a, 1).unwrap(), a.clone());
        prop_assert_eq!(scale(&a, 0).unwrap().nnz(), 0);
    }

    #[test]
    fn multiply_is_dense_product((a, b, _c) in chain_triple()) {
        let (sa, sb) = (to_sparse(&a), to_sparse(&b));
        let product = multiply(&sa, &sb).unwrap();
        for i in 0..a.len() {
            for j in 0..b[0].len() {
                let expected: i64 = (0..b.len()).map(|k| a[i][k] * b[k][j]).sum();
                prop_assert_eq!(product.get(i + 1, j + 1).unwrap(), expected);
            }
        }
    }

    #[test]
    fn multiply_is_associative((a, b, c) in chain_triple()) {
        let (sa, sb, sc) = (to_sparse(&a), to_sparse(&b), to_sparse(&c));
        let left = multiply(&multiply(&sa, &sb).unwrap(), &sc).unwrap();
        let right = multiply(&sa, &multiply(&sb, &sc).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn multiply_by_identity(grid in square_grid()) {
        let a = to_sparse(&grid);
        let identity = SparseMatrix::identity(a.rows()).unwrap();
        prop_assert_eq!(multiply(&a, &identity).unwrap(), a.clone());
        prop_assert_eq!(multiply(&identity, &a).unwrap(), a);
    }

    #[test]
    fn insertion_order_is_irrelevant(grid in shape().prop_flat_map(|(r, c)| dense_grid(r, c))) {
        let row_major = to_sparse(&grid);

        // Rows reversed, columns ascending within each row
        let mut reversed = SparseMatrix::new(grid.len(), grid[0].len()).unwrap();
        for (i, row) in grid.iter().enumerate().rev() {
            for (j, &value) in row.iter().enumerate() {
                reversed.insert(i + 1, j + 1, value).unwrap();
            }
        }
        reversed.finalize().unwrap();

        prop_assert_eq!(reversed, row_major);
    }

    #[test]
    fn transpose_is_involution(grid in shape().prop_flat_map(|(r, c)| dense_grid(r, c))) {
        let a = to_sparse(&grid);
        let t = a.transpose().unwrap();
        for i in 0..grid.len() {
            for j in 0..grid[0].len() {
                prop_assert_eq!(t.get(j + 1, i + 1).unwrap(), grid[i][j]);
            }
        }
        prop_assert_eq!(t.transpose().unwrap(), a);
    }

    #[test]
    fn determinant_methods_agree(grid in square_grid()) {
        let a = to_sparse(&grid);
        prop_assert_eq!(bareiss_determinant(&a).unwrap(), cofactor_determinant(&a).unwrap());
    }

    #[test]
    fn determinant_is_multiplicative(
        (a, b) in (1usize..=4).prop_flat_map(|n| (dense_grid(n, n), dense_grid(n, n)))
    ) {
        let (sa, sb) = (to_sparse(&a), to_sparse(&b));
        let product = multiply(&sa, &sb).unwrap();
        prop_assert_eq!(
            product.determinant().unwrap(),
            sa.determinant().unwrap() * sb.determinant().unwrap()
        );
    }
}

#[test]
fn trace_of_identity() {
    for n in 1..=8 {
        let identity = SparseMatrix::<i64>::identity(n).unwrap();
        assert_eq!(identity.trace().unwrap(), n as i64);
    }
}
