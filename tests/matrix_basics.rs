//! Basic tests for construction, the build/finalize lifecycle and element access

use crsmat::{Error, Phase, SparseMatrix};

#[test]
fn test_matrix_creation() {
    let mut matrix = SparseMatrix::<i64>::new(3, 3).unwrap();
    assert_eq!(matrix.phase(), Phase::Building);

    matrix.insert(1, 1, 1).unwrap();
    matrix.insert(1, 2, 2).unwrap();
    matrix.insert(2, 2, 3).unwrap();
    matrix.insert(3, 1, 4).unwrap();
    matrix.insert(3, 3, 5).unwrap();
    matrix.finalize().unwrap();

    assert!(matrix.is_finalized());
    assert_eq!(matrix.shape(), (3, 3));
    assert_eq!(matrix.nnz(), 5);
    assert_eq!(matrix.row_offset(), &[0, 2, 3, 5]);

    // Check first row
    let first_row: Vec<_> = matrix.row_iter(0).unwrap().collect();
    assert_eq!(first_row, vec![(0, &1), (1, &2)]);

    // Check second row
    let second_row: Vec<_> = matrix.row_iter(1).unwrap().collect();
    assert_eq!(second_row, vec![(1, &3)]);

    // Check third row
    let third_row: Vec<_> = matrix.row_iter(2).unwrap().collect();
    assert_eq!(third_row, vec![(0, &4), (2, &5)]);
}

#[test]
fn test_offsets_are_consistent() {
    let matrix = SparseMatrix::<i64>::from_triplets(
        4,
        5,
        vec![(4, 5, 1), (1, 3, 2), (4, 1, 3), (2, 2, 4), (1, 1, 5)],
    )
    .unwrap();

    let offsets = matrix.row_offset();
    assert_eq!(offsets.len(), 5);
    assert_eq!(offsets[0], 0);
    assert_eq!(offsets[4], matrix.nnz());
    assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(matrix.col_index().len(), matrix.values().len());

    for r in 0..matrix.rows() {
        let cols: Vec<_> = matrix.row_iter(r).unwrap().map(|(c, _)| c).collect();
        assert!(cols.windows(2).all(|w| w[0] < w[1]), "row {} not ascending", r);
    }
}

#[test]
fn test_row_order_does_not_matter() {
    let entries = vec![(1, 1, 1), (1, 3, 2), (2, 3, 3), (3, 1, 4), (3, 2, 5), (3, 3, 6)];

    let row_major = SparseMatrix::<i64>::from_triplets(3, 3, entries.clone()).unwrap();

    // Rows visited bottom-up, columns still ascending within each row
    let mut shuffled = entries.clone();
    shuffled.sort_by_key(|&(r, c, _)| (std::cmp::Reverse(r), c));
    let bottom_up = SparseMatrix::<i64>::from_triplets(3, 3, shuffled).unwrap();

    for i in 1..=3 {
        for j in 1..=3 {
            assert_eq!(row_major.get(i, j).unwrap(), bottom_up.get(i, j).unwrap());
        }
    }
    assert_eq!(row_major, bottom_up);
}

#[test]
fn test_identity_matrix() {
    let identity = SparseMatrix::<i64>::identity(4).unwrap();

    assert_eq!(identity.nnz(), 4);
    assert_eq!(identity.trace().unwrap(), 4);
    for i in 1..=4 {
        for j in 1..=4 {
            let expected = if i == j { 1 } else { 0 };
            assert_eq!(identity.get(i, j).unwrap(), expected);
        }
    }
}

#[test]
fn test_zeros_matrix() {
    let zeros = SparseMatrix::<i64>::zeros(2, 5).unwrap();
    assert_eq!(zeros.nnz(), 0);
    assert_eq!(zeros.get(2, 5).unwrap(), 0);
    assert_eq!(zeros.trace().unwrap(), 0);
}

#[test]
fn test_lifecycle_errors() {
    let mut matrix = SparseMatrix::<i64>::new(2, 2).unwrap();
    matrix.insert(1, 1, 7).unwrap();

    assert_eq!(matrix.get(1, 1), Err(Error::NotFinalized));
    assert!(matrix.row_iter(0).is_err());
    assert!(matrix.iter().is_err());

    matrix.finalize().unwrap();
    assert_eq!(matrix.get(1, 1), Ok(7));
    assert_eq!(matrix.insert(2, 2, 1), Err(Error::AlreadyFinalized));
}

#[test]
fn test_out_of_range_access() {
    let matrix = SparseMatrix::<i64>::identity(2).unwrap();

    for (row, col) in [(0, 1), (1, 0), (3, 1), (1, 3)] {
        assert_eq!(
            matrix.get(row, col),
            Err(Error::IndexOutOfRange {
                row,
                col,
                rows: 2,
                cols: 2
            })
        );
    }
}

#[test]
fn test_display_renders_dense_grid() {
    let matrix =
        SparseMatrix::<i64>::from_triplets(2, 3, vec![(1, 2, -1), (2, 3, 10)]).unwrap();
    assert_eq!(matrix.to_string(), "0 -1 0\n0 0 10\n");

    let building = SparseMatrix::<i64>::new(2, 3).unwrap();
    assert_eq!(building.to_string(), "<unfinalized 2×3 matrix>\n");
}

#[test]
fn test_debug_output() {
    let matrix = SparseMatrix::<i64>::identity(7).unwrap();
    let debug = format!("{:?}", matrix);
    assert!(debug.contains("shape: (7, 7)"));
    assert!(debug.contains("nnz: 7"));
    assert!(debug.contains("3: {3: 1}"));
    assert!(!debug.contains("4: {4: 1}"));
    assert!(debug.ends_with(", .. }"));
}
