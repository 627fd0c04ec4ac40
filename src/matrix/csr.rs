//! Compressed Row Storage (CRS) matrix with a two-phase builder

use std::fmt;
use num_traits::Num;

use crate::error::{Error, Result};

/// Lifecycle state of a [`SparseMatrix`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting inserts; `row_offset` holds per-row counts
    Building,
    /// Read-only; `row_offset` holds cumulative offsets
    Finalized,
}

/// A sparse matrix in Compressed Row Storage (CRS) format
///
/// The CRS format stores a sparse matrix using three arrays:
/// - row_offset: Array of size rows + 1 delimiting each row's entries
/// - col_index: Array of size nnz containing zero-based column indices
/// - values: Array of size nnz containing the non-zero values
///
/// A matrix is created empty, populated through one-indexed [`insert`]
/// calls and then [`finalize`]d exactly once. While building,
/// `row_offset[r]` counts the entries of zero-based row `r - 1`; finalizing
/// turns the counts into offsets so that row `r` occupies
/// `row_offset[r]..row_offset[r + 1]`.
///
/// After finalization every row is sorted by column, holds no duplicate
/// columns and stores no zeros, so two finalized matrices compare equal
/// exactly when they are equal entrywise.
///
/// [`insert`]: SparseMatrix::insert
/// [`finalize`]: SparseMatrix::finalize
#[derive(Clone, PartialEq)]
pub struct SparseMatrix<T = i64> {
    rows: usize,
    cols: usize,

    /// Row counts while building, row offsets once finalized (size: rows + 1)
    row_offset: Vec<usize>,

    /// Column indices (size: nnz)
    col_index: Vec<usize>,

    /// Non-zero values (size: nnz)
    values: Vec<T>,

    /// Zero-based row of each pending entry; empty once finalized
    pending_rows: Vec<usize>,

    phase: Phase,
}

impl<T> SparseMatrix<T>
where
    T: Copy + Num,
{
    /// Creates an empty matrix in the build phase
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDimension`] if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyDimension { rows, cols });
        }

        Ok(Self {
            rows,
            cols,
            row_offset: vec![0; rows + 1],
            col_index: Vec::new(),
            values: Vec::new(),
            pending_rows: Vec::new(),
            phase: Phase::Building,
        })
    }

    /// Adds `value` at the one-indexed position (`row`, `col`)
    ///
    /// Zero values are accepted and ignored. Entries may arrive in any
    /// order; `finalize` sorts each row and sums repeated positions.
    pub fn insert(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if self.phase == Phase::Finalized {
            return Err(Error::AlreadyFinalized);
        }
        self.check_position(row, col)?;

        if value.is_zero() {
            return Ok(());
        }

        self.values.push(value);
        self.col_index.push(col - 1);
        self.pending_rows.push(row - 1);
        // Count lands in the slot *after* zero-based row `row - 1`
        self.row_offset[row] += 1;

        Ok(())
    }

    /// Ends the build phase
    ///
    /// Converts the per-row counts into cumulative offsets, buckets every
    /// pending entry into its row, then sorts each row by column. Entries
    /// sharing a position are summed and dropped if they cancel.
    pub fn finalize(&mut self) -> Result<()> {
        if self.phase == Phase::Finalized {
            return Err(Error::AlreadyFinalized);
        }

        for i in 1..=self.rows {
            self.row_offset[i] += self.row_offset[i - 1];
        }

        // Counting-sort scatter into row buckets
        let nnz = self.values.len();
        let mut entries = vec![(0usize, T::zero()); nnz];
        let mut cursor = self.row_offset.clone();

        for k in 0..nnz {
            let row = self.pending_rows[k];
            entries[cursor[row]] = (self.col_index[k], self.values[k]);
            cursor[row] += 1;
        }

        let mut row_offset = Vec::with_capacity(self.rows + 1);
        let mut col_index = Vec::with_capacity(nnz);
        let mut values = Vec::with_capacity(nnz);
        row_offset.push(0);

        for r in 0..self.rows {
            let bucket = &mut entries[self.row_offset[r]..self.row_offset[r + 1]];
            bucket.sort_by_key(|&(col, _)| col);

            let row_start = col_index.len();
            for &(col, value) in bucket.iter() {
                if col_index.len() > row_start && col_index[col_index.len() - 1] == col {
                    let last = values.len() - 1;
                    values[last] = values[last] + value;
                } else {
                    col_index.push(col);
                    values.push(value);
                }
            }

            // Drop positions whose repeated inserts cancelled out
            let mut keep = row_start;
            for idx in row_start..col_index.len() {
                if !values[idx].is_zero() {
                    col_index[keep] = col_index[idx];
                    values[keep] = values[idx];
                    keep += 1;
                }
            }
            col_index.truncate(keep);
            values.truncate(keep);

            row_offset.push(col_index.len());
        }

        self.row_offset = row_offset;
        self.col_index = col_index;
        self.values = values;
        self.pending_rows = Vec::new();
        self.phase = Phase::Finalized;

        Ok(())
    }

    /// Creates a finalized matrix directly from CRS arrays
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStructure`] unless:
    /// - row_offset.len() is rows + 1, starts at 0 and never decreases
    /// - col_index.len() equals values.len() equals row_offset[rows]
    /// - every row's columns are in bounds and strictly ascending
    /// - no stored value is zero
    pub fn from_raw_parts(
        rows: usize,
        cols: usize,
        row_offset: Vec<usize>,
        col_index: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyDimension { rows, cols });
        }
        if row_offset.len() != rows + 1 {
            return Err(Error::InvalidStructure(format!(
                "row_offset has length {}, expected {}",
                row_offset.len(),
                rows + 1
            )));
        }
        if col_index.len() != values.len() {
            return Err(Error::InvalidStructure(format!(
                "{} column indices but {} values",
                col_index.len(),
                values.len()
            )));
        }
        if row_offset[0] != 0 || row_offset[rows] != values.len() {
            return Err(Error::InvalidStructure(format!(
                "row_offset must span 0..{}, got {}..{}",
                values.len(),
                row_offset[0],
                row_offset[rows]
            )));
        }

        for r in 0..rows {
            let (start, end) = (row_offset[r], row_offset[r + 1]);
            if start > end || end > values.len() {
                return Err(Error::InvalidStructure(format!(
                    "row_offset not monotone at row {}: {}..{}",
                    r, start, end
                )));
            }
            for idx in start..end {
                let col = col_index[idx];
                if col >= cols {
                    return Err(Error::InvalidStructure(format!(
                        "column {} out of bounds in row {} (cols = {})",
                        col, r, cols
                    )));
                }
                if idx > start && col_index[idx - 1] >= col {
                    return Err(Error::InvalidStructure(format!(
                        "columns not strictly ascending in row {}",
                        r
                    )));
                }
                if values[idx].is_zero() {
                    return Err(Error::InvalidStructure(format!(
                        "explicit zero stored at ({}, {})",
                        r, col
                    )));
                }
            }
        }

        Ok(Self {
            rows,
            cols,
            row_offset,
            col_index,
            values,
            pending_rows: Vec::new(),
            phase: Phase::Finalized,
        })
    }

    /// Builds and finalizes a matrix from one-indexed `(row, col, value)` triplets
    pub fn from_triplets<I>(rows: usize, cols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(rows, cols)?;
        for (row, col, value) in triplets {
            matrix.insert(row, col, value)?;
        }
        matrix.finalize()?;
        Ok(matrix)
    }

    /// Creates a finalized matrix with no stored entries
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::from_triplets(rows, cols, std::iter::empty())
    }

    /// Creates a finalized identity matrix of the given size
    pub fn identity(n: usize) -> Result<Self> {
        Self::from_triplets(n, n, (1..=n).map(|i| (i, i, T::one())))
    }

    /// Assembles a finalized matrix from per-row entry lists
    ///
    /// Each row must already be sorted by column with no zeros or
    /// repeats, which holds for rows produced by the merge kernels.
    pub(crate) fn from_sorted_rows(
        rows: usize,
        cols: usize,
        row_entries: Vec<Vec<(usize, T)>>,
    ) -> Result<Self> {
        debug_assert_eq!(row_entries.len(), rows);

        let mut row_offset = Vec::with_capacity(rows + 1);
        row_offset.push(0);

        let mut running_nnz = 0;
        for entries in &row_entries {
            running_nnz += entries.len();
            row_offset.push(running_nnz);
        }

        let mut col_index = Vec::with_capacity(running_nnz);
        let mut values = Vec::with_capacity(running_nnz);
        for entries in row_entries {
            for (col, value) in entries {
                col_index.push(col);
                values.push(value);
            }
        }

        Self::from_raw_parts(rows, cols, row_offset, col_index, values)
    }

    /// Returns the value at the one-indexed position (`row`, `col`)
    ///
    /// Absent entries read as zero. Scans the row's stored entries, so the
    /// cost follows row density rather than matrix width.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.ensure_finalized()?;
        self.check_position(row, col)?;
        Ok(self.lookup(row - 1, col - 1))
    }

    /// Sums the stored diagonal entries
    ///
    /// For non-square matrices only the first `min(rows, cols)` diagonal
    /// positions exist, so nothing beyond them contributes.
    pub fn trace(&self) -> Result<T> {
        self.ensure_finalized()?;

        let mut trace = T::zero();
        for i in 0..self.rows.min(self.cols) {
            let (cols, values) = self.row_slices(i);
            for (&col, &value) in cols.iter().zip(values) {
                if col == i {
                    trace = trace + value;
                }
            }
        }

        Ok(trace)
    }

    /// Builds the transpose with the counting approach
    ///
    /// Source rows are visited in ascending order, so every row of the
    /// transpose receives its columns in ascending order.
    pub fn transpose(&self) -> Result<Self> {
        self.ensure_finalized()?;

        // Count entries per source column
        let mut row_offset = vec![0; self.cols + 1];
        for &col in &self.col_index {
            row_offset[col + 1] += 1;
        }
        for i in 1..=self.cols {
            row_offset[i] += row_offset[i - 1];
        }

        let nnz = self.nnz();
        let mut col_index = vec![0; nnz];
        let mut values = vec![T::zero(); nnz];
        let mut cursor = row_offset.clone();

        for r in 0..self.rows {
            let (cols, vals) = self.row_slices(r);
            for (&col, &value) in cols.iter().zip(vals) {
                let pos = cursor[col];
                col_index[pos] = r;
                values[pos] = value;
                cursor[col] += 1;
            }
        }

        Ok(Self {
            rows: self.cols,
            cols: self.rows,
            row_offset,
            col_index,
            values,
            pending_rows: Vec::new(),
            phase: Phase::Finalized,
        })
    }

    /// Returns an iterator over the stored entries of zero-based row `row`
    ///
    /// Each item is a tuple (col, value) with a zero-based column.
    pub fn row_iter(&self, row: usize) -> Result<impl Iterator<Item = (usize, &T)> + '_> {
        self.ensure_finalized()?;
        if row >= self.rows {
            return Err(Error::IndexOutOfRange {
                row: row + 1,
                col: 1,
                rows: self.rows,
                cols: self.cols,
            });
        }

        let (cols, values) = self.row_slices(row);
        Ok(cols.iter().zip(values).map(|(&col, value)| (col, value)))
    }

    /// Returns an iterator over every stored entry as zero-based (row, col, value)
    pub fn iter(&self) -> Result<impl Iterator<Item = (usize, usize, T)> + '_> {
        self.ensure_finalized()?;

        Ok((0..self.rows).flat_map(move |r| {
            let (cols, values) = self.row_slices(r);
            cols.iter().zip(values).map(move |(&c, &v)| (r, c, v))
        }))
    }
}

impl<T> SparseMatrix<T> {
    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of stored entries
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once `finalize` has run
    pub fn is_finalized(&self) -> bool {
        self.phase == Phase::Finalized
    }

    /// True when rows == cols
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Row offsets, or per-row counts while still building
    pub fn row_offset(&self) -> &[usize] {
        &self.row_offset
    }

    /// Zero-based column of each stored value
    pub fn col_index(&self) -> &[usize] {
        &self.col_index
    }

    /// Stored values
    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub(crate) fn ensure_finalized(&self) -> Result<()> {
        match self.phase {
            Phase::Finalized => Ok(()),
            Phase::Building => Err(Error::NotFinalized),
        }
    }

    /// Fails unless the matrix is finalized and square
    pub(crate) fn ensure_square(&self) -> Result<()> {
        self.ensure_finalized()?;
        if !self.is_square() {
            return Err(Error::NonSquareMatrix {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    fn check_position(&self, row: usize, col: usize) -> Result<()> {
        if row == 0 || row > self.rows || col == 0 || col > self.cols {
            return Err(Error::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Columns and values of zero-based row `row`. Finalized matrices only.
    pub(crate) fn row_slices(&self, row: usize) -> (&[usize], &[T]) {
        let start = self.row_offset[row];
        let end = self.row_offset[row + 1];
        (&self.col_index[start..end], &self.values[start..end])
    }
}

impl<T: Copy + Num> SparseMatrix<T> {
    /// Zero-based lookup on a finalized matrix
    pub(crate) fn lookup(&self, row: usize, col: usize) -> T {
        let (cols, values) = self.row_slices(row);
        cols.iter()
            .position(|&c| c == col)
            .map_or_else(T::zero, |k| values[k])
    }
}

/// Rows shown by `Debug` before eliding the rest
const DEBUG_ROWS: usize = 4;

/// `{col: value}` view of one stored row
struct RowView<'a, T>(&'a [usize], &'a [T]);

impl<T: fmt::Debug> fmt::Debug for RowView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter().zip(self.1)).finish()
    }
}

/// `{row: {col: value}}` view of the leading rows
struct LeadingRows<'a, T>(&'a SparseMatrix<T>);

impl<T: fmt::Debug> fmt::Debug for LeadingRows<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let matrix = self.0;
        f.debug_map()
            .entries((0..matrix.rows.min(DEBUG_ROWS)).map(|r| {
                let (cols, values) = matrix.row_slices(r);
                (r, RowView(cols, values))
            }))
            .finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("SparseMatrix");
        out.field("shape", &self.shape())
            .field("phase", &self.phase)
            .field("nnz", &self.nnz());

        // Offsets are only meaningful once finalized
        if self.phase == Phase::Building {
            return out.finish();
        }

        out.field("rows", &LeadingRows(self));
        if self.rows > DEBUG_ROWS {
            out.finish_non_exhaustive()
        } else {
            out.finish()
        }
    }
}

/// Dense rendering: one line per row, values separated by single spaces
impl<T: fmt::Display + Copy + Num> fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.phase == Phase::Building {
            return writeln!(f, "<unfinalized {}×{} matrix>", self.rows, self.cols);
        }

        for r in 0..self.rows {
            for c in 0..self.cols {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.lookup(r, c))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
