//! Dense LCS score table for one diff pass.

use std::fmt;

use crate::errors::DiffError;

/// `(m + 1) x (n + 1)` table where cell `(i, j)` holds the LCS length of `old[..i]` and `new[..j]`.
///
/// Dimensions are fixed at construction. Row 0 and column 0 start (and stay) zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditGraph {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl EditGraph {
    /// Allocate a zeroed graph for sequences of length `m` (rows) and `n` (columns).
    pub fn new(m: usize, n: usize) -> Self {
        let rows = m + 1;
        let cols = n + 1;
        EditGraph {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// Number of rows, `m + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `n + 1`.
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Result<usize, DiffError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, row: usize, col: usize, value: usize) -> Result<(), DiffError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Row-major offset of `(row, col)`, or `OutOfRange` if it falls outside the table.
    fn index(&self, row: usize, col: usize) -> Result<usize, DiffError> {
        if row >= self.rows || col >= self.cols {
            return Err(DiffError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }
}

impl fmt::Display for EditGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let mut first = true;
            for value in row {
                if !first {
                    f.write_str(",")?;
                }
                write!(f, "{value}")?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
