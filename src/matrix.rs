//! Rectangular binary matrix used to define linear block codes.
//!
//! A `BinaryMatrix` is an ordered list of equal-length rows of bits
//! (`true` = 1, `false` = 0). The row count is called the *dimension* (k)
//! and the column count the *vector size* (n), matching the usual (n, k)
//! notation for linear codes. Construction through [`BinaryMatrix::from_rows`]
//! guarantees the matrix is rectangular and non-empty, so downstream code can
//! index rows and columns without further checks.

use std::ops::Index;

use crate::error::{Error, Result};

/// A rectangular matrix over GF(2).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMatrix {
    /// Matrix rows, all `width` bits long
    rows: Vec<Vec<bool>>,
    /// Column count, tracked separately so row-less derived matrices keep
    /// a well-defined width
    width: usize,
}

impl BinaryMatrix {
    /// Creates a matrix from the given rows.
    ///
    /// # Arguments
    ///
    /// * `rows` - Matrix rows, one `Vec<bool>` per row
    ///
    /// # Returns
    ///
    /// A new `BinaryMatrix`, or an error if the rows are empty, a row has no
    /// columns, or the rows differ in length
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::InvalidInput(
                "Matrix must have at least one row".to_string(),
            ));
        }

        let width = rows[0].len();
        if width == 0 {
            return Err(Error::InvalidInput(
                "Matrix rows must have at least one column".to_string(),
            ));
        }

        if rows.iter().any(|row| row.len() != width) {
            return Err(Error::InvalidInput(
                "Matrix rows must all have the same length".to_string(),
            ));
        }

        Ok(BinaryMatrix { rows, width })
    }

    /// Creates an all-zero matrix with the given dimensions.
    pub fn zero(dimension: usize, vector_size: usize) -> Result<Self> {
        if dimension == 0 || vector_size == 0 {
            return Err(Error::InvalidInput(
                "Matrix dimensions must be positive".to_string(),
            ));
        }

        Ok(BinaryMatrix {
            rows: vec![vec![false; vector_size]; dimension],
            width: vector_size,
        })
    }

    /// Creates a `size` x `size` identity matrix.
    pub fn identity(size: usize) -> Result<Self> {
        let mut matrix = Self::zero(size, size)?;
        for i in 0..size {
            matrix.rows[i][i] = true;
        }
        Ok(matrix)
    }

    /// Builds a matrix from pre-validated rows. Unlike [`BinaryMatrix::from_rows`]
    /// this permits zero rows, which derived matrices need: the parity-check
    /// matrix of a redundancy-free code has no rows but still a width.
    pub(crate) fn from_parts(rows: Vec<Vec<bool>>, width: usize) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == width));
        BinaryMatrix { rows, width }
    }

    /// Number of rows (k)
    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (n)
    pub fn vector_size(&self) -> usize {
        self.width
    }

    /// Returns the row at `index` as a bit slice.
    pub fn row(&self, index: usize) -> &[bool] {
        &self.rows[index]
    }

    /// Iterates over the rows as bit slices.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Returns the transposed matrix.
    pub fn transpose(&self) -> BinaryMatrix {
        let mut rows = vec![vec![false; self.rows.len()]; self.width];
        for (i, row) in self.rows.iter().enumerate() {
            for (j, &bit) in row.iter().enumerate() {
                rows[j][i] = bit;
            }
        }

        BinaryMatrix {
            width: self.rows.len(),
            rows,
        }
    }

    /// Appends an all-zero row.
    pub fn add_row(&mut self) {
        self.rows.push(vec![false; self.width]);
    }

    /// Removes the last row. The matrix must keep at least one row.
    pub fn remove_row(&mut self) -> Result<()> {
        if self.rows.len() <= 1 {
            return Err(Error::InvalidInput(
                "Matrix must keep at least one row".to_string(),
            ));
        }

        self.rows.pop();
        Ok(())
    }

    /// Appends an all-zero column to every row.
    pub fn add_column(&mut self) {
        for row in &mut self.rows {
            row.push(false);
        }
        self.width += 1;
    }

    /// Removes the last column from every row. The matrix must keep at least
    /// one column.
    pub fn remove_column(&mut self) -> Result<()> {
        if self.width <= 1 {
            return Err(Error::InvalidInput(
                "Matrix must keep at least one column".to_string(),
            ));
        }

        for row in &mut self.rows {
            row.pop();
        }
        self.width -= 1;
        Ok(())
    }

    /// Swaps two rows in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.rows.swap(a, b);
    }

    /// Adds row `source` into row `target` mod 2.
    pub fn xor_row_into(&mut self, source: usize, target: usize) {
        let source_row = self.rows[source].clone();
        for (bit, &source_bit) in self.rows[target].iter_mut().zip(source_row.iter()) {
            *bit ^= source_bit;
        }
    }
}

impl Index<usize> for BinaryMatrix {
    type Output = [bool];

    fn index(&self, index: usize) -> &[bool] {
        &self.rows[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_valid() {
        let matrix = BinaryMatrix::from_rows(vec![
            vec![true, false, true],
            vec![false, true, true],
        ])
        .unwrap();

        assert_eq!(matrix.dimension(), 2);
        assert_eq!(matrix.vector_size(), 3);
        assert_eq!(matrix.row(0), &[true, false, true]);
        assert_eq!(&matrix[1], &[false, true, true]);
    }

    #[test]
    fn test_from_rows_rejects_malformed_input() {
        // Empty matrix
        assert!(BinaryMatrix::from_rows(Vec::new()).is_err());

        // Zero-width rows
        assert!(BinaryMatrix::from_rows(vec![Vec::new()]).is_err());

        // Ragged rows
        let ragged = vec![vec![true, false], vec![true]];
        assert!(BinaryMatrix::from_rows(ragged).is_err());
    }

    #[test]
    fn test_identity() {
        let matrix = BinaryMatrix::identity(3).unwrap();

        assert_eq!(matrix.row(0), &[true, false, false]);
        assert_eq!(matrix.row(1), &[false, true, false]);
        assert_eq!(matrix.row(2), &[false, false, true]);

        assert!(BinaryMatrix::identity(0).is_err());
    }

    #[test]
    fn test_transpose() {
        let matrix = BinaryMatrix::from_rows(vec![
            vec![true, false, true],
            vec![false, true, true],
        ])
        .unwrap();

        let transposed = matrix.transpose();
        assert_eq!(transposed.dimension(), 3);
        assert_eq!(transposed.vector_size(), 2);
        assert_eq!(transposed.row(0), &[true, false]);
        assert_eq!(transposed.row(1), &[false, true]);
        assert_eq!(transposed.row(2), &[true, true]);
    }

    #[test]
    fn test_resize_operations() {
        let mut matrix = BinaryMatrix::from_rows(vec![vec![true, true]]).unwrap();

        matrix.add_row();
        assert_eq!(matrix.dimension(), 2);
        assert_eq!(matrix.row(1), &[false, false]);

        matrix.add_column();
        assert_eq!(matrix.vector_size(), 3);
        assert_eq!(matrix.row(0), &[true, true, false]);

        matrix.remove_row().unwrap();
        matrix.remove_column().unwrap();
        assert_eq!(matrix.dimension(), 1);
        assert_eq!(matrix.vector_size(), 2);

        // The last row and column must stay
        assert!(matrix.remove_row().is_err());
        matrix.remove_column().unwrap();
        assert!(matrix.remove_column().is_err());
    }

    #[test]
    fn test_row_operations() {
        let mut matrix = BinaryMatrix::from_rows(vec![
            vec![true, false, true],
            vec![true, true, false],
        ])
        .unwrap();

        matrix.xor_row_into(0, 1);
        assert_eq!(matrix.row(1), &[false, true, true]);

        matrix.swap_rows(0, 1);
        assert_eq!(matrix.row(0), &[false, true, true]);
        assert_eq!(matrix.row(1), &[true, false, true]);
    }
}
