//! Dense matrix data model
//!
//! A [`Matrix`] is a rectangular grid whose shape is fixed at construction.
//! Elements are stored row-major in a single buffer, so every row has
//! exactly `cols` entries by construction.

use alloc::vec;
use alloc::vec::Vec;

use crate::traits::MatrixElement;
use crate::{LabError, Result};

/// Dense row-major matrix
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "MatrixParts<T>"))]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

/// Unchecked wire form, validated by [`Matrix::from_vec`] on the way in
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct MatrixParts<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<MatrixParts<T>> for Matrix<T> {
    type Error = LabError;

    fn try_from(parts: MatrixParts<T>) -> Result<Self> {
        Matrix::from_vec(parts.rows, parts.cols, parts.data)
    }
}

impl<T> Matrix<T> {
    /// Create a matrix from a row-major buffer
    ///
    /// Fails with `LengthMismatch` when the buffer length is not `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(LabError::LengthMismatch {
                expected: rows.saturating_mul(cols),
                found: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }
}

impl<T: MatrixElement> Matrix<T> {
    /// Create a zero-filled matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Create a matrix from nested rows, rejecting ragged input
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(nrows * ncols);

        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(LabError::RaggedRows {
                    row: index,
                    expected: ncols,
                    found: row.len(),
                });
            }
            data.extend(row);
        }

        Ok(Self {
            rows: nrows,
            cols: ncols,
            data,
        })
    }

    /// Create a matrix by evaluating `f(row, col)` for every cell
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the matrix has zero rows or zero columns
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether rows == cols
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Get an element, `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Element access without the `Option` wrapper
    ///
    /// Panics on out-of-bounds indices like slice indexing does.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Overwrite an element, ignoring out-of-bounds positions
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        if row < self.rows && col < self.cols {
            self.data[row * self.cols + col] = value;
        }
    }

    /// Borrow a single row
    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Row-major element buffer
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable row-major element buffer
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Copy into nested rows
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.data.chunks(self.cols).map(<[T]>::to_vec).collect()
    }

    /// Copy the `rows x cols` block starting at (`row`, `col`)
    ///
    /// Cells that fall outside this matrix are zero, so the same call
    /// both slices quadrants and pads.
    pub fn block(&self, row: usize, col: usize, rows: usize, cols: usize) -> Self {
        Self::from_fn(rows, cols, |i, j| {
            self.get(row + i, col + j).unwrap_or_else(T::zero)
        })
    }

    /// Zero-pad (or trim) to the given shape, keeping the top-left corner
    pub fn resized(&self, rows: usize, cols: usize) -> Self {
        self.block(0, 0, rows, cols)
    }

    /// Write `source` into this matrix with its top-left at (`row`, `col`)
    ///
    /// Cells of `source` that would fall outside this matrix are skipped.
    pub fn paste(&mut self, source: &Self, row: usize, col: usize) {
        for i in 0..source.rows {
            for j in 0..source.cols {
                self.set(row + i, col + j, source.at(i, j));
            }
        }
    }

    /// Element-wise sum of two equally shaped matrices
    pub fn add(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }

    /// Element-wise difference of two equally shaped matrices
    pub fn sub(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }

    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Self {
        debug_assert_eq!(self.dimensions(), other.dimensions());
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| f(a, b))
            .collect();
        Self {
            rows: self.rows,
            cols: self.cols,
            data,
        }
    }
}
