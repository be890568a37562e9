//! The dense integer matrix type and the multiplication kernels over it.

pub mod mul_ijk;
pub mod mul_ikj;

use std::fmt;
use std::ops::Index;

use itertools::Itertools;
use rand::Rng;

use crate::error::MatrixError;

/// Dense matrix of `i64` elements, stored row-major.
///
/// Always at least 1×1: the constructors reject empty and ragged input, and
/// a constructed matrix is never mutated. Equality is exact element-wise
/// comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i64>,
}

impl Matrix {
    /// Builds a matrix from nested rows.
    ///
    /// Fails with [`MatrixError::Empty`] if there are no rows or the first
    /// row has no elements, and with [`MatrixError::Ragged`] if a later row
    /// has a different length (`line` is the 1-based row number).
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self, MatrixError> {
        let cols = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(MatrixError::Empty),
        };
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::Ragged {
                    line: i + 1,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Builds a matrix from a row-major element vector.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or the vector length doesn't
    /// match `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<i64>) -> Self {
        assert!(rows > 0 && cols > 0, "matrix must be at least 1x1");
        assert_eq!(
            data.len(),
            rows * cols,
            "expected {}x{}={} elements, got {}",
            rows,
            cols,
            rows * cols,
            data.len()
        );
        Self { rows, cols, data }
    }

    /// All-zero matrix of the given shape.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "matrix must be at least 1x1");
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// The n×n identity matrix.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn identity(n: usize) -> Self {
        let mut result = Self::zeros(n, n);
        for i in 0..n {
            result.data[i * n + i] = 1;
        }
        result
    }

    /// Random matrix with elements drawn uniformly from `0..15`.
    ///
    /// Small non-negative elements keep products of modest matrices far from
    /// the `i64` range, so generated inputs multiply without overflow.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, rows: usize, cols: usize) -> Self {
        let mut result = Self::zeros(rows, cols);
        for value in &mut result.data {
            *value = rng.gen_range(0..15);
        }
        result
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as `(rows, cols)`.
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Row `i` as a slice of length `cols`.
    pub fn row(&self, i: usize) -> &[i64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Element at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        (row < self.rows && col < self.cols).then(|| self.data[row * self.cols + col])
    }

    /// The underlying row-major storage.
    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    /// Element-wise sum of two matrices of identical shape.
    ///
    /// Fails with [`MatrixError::DimensionMismatch`] on differing shapes and
    /// with [`MatrixError::Overflow`] if a sum leaves the `i64` range.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.dims() != other.dims() {
            return Err(MatrixError::DimensionMismatch {
                left: self.dims(),
                right: other.dims(),
            });
        }
        let mut data = Vec::with_capacity(self.data.len());
        for (i, (a, b)) in self.data.iter().zip(&other.data).enumerate() {
            let sum = a.checked_add(*b).ok_or(MatrixError::Overflow {
                row: i / self.cols,
                col: i % self.cols,
            })?;
            data.push(sum);
        }
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = i64;

    fn index(&self, (row, col): (usize, usize)) -> &i64 {
        &self.data[row * self.cols + col]
    }
}

/// One row per line, elements separated by single spaces — the text format
/// the loader reads back.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            writeln!(f, "{}", self.row(i).iter().join(" "))?;
        }
        Ok(())
    }
}
