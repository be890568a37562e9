//! Comparing a computed product against an expected matrix.

use std::fmt;

use crate::matrix::Matrix;

/// Outcome of comparing two matrices.
///
/// A shape mismatch is an unequal verdict, not an error: the expected side
/// is typically output produced by some other program and may have any
/// shape at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    Equal,
    /// Shapes are `(rows, cols)`.
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// First differing cell in row-major scan order.
    ValueMismatch {
        row: usize,
        col: usize,
        left: i64,
        right: i64,
    },
}

impl Comparison {
    pub fn is_equal(&self) -> bool {
        matches!(self, Self::Equal)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equal => write!(f, "matrices are equal"),
            Self::ShapeMismatch { left, right } => write!(
                f,
                "matrices differ: shape {}x{} vs {}x{}",
                left.0, left.1, right.0, right.1
            ),
            Self::ValueMismatch {
                row,
                col,
                left,
                right,
            } => write!(
                f,
                "matrices differ at ({row}, {col}): {left} vs {right}"
            ),
        }
    }
}

/// Compares two matrices, reporting the first difference found.
pub fn compare(left: &Matrix, right: &Matrix) -> Comparison {
    if left.dims() != right.dims() {
        return Comparison::ShapeMismatch {
            left: left.dims(),
            right: right.dims(),
        };
    }
    for i in 0..left.rows() {
        for j in 0..left.cols() {
            if left[(i, j)] != right[(i, j)] {
                return Comparison::ValueMismatch {
                    row: i,
                    col: j,
                    left: left[(i, j)],
                    right: right[(i, j)],
                };
            }
        }
    }
    Comparison::Equal
}

/// Boolean view of [`compare`].
pub fn matrices_equal(left: &Matrix, right: &Matrix) -> bool {
    compare(left, right).is_equal()
}
