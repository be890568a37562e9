//! Error type shared by the matrix constructors, kernels, and the loader.

use std::error::Error;
use std::fmt;
use std::io;

/// Everything that can go wrong while building, loading, or multiplying a
/// matrix.
///
/// Each variant carries the concrete shapes or values involved so a failure
/// message points at the exact precondition that was violated.
#[derive(Debug)]
pub enum MatrixError {
    /// The left matrix's column count doesn't match the right matrix's row
    /// count. Shapes are `(rows, cols)`.
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// An accumulated value left the `i64` range at output cell `(row, col)`.
    Overflow { row: usize, col: usize },
    /// A token that doesn't parse as a base-10 integer (`line` is 1-based).
    Parse { line: usize, token: String },
    /// A row whose length differs from the first row's.
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// Input contained no matrix rows.
    Empty,
    Io(io::Error),
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { left, right } => write!(
                f,
                "dimension mismatch: cannot multiply {}x{} by {}x{}",
                left.0, left.1, right.0, right.1
            ),
            Self::Overflow { row, col } => {
                write!(f, "i64 overflow while accumulating element ({row}, {col})")
            }
            Self::Parse { line, token } => {
                write!(f, "line {line}: invalid integer {token:?}")
            }
            Self::Ragged {
                line,
                expected,
                found,
            } => write!(f, "line {line}: expected {expected} elements, found {found}"),
            Self::Empty => write!(f, "input contains no matrix rows"),
            Self::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl Error for MatrixError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for MatrixError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
