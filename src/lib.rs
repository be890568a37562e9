//! Integer matrix multiplication with a file-based verification workflow.
//!
//! The core is a single exact multiplication routine over dense `i64`
//! matrices, plus the plumbing around it: a whitespace-delimited text
//! loader/writer, a comparison helper for checking a product computed by
//! some other program, and a CLI that ties the three together.
//!
//! ## Usage
//!
//! ```
//! use matcheck::{Matrix, multiply};
//!
//! let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
//! let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
//!
//! let c = multiply(&a, &b).unwrap();
//! assert_eq!(c, Matrix::from_rows(vec![vec![19, 22], vec![43, 50]]).unwrap());
//! ```
//!
//! ## What's inside
//!
//! - The i-j-k reference kernel and an i-k-j variant kept for benchmarking,
//!   both with checked `i64` arithmetic
//! - A text-format loader/writer (one row per line) with line-precise errors
//! - First-mismatch comparison reporting

pub mod error;
pub mod io;
pub mod matrix;
pub mod report;

pub use error::MatrixError;
pub use io::{load_matrix, parse_matrix, save_matrix, write_matrix};
pub use matrix::Matrix;
pub use matrix::mul_ijk::matmul_ijk;
pub use matrix::mul_ikj::matmul_ikj;
pub use report::{Comparison, compare, matrices_equal};

/// Matrix product: `left × right`.
///
/// Fails with [`MatrixError::DimensionMismatch`] unless
/// `left.cols() == right.rows()`, and with [`MatrixError::Overflow`] if an
/// intermediate or final value leaves the `i64` range. Neither input is
/// touched; identical inputs always produce identical output.
pub fn multiply(left: &Matrix, right: &Matrix) -> Result<Matrix, MatrixError> {
    let (m, k) = left.dims();
    let (rows, n) = right.dims();
    if k != rows {
        return Err(MatrixError::DimensionMismatch {
            left: left.dims(),
            right: right.dims(),
        });
    }

    let mut c = vec![0i64; m * n];
    matrix::mul_ijk::matmul_ijk(left.as_slice(), right.as_slice(), &mut c, m, n, k)?;
    Ok(Matrix::from_vec(m, n, c))
}

/// Same contract as [`multiply`], computed with the i-k-j kernel.
///
/// Exists so benchmarks have a second implementation to race; the test
/// suite holds the two kernels to identical output.
pub fn multiply_ikj(left: &Matrix, right: &Matrix) -> Result<Matrix, MatrixError> {
    let (m, k) = left.dims();
    let (rows, n) = right.dims();
    if k != rows {
        return Err(MatrixError::DimensionMismatch {
            left: left.dims(),
            right: right.dims(),
        });
    }

    let mut c = vec![0i64; m * n];
    matrix::mul_ikj::matmul_ikj(left.as_slice(), right.as_slice(), &mut c, m, n, k)?;
    Ok(Matrix::from_vec(m, n, c))
}
