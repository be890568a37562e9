//! Reading and writing the whitespace-delimited matrix text format.
//!
//! One matrix row per line, base-10 integers separated by ASCII whitespace.
//! Blank lines and trailing whitespace are tolerated; everything else is a
//! typed error naming the line it came from.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// Parses a matrix from text.
///
/// Fails with [`MatrixError::Parse`] on a token that isn't a base-10
/// integer, [`MatrixError::Ragged`] when a row's length differs from the
/// first row's (line numbers are 1-based and count blank lines), and
/// [`MatrixError::Empty`] when no rows remain after skipping blanks.
pub fn parse_matrix(input: &str) -> Result<Matrix, MatrixError> {
    let mut rows: Vec<Vec<i64>> = Vec::new();
    let mut cols = 0;
    for (idx, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut row = Vec::with_capacity(cols);
        for token in line.split_whitespace() {
            let value = token.parse::<i64>().map_err(|_| MatrixError::Parse {
                line: idx + 1,
                token: token.to_string(),
            })?;
            row.push(value);
        }
        if rows.is_empty() {
            cols = row.len();
        } else if row.len() != cols {
            return Err(MatrixError::Ragged {
                line: idx + 1,
                expected: cols,
                found: row.len(),
            });
        }
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(MatrixError::Empty);
    }
    Matrix::from_rows(rows)
}

/// Reads and parses a matrix file.
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<Matrix, MatrixError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let matrix = parse_matrix(&text)?;
    debug!(
        path = %path.display(),
        rows = matrix.rows(),
        cols = matrix.cols(),
        "loaded matrix"
    );
    Ok(matrix)
}

/// Writes a matrix in the format [`parse_matrix`] reads: one row per line,
/// elements separated by single spaces, every row newline-terminated.
pub fn write_matrix<W: Write>(matrix: &Matrix, mut writer: W) -> Result<(), MatrixError> {
    write!(writer, "{matrix}")?;
    Ok(())
}

/// Writes a matrix to a file, creating or truncating it.
pub fn save_matrix<P: AsRef<Path>>(matrix: &Matrix, path: P) -> Result<(), MatrixError> {
    let path = path.as_ref();
    let mut file = BufWriter::new(File::create(path)?);
    write_matrix(matrix, &mut file)?;
    file.flush()?;
    debug!(
        path = %path.display(),
        rows = matrix.rows(),
        cols = matrix.cols(),
        "wrote matrix"
    );
    Ok(())
}
