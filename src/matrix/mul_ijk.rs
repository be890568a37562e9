use crate::error::MatrixError;

/// Reference matrix multiplication using i-j-k loop order.
///
/// The textbook triple loop: each output cell accumulates the dot product
/// of a row of A and a column of B before the loop moves on. The innermost
/// loop accesses B with stride `n`, so this is the slow, obviously-correct
/// baseline the other kernel is validated against.
///
/// All arithmetic is checked; the first product or sum that leaves the
/// `i64` range fails with the output cell it was headed for.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major, accumulated into (C += A * B)
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
pub fn matmul_ijk(
    a: &[i64],
    b: &[i64],
    c: &mut [i64],
    m: usize,
    n: usize,
    k: usize,
) -> Result<(), MatrixError> {
    for i in 0..m {
        for j in 0..n {
            let mut acc = c[i * n + j];
            for p in 0..k {
                let prod = a[i * k + p]
                    .checked_mul(b[p * n + j])
                    .ok_or(MatrixError::Overflow { row: i, col: j })?;
                acc = acc
                    .checked_add(prod)
                    .ok_or(MatrixError::Overflow { row: i, col: j })?;
            }
            c[i * n + j] = acc;
        }
    }
    Ok(())
}
