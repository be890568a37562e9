use crate::error::MatrixError;

/// Cache-friendly matrix multiplication using i-k-j loop order.
///
/// Swapping the j and k loops makes the innermost loop walk both B and C
/// sequentially (stride 1) instead of striding column-wise through B. For a
/// fixed output cell the partial products still arrive in ascending `k`, so
/// the result is identical to [`matmul_ijk`](super::mul_ijk::matmul_ijk),
/// and any given cell overflows in one kernel exactly when it overflows in
/// the other. Kept as the benchmark opponent of the reference kernel.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major, accumulated into (C += A * B)
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
pub fn matmul_ikj(
    a: &[i64],
    b: &[i64],
    c: &mut [i64],
    m: usize,
    n: usize,
    k: usize,
) -> Result<(), MatrixError> {
    for i in 0..m {
        for p in 0..k {
            for j in 0..n {
                let prod = a[i * k + p]
                    .checked_mul(b[p * n + j])
                    .ok_or(MatrixError::Overflow { row: i, col: j })?;
                c[i * n + j] = c[i * n + j]
                    .checked_add(prod)
                    .ok_or(MatrixError::Overflow { row: i, col: j })?;
            }
        }
    }
    Ok(())
}
