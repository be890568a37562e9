use matcheck::{Matrix, MatrixError, matrices_equal, multiply, multiply_ikj, parse_matrix};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn m(rows: &[&[i64]]) -> Matrix {
    Matrix::from_rows(rows.iter().map(|row| row.to_vec()).collect()).unwrap()
}

// ============================================================
// Concrete products
// ============================================================

#[test]
fn test_2x2_multiply() {
    let a = m(&[&[1, 2], &[3, 4]]);
    let b = m(&[&[5, 6], &[7, 8]]);

    assert_eq!(multiply(&a, &b).unwrap(), m(&[&[19, 22], &[43, 50]]));
}

#[test]
fn test_1x3_times_3x1() {
    let a = m(&[&[1, 2, 3]]);
    let b = m(&[&[1], &[1], &[1]]);

    assert_eq!(multiply(&a, &b).unwrap(), m(&[&[6]]));
}

#[test]
fn test_2x3_times_3x2() {
    let a = m(&[&[1, 2, 3], &[4, 5, 6]]);
    let b = m(&[&[7, 8], &[9, 10], &[11, 12]]);

    assert_eq!(multiply(&a, &b).unwrap(), m(&[&[58, 64], &[139, 154]]));
}

#[test]
fn test_negative_elements() {
    let a = m(&[&[-1, 2], &[3, -4]]);
    let b = m(&[&[5, -6], &[-7, 8]]);

    assert_eq!(multiply(&a, &b).unwrap(), m(&[&[-19, 22], &[43, -50]]));
}

// ============================================================
// Algebraic properties
// ============================================================

#[test]
fn test_identity_both_sides() {
    let mut rng = StdRng::seed_from_u64(1);

    for n in [1, 2, 3, 5, 8] {
        let a = Matrix::random(&mut rng, n, n);
        let id = Matrix::identity(n);

        assert_eq!(multiply(&a, &id).unwrap(), a, "right identity, n={n}");
        assert_eq!(multiply(&id, &a).unwrap(), a, "left identity, n={n}");
    }
}

#[test]
fn test_zero_matrix() {
    let mut rng = StdRng::seed_from_u64(2);
    let a = Matrix::random(&mut rng, 4, 3);

    let product = multiply(&a, &Matrix::zeros(3, 5)).unwrap();

    assert_eq!(product, Matrix::zeros(4, 5));
}

#[test]
fn test_associativity() {
    let mut rng = StdRng::seed_from_u64(3);
    let a = Matrix::random(&mut rng, 3, 4);
    let b = Matrix::random(&mut rng, 4, 5);
    let c = Matrix::random(&mut rng, 5, 2);

    let left_first = multiply(&multiply(&a, &b).unwrap(), &c).unwrap();
    let right_first = multiply(&a, &multiply(&b, &c).unwrap()).unwrap();

    assert_eq!(left_first, right_first);
}

#[test]
fn test_distributivity() {
    let mut rng = StdRng::seed_from_u64(4);
    let a = Matrix::random(&mut rng, 3, 4);
    let b = Matrix::random(&mut rng, 4, 5);
    let c = Matrix::random(&mut rng, 4, 5);

    let factored = multiply(&a, &b.add(&c).unwrap()).unwrap();
    let expanded = multiply(&a, &b)
        .unwrap()
        .add(&multiply(&a, &c).unwrap())
        .unwrap();

    assert_eq!(factored, expanded);
}

// ============================================================
// Dimension checks
// ============================================================

#[test]
fn test_dimension_mismatch() {
    let a = m(&[&[1, 2, 3]]); // 1x3
    let b = m(&[&[1, 2], &[3, 4]]); // 2x2

    match multiply(&a, &b) {
        Err(MatrixError::DimensionMismatch { left, right }) => {
            assert_eq!(left, (1, 3));
            assert_eq!(right, (2, 2));
        }
        other => panic!("expected DimensionMismatch, got {other:?}"),
    }
}

#[test]
fn test_add_shape_mismatch() {
    let a = m(&[&[1, 2]]);
    let b = m(&[&[1], &[2]]);

    assert!(matches!(
        a.add(&b),
        Err(MatrixError::DimensionMismatch { .. })
    ));
}

// ============================================================
// Overflow
// ============================================================

#[test]
fn test_product_overflow() {
    let a = m(&[&[i64::MAX]]);
    let b = m(&[&[2]]);

    match multiply(&a, &b) {
        Err(MatrixError::Overflow { row, col }) => {
            assert_eq!((row, col), (0, 0));
        }
        other => panic!("expected Overflow, got {other:?}"),
    }
}

#[test]
fn test_accumulation_overflow() {
    // Each product fits, the running sum doesn't.
    let a = m(&[&[i64::MAX, i64::MAX]]);
    let b = m(&[&[1], &[1]]);

    assert!(matches!(
        multiply(&a, &b),
        Err(MatrixError::Overflow { row: 0, col: 0 })
    ));
}

#[test]
fn test_overflow_cell_is_reported() {
    // Only the second output column overflows.
    let a = m(&[&[1, 1]]);
    let b = m(&[&[1, i64::MAX], &[1, i64::MAX]]);

    assert!(matches!(
        multiply(&a, &b),
        Err(MatrixError::Overflow { row: 0, col: 1 })
    ));
}

// ============================================================
// Kernel equivalence (reference i-j-k vs benchmark i-k-j)
// ============================================================

#[test]
fn test_kernels_agree() {
    let mut rng = StdRng::seed_from_u64(5);
    let shapes = [
        (1, 1, 1),
        (2, 2, 2),
        (3, 5, 7),
        (7, 3, 5),
        (11, 13, 17),
        (1, 20, 1),
        (16, 16, 16),
    ];

    for (rows, inner, cols) in shapes {
        let a = Matrix::random(&mut rng, rows, inner);
        let b = Matrix::random(&mut rng, inner, cols);

        assert_eq!(
            multiply(&a, &b).unwrap(),
            multiply_ikj(&a, &b).unwrap(),
            "{rows}x{inner} * {inner}x{cols}"
        );
    }
}

#[test]
fn test_kernels_agree_on_overflow() {
    let a = m(&[&[i64::MAX, i64::MAX]]);
    let b = m(&[&[1], &[1]]);

    assert!(matches!(
        multiply_ikj(&a, &b),
        Err(MatrixError::Overflow { row: 0, col: 0 })
    ));
}

// ============================================================
// Determinism
// ============================================================

#[test]
fn test_repeated_multiplication_is_identical() {
    let mut rng = StdRng::seed_from_u64(6);
    let a = Matrix::random(&mut rng, 6, 7);
    let b = Matrix::random(&mut rng, 7, 4);

    let first = multiply(&a, &b).unwrap();
    let second = multiply(&a, &b).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_reparsed_inputs_multiply_identically() {
    let left_text = "1 2 3\n4 5 6\n";
    let right_text = "7 8\n9 10\n11 12\n";

    let first = multiply(
        &parse_matrix(left_text).unwrap(),
        &parse_matrix(right_text).unwrap(),
    )
    .unwrap();
    let second = multiply(
        &parse_matrix(left_text).unwrap(),
        &parse_matrix(right_text).unwrap(),
    )
    .unwrap();

    assert_eq!(first, second);
    assert!(matrices_equal(&first, &second));
}
