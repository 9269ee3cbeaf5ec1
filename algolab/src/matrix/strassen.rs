//! Strassen multiplication on a list-of-lists grid
//!
//! Operands are copied into nested row vectors padded with zeros up to the
//! next power of two, so every recursion level splits evenly into four
//! quadrants. Recursion stops at [`STRASSEN_BASE_SIZE`] and the padded
//! product is truncated back to `n x n`.
//!
//! Recursion depth is `log2(next_power_of_two(n)) - 1`.

use algolab_core::constants::STRASSEN_BASE_SIZE;
use algolab_core::{next_power_of_two, validate_square_pair, Matrix, MatrixElement, Result};

type Grid<T> = Vec<Vec<T>>;

/// Multiply two square matrices of equal size with Strassen's algorithm
///
/// Fails with `NotSquare`, `SizeMismatch` or `EmptyMatrix` before any
/// padding happens.
pub fn multiply_strassen<T: MatrixElement>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    let n = validate_square_pair(a.dimensions(), b.dimensions())?;
    let padded = next_power_of_two(n);

    let a_prep = to_padded_grid(a, padded);
    let b_prep = to_padded_grid(b, padded);
    let c_prep = strassen_recursive(&a_prep, &b_prep);

    Ok(Matrix::from_fn(n, n, |i, j| c_prep[i][j]))
}

fn to_padded_grid<T: MatrixElement>(m: &Matrix<T>, size: usize) -> Grid<T> {
    (0..size)
        .map(|i| {
            (0..size)
                .map(|j| m.get(i, j).unwrap_or_else(T::zero))
                .collect()
        })
        .collect()
}

fn strassen_recursive<T: MatrixElement>(a: &Grid<T>, b: &Grid<T>) -> Grid<T> {
    let n = a.len();
    if n <= STRASSEN_BASE_SIZE {
        return ikj_product(a, b);
    }

    let half = n / 2;
    let [a11, a12, a21, a22] = split(a, half);
    let [b11, b12, b21, b22] = split(b, half);

    let m1 = strassen_recursive(&add(&a11, &a22), &add(&b11, &b22));
    let m2 = strassen_recursive(&add(&a21, &a22), &b11);
    let m3 = strassen_recursive(&a11, &sub(&b12, &b22));
    let m4 = strassen_recursive(&a22, &sub(&b21, &b11));
    let m5 = strassen_recursive(&add(&a11, &a12), &b22);
    let m6 = strassen_recursive(&sub(&a21, &a11), &add(&b11, &b12));
    let m7 = strassen_recursive(&sub(&a12, &a22), &add(&b21, &b22));

    // C11 = M1 + M4 - M5 + M7
    let c11 = add(&sub(&add(&m1, &m4), &m5), &m7);
    // C12 = M3 + M5
    let c12 = add(&m3, &m5);
    // C21 = M2 + M4
    let c21 = add(&m2, &m4);
    // C22 = M1 - M2 + M3 + M6
    let c22 = add(&add(&sub(&m1, &m2), &m3), &m6);

    join(c11, c12, c21, c22)
}

/// Classic i-k-j product of two square grids
fn ikj_product<T: MatrixElement>(a: &Grid<T>, b: &Grid<T>) -> Grid<T> {
    let n = a.len();
    let mut c = vec![vec![T::zero(); n]; n];
    for i in 0..n {
        for k in 0..n {
            let a_ik = a[i][k];
            for j in 0..n {
                c[i][j] += a_ik * b[k][j];
            }
        }
    }
    c
}

/// Split into [top-left, top-right, bottom-left, bottom-right]
fn split<T: MatrixElement>(m: &Grid<T>, half: usize) -> [Grid<T>; 4] {
    let quadrant = |row: usize, col: usize| -> Grid<T> {
        m[row..row + half]
            .iter()
            .map(|r| r[col..col + half].to_vec())
            .collect()
    };
    [
        quadrant(0, 0),
        quadrant(0, half),
        quadrant(half, 0),
        quadrant(half, half),
    ]
}

fn join<T: MatrixElement>(c11: Grid<T>, c12: Grid<T>, c21: Grid<T>, c22: Grid<T>) -> Grid<T> {
    let top = c11.into_iter().zip(c12).map(|(mut left, right)| {
        left.extend(right);
        left
    });
    let bottom = c21.into_iter().zip(c22).map(|(mut left, right)| {
        left.extend(right);
        left
    });
    top.chain(bottom).collect()
}

fn add<T: MatrixElement>(a: &Grid<T>, b: &Grid<T>) -> Grid<T> {
    zip_grid(a, b, |x, y| x + y)
}

fn sub<T: MatrixElement>(a: &Grid<T>, b: &Grid<T>) -> Grid<T> {
    zip_grid(a, b, |x, y| x - y)
}

fn zip_grid<T: MatrixElement>(a: &Grid<T>, b: &Grid<T>, f: impl Fn(T, T) -> T) -> Grid<T> {
    a.iter()
        .zip(b)
        .map(|(ra, rb)| ra.iter().zip(rb).map(|(&x, &y)| f(x, y)).collect())
        .collect()
}
