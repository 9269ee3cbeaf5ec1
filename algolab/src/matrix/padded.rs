//! Strassen multiplication on flat matrices with per-level even padding
//!
//! Unlike the list form, this variant never pads to a power of two up
//! front. At each recursion level an odd-sized operand is padded with one
//! zero row and column, the product is computed on the even size, and the
//! result is trimmed back to that level's input shape. A 5x5 multiply
//! therefore recurses through 6 -> 3 -> 4 -> 2 instead of 8 -> 4 -> 2.

use std::borrow::Cow;

use algolab_core::constants::STRASSEN_BASE_SIZE;
use algolab_core::{next_even, validate_square_pair, Matrix, MatrixElement, Result};

use super::classic::classic_unchecked;

/// Multiply two square matrices of equal size with even-padding Strassen
///
/// Fails with `NotSquare`, `SizeMismatch` or `EmptyMatrix` before any
/// padding happens.
pub fn multiply_strassen_padded<T: MatrixElement>(
    a: &Matrix<T>,
    b: &Matrix<T>,
) -> Result<Matrix<T>> {
    validate_square_pair(a.dimensions(), b.dimensions())?;
    Ok(padded_recursive(a, b))
}

fn padded_recursive<T: MatrixElement>(a: &Matrix<T>, b: &Matrix<T>) -> Matrix<T> {
    let (rows, cols) = a.dimensions();
    if rows <= STRASSEN_BASE_SIZE {
        return classic_unchecked(a, b);
    }

    let size = next_even(rows);
    let (a, b) = if size == rows {
        (Cow::Borrowed(a), Cow::Borrowed(b))
    } else {
        (
            Cow::Owned(a.resized(size, size)),
            Cow::Owned(b.resized(size, size)),
        )
    };

    let half = size / 2;
    let a11 = a.block(0, 0, half, half);
    let a12 = a.block(0, half, half, half);
    let a21 = a.block(half, 0, half, half);
    let a22 = a.block(half, half, half, half);
    let b11 = b.block(0, 0, half, half);
    let b12 = b.block(0, half, half, half);
    let b21 = b.block(half, 0, half, half);
    let b22 = b.block(half, half, half, half);

    let m1 = padded_recursive(&a11.add(&a22), &b11.add(&b22));
    let m2 = padded_recursive(&a21.add(&a22), &b11);
    let m3 = padded_recursive(&a11, &b12.sub(&b22));
    let m4 = padded_recursive(&a22, &b21.sub(&b11));
    let m5 = padded_recursive(&a11.add(&a12), &b22);
    let m6 = padded_recursive(&a21.sub(&a11), &b11.add(&b12));
    let m7 = padded_recursive(&a12.sub(&a22), &b21.add(&b22));

    let c11 = m1.add(&m4).sub(&m5).add(&m7);
    let c12 = m3.add(&m5);
    let c21 = m2.add(&m4);
    let c22 = m1.sub(&m2).add(&m3).add(&m6);

    let mut c = Matrix::zeros(size, size);
    c.paste(&c11, 0, 0);
    c.paste(&c12, 0, half);
    c.paste(&c21, half, 0);
    c.paste(&c22, half, half);

    if size == rows {
        c
    } else {
        c.resized(rows, cols)
    }
}
