//! Classic triple-loop multiplication
//!
//! Loop order is i-k-j: the innermost loop walks a row of `B` and a row of
//! the result, both contiguous in row-major storage.

use algolab_core::{validate_product_shape, Matrix, MatrixElement, Result};

/// Multiply `a` by `b` with the classic i-k-j triple loop
///
/// Fails with `DimensionMismatch` when `a.cols() != b.rows()` and with
/// `EmptyMatrix` for zero-sized operands.
pub fn multiply_classic<T: MatrixElement>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    validate_product_shape(a.dimensions(), b.dimensions())?;
    Ok(classic_unchecked(a, b))
}

/// Classic product without shape checks, shared by the recursive base cases
pub(crate) fn classic_unchecked<T: MatrixElement>(a: &Matrix<T>, b: &Matrix<T>) -> Matrix<T> {
    let width = b.cols();
    let mut result = Matrix::zeros(a.rows(), width);
    if width == 0 {
        return result;
    }

    for (i, out_row) in result.as_mut_slice().chunks_mut(width).enumerate() {
        accumulate_row(a.row(i), b, out_row);
    }
    result
}

/// `out_row += a_row · B`, the body of one i iteration
#[inline]
pub(crate) fn accumulate_row<T: MatrixElement>(a_row: &[T], b: &Matrix<T>, out_row: &mut [T]) {
    for (k, &a_ik) in a_row.iter().enumerate() {
        for (cell, &b_kj) in out_row.iter_mut().zip(b.row(k)) {
            *cell += a_ik * b_kj;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algolab_core::LabError;

    #[test]
    fn test_classic_2x2() {
        let a = Matrix::from_rows(vec![vec![1i64, 2], vec![3, 4]]).unwrap();
        let b = Matrix::from_rows(vec![vec![5i64, 6], vec![7, 8]]).unwrap();
        let c = multiply_classic(&a, &b).unwrap();
        assert_eq!(c.to_rows(), vec![vec![19, 22], vec![43, 50]]);
    }

    #[test]
    fn test_classic_rectangular() {
        let a = Matrix::from_rows(vec![vec![1i64, 2, 3], vec![4, 5, 6]]).unwrap();
        let b = Matrix::from_rows(vec![vec![7i64], vec![8], vec![9]]).unwrap();
        let c = multiply_classic(&a, &b).unwrap();
        assert_eq!(c.dimensions(), (2, 1));
        assert_eq!(c.to_rows(), vec![vec![50], vec![122]]);
    }

    #[test]
    fn test_classic_dimension_mismatch() {
        let a = Matrix::<i64>::zeros(2, 3);
        let b = Matrix::<i64>::zeros(2, 3);
        assert_eq!(
            multiply_classic(&a, &b),
            Err(LabError::DimensionMismatch {
                left_cols: 3,
                right_rows: 2
            })
        );
    }

    #[test]
    fn test_classic_empty() {
        let a = Matrix::<f64>::zeros(0, 0);
        assert_eq!(multiply_classic(&a, &a), Err(LabError::EmptyMatrix));
    }

    #[test]
    fn test_classic_floats() {
        let a = Matrix::from_rows(vec![vec![0.5f64, 1.5]]).unwrap();
        let b = Matrix::from_rows(vec![vec![2.0f64], vec![4.0]]).unwrap();
        assert_eq!(multiply_classic(&a, &b).unwrap().at(0, 0), 7.0);
    }
}
