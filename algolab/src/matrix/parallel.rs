//! Row-parallel classic multiplication
//!
//! Stands in for the external dense-linear-algebra multipliers the lab
//! compares against. Each rayon task owns one row of the result, so no
//! synchronisation is needed.

use algolab_core::{validate_product_shape, Matrix, MatrixElement, Result};
use rayon::prelude::*;

use super::classic::accumulate_row;

/// Multiply `a` by `b`, distributing result rows across the rayon pool
///
/// Same contract and shape checks as [`multiply_classic`](super::multiply_classic).
pub fn multiply_parallel<T: MatrixElement>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    validate_product_shape(a.dimensions(), b.dimensions())?;

    let width = b.cols();
    let mut result = Matrix::zeros(a.rows(), width);
    result
        .as_mut_slice()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(i, out_row)| accumulate_row(a.row(i), b, out_row));

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::multiply_classic;
    use algolab_core::LabError;

    #[test]
    fn test_parallel_matches_classic() {
        let a = Matrix::from_fn(7, 5, |i, j| (i * 5 + j) as i64 - 10);
        let b = Matrix::from_fn(5, 9, |i, j| (i as i64) * 3 - j as i64);
        assert_eq!(
            multiply_parallel(&a, &b).unwrap(),
            multiply_classic(&a, &b).unwrap()
        );
    }

    #[test]
    fn test_parallel_dimension_mismatch() {
        let a = Matrix::<i32>::zeros(3, 2);
        assert_eq!(
            multiply_parallel(&a, &a),
            Err(LabError::DimensionMismatch {
                left_cols: 2,
                right_rows: 3
            })
        );
    }
}
