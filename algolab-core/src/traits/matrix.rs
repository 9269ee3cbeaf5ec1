//! Strategy abstraction for matrix multiplication

use super::element::MatrixElement;
use crate::matrix::Matrix;
use crate::Result;

/// A matrix multiplication strategy
///
/// Implementations compute `C[i][j] = Σ_k A[i][k]·B[k][j]` and fail with
/// a [`LabError`](crate::LabError) when the operand shapes violate the
/// strategy's preconditions. They never reshape or truncate inputs.
pub trait Multiplier<T: MatrixElement> {
    /// Short human-readable name used in reports
    fn name(&self) -> &'static str;

    /// Multiply `a` by `b`
    fn multiply(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>>;
}
