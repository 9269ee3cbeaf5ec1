//! Operand shape validation for matrix strategies
//!
//! Pure functions over `(rows, cols)` pairs. Strategies call these before
//! any allocation or recursion so invalid input fails fast.

use crate::LabError;

/// Reject matrices with zero rows or zero columns
pub const fn validate_non_empty(dims: (usize, usize)) -> Result<(), LabError> {
    if dims.0 == 0 || dims.1 == 0 {
        return Err(LabError::EmptyMatrix);
    }
    Ok(())
}

/// Validate that `A · B` is defined
///
/// Both operands must be non-empty and `A.cols` must equal `B.rows`.
pub const fn validate_product_shape(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(), LabError> {
    if let Err(e) = validate_non_empty(left) {
        return Err(e);
    }
    if let Err(e) = validate_non_empty(right) {
        return Err(e);
    }
    if left.1 != right.0 {
        return Err(LabError::DimensionMismatch {
            left_cols: left.1,
            right_rows: right.0,
        });
    }
    Ok(())
}

/// Validate operands for the Strassen family
///
/// Both operands must be non-empty, square, and of the same size.
/// Returns that size.
pub const fn validate_square_pair(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<usize, LabError> {
    if let Err(e) = validate_non_empty(left) {
        return Err(e);
    }
    if let Err(e) = validate_non_empty(right) {
        return Err(e);
    }
    if left.0 != left.1 {
        return Err(LabError::NotSquare {
            rows: left.0,
            cols: left.1,
        });
    }
    if right.0 != right.1 {
        return Err(LabError::NotSquare {
            rows: right.0,
            cols: right.1,
        });
    }
    if left.0 != right.0 {
        return Err(LabError::SizeMismatch {
            left: left.0,
            right: right.0,
        });
    }
    Ok(left.0)
}

/// Round `value` up to a multiple of a power-of-two `boundary`
pub const fn align_to_boundary(value: usize, boundary: usize) -> usize {
    (value + boundary - 1) & !(boundary - 1)
}

/// Smallest even number >= `n`
pub const fn next_even(n: usize) -> usize {
    align_to_boundary(n, 2)
}

/// Smallest power of two >= `n` (1 for 0)
pub const fn next_power_of_two(n: usize) -> usize {
    n.next_power_of_two()
}

/// Number of halvings from `n` down to the Strassen base size
///
/// This is the recursion depth of a Strassen multiply on an `n x n`
/// operand padded to a power of two.
pub const fn strassen_depth(n: usize) -> u32 {
    let padded = next_power_of_two(n);
    if padded <= crate::constants::STRASSEN_BASE_SIZE {
        0
    } else {
        padded.trailing_zeros() - crate::constants::STRASSEN_BASE_SIZE.trailing_zeros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_shape() {
        assert_eq!(validate_product_shape((2, 3), (3, 4)), Ok(()));
        assert_eq!(
            validate_product_shape((2, 3), (2, 3)),
            Err(LabError::DimensionMismatch {
                left_cols: 3,
                right_rows: 2
            })
        );
        assert_eq!(
            validate_product_shape((0, 0), (0, 0)),
            Err(LabError::EmptyMatrix)
        );
        assert_eq!(
            validate_product_shape((2, 2), (2, 0)),
            Err(LabError::EmptyMatrix)
        );
    }

    #[test]
    fn test_validate_square_pair() {
        assert_eq!(validate_square_pair((5, 5), (5, 5)), Ok(5));
        assert_eq!(
            validate_square_pair((2, 3), (3, 3)),
            Err(LabError::NotSquare { rows: 2, cols: 3 })
        );
        assert_eq!(
            validate_square_pair((3, 3), (3, 2)),
            Err(LabError::NotSquare { rows: 3, cols: 2 })
        );
        assert_eq!(
            validate_square_pair((3, 3), (4, 4)),
            Err(LabError::SizeMismatch { left: 3, right: 4 })
        );
        assert_eq!(
            validate_square_pair((0, 0), (0, 0)),
            Err(LabError::EmptyMatrix)
        );
    }

    #[test]
    fn test_padding_sizes() {
        assert_eq!(next_even(0), 0);
        assert_eq!(next_even(3), 4);
        assert_eq!(next_even(4), 4);
        assert_eq!(next_power_of_two(0), 1);
        assert_eq!(next_power_of_two(5), 8);
        assert_eq!(next_power_of_two(8), 8);
        assert_eq!(align_to_boundary(9, 8), 16);
    }

    #[test]
    fn test_strassen_depth() {
        assert_eq!(strassen_depth(1), 0);
        assert_eq!(strassen_depth(2), 0);
        assert_eq!(strassen_depth(3), 1);
        assert_eq!(strassen_depth(4), 1);
        assert_eq!(strassen_depth(64), 5);
    }
}
