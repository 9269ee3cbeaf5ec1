//! Error types for algolab operations

/// Errors raised when an algorithm's preconditions are violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabError {
    /// Inner dimensions disagree: `A.cols != B.rows`
    DimensionMismatch { left_cols: usize, right_rows: usize },
    /// A square-only strategy received a non-square operand
    NotSquare { rows: usize, cols: usize },
    /// Square operands of different sizes
    SizeMismatch { left: usize, right: usize },
    /// Matrix with zero rows or zero columns
    EmptyMatrix,
    /// Row whose length differs from the first row
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Row-major buffer whose length is not `rows * cols`
    LengthMismatch { expected: usize, found: usize },
    /// Tree key could not be parsed as an integer
    InvalidKey,
    /// Decimal string contains a non-digit character or is empty
    InvalidDigit,
    /// Range string is malformed or reversed
    InvalidRange,
    /// Matrix cell could not be parsed
    InvalidNumber,
}

/// Coarse grouping of [`LabError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Operand shapes do not satisfy the algorithm's preconditions
    Shape,
    /// Textual input could not be parsed
    Parse,
}

impl LabError {
    /// Get the category of this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            LabError::DimensionMismatch { .. }
            | LabError::NotSquare { .. }
            | LabError::SizeMismatch { .. }
            | LabError::EmptyMatrix
            | LabError::RaggedRows { .. }
            | LabError::LengthMismatch { .. } => ErrorCategory::Shape,
            LabError::InvalidKey
            | LabError::InvalidDigit
            | LabError::InvalidRange
            | LabError::InvalidNumber => ErrorCategory::Parse,
        }
    }
}

impl core::fmt::Display for LabError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LabError::DimensionMismatch {
                left_cols,
                right_rows,
            } => write!(
                f,
                "Dimension mismatch: left operand has {left_cols} columns, right operand has {right_rows} rows"
            ),
            LabError::NotSquare { rows, cols } => {
                write!(f, "Matrix must be square, got {rows}x{cols}")
            }
            LabError::SizeMismatch { left, right } => {
                write!(f, "Matrices must have equal size, got {left} and {right}")
            }
            LabError::EmptyMatrix => write!(f, "Matrix has no elements"),
            LabError::RaggedRows {
                row,
                expected,
                found,
            } => write!(f, "Row {row} has {found} columns, expected {expected}"),
            LabError::LengthMismatch { expected, found } => {
                write!(f, "Matrix buffer holds {found} elements, expected {expected}")
            }
            LabError::InvalidKey => write!(f, "Key must be an integer"),
            LabError::InvalidDigit => write!(f, "Expected a non-empty string of decimal digits"),
            LabError::InvalidRange => write!(f, "Invalid range"),
            LabError::InvalidNumber => write!(f, "Invalid number in matrix input"),
        }
    }
}

impl core::error::Error for LabError {}

/// Result type for algolab operations
pub type Result<T> = core::result::Result<T, LabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category() {
        assert_eq!(
            LabError::DimensionMismatch {
                left_cols: 2,
                right_rows: 3
            }
            .category(),
            ErrorCategory::Shape
        );
        assert_eq!(LabError::EmptyMatrix.category(), ErrorCategory::Shape);
        assert_eq!(
            LabError::LengthMismatch {
                expected: 4,
                found: 1
            }
            .category(),
            ErrorCategory::Shape
        );
        assert_eq!(LabError::InvalidKey.category(), ErrorCategory::Parse);
        assert_eq!(LabError::InvalidRange.category(), ErrorCategory::Parse);
    }
}
