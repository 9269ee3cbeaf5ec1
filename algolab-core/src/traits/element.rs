//! Numeric element constraints for matrix strategies
//!
//! This module defines the trait that constrains what types can be
//! multiplied by the matrix strategies.

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Mul, Sub};

/// Element kinds supported by the matrix strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ElementKind {
    /// 32-bit floating point
    F32 = 0,
    /// 64-bit floating point
    F64 = 1,
    /// 32-bit signed integer
    I32 = 2,
    /// 64-bit signed integer
    I64 = 3,
}

impl ElementKind {
    /// Whether the kind uses exact integer arithmetic
    pub const fn is_exact(self) -> bool {
        matches!(self, ElementKind::I32 | ElementKind::I64)
    }
}

impl core::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ElementKind::F32 => write!(f, "f32"),
            ElementKind::F64 => write!(f, "f64"),
            ElementKind::I32 => write!(f, "i32"),
            ElementKind::I64 => write!(f, "i64"),
        }
    }
}

/// Trait for types that can be stored in a [`Matrix`](crate::Matrix)
///
/// Strassen combines quadrants with both addition and subtraction, so
/// every element type must be closed under `+`, `-` and `*`. Unsigned
/// types are deliberately not implemented.
pub trait MatrixElement:
    Copy
    + PartialEq
    + Debug
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + AddAssign
{
    /// Get the element kind for this type
    fn kind() -> ElementKind;

    /// Additive identity, used for zero-initialised results and padding
    fn zero() -> Self;

    /// Convert from f64 for generic construction
    ///
    /// Workload generators draw integers and convert them through this
    /// so the same generator serves every element type.
    fn from_f64(value: f64) -> Self;

    /// Convert to f64 for generic reporting
    fn to_f64(self) -> f64;
}

impl MatrixElement for f32 {
    fn kind() -> ElementKind {
        ElementKind::F32
    }

    fn zero() -> Self {
        0.0
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl MatrixElement for f64 {
    fn kind() -> ElementKind {
        ElementKind::F64
    }

    fn zero() -> Self {
        0.0
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }
}

impl MatrixElement for i32 {
    fn kind() -> ElementKind {
        ElementKind::I32
    }

    fn zero() -> Self {
        0
    }

    fn from_f64(value: f64) -> Self {
        value as i32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl MatrixElement for i64 {
    fn kind() -> ElementKind {
        ElementKind::I64
    }

    fn zero() -> Self {
        0
    }

    fn from_f64(value: f64) -> Self {
        value as i64
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_kinds() {
        assert_eq!(<i64 as MatrixElement>::kind(), ElementKind::I64);
        assert!(!<f32 as MatrixElement>::kind().is_exact());
        assert!(ElementKind::I32.is_exact());
        assert!(!ElementKind::F64.is_exact());
    }

    #[test]
    fn test_from_f64_truncates_integers() {
        assert_eq!(<i32 as MatrixElement>::from_f64(7.9), 7);
        assert_eq!(<i64 as MatrixElement>::zero(), 0);
        assert_eq!(<f64 as MatrixElement>::from_f64(2.5).to_f64(), 2.5);
    }
}
