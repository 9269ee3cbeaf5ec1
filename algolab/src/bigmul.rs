//! Long-integer multiplication
//!
//! Both algorithms return the exact product of two non-negative
//! arbitrary-precision integers; they differ only in cost.

pub mod karatsuba;
pub mod schoolbook;

use std::str::FromStr;

use algolab_core::parse_decimal_digits;
use algolab_core::constants::DECIMAL_RADIX;
use num_bigint::BigUint;

pub use karatsuba::multiply_long_karatsuba;
pub use schoolbook::multiply_long_classic;

/// Selectable long multiplication algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum BigMulStrategy {
    /// Digit-by-digit with batched carries, O(n·m)
    Schoolbook,
    /// Three-product divide and conquer, O(n^1.585)
    Karatsuba,
}

impl BigMulStrategy {
    /// Every algorithm, in report order
    pub const fn all() -> [BigMulStrategy; 2] {
        [BigMulStrategy::Schoolbook, BigMulStrategy::Karatsuba]
    }

    /// Stable name used in reports and on the command line
    pub const fn name(self) -> &'static str {
        match self {
            BigMulStrategy::Schoolbook => "schoolbook",
            BigMulStrategy::Karatsuba => "karatsuba",
        }
    }

    /// Multiply with this algorithm
    pub fn multiply(self, x: &BigUint, y: &BigUint) -> BigUint {
        match self {
            BigMulStrategy::Schoolbook => multiply_long_classic(x, y),
            BigMulStrategy::Karatsuba => multiply_long_karatsuba(x, y),
        }
    }

    /// Multiply two decimal strings, returning the decimal product
    ///
    /// Inputs must be non-empty runs of ASCII digits; anything else fails
    /// with `InvalidDigit`.
    pub fn multiply_decimal(self, x: &str, y: &str) -> algolab_core::Result<String> {
        let x = to_biguint(&parse_decimal_digits(x)?);
        let y = to_biguint(&parse_decimal_digits(y)?);
        Ok(self.multiply(&x, &y).to_str_radix(DECIMAL_RADIX))
    }
}

fn to_biguint(digits_be: &[u8]) -> BigUint {
    BigUint::from_radix_be(digits_be, DECIMAL_RADIX).unwrap_or_default()
}

impl std::fmt::Display for BigMulStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(BigMulStrategy::name(*self))
    }
}

impl FromStr for BigMulStrategy {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigMulStrategy::all()
            .into_iter()
            .find(|strategy| BigMulStrategy::name(*strategy).eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| crate::Error::UnknownStrategy(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algolab_core::LabError;

    #[test]
    fn test_multiply_decimal() {
        for strategy in BigMulStrategy::all() {
            assert_eq!(
                strategy.multiply_decimal("1234", "5678").unwrap(),
                "7006652"
            );
            assert_eq!(strategy.multiply_decimal("0", "5678").unwrap(), "0");
            assert_eq!(strategy.multiply_decimal("0012", "003").unwrap(), "36");
            assert_eq!(
                strategy.multiply_decimal("12a", "3"),
                Err(LabError::InvalidDigit)
            );
        }
    }

    #[test]
    fn test_strategies_agree() {
        let x: BigUint = "9".repeat(57).parse().unwrap();
        let y: BigUint = "1234567".repeat(5).parse().unwrap();
        let expected = &x * &y;
        for strategy in BigMulStrategy::all() {
            assert_eq!(strategy.multiply(&x, &y), expected, "{strategy}");
        }
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!(
            "karatsuba".parse::<BigMulStrategy>().unwrap(),
            BigMulStrategy::Karatsuba
        );
        assert!("toom-3".parse::<BigMulStrategy>().is_err());
    }
}
