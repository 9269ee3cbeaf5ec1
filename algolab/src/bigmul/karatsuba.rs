//! Karatsuba multiplication
//!
//! Splits both operands at `10^m` with `m = max(digits) / 2` and recovers
//! the cross term from three recursive products. Recursion depth is
//! logarithmic in the digit count.

use algolab_core::constants::{DECIMAL_RADIX, KARATSUBA_BASE};
use num_bigint::BigUint;

/// Multiply two non-negative integers with Karatsuba's algorithm
pub fn multiply_long_karatsuba(x: &BigUint, y: &BigUint) -> BigUint {
    let base = BigUint::from(KARATSUBA_BASE);
    if x < &base || y < &base {
        return x * y;
    }

    let m = decimal_len(x).max(decimal_len(y)) / 2;
    let split = BigUint::from(DECIMAL_RADIX).pow(m as u32);

    let (high1, low1) = (x / &split, x % &split);
    let (high2, low2) = (y / &split, y % &split);

    let z0 = multiply_long_karatsuba(&low1, &low2);
    let z1 = multiply_long_karatsuba(&(&low1 + &high1), &(&low2 + &high2));
    let z2 = multiply_long_karatsuba(&high1, &high2);

    // z1 = z2 + z0 + high1*low2 + low1*high2, so the difference stays unsigned
    let cross = z1 - &z2 - &z0;

    z2 * split.pow(2) + cross * &split + z0
}

/// Number of decimal digits, 1 for zero
pub fn decimal_len(x: &BigUint) -> usize {
    x.to_radix_le(DECIMAL_RADIX).len().max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    #[test]
    fn test_karatsuba_small_operands() {
        let x = BigUint::from(1234u32);
        let y = BigUint::from(5678u32);
        assert_eq!(multiply_long_karatsuba(&x, &y), BigUint::from(7_006_652u32));
    }

    #[test]
    fn test_karatsuba_base_cases() {
        let zero = BigUint::zero();
        let nine = BigUint::from(9u32);
        let big = BigUint::from(123_456u32);
        assert_eq!(multiply_long_karatsuba(&zero, &big), zero);
        assert_eq!(multiply_long_karatsuba(&nine, &big), BigUint::from(1_111_104u32));
        assert_eq!(multiply_long_karatsuba(&big, &nine), BigUint::from(1_111_104u32));
    }

    #[test]
    fn test_karatsuba_uneven_lengths() {
        let x: BigUint = "31415926535897932384626433832795028841971".parse().unwrap();
        let y = BigUint::from(271_828u32);
        assert_eq!(multiply_long_karatsuba(&x, &y), &x * &y);
    }

    #[test]
    fn test_decimal_len() {
        assert_eq!(decimal_len(&BigUint::zero()), 1);
        assert_eq!(decimal_len(&BigUint::from(9u32)), 1);
        assert_eq!(decimal_len(&BigUint::from(10u32)), 2);
        assert_eq!(decimal_len(&BigUint::from(99_999u32)), 5);
    }
}
