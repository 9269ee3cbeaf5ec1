//! Schoolbook long multiplication over decimal digits
//!
//! Digit products are accumulated into `result[i + j]` first and carries
//! are normalised in one pass afterwards, so intermediate cells may hold
//! values far above 9 until the final sweep.

use algolab_core::constants::DECIMAL_RADIX;
use num_bigint::BigUint;
use num_traits::Zero;

/// Multiply two non-negative integers digit by digit
pub fn multiply_long_classic(x: &BigUint, y: &BigUint) -> BigUint {
    let a = x.to_radix_le(DECIMAL_RADIX);
    let b = y.to_radix_le(DECIMAL_RADIX);
    let digits = multiply_digits_le(&a, &b);

    // every digit is below the radix, so this cannot fail
    BigUint::from_radix_le(&digits, DECIMAL_RADIX).unwrap_or_else(BigUint::zero)
}

/// Multiply two least-significant-first decimal digit sequences
///
/// Returns the product least-significant first with high-order zeros
/// stripped, keeping a single `0` for a zero product.
pub fn multiply_digits_le(a: &[u8], b: &[u8]) -> Vec<u8> {
    if a.is_empty() || b.is_empty() {
        return vec![0];
    }

    let mut result = vec![0u64; a.len() + b.len()];
    for (i, &digit_a) in a.iter().enumerate() {
        for (j, &digit_b) in b.iter().enumerate() {
            result[i + j] += u64::from(digit_a) * u64::from(digit_b);
        }
    }

    let radix = u64::from(DECIMAL_RADIX);
    for k in 0..result.len() - 1 {
        let carry = result[k] / radix;
        result[k + 1] += carry;
        result[k] %= radix;
    }

    while result.len() > 1 && result.last() == Some(&0) {
        result.pop();
    }

    result.into_iter().map(|d| d as u8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_small() {
        let x = BigUint::from(1234u32);
        let y = BigUint::from(5678u32);
        assert_eq!(multiply_long_classic(&x, &y), BigUint::from(7_006_652u32));
    }

    #[test]
    fn test_classic_zero() {
        let zero = BigUint::zero();
        let x = BigUint::from(98_765u32);
        assert_eq!(multiply_long_classic(&zero, &x), BigUint::zero());
        assert_eq!(multiply_long_classic(&x, &zero), BigUint::zero());
        assert_eq!(multiply_digits_le(&[0], &[0, 0, 1]), vec![0]);
    }

    #[test]
    fn test_batched_carry() {
        // 99 * 99 = 9801, cell 1 accumulates 81 + 81 before carrying
        assert_eq!(multiply_digits_le(&[9, 9], &[9, 9]), vec![1, 0, 8, 9]);
        assert_eq!(multiply_digits_le(&[], &[1]), vec![0]);
    }

    #[test]
    fn test_classic_large() {
        let x: BigUint = "123456789012345678901234567890".parse().unwrap();
        let y: BigUint = "987654321098765432109876543210".parse().unwrap();
        assert_eq!(multiply_long_classic(&x, &y), &x * &y);
    }
}
