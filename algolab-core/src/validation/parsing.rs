//! Parsing utilities for algolab inputs
//!
//! Pure parsing functions for the textual inputs a front end hands to
//! the core: tree keys, decimal integers, size ranges and matrix pairs.
//! No I/O happens here.

use crate::LabError;
use core::ops::Range;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(feature = "alloc")]
use crate::matrix::Matrix;

/// Parse a range string in the format "start:end" or "start-end"
///
/// The end is exclusive. A reversed range is rejected.
pub fn parse_range(range_str: &str) -> Result<Range<usize>, LabError> {
    let range_str = range_str.trim();
    if range_str.is_empty() {
        return Err(LabError::InvalidRange);
    }

    let separator = range_str
        .find(':')
        .or_else(|| range_str.find('-'))
        .ok_or(LabError::InvalidRange)?;

    let start = parse_usize(&range_str[..separator])?;
    let end = parse_usize(&range_str[separator + 1..])?;

    if start > end {
        return Err(LabError::InvalidRange);
    }

    Ok(start..end)
}

/// Parse a usize from a string with error handling
fn parse_usize(s: &str) -> Result<usize, LabError> {
    if s.is_empty() {
        return Err(LabError::InvalidRange);
    }

    let mut result: usize = 0;

    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return Err(LabError::InvalidRange);
        }

        let digit = (byte - b'0') as usize;

        if result > (usize::MAX - digit) / 10 {
            return Err(LabError::InvalidRange);
        }

        result = result * 10 + digit;
    }

    Ok(result)
}

/// Parse an optionally signed decimal integer, `None` on any defect
fn parse_i64(s: &str) -> Option<i64> {
    let (negative, digits) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    if digits.is_empty() {
        return None;
    }

    let mut value: i64 = 0;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            return None;
        }
        let digit = (byte - b'0') as i64;
        value = value.checked_mul(10)?;
        value = if negative {
            value.checked_sub(digit)?
        } else {
            value.checked_add(digit)?
        };
    }

    Some(value)
}

/// Parse a tree key
///
/// Surrounding whitespace is ignored. Anything that is not a signed
/// 64-bit integer is rejected with `InvalidKey`.
pub fn parse_key(input: &str) -> Result<i64, LabError> {
    parse_i64(input.trim()).ok_or(LabError::InvalidKey)
}

/// Parse a non-negative decimal integer into its digits
///
/// Digits are returned most-significant first. Leading zeros are
/// stripped, keeping one digit for zero.
#[cfg(feature = "alloc")]
pub fn parse_decimal_digits(input: &str) -> Result<Vec<u8>, LabError> {
    let input = input.trim();
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LabError::InvalidDigit);
    }

    let significant = input.trim_start_matches('0');
    if significant.is_empty() {
        return Ok(alloc::vec![0]);
    }

    Ok(significant.bytes().map(|b| b - b'0').collect())
}

/// Parse two matrices separated by a blank line
///
/// Each non-blank line is one row of whitespace-separated integers.
/// Lines before the first blank line belong to `A`, the remaining
/// non-blank lines to `B`. A missing matrix fails with `EmptyMatrix`.
/// Shapes are not checked against each other; that is the multiplier's
/// job.
#[cfg(feature = "alloc")]
pub fn parse_matrix_pair(input: &str) -> Result<(Matrix<i64>, Matrix<i64>), LabError> {
    let mut left: Vec<Vec<i64>> = Vec::new();
    let mut right: Vec<Vec<i64>> = Vec::new();
    let mut in_right = false;

    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !left.is_empty() {
                in_right = true;
            }
            continue;
        }

        let row = line
            .split_whitespace()
            .map(|cell| parse_i64(cell).ok_or(LabError::InvalidNumber))
            .collect::<Result<Vec<_>, _>>()?;

        if in_right {
            right.push(row);
        } else {
            left.push(row);
        }
    }

    if left.is_empty() || right.is_empty() {
        return Err(LabError::EmptyMatrix);
    }
    Ok((Matrix::from_rows(left)?, Matrix::from_rows(right)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("0:10"), Ok(0..10));
        assert_eq!(parse_range("2-9"), Ok(2..9));
        assert_eq!(parse_range(" 4:4 "), Ok(4..4));

        assert_eq!(parse_range(""), Err(LabError::InvalidRange));
        assert_eq!(parse_range("10:5"), Err(LabError::InvalidRange));
        assert_eq!(parse_range("abc:def"), Err(LabError::InvalidRange));
        assert_eq!(parse_range("10"), Err(LabError::InvalidRange));
        assert_eq!(parse_range("10:"), Err(LabError::InvalidRange));
        assert_eq!(parse_range(":10"), Err(LabError::InvalidRange));
    }

    #[test]
    fn test_parse_usize() {
        assert_eq!(parse_usize("0"), Ok(0));
        assert_eq!(parse_usize("123"), Ok(123));
        assert_eq!(parse_usize(""), Err(LabError::InvalidRange));
        assert_eq!(parse_usize("12a"), Err(LabError::InvalidRange));
        assert_eq!(parse_usize("-123"), Err(LabError::InvalidRange));
    }

    #[test]
    fn test_parse_key() {
        assert_eq!(parse_key("42"), Ok(42));
        assert_eq!(parse_key("  -17 "), Ok(-17));
        assert_eq!(parse_key("+5"), Ok(5));
        assert_eq!(parse_key("-9223372036854775808"), Ok(i64::MIN));

        assert_eq!(parse_key(""), Err(LabError::InvalidKey));
        assert_eq!(parse_key("-"), Err(LabError::InvalidKey));
        assert_eq!(parse_key("4.5"), Err(LabError::InvalidKey));
        assert_eq!(parse_key("abc"), Err(LabError::InvalidKey));
        assert_eq!(parse_key("9223372036854775808"), Err(LabError::InvalidKey));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_parse_decimal_digits() {
        assert_eq!(parse_decimal_digits("1234"), Ok(alloc::vec![1, 2, 3, 4]));
        assert_eq!(parse_decimal_digits("007"), Ok(alloc::vec![7]));
        assert_eq!(parse_decimal_digits("000"), Ok(alloc::vec![0]));
        assert_eq!(parse_decimal_digits(""), Err(LabError::InvalidDigit));
        assert_eq!(parse_decimal_digits("-12"), Err(LabError::InvalidDigit));
        assert_eq!(parse_decimal_digits("1e5"), Err(LabError::InvalidDigit));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_parse_matrix_pair() {
        let input = "1\t2\n3\t4\n\n5\t6\n7\t8\n";
        let (a, b) = parse_matrix_pair(input).unwrap();
        assert_eq!(a.to_rows(), alloc::vec![alloc::vec![1, 2], alloc::vec![3, 4]]);
        assert_eq!(b.to_rows(), alloc::vec![alloc::vec![5, 6], alloc::vec![7, 8]]);

        assert_eq!(
            parse_matrix_pair("1 x\n\n1\n").unwrap_err(),
            LabError::InvalidNumber
        );
        assert!(matches!(
            parse_matrix_pair("1 2\n3\n\n1\n").unwrap_err(),
            LabError::RaggedRows { row: 1, .. }
        ));
        assert_eq!(parse_matrix_pair("").unwrap_err(), LabError::EmptyMatrix);
        assert_eq!(
            parse_matrix_pair("
1 2
3 4
").unwrap_err(),
            LabError::EmptyMatrix
        );
    }
}
