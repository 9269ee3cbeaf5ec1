//! Input validation for algolab
//!
//! Pure validation and parsing functions with no I/O dependencies.

pub mod parsing;
pub mod shape;

pub use parsing::{parse_key, parse_range};
#[cfg(feature = "alloc")]
pub use parsing::{parse_decimal_digits, parse_matrix_pair};
pub use shape::{
    next_even, next_power_of_two, strassen_depth, validate_non_empty, validate_product_shape,
    validate_square_pair,
};
