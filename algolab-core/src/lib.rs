#![no_std]

//! algolab core - algorithm laboratory definitions
//!
//! This crate provides the data model, capability traits, error types and
//! input validation shared by the algolab implementations. Nothing here
//! performs I/O.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod constants;
pub mod error;
#[cfg(feature = "alloc")]
pub mod matrix;
pub mod traits;
pub mod validation;

pub use error::*;
#[cfg(feature = "alloc")]
pub use matrix::Matrix;
pub use traits::*;
pub use validation::*;
