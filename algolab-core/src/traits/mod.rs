//! Abstract interfaces shared by algolab implementations
//!
//! Traits are pure interfaces - no concrete implementations.

pub mod element;
pub mod linear;
#[cfg(feature = "alloc")]
pub mod matrix;

pub use element::{ElementKind, MatrixElement};
pub use linear::{Queue, Stack};
#[cfg(feature = "alloc")]
pub use matrix::Multiplier;
