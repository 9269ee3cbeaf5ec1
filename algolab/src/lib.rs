//! algolab - an algorithm laboratory
//!
//! Implementations of classic algorithms side by side, with a harness for
//! timing and cross-checking them on identical random inputs.
//!
//! ## Architecture
//!
//! algolab separates definitions from implementations:
//!
//! - **algolab-core**: data model, capability traits, errors and input
//!   validation (no I/O, `no_std`)
//! - **algolab**: the algorithms, plus the workload generator, timing
//!   runner, configuration and file loading around them
//!
//! ## Quick Start
//!
//! ```rust
//! use algolab::{multiply_classic, multiply_strassen, Matrix};
//!
//! fn demo() -> algolab::Result<()> {
//!     let a = Matrix::from_rows(vec![vec![1i64, 2], vec![3, 4]])?;
//!     let b = Matrix::from_rows(vec![vec![5i64, 6], vec![7, 8]])?;
//!
//!     let c = multiply_strassen(&a, &b)?;
//!     assert_eq!(c, multiply_classic(&a, &b)?);
//!     assert_eq!(c.to_rows(), vec![vec![19, 22], vec![43, 50]]);
//!     Ok(())
//! }
//! # demo().unwrap();
//! ```
//!
//! ## Modules
//!
//! - **matrix**: classic, Strassen (list and padded forms), row-parallel
//! - **bigmul**: schoolbook and Karatsuba long multiplication
//! - **linear**: array, linked and ring-buffer stacks and queues
//! - **avl**: AVL tree with rotation counting
//! - **bench**: timing runner and serializable reports

pub use algolab_core::{
    // Data model and traits
    ElementKind, Matrix, MatrixElement, Multiplier, Queue, Stack,
    // Error handling
    ErrorCategory, LabError,
    // Input parsing
    parse_decimal_digits, parse_key, parse_matrix_pair, parse_range,
};
pub use algolab_core::constants;

pub mod avl;
pub mod bench;
pub mod bigmul;
pub mod config;
pub mod error;
pub mod io;
pub mod linear;
pub mod matrix;
pub mod workload;

pub use avl::{AvlNode, AvlTree};
pub use bench::{BenchReport, Group, Measurement, Runner};
pub use bigmul::{multiply_long_classic, multiply_long_karatsuba, BigMulStrategy};
pub use config::LabConfig;
pub use error::{Error, Result};
pub use io::load_matrix_pair;
pub use linear::{ArrayQueue, ArrayStack, LinearKind, LinkedQueue, LinkedStack, RingQueue};
pub use matrix::{
    multiply_classic, multiply_parallel, multiply_strassen, multiply_strassen_padded, Strategy,
};
pub use workload::Workload;
