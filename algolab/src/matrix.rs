//! Matrix multiplication strategies
//!
//! Every strategy takes two [`Matrix`] operands and returns their product
//! or a [`LabError`](algolab_core::LabError) describing the violated
//! precondition. [`Strategy`] names them so the benchmark harness can
//! iterate over strategies without knowing their signatures.

pub mod classic;
pub mod padded;
pub mod parallel;
pub mod strassen;

use std::str::FromStr;

use algolab_core::{Matrix, MatrixElement, Multiplier};

pub use classic::multiply_classic;
pub use padded::multiply_strassen_padded;
pub use parallel::multiply_parallel;
pub use strassen::multiply_strassen;

/// Selectable matrix multiplication strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    /// i-k-j triple loop
    Classic,
    /// Strassen on a power-of-two padded list-of-lists grid
    Strassen,
    /// Strassen on flat matrices, padding odd sizes at every level
    PaddedStrassen,
    /// Row-parallel classic, the reference multiplier
    Parallel,
}

impl Strategy {
    /// Every strategy, in report order
    pub const fn all() -> [Strategy; 4] {
        [
            Strategy::Classic,
            Strategy::Strassen,
            Strategy::PaddedStrassen,
            Strategy::Parallel,
        ]
    }

    /// Stable name used in reports and on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Classic => "classic",
            Strategy::Strassen => "strassen",
            Strategy::PaddedStrassen => "padded-strassen",
            Strategy::Parallel => "parallel",
        }
    }

    /// Whether the strategy only accepts square operands of equal size
    pub const fn requires_square(self) -> bool {
        matches!(self, Strategy::Strassen | Strategy::PaddedStrassen)
    }

    /// Multiply with this strategy
    pub fn multiply<T: MatrixElement>(
        self,
        a: &Matrix<T>,
        b: &Matrix<T>,
    ) -> algolab_core::Result<Matrix<T>> {
        match self {
            Strategy::Classic => multiply_classic(a, b),
            Strategy::Strassen => multiply_strassen(a, b),
            Strategy::PaddedStrassen => multiply_strassen_padded(a, b),
            Strategy::Parallel => multiply_parallel(a, b),
        }
    }
}

impl<T: MatrixElement> Multiplier<T> for Strategy {
    fn name(&self) -> &'static str {
        Strategy::name(*self)
    }

    fn multiply(&self, a: &Matrix<T>, b: &Matrix<T>) -> algolab_core::Result<Matrix<T>> {
        Strategy::multiply(*self, a, b)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(Strategy::name(*self))
    }
}

impl FromStr for Strategy {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::all()
            .into_iter()
            .find(|strategy| Strategy::name(*strategy).eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| crate::Error::UnknownStrategy(s.to_string()))
    }
}
