//! Error type for the algolab implementation crate

use algolab_core::LabError;

/// Errors raised by algolab implementations and the harness around them
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An algorithm precondition or input parse failed
    #[error(transparent)]
    Lab(#[from] LabError),

    /// Reading an input or configuration file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration or report JSON could not be (de)serialized
    #[cfg(feature = "serde")]
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// A strategy name did not match any known strategy
    #[error("Unknown strategy '{0}'")]
    UnknownStrategy(String),

    /// Input file is not valid UTF-8
    #[error("Input is not valid UTF-8")]
    Encoding(#[from] std::str::Utf8Error),
}

/// Result type for algolab operations
pub type Result<T> = std::result::Result<T, Error>;
