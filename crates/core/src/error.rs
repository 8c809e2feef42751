//! Error types shared by the playground crates.

use thiserror::Error;

/// Main error type for the playground.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A value outside the accepted set, e.g. an unknown coordinate space.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Geometric input with no well-defined result, e.g. looking at the
    /// point the transform already sits on.
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias using the playground's Error type.
pub type Result<T> = std::result::Result<T, Error>;
