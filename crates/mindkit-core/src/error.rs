//! Error handling for MindKit.
//!
//! Degenerate geometry (empty content, zero-size panel) is deliberately not
//! an error: the overview handles it through the invalid-scale sentinel.
//! Errors here cover the surfaces that can genuinely fail — configuration
//! persistence and color parsing.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Configuration error type.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read or written
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration content was not valid JSON
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A color value was not a recognized hex triplet
    #[error("invalid color '{value}': expected #rrggbb")]
    InvalidColor {
        /// The rejected color string.
        value: String,
    },
}

/// Top-level error type for MindKit operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Generic error with a message
    #[error("{message}")]
    Other {
        /// The error message.
        message: String,
    },
}

/// Result type alias using the MindKit [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
