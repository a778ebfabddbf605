//! Error types for the exercise form analyzer.
//!
//! The analysis core itself never fails: degenerate geometry, malformed
//! landmarks and unknown exercises all degrade to neutral values. These
//! errors belong to the edges of the crate (configuration, frame parsing
//! and I/O).

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Exercise selector did not name a supported exercise
    #[error("Unknown exercise: {0}")]
    UnknownExercise(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A frame record in an input stream could not be parsed
    #[error("Frame parse error on line {line}: {message}")]
    FrameParse {
        /// 1-based line number in the input stream
        line: usize,
        /// Parser message
        message: String,
    },

    /// Result or summary could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic I/O error with description
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
