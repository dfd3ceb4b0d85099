//! Error types for segmentation and configuration

use thiserror::Error;

/// Error type for tokseg operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The configuration cannot be used for segmentation
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Option name outside the recognized set
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    /// Option value that does not parse for the option's type
    #[error("Invalid value '{value}' for option {option}")]
    InvalidOptionValue {
        /// Canonical name of the option
        option: &'static str,
        /// The rejected value as given
        value: String,
    },
}

/// Result type for tokseg operations
pub type Result<T> = std::result::Result<T, Error>;
