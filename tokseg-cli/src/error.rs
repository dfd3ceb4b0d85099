//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<tokseg_core::Error> for CliError {
    fn from(err: tokseg_core::Error) -> Self {
        CliError::ConfigError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("test.txt".to_string());
        assert_eq!(error.to_string(), "File not found: test.txt");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_from_core() {
        let error: CliError = tokseg_core::Error::UnknownOption("chunkSize".into()).into();
        assert_eq!(
            error.to_string(),
            "Configuration error: Unknown option: chunkSize"
        );

        let error: CliError =
            tokseg_core::Error::InvalidConfiguration("max_tokens must be greater than 0".into())
                .into();
        assert!(error.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_cli_error_through_anyhow() {
        let failure: anyhow::Error = CliError::FileNotFound("x".into()).into();
        assert_eq!(failure.to_string(), "File not found: x");
        assert!(failure.downcast_ref::<CliError>().is_some());
    }
}
