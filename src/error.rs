//! Custom error types for multistep
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for multistep operations
#[derive(Error, Debug)]
pub enum MultiStepError {
    /// A wizard was constructed without any steps
    #[error("Wizard has no steps configured")]
    NoSteps,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A style slot in the configuration could not be parsed
    #[error("Invalid style: {0}")]
    InvalidStyle(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl MultiStepError {
    /// Create an invalid style error for a named slot
    pub fn invalid_style(slot: &str, reason: impl std::fmt::Display) -> Self {
        Self::InvalidStyle(format!("{}: {}", slot, reason))
    }

    /// Check if this is the empty wizard error
    pub fn is_no_steps(&self) -> bool {
        matches!(self, Self::NoSteps)
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for MultiStepError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MultiStepError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for MultiStepError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for multistep operations
pub type MultiStepResult<T> = Result<T, MultiStepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MultiStepError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_no_steps_error() {
        let err = MultiStepError::NoSteps;
        assert_eq!(err.to_string(), "Wizard has no steps configured");
        assert!(err.is_no_steps());
    }

    #[test]
    fn test_invalid_style_error() {
        let err = MultiStepError::invalid_style("doing", "unknown color 'blurple'");
        assert_eq!(err.to_string(), "Invalid style: doing: unknown color 'blurple'");
        assert!(!err.is_no_steps());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MultiStepError = io_err.into();
        assert!(matches!(err, MultiStepError::Io(_)));
    }
}
