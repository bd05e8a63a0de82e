//! Error types for bindep operations.
//!
//! This module defines [`BindepError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A missing requirements file is an expected outcome; commands turn
//!   [`BindepError::RequirementsNotFound`] into a message and exit code
//! - Rule violations are data, never errors
//! - Use `anyhow::Error` (via `BindepError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for bindep operations.
#[derive(Debug, Error)]
pub enum BindepError {
    /// Requirements file not found at expected location.
    #[error("No {path} file found.")]
    RequirementsNotFound { path: PathBuf },

    /// A line of the requirements file could not be parsed.
    #[error("Failed to parse {path} line {line}: {message}")]
    ParseError {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// No package backend is known for the running platform.
    #[error("Unsupported platform '{platform}': cannot query installed packages")]
    UnsupportedPlatform { platform: String },

    /// A package query command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for bindep operations.
pub type Result<T> = std::result::Result<T, BindepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirements_not_found_names_the_file() {
        let err = BindepError::RequirementsNotFound {
            path: PathBuf::from("other-requirements.txt"),
        };
        assert_eq!(err.to_string(), "No other-requirements.txt file found.");
    }

    #[test]
    fn parse_error_displays_path_line_and_message() {
        let err = BindepError::ParseError {
            path: PathBuf::from("/src/other-requirements.txt"),
            line: 3,
            message: "unterminated profile selector".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/src/other-requirements.txt"));
        assert!(msg.contains("line 3"));
        assert!(msg.contains("unterminated profile selector"));
    }

    #[test]
    fn unsupported_platform_displays_platform() {
        let err = BindepError::UnsupportedPlatform {
            platform: "haiku".into(),
        };
        assert!(err.to_string().contains("haiku"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = BindepError::CommandFailed {
            command: "dpkg-query -W curl".into(),
            code: Some(2),
        };
        let msg = err.to_string();
        assert!(msg.contains("dpkg-query -W curl"));
        assert!(msg.contains("2"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: BindepError = io_err.into();
        assert!(matches!(err, BindepError::Io(_)));
    }
}
