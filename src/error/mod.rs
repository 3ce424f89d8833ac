// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for comelint.
//!
//! Rule violations and configuration problems are kept in separate enums:
//! a [`ValidationError`] means the message broke a rule, a [`ConfigError`]
//! means the caller handed us something unusable.

use std::path::PathBuf;
use thiserror::Error;

use crate::rules::Rejection;

/// The main error type for comelint operations.
#[derive(Error, Debug)]
pub enum LintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // The message was rejected and the reason has already been reported
    #[error("Message rejected: {0}")]
    Rejected(Rejection),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid pattern")]
    InvalidPattern { pattern: String, message: String },

    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Failed to serialize configuration: {message}")]
    Serialize { message: String },
}

/// A commit message broke one of the configured rules.
///
/// The `Display` output is the rejection reason shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing message")]
    MissingMessage,

    #[error("too short")]
    TooShort { length: usize, min: usize },

    #[error("too long")]
    TooLong { length: usize, max: usize },

    #[error("multiline prohibited")]
    Multiline { lines: usize },

    #[error("merge prohibited")]
    MergeProhibited,

    #[error("revert prohibited")]
    RevertProhibited,

    #[error("WIP prohibited")]
    WipProhibited,

    #[error("pattern mismatch")]
    PatternMismatch { pattern: String },
}

/// Result type alias for comelint operations.
pub type Result<T> = std::result::Result<T, LintError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| LintError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/comelint.toml"),
        };
        assert!(err.to_string().contains("/path/to/comelint.toml"));
    }

    #[test]
    fn test_invalid_pattern_display_is_reason() {
        let err = ConfigError::InvalidPattern {
            pattern: "(".to_string(),
            message: "unclosed group".to_string(),
        };
        assert_eq!(err.to_string(), "invalid pattern");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::TooLong { length: 19, max: 10 };
        assert_eq!(err.to_string(), "too long");
        assert_eq!(ValidationError::WipProhibited.to_string(), "WIP prohibited");
    }

    #[test]
    fn test_lint_error_from_config_error() {
        let config_err = ConfigError::ParseError {
            message: "expected `=`".to_string(),
        };
        let err: LintError = config_err.into();
        assert!(err.to_string().contains("expected `=`"));
    }

    #[test]
    fn test_result_ext_context() {
        let res: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        let err = res.context("writing output").unwrap_err();
        assert_eq!(err.to_string(), "writing output: boom");
    }
}
