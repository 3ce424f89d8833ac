// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation outcome types.

use crate::cli::args::OutputFormat;
use crate::error::{ConfigError, ValidationError};
use console::style;
use std::fmt;

/// Why a message was not accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The message broke a configured rule.
    Violation(ValidationError),
    /// The configuration itself is unusable (e.g. the pattern does not compile).
    Misconfigured(ConfigError),
}

impl Rejection {
    /// Stable code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::Violation(err) => match err {
                ValidationError::MissingMessage => "missing-message",
                ValidationError::TooShort { .. } => "min-length",
                ValidationError::TooLong { .. } => "max-length",
                ValidationError::Multiline { .. } => "no-multiline",
                ValidationError::MergeProhibited => "no-merge",
                ValidationError::RevertProhibited => "no-revert",
                ValidationError::WipProhibited => "no-wip",
                ValidationError::PatternMismatch { .. } => "pattern-mismatch",
            },
            Rejection::Misconfigured(ConfigError::InvalidPattern { .. }) => "invalid-pattern",
            Rejection::Misconfigured(_) => "invalid-config",
        }
    }

    /// Human-readable rejection reason.
    pub fn reason(&self) -> String {
        self.to_string()
    }

    /// Whether the rejection stems from the configuration rather than the message.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Rejection::Misconfigured(_))
    }

    /// Kind label used in machine-readable output.
    pub fn kind(&self) -> &'static str {
        if self.is_configuration_error() {
            "configuration-error"
        } else {
            "rule-violation"
        }
    }

    /// Optional hint for fixing the problem.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Rejection::Violation(err) => match err {
                ValidationError::MissingMessage => {
                    Some("Pass the commit message as the first argument".to_string())
                }
                ValidationError::TooShort { length, min } => Some(format!(
                    "Message is {} characters, at least {} required",
                    length, min
                )),
                ValidationError::TooLong { length, max } => Some(format!(
                    "Message is {} characters, shorten it to {} or less",
                    length, max
                )),
                ValidationError::Multiline { lines } => Some(format!(
                    "Message spans {} lines, keep it on a single line",
                    lines
                )),
                ValidationError::PatternMismatch { pattern } => {
                    Some(format!("Message must match /{}/ (case-insensitive)", pattern))
                }
                ValidationError::MergeProhibited
                | ValidationError::RevertProhibited
                | ValidationError::WipProhibited => None,
            },
            Rejection::Misconfigured(ConfigError::InvalidPattern { pattern, message }) => {
                Some(format!("Fix the pattern /{}/: {}", pattern, message))
            }
            Rejection::Misconfigured(_) => None,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Violation(err) => write!(f, "{}", err),
            Rejection::Misconfigured(err) => write!(f, "{}", err),
        }
    }
}

impl From<ValidationError> for Rejection {
    fn from(err: ValidationError) -> Self {
        Rejection::Violation(err)
    }
}

impl From<ConfigError> for Rejection {
    fn from(err: ConfigError) -> Self {
        Rejection::Misconfigured(err)
    }
}

/// Result of validating a commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted,
    Rejected(Rejection),
}

impl ValidationOutcome {
    /// Check if the message was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted)
    }

    /// The rejection, if any.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            ValidationOutcome::Accepted => None,
            ValidationOutcome::Rejected(rejection) => Some(rejection),
        }
    }

    /// Print the outcome to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => self.print_text(),
        }
    }

    /// Print in text format. Accepted messages print nothing.
    fn print_text(&self) {
        if let ValidationOutcome::Rejected(rejection) = self {
            println!("{}", style(rejection.reason()).red());
        }
    }

    /// Print in JSON format.
    fn print_json(&self) {
        println!(
            "{}",
            serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
        );
    }

    /// Machine-readable representation.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            ValidationOutcome::Accepted => serde_json::json!({ "valid": true }),
            ValidationOutcome::Rejected(rejection) => serde_json::json!({
                "valid": false,
                "kind": rejection.kind(),
                "code": rejection.code(),
                "reason": rejection.reason(),
                "suggestion": rejection.suggestion(),
            }),
        }
    }
}
