// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit message validation.

use crate::config::LintConfig;
use crate::error::ConfigError;
use regex::Regex;

use super::builtin::{apply_builtin_rules, compile_pattern, RuleContext};
use super::validator::ValidationOutcome;

/// Rule engine for validating commit messages.
///
/// The custom pattern is compiled when the engine is built. A pattern that
/// fails to compile is kept as an error and reported when the pattern rule
/// is reached, so earlier rules still take precedence.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    config: LintConfig,
    pattern: Result<Regex, ConfigError>,
}

impl RuleEngine {
    /// Create a new rule engine with the given configuration.
    pub fn new(config: LintConfig) -> Self {
        let pattern = compile_pattern(&config.pattern);
        if let Err(ref err) = pattern {
            tracing::debug!(pattern = %config.pattern, error = ?err, "custom pattern does not compile");
        }

        Self { config, pattern }
    }

    /// The configuration this engine validates against.
    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Validate a commit message.
    pub fn validate(&self, message: &str) -> ValidationOutcome {
        let ctx = RuleContext {
            config: &self.config,
            pattern: &self.pattern,
        };

        match apply_builtin_rules(message, &ctx) {
            Some(rejection) => {
                tracing::debug!(code = rejection.code(), "message rejected");
                ValidationOutcome::Rejected(rejection)
            }
            None => {
                tracing::debug!("message accepted");
                ValidationOutcome::Accepted
            }
        }
    }
}

/// Validate a single message against a configuration.
pub fn validate(message: &str, config: &LintConfig) -> ValidationOutcome {
    RuleEngine::new(config.clone()).validate(message)
}
