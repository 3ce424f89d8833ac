// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.
//!
//! Rules run in the order of [`BUILTIN_RULES`] and evaluation stops at the
//! first one that rejects the message.

use crate::config::LintConfig;
use crate::error::{ConfigError, ValidationError};
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

use super::validator::Rejection;

lazy_static! {
    static ref MERGE_REGEX: Regex = Regex::new(r"(?i)^merge").unwrap();
    static ref REVERT_REGEX: Regex = Regex::new(r"(?i)^revert").unwrap();
    static ref WIP_REGEX: Regex = Regex::new(r"(?i)^wip").unwrap();
}

/// Everything a rule may look at besides the message itself.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub config: &'a LintConfig,
    /// The custom pattern, compiled once per engine.
    pub pattern: &'a Result<Regex, ConfigError>,
}

/// A rule predicate: `None` when the message passes.
pub type RuleCheck = fn(&str, &RuleContext<'_>) -> Option<Rejection>;

/// A named entry in the rule table.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinRule {
    pub name: &'static str,
    pub check: RuleCheck,
}

/// The fixed rule sequence.
pub const BUILTIN_RULES: &[BuiltinRule] = &[
    BuiltinRule {
        name: "missing-message",
        check: check_missing_message,
    },
    BuiltinRule {
        name: "min-length",
        check: check_min_length,
    },
    BuiltinRule {
        name: "max-length",
        check: check_max_length,
    },
    BuiltinRule {
        name: "no-multiline",
        check: check_multiline,
    },
    BuiltinRule {
        name: "no-merge",
        check: check_merge,
    },
    BuiltinRule {
        name: "no-revert",
        check: check_revert,
    },
    BuiltinRule {
        name: "no-wip",
        check: check_wip,
    },
    BuiltinRule {
        name: "pattern",
        check: check_pattern,
    },
];

/// Apply the built-in rules in order and return the first rejection.
pub fn apply_builtin_rules(message: &str, ctx: &RuleContext<'_>) -> Option<Rejection> {
    BUILTIN_RULES.iter().find_map(|rule| {
        let rejection = (rule.check)(message, ctx);
        tracing::debug!(rule = rule.name, passed = rejection.is_none(), "rule evaluated");
        rejection
    })
}

/// Compile the custom pattern case-insensitively.
pub fn compile_pattern(pattern: &str) -> Result<Regex, ConfigError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })
}

/// Number of lines, ignoring a single trailing newline.
pub fn line_count(message: &str) -> usize {
    message
        .strip_suffix('\n')
        .unwrap_or(message)
        .split('\n')
        .count()
}

fn check_missing_message(message: &str, _ctx: &RuleContext<'_>) -> Option<Rejection> {
    message
        .is_empty()
        .then(|| ValidationError::MissingMessage.into())
}

fn check_min_length(message: &str, ctx: &RuleContext<'_>) -> Option<Rejection> {
    let min = ctx.config.min_length;
    let length = message.len();

    (length < min).then(|| ValidationError::TooShort { length, min }.into())
}

fn check_max_length(message: &str, ctx: &RuleContext<'_>) -> Option<Rejection> {
    let max = ctx.config.max_length;
    let length = message.len();

    (length > max).then(|| ValidationError::TooLong { length, max }.into())
}

fn check_multiline(message: &str, ctx: &RuleContext<'_>) -> Option<Rejection> {
    if !ctx.config.prohibit_multiline {
        return None;
    }

    let lines = line_count(message);
    (lines > 1).then(|| ValidationError::Multiline { lines }.into())
}

fn check_merge(message: &str, ctx: &RuleContext<'_>) -> Option<Rejection> {
    (ctx.config.prohibit_merge && MERGE_REGEX.is_match(message))
        .then(|| ValidationError::MergeProhibited.into())
}

fn check_revert(message: &str, ctx: &RuleContext<'_>) -> Option<Rejection> {
    (ctx.config.prohibit_revert && REVERT_REGEX.is_match(message))
        .then(|| ValidationError::RevertProhibited.into())
}

fn check_wip(message: &str, ctx: &RuleContext<'_>) -> Option<Rejection> {
    (ctx.config.prohibit_wip && WIP_REGEX.is_match(message))
        .then(|| ValidationError::WipProhibited.into())
}

fn check_pattern(message: &str, ctx: &RuleContext<'_>) -> Option<Rejection> {
    match ctx.pattern {
        Err(err) => Some(err.clone().into()),
        Ok(regex) if !regex.is_match(message) => Some(
            ValidationError::PatternMismatch {
                pattern: ctx.config.pattern.clone(),
            }
            .into(),
        ),
        Ok(_) => None,
    }
}
