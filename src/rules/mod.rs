// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! This module evaluates a commit message against the configured rules and
//! reports the first rule it violates.

mod builtin;
mod engine;
mod validator;

pub use builtin::{
    apply_builtin_rules, compile_pattern, line_count, BuiltinRule, RuleCheck, RuleContext,
    BUILTIN_RULES,
};
pub use engine::{validate, RuleEngine};
pub use validator::{Rejection, ValidationOutcome};
