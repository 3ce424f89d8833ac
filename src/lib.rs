// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! comelint - Linter for commit messages
//!
//! Validates a single commit message against a small set of configurable
//! rules and reports the first rule it breaks.
//!
//! # Rules
//!
//! Rules are checked in this order, stopping at the first failure:
//!
//! - **Emptiness**: the message must not be empty
//! - **Length**: byte length within `min_length..=max_length`
//! - **Multiline**: optionally a single line (one trailing newline is ignored)
//! - **Prefixes**: optionally no leading `merge`, `revert` or `wip` (any case)
//! - **Pattern**: a case-insensitive regular expression the message must match
//!
//! # Example
//!
//! ```
//! use comelint::config::LintConfig;
//! use comelint::rules::{validate, ValidationOutcome};
//!
//! let config = LintConfig {
//!     prohibit_wip: true,
//!     ..Default::default()
//! };
//!
//! assert_eq!(validate("add login endpoint", &config), ValidationOutcome::Accepted);
//!
//! let outcome = validate("WIP: draft", &config);
//! assert_eq!(outcome.rejection().unwrap().reason(), "WIP prohibited");
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod error;
pub mod rules;

// Re-exports for convenience
pub use config::LintConfig;
pub use error::{LintError, Result};
pub use rules::{validate, Rejection, RuleEngine, ValidationOutcome};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of comelint.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Whether the working tree had uncommitted changes at compile time.
    pub const GIT_DIRTY: Option<&str> = option_env!("VERGEN_GIT_DIRTY");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        let dirty = if GIT_DIRTY == Some("true") { "-dirty" } else { "" };
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({}{} {})", VERSION, short_sha(sha), dirty, date)
            }
            (Some(sha), None) => format!("{} ({}{})", VERSION, short_sha(sha), dirty),
            _ => VERSION.to_string(),
        }
    }

    fn short_sha(sha: &str) -> &str {
        &sha[..7.min(sha.len())]
    }

}
