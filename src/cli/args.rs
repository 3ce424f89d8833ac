// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::ConfigOverrides;

/// comelint - Linter for commit messages
///
/// Checks a single commit message against length, multiline, prefix and
/// pattern rules. Exits with status 1 and prints the reason when the
/// message is rejected.
#[derive(Parser, Debug)]
#[command(name = "comelint")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Linter for commit messages", long_about = None)]
pub struct Cli {
    /// The commit message to validate
    pub message: Option<String>,

    /// Prohibit MERGE messages
    #[arg(long)]
    pub no_merge: bool,

    /// Prohibit REVERT messages
    #[arg(long)]
    pub no_revert: bool,

    /// Prohibit WIP messages
    #[arg(long)]
    pub no_wip: bool,

    /// Prohibit multiline messages
    #[arg(long)]
    pub no_multiline: bool,

    /// Minimum length of messages [default: 1]
    #[arg(long, value_name = "N")]
    pub min_length: Option<usize>,

    /// Maximum length of messages [default: unlimited]
    #[arg(long, value_name = "N")]
    pub max_length: Option<usize>,

    /// Case-insensitive regular expression messages must match [default: .*]
    #[arg(long, value_name = "REGEXP")]
    pub regexp: Option<String>,

    /// Path to configuration file
    #[arg(short, long, env = "COMELINT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Ignore configuration files (including --config) and use built-in defaults plus flags
    #[arg(long)]
    pub no_config: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

impl Cli {
    /// Parse arguments from the process, returning the exit status for
    /// arguments clap rejects. Help and version output exit 0, every other
    /// argument error exits 1 like a rejected message.
    pub fn try_parse_args() -> Result<Self, (clap::Error, i32)> {
        Self::try_parse().map_err(|err| {
            let code = parse_error_exit_code(&err);
            (err, code)
        })
    }

    /// The message to validate. A missing argument is treated as empty.
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }

    /// Configuration values supplied on the command line.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            prohibit_merge: self.no_merge,
            prohibit_revert: self.no_revert,
            prohibit_wip: self.no_wip,
            prohibit_multiline: self.no_multiline,
            min_length: self.min_length,
            max_length: self.max_length,
            pattern: self.regexp.clone(),
        }
    }
}

/// Exit status for an argument parsing error.
pub fn parse_error_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}
