// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command execution.

use crate::config::LintConfig;
use crate::error::{LintError, Result, ResultExt};
use crate::rules::{RuleEngine, ValidationOutcome};
use std::io::Write;

use super::args::Cli;

/// Run the CLI with the given arguments.
///
/// Returns `Err(LintError::Rejected(_))` when the message was rejected; the
/// reason has already been printed by then.
pub fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;

    if cli.print_config {
        let rendered = config.to_toml()?;
        std::io::stdout()
            .write_all(rendered.as_bytes())
            .context("writing configuration")?;
        return Ok(());
    }

    let engine = RuleEngine::new(config);
    tracing::debug!("Effective configuration: {:?}", engine.config());
    let outcome = engine.validate(cli.message());
    outcome.print(cli.format);

    match outcome {
        ValidationOutcome::Accepted => Ok(()),
        ValidationOutcome::Rejected(rejection) => Err(LintError::Rejected(rejection)),
    }
}

/// Build the configuration: defaults, then the config file, then flags.
pub fn resolve_config(cli: &Cli) -> Result<LintConfig> {
    let base = if cli.no_config {
        LintConfig::default()
    } else if let Some(config_path) = &cli.config {
        LintConfig::load_from(config_path)?
    } else {
        LintConfig::load()?
    };

    Ok(base.with_overrides(&cli.overrides()))
}

/// Exit status for a finished run.
pub fn exit_code(result: &Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_config_from_file_and_flags() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("comelint.toml");
        std::fs::write(&path, "prohibit_merge = true\nmax_length = 50\n").unwrap();

        let cli = Cli::parse_from([
            "comelint".to_string(),
            "--config".to_string(),
            path.display().to_string(),
            "--max-length".to_string(),
            "30".to_string(),
            "msg".to_string(),
        ]);
        let config = resolve_config(&cli).unwrap();
        assert!(config.prohibit_merge);
        assert_eq!(config.max_length, 30);
    }

    #[test]
    fn test_resolve_config_no_config() {
        let cli = Cli::parse_from(["comelint", "--no-config", "--no-revert", "msg"]);
        let config = resolve_config(&cli).unwrap();
        assert!(config.prohibit_revert);
        assert_eq!(config.min_length, 1);
    }

    #[test]
    fn test_no_config_ignores_config_path() {
        let cli = Cli::parse_from([
            "comelint",
            "--config",
            "/definitely/not/here.toml",
            "--no-config",
            "--no-wip",
            "msg",
        ]);
        let config = resolve_config(&cli).unwrap();
        assert!(config.prohibit_wip);
        assert!(!config.prohibit_merge);
    }

    #[test]
    fn test_resolve_config_missing_file() {
        let cli = Cli::parse_from(["comelint", "--config", "/definitely/not/here.toml", "msg"]);
        assert!(resolve_config(&cli).is_err());
    }

    #[test]
    fn test_run_rejects() {
        let cli = Cli::parse_from(["comelint", "--no-config", "--no-wip", "WIP: draft"]);
        let result = run(cli);
        assert_eq!(exit_code(&result), 1);
        match result {
            Err(LintError::Rejected(rejection)) => assert_eq!(rejection.reason(), "WIP prohibited"),
            other => panic!("Expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_run_accepts() {
        let cli = Cli::parse_from(["comelint", "--no-config", "add login endpoint"]);
        let result = run(cli);
        assert!(result.is_ok());
        assert_eq!(exit_code(&result), 0);
    }
}
