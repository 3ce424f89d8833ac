// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{ConfigError, LintError, Result};
use std::path::{Path, PathBuf};

use super::schema::LintConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["comelint.toml", ".comelint.toml", ".config/comelint.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        if let Some(found) = find_in_dir(&current) {
            return Some(found);
        }

        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        if let Some(found) = find_in_dir(&home) {
            return Some(found);
        }
    }

    // XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join("comelint").join("config.toml");
        if path.exists() {
            return Some(path);
        }
    }

    None
}

fn find_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<LintConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(LintConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<LintConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(LintError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        LintError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<LintConfig> {
    toml::from_str(content).map_err(|e| {
        LintError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config, LintConfig::default());
    }

    #[test]
    fn test_parse_custom_config() {
        let toml = r#"
prohibit_merge = true
prohibit_multiline = true
min_length = 10
max_length = 72
pattern = "^(feat|fix|docs)"
"#;
        let config = parse_config(toml).unwrap();
        assert!(config.prohibit_merge);
        assert!(config.prohibit_multiline);
        assert!(!config.prohibit_wip);
        assert_eq!(config.min_length, 10);
        assert_eq!(config.max_length, 72);
        assert_eq!(config.pattern, "^(feat|fix|docs)");
    }

    #[test]
    fn test_parse_invalid_config() {
        let err = parse_config("min_length = \"ten\"").unwrap_err();
        assert!(matches!(err, LintError::Config(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = load_config_from(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, LintError::Config(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_find_config_in_parent_directory() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(temp.path().join(".comelint.toml"), "prohibit_wip = true\n").unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert_eq!(found, temp.path().join(".comelint.toml"));

        let config = load_config_from(&found).unwrap();
        assert!(config.prohibit_wip);
    }

    #[test]
    fn test_config_file_priority() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("comelint.toml"), "").unwrap();
        std::fs::write(temp.path().join(".comelint.toml"), "").unwrap();

        let found = find_config_file_from(temp.path()).unwrap();
        assert_eq!(found, temp.path().join("comelint.toml"));
    }
}
