// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the rule configuration that can be loaded from comelint.toml
//! and overridden from the command line.

use serde::{Deserialize, Serialize};

use super::default::{DEFAULT_MIN_LENGTH, DEFAULT_PATTERN, UNLIMITED_LENGTH};

/// The rule configuration for one validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Reject messages starting with "merge".
    pub prohibit_merge: bool,

    /// Reject messages starting with "revert".
    pub prohibit_revert: bool,

    /// Reject messages starting with "wip".
    pub prohibit_wip: bool,

    /// Reject messages spanning more than one line.
    pub prohibit_multiline: bool,

    /// Minimum message length in bytes.
    pub min_length: usize,

    /// Maximum message length in bytes.
    pub max_length: usize,

    /// Case-insensitive regular expression the message must match.
    pub pattern: String,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            prohibit_merge: false,
            prohibit_revert: false,
            prohibit_wip: false,
            prohibit_multiline: false,
            min_length: DEFAULT_MIN_LENGTH,
            max_length: UNLIMITED_LENGTH,
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }
}

impl LintConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Apply command-line overrides on top of this configuration.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        // Flags can only switch a prohibition on.
        self.prohibit_merge |= overrides.prohibit_merge;
        self.prohibit_revert |= overrides.prohibit_revert;
        self.prohibit_wip |= overrides.prohibit_wip;
        self.prohibit_multiline |= overrides.prohibit_multiline;

        if let Some(min) = overrides.min_length {
            self.min_length = min;
        }
        if let Some(max) = overrides.max_length {
            self.max_length = max;
        }
        if let Some(ref pattern) = overrides.pattern {
            self.pattern = pattern.clone();
        }

        self
    }

    /// Serialize the configuration as TOML.
    pub fn to_toml(&self) -> crate::error::Result<String> {
        toml::to_string(self).map_err(|e| {
            crate::error::LintError::Config(crate::error::ConfigError::Serialize {
                message: e.to_string(),
            })
        })
    }
}

/// Values supplied on the command line, layered over the file configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub prohibit_merge: bool,
    pub prohibit_revert: bool,
    pub prohibit_wip: bool,
    pub prohibit_multiline: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<String>,
}
