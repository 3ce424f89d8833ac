// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for comelint.
//!
//! This module handles loading configuration from comelint.toml and layering
//! command-line overrides on top of it.

pub mod default;
mod loader;
mod schema;

pub use default::{DEFAULT_MIN_LENGTH, DEFAULT_PATTERN, UNLIMITED_LENGTH};
pub use loader::{find_config_file, find_config_file_from, load_config, load_config_from, parse_config};
pub use schema::*;
