// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for comelint.
//!
//! This module handles command-line argument parsing and turns a validation
//! outcome into output.

pub mod args;
mod dispatch;

pub use args::{parse_error_exit_code, Cli, OutputFormat};
pub use dispatch::{exit_code, resolve_config, run};
