// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! comelint - Linter for commit messages

use comelint::cli::{exit_code, run, Cli};
use comelint::LintError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Parse CLI arguments
    let cli = match Cli::try_parse_args() {
        Ok(cli) => cli,
        Err((err, code)) => {
            let _ = err.print();
            std::process::exit(code);
        }
    };

    // Set up logging
    setup_logging(cli.debug);
    tracing::debug!("comelint {}", comelint::version::version_string());

    let result = run(cli);
    match &result {
        // Already reported on stdout
        Err(LintError::Rejected(_)) | Ok(()) => {}
        Err(e) => eprintln!("Error: {}", e),
    }

    std::process::exit(exit_code(&result));
}

/// Set up logging/tracing. Logs go to stderr; stdout carries the verdict.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("comelint=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if debug {
        tracing::debug!("Debug logging enabled");
    }
}
