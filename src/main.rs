//! patlens - A CLI tool to scan source trees for suspicious code patterns
//!
//! This is the main entry point for the CLI application.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use patlens::cli::{self, exit_codes, Cli};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    // Run the scan and handle exit codes for CI integration
    match cli::run(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}
