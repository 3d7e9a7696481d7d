//! # CLI Module
//!
//! This module defines the command-line interface for patlens using `clap`.
//!
//! ## Options
//!
//! | Option | Description |
//! |--------|-------------|
//! | `<TARGET>` | File or directory to scan |
//! | `-l, --lang <LANG>` | Restrict the scan to one language's extensions |
//! | `-o, --output <FORMAT>` | Report format: `text` (default) or `json` |
//! | `-e, --exclude <REGEX>` | Skip files whose relative path matches |
//! | `-v, --verbose` | Increase verbosity level (use multiple times: -v, -vv, -vvv) |
//! | `--no-color` | Disable colored output |
//!
//! ## Submodules
//!
//! - [`exit_codes`] - Standardized exit codes
//! - [`output`] - Report output formatters (JSON, Terminal)
//!
//! ## Examples
//!
//! ```bash
//! # Scan the current directory
//! patlens .
//!
//! # Scan only Python sources, machine-readable output
//! patlens ./src --lang python --output json
//!
//! # Skip test fixtures
//! patlens . --exclude '^tests/fixtures/'
//! ```

pub mod exit_codes;
pub mod output;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::error::Result;
use crate::rules::ScanEngine;
use crate::scanner::Scanner;
use crate::utils::Language;
use output::{JsonOutput, ReportRenderer, TerminalOutput};

/// Report format for scan output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored report
    Text,
    /// Machine-readable JSON report
    Json,
}

/// patlens - Scan source trees for suspicious code patterns
#[derive(Parser, Debug)]
#[command(name = "patlens")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File or directory to scan
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Restrict the scan to one language's source files
    #[arg(short, long, value_enum, value_name = "LANG")]
    pub lang: Option<Language>,

    /// Report format
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = OutputFormat::Text,
        value_name = "FORMAT"
    )]
    pub output: OutputFormat,

    /// Skip files whose path relative to the target matches this regex
    #[arg(short, long, value_name = "REGEX")]
    pub exclude: Option<String>,

    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Run a scan for the parsed options and print the report to stdout.
///
/// The exit code reflects only whether the scan ran: findings are reported,
/// never turned into a failure status.
pub fn run(cli: &Cli) -> Result<i32> {
    let scanner = Scanner::new(&cli.target)
        .with_language(cli.lang)
        .with_exclude(cli.exclude.as_deref())?;

    let engine = ScanEngine::new();
    let results = engine.run(&scanner)?;

    let renderer: Box<dyn ReportRenderer> = match cli.output {
        OutputFormat::Text => Box::new(TerminalOutput::new()),
        OutputFormat::Json => Box::new(JsonOutput::new()),
    };
    let report = renderer.render_report(&results)?;

    print!("{report}");
    if !report.ends_with('\n') {
        println!();
    }

    Ok(exit_codes::SUCCESS)
}
