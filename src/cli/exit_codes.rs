//! Exit codes for the CLI
//!
//! Standard exit codes used by the patlens CLI for CI/CD integration.
//!
//! # Exit Code Reference
//!
//! | Code | Constant | Meaning | Example |
//! |------|----------|---------|---------|
//! | 0 | `SUCCESS` | Scan completed | Report printed, with or without findings |
//! | 1 | `ERROR` | Runtime error | Target not found, invalid exclude pattern |
//! | 2 | `INVALID_ARGS` | Invalid arguments | Unknown flag, bad option value |
//!
//! Findings never change the exit code: a scan that runs to completion
//! exits 0 even when it reports critical findings, so pipelines gate on
//! the report content rather than the process status.
//!
//! # Usage
//!
//! ```rust,ignore
//! use patlens::cli::exit_codes;
//!
//! std::process::exit(exit_codes::SUCCESS);
//! ```

/// Scan completed and the report was printed.
///
/// Used when:
/// - A directory scan finished, findings or not
/// - A single-file scan finished, findings or not
pub const SUCCESS: i32 = 0;

/// Runtime error before or during the scan.
///
/// Used when:
/// - The scan target does not exist
/// - The exclude pattern is not a valid regular expression
/// - The report could not be serialized
pub const ERROR: i32 = 1;

/// Invalid command-line arguments.
///
/// Produced by the argument parser itself (unknown flags, bad option
/// values); listed here so the full exit surface is documented in one
/// place.
pub const INVALID_ARGS: i32 = 2;
