//! patlens Library
//!
//! This crate provides the core functionality for scanning source trees
//! for suspicious code patterns and reporting the candidate findings.

pub mod cli;
pub mod error;
pub mod rules;
pub mod scanner;
pub mod utils;

pub use error::PatLensError;
pub use rules::{Finding, ScanEngine, ScanResults, Severity};
pub use scanner::Scanner;
