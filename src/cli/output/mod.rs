//! Output formatting module for CLI

pub mod json;
mod terminal;

pub use json::JsonOutput;
pub use terminal::TerminalOutput;

use crate::error::PatLensError;
use crate::rules::results::ScanResults;

/// Trait for rendering report output
pub trait ReportRenderer {
    fn render_report(&self, results: &ScanResults) -> Result<String, PatLensError>;
}
