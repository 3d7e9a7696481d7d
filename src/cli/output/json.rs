//! JSON output formatting

use crate::error::PatLensError;
use serde::Serialize;

use super::ReportRenderer;
use crate::rules::results::{Finding, ScanResults, SeverityCounts};

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized report shape. Key order and the zero-filled `counts` object
/// are part of the output contract; timing never appears here.
#[derive(Serialize)]
struct JsonReport<'a> {
    total: usize,
    counts: SeverityCounts,
    findings: &'a [Finding],
}

impl ReportRenderer for JsonOutput {
    fn render_report(&self, results: &ScanResults) -> Result<String, PatLensError> {
        let report = JsonReport {
            total: results.total_count(),
            counts: results.severity_counts(),
            findings: results.findings(),
        };

        Ok(serde_json::to_string_pretty(&report)?)
    }
}
