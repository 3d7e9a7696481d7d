//! Scan engine: line matching and finding aggregation

use rayon::prelude::*;
use tracing::{debug, info};

use super::catalog::{catalog, Rule};
use super::results::{Finding, ScanResults};
use crate::error::Result;
use crate::scanner::{CandidateFile, Scanner};
use crate::utils::Timer;

/// Matches the rule catalog against the files a [`Scanner`] selects.
///
/// Matching is strictly line-scoped: each rule pattern is tested against
/// one line at a time, so constructs spanning multiple lines are invisible
/// to the engine. A rule fires at most once per line.
pub struct ScanEngine {
    rules: &'static [Rule],
}

impl ScanEngine {
    /// Create an engine over the full compiled catalog.
    pub fn new() -> Self {
        Self { rules: catalog() }
    }

    /// Run a complete scan: select files, match every applicable rule
    /// against every line of each file, and return sorted results.
    pub fn run(&self, scanner: &Scanner) -> Result<ScanResults> {
        let timer = Timer::start();
        let target = scanner.target().display().to_string();
        info!(path = %target, rules = self.rules.len(), "starting scan");

        let files = scanner.candidate_files()?;

        // Files are independent given the read-only catalog, so they are
        // matched in parallel; the sort below restores a deterministic
        // order whatever the traversal produced.
        let findings: Vec<Finding> = files
            .par_iter()
            .flat_map_iter(|file| self.scan_file(file))
            .collect();

        let mut results = ScanResults::new(target);
        results.rules_active = self.rules.len();
        results.files_scanned = files.len();
        results.add_findings(findings);
        results.sort();
        results.duration = timer.elapsed();

        info!(
            findings = results.total_count(),
            files = results.files_scanned,
            elapsed = %timer.elapsed_formatted(),
            "scan complete"
        );
        Ok(results)
    }

    /// Match all applicable rules against one file.
    ///
    /// The file is read tolerantly: byte sequences that are not valid UTF-8
    /// are replaced rather than failing the read. A file that cannot be
    /// opened is skipped without a finding.
    fn scan_file(&self, file: &CandidateFile) -> Vec<Finding> {
        let content = match std::fs::read(&file.path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(err) => {
                debug!(file = %file.display_path, %err, "skipping unreadable file");
                return Vec::new();
            }
        };

        let extension = file.path.extension().and_then(|e| e.to_str());
        let lines: Vec<&str> = content.split('\n').collect();

        let mut findings = Vec::new();
        for rule in self.rules.iter().filter(|r| r.applies_to(extension)) {
            for (index, line) in lines.iter().enumerate() {
                if rule.matches_line(line) {
                    findings.push(Finding::from_rule(
                        rule,
                        &file.display_path,
                        index + 1,
                        line,
                    ));
                }
            }
        }
        findings
    }
}

impl Default for ScanEngine {
    fn default() -> Self {
        Self::new()
    }
}
