//! # Scan Result Structures
//!
//! This module defines the data structures for representing scan findings
//! and results.
//!
//! ## Overview
//!
//! - [`Severity`] - Finding severity levels (Critical through Info)
//! - [`Finding`] - Individual pattern match with location and rule metadata
//! - [`SeverityCounts`] - Per-severity finding counts, zero-filled
//! - [`ScanResults`] - Collection of findings from a scan run
//!
//! ## Examples
//!
//! ### Creating Findings
//!
//! ```rust
//! use patlens::rules::{catalog, Finding, Severity};
//!
//! let rule = catalog().iter().find(|r| r.id == "SEC-001").unwrap();
//! let finding = Finding::from_rule(rule, "src/config.py", 12, "  password = \"hunter22\"  ");
//!
//! assert_eq!(finding.severity, Severity::Critical);
//! assert_eq!(finding.matched_text, "password = \"hunter22\"");
//! ```
//!
//! ### Working with Scan Results
//!
//! ```rust
//! use patlens::rules::{ScanResults, Severity};
//!
//! let results = ScanResults::new("./src");
//!
//! // Query results
//! println!("Clean: {}", results.is_clean());
//! println!("Critical count: {}", results.count_by_severity(Severity::Critical));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use super::catalog::Rule;

/// Maximum length of the matched line text carried by a finding.
pub const MATCH_TEXT_LIMIT: usize = 200;

/// Severity levels for scan findings, most severe first.
///
/// Severity drives both report ordering and the summary counts. The five
/// levels form a total order: Critical < High < Medium < Low < Info, where
/// "less than" means "sorts earlier in the report".
///
/// # Examples
///
/// ```rust
/// use patlens::rules::Severity;
///
/// assert!(Severity::Critical < Severity::High);
/// assert_eq!(Severity::High.rank(), 1);
/// assert_eq!(Severity::from_string("MEDIUM"), Some(Severity::Medium));
/// assert_eq!(Severity::Low.to_string(), "LOW");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Confirmed-dangerous patterns: hardcoded secrets, injection sinks.
    Critical,
    /// Dangerous patterns that usually need attention: weak crypto, eval.
    High,
    /// Patterns that are risky in some contexts: XSS sinks, SSRF candidates.
    Medium,
    /// Hygiene issues: stack-trace exposure and similar.
    Low,
    /// Informational notes.
    Info,
}

impl Severity {
    /// All severities in rank order, most severe first.
    pub const ALL: [Severity; 5] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
        Severity::Info,
    ];

    /// Numeric rank used for ordering: 0 = most severe.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::High => 1,
            Severity::Medium => 2,
            Severity::Low => 3,
            Severity::Info => 4,
        }
    }

    /// Uppercase name as it appears in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
            Severity::Info => "INFO",
        }
    }

    /// Parse a severity from its name, case-insensitively.
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "critical" => Some(Self::Critical),
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single finding: one rule pattern that matched one line of one file.
///
/// Findings copy the triggering rule's metadata by value so that a rendered
/// report never depends on the catalog staying alive or unchanged. Field
/// declaration order is the serialized field order and is part of the JSON
/// output contract.
///
/// # Examples
///
/// ```rust
/// use patlens::rules::{catalog, Finding};
///
/// let rule = catalog().iter().find(|r| r.id == "SEC-030").unwrap();
/// let finding = Finding::from_rule(rule, "app/tasks.py", 7, "os.system(cmd)");
///
/// assert_eq!(finding.rule_id, "SEC-030");
/// assert_eq!(finding.location(), "app/tasks.py:7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Unique rule identifier (e.g. "SEC-001").
    pub rule_id: String,

    /// Short rule title (e.g. "Hardcoded Password").
    pub title: String,

    /// Severity of the triggering rule.
    pub severity: Severity,

    /// OWASP Top 10 category code (e.g. "A03").
    pub owasp: String,

    /// CWE identifier (e.g. "CWE-89").
    pub cwe: String,

    /// Path of the scanned file. Relative to the scan root for directory
    /// scans, the path as given on the command line for single-file scans.
    pub file: String,

    /// 1-based line number within the file.
    pub line: usize,

    /// The matched line, trimmed of surrounding whitespace and truncated
    /// to [`MATCH_TEXT_LIMIT`] characters.
    pub matched_text: String,

    /// Rule description explaining why the pattern is suspect.
    pub description: String,

    /// Grouping label (e.g. "Hardcoded Secrets").
    pub category: String,
}

impl Finding {
    /// Create a finding for `rule` matching `raw_line` at `file:line`.
    ///
    /// The raw line is trimmed and truncated here so every constructed
    /// finding honors the match-text length cap.
    pub fn from_rule(
        rule: &Rule,
        file: impl Into<String>,
        line: usize,
        raw_line: &str,
    ) -> Self {
        Self {
            rule_id: rule.id.to_string(),
            title: rule.title.to_string(),
            severity: rule.severity,
            owasp: rule.owasp.to_string(),
            cwe: rule.cwe.to_string(),
            file: file.into(),
            line,
            matched_text: truncate_match(raw_line),
            description: rule.description.to_string(),
            category: rule.category.to_string(),
        }
    }

    /// "file:line" as shown in reports.
    pub fn location(&self) -> String {
        format!("{}:{}", self.file, self.line)
    }
}

/// Trim a matched line and cap it at [`MATCH_TEXT_LIMIT`] characters.
///
/// The cap counts characters, not bytes, so multi-byte text never gets cut
/// mid-character.
fn truncate_match(raw_line: &str) -> String {
    let trimmed = raw_line.trim();
    if trimmed.chars().count() <= MATCH_TEXT_LIMIT {
        trimmed.to_string()
    } else {
        trimmed.chars().take(MATCH_TEXT_LIMIT).collect()
    }
}

/// Per-severity finding counts over all five severities.
///
/// Always zero-filled: a severity with no findings reports 0 rather than
/// being absent. Field declaration order matches [`Severity::ALL`] and is
/// the serialized key order in JSON output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub info: usize,
}

impl SeverityCounts {
    /// Tally findings into a zero-filled count set.
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut counts = Self::default();
        for finding in findings {
            *counts.get_mut(finding.severity) += 1;
        }
        counts
    }

    /// Count for one severity.
    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
            Severity::Info => self.info,
        }
    }

    fn get_mut(&mut self, severity: Severity) -> &mut usize {
        match severity {
            Severity::Critical => &mut self.critical,
            Severity::High => &mut self.high,
            Severity::Medium => &mut self.medium,
            Severity::Low => &mut self.low,
            Severity::Info => &mut self.info,
        }
    }

    /// Total across all severities.
    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low + self.info
    }
}

/// Collection of findings from a complete scan run.
///
/// `ScanResults` aggregates findings across all scanned files and provides
/// the deterministic ordering and per-severity summaries the reporters
/// render. Callers are expected to [`sort`](ScanResults::sort) once after
/// the last finding is added; reporters only read.
///
/// # Examples
///
/// ```rust
/// use patlens::rules::{catalog, Finding, ScanResults, Severity};
///
/// let rule = catalog().iter().find(|r| r.id == "SEC-040").unwrap();
/// let mut results = ScanResults::new("./src");
/// results.add_finding(Finding::from_rule(rule, "app.js", 3, "eval(data)"));
/// results.sort();
///
/// assert_eq!(results.total_count(), 1);
/// assert_eq!(results.count_by_severity(Severity::High), 1);
/// assert!(!results.is_clean());
/// ```
#[derive(Debug, Clone)]
pub struct ScanResults {
    /// Scan target as given on the command line.
    pub target: String,

    /// Number of rules active for this run (compiled successfully).
    pub rules_active: usize,

    /// Number of files that were read and matched.
    pub files_scanned: usize,

    /// Wall-clock duration of the scan.
    pub duration: Duration,

    /// All findings, in sorted order once [`sort`](ScanResults::sort) ran.
    findings: Vec<Finding>,
}

impl ScanResults {
    /// Create empty results for a scan of `target`.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            rules_active: 0,
            files_scanned: 0,
            duration: Duration::ZERO,
            findings: Vec::new(),
        }
    }

    /// Add a finding.
    pub fn add_finding(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Add multiple findings.
    pub fn add_findings(&mut self, findings: impl IntoIterator<Item = Finding>) {
        self.findings.extend(findings);
    }

    /// Impose the deterministic report order: severity rank, then rule id,
    /// then file path, then line number, all ascending.
    ///
    /// This order is total over (rule, file, line) triples, so the sorted
    /// sequence is independent of filesystem enumeration order.
    pub fn sort(&mut self) {
        self.findings.sort_by(|a, b| {
            a.severity
                .rank()
                .cmp(&b.severity.rank())
                .then_with(|| a.rule_id.cmp(&b.rule_id))
                .then_with(|| a.file.cmp(&b.file))
                .then_with(|| a.line.cmp(&b.line))
        });
    }

    /// Get all findings.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Get findings of one severity.
    pub fn findings_by_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity == severity)
    }

    /// Count findings of one severity.
    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }

    /// Zero-filled per-severity counts.
    pub fn severity_counts(&self) -> SeverityCounts {
        SeverityCounts::from_findings(&self.findings)
    }

    /// Check if there are any critical findings.
    pub fn has_critical(&self) -> bool {
        self.findings
            .iter()
            .any(|f| f.severity == Severity::Critical)
    }

    /// Get total number of findings.
    pub fn total_count(&self) -> usize {
        self.findings.len()
    }

    /// Check if there are no findings.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}
