//! Terminal output formatting with colors

use crate::error::PatLensError;
use colored::{ColoredString, Colorize};

use super::ReportRenderer;
use crate::rules::results::{Finding, ScanResults, Severity};
use crate::utils::format_duration;

pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }

    fn format_header(&self, results: &ScanResults) -> String {
        format!(
            r#"
{} v{}

{} {}
{} {}
{} {}
"#,
            "patlens".cyan().bold(),
            env!("CARGO_PKG_VERSION"),
            "Target:".dimmed(),
            results.target.white().bold(),
            "Rules:".dimmed(),
            results.rules_active.to_string().yellow(),
            "Files:".dimmed(),
            results.files_scanned.to_string().yellow()
        )
    }

    fn format_findings(&self, results: &ScanResults) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{}\n{}\n\n",
            "━".repeat(50).dimmed(),
            "  SCAN RESULTS".bold()
        ));

        if results.is_clean() {
            output.push_str(&format!(
                "  {}\n",
                "No potential vulnerabilities detected.".green()
            ));
            return output;
        }

        for severity in Severity::ALL {
            let group: Vec<&Finding> = results.findings_by_severity(severity).collect();
            if group.is_empty() {
                continue;
            }
            output.push_str(&format!(
                "{} ({})\n",
                self.severity_label(severity),
                group.len()
            ));
            for finding in group {
                output.push_str(&self.format_finding(finding));
            }
            output.push('\n');
        }

        output
    }

    fn severity_label(&self, severity: Severity) -> ColoredString {
        match severity {
            Severity::Critical => "❌ CRITICAL".red().bold(),
            Severity::High => "🔥 HIGH".red(),
            Severity::Medium => "⚠️  MEDIUM".yellow(),
            Severity::Low => "🔍 LOW".cyan(),
            Severity::Info => "ℹ️  INFO".blue(),
        }
    }

    fn colored_count(&self, severity: Severity, count: usize) -> ColoredString {
        let text = count.to_string();
        match severity {
            Severity::Critical => text.red().bold(),
            Severity::High => text.red(),
            Severity::Medium => text.yellow(),
            Severity::Low => text.cyan(),
            Severity::Info => text.blue(),
        }
    }

    fn format_finding(&self, finding: &Finding) -> String {
        let mut output = format!(
            "  {} [{}] {}\n",
            "•".dimmed(),
            finding.rule_id.cyan(),
            finding.title
        );

        output.push_str(&format!(
            "    {} {}\n",
            "└─".dimmed(),
            finding.location().dimmed()
        ));
        output.push_str(&format!(
            "       {} {}\n",
            "Match:".dimmed(),
            finding.matched_text
        ));
        output.push_str(&format!(
            "       {} {} │ {} │ {}\n",
            "Refs:".dimmed(),
            finding.severity.as_str().dimmed(),
            finding.owasp.dimmed(),
            finding.cwe.dimmed()
        ));
        output.push_str(&format!("       {}\n", finding.description.dimmed()));

        output
    }

    fn format_summary(&self, results: &ScanResults) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{}\n{}\n\n",
            "━".repeat(50).dimmed(),
            "  SUMMARY".bold()
        ));

        if results.is_clean() {
            output.push_str(&format!("Findings: {}\n", "0".green().bold()));
        } else {
            let counts = results.severity_counts();
            let breakdown: Vec<String> = Severity::ALL
                .iter()
                .copied()
                .filter(|severity| counts.get(*severity) > 0)
                .map(|severity| {
                    format!(
                        "{}: {}",
                        severity.as_str(),
                        self.colored_count(severity, counts.get(severity))
                    )
                })
                .collect();

            output.push_str(&format!(
                "Findings: {} │ {}\n",
                results.total_count().to_string().bold(),
                breakdown.join(" │ ")
            ));
            output.push_str(&format!(
                "\n{} These are candidates only. Verify each finding manually.\n",
                "⚠️ ".yellow()
            ));
        }

        output
    }

    fn format_footer(&self, results: &ScanResults) -> String {
        format!(
            "\n{} {}\n",
            "Completed in".dimmed(),
            format_duration(results.duration).dimmed()
        )
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for TerminalOutput {
    fn render_report(&self, results: &ScanResults) -> Result<String, PatLensError> {
        let mut output = String::new();

        output.push_str(&self.format_header(results));
        output.push_str(&self.format_summary(results));
        output.push_str(&self.format_findings(results));
        output.push_str(&self.format_footer(results));

        Ok(output)
    }
}
