//! Output formatting for human and JSON modes
//!
//! Human mode streams one block per finding as the scan progresses, then
//! re-prints every issue in the final summary. The duplication is
//! intentional. JSON mode suppresses streaming and emits one structured
//! report instead.

use colored::Colorize;
use serde::Serialize;

use crate::models::{Issue, Severity};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Print one finding block as it is discovered (human mode only)
pub fn print_finding(issue: &Issue, line_text: &str) {
    let tag = format!("[{}]", issue.severity.tag());
    let tag = match issue.severity {
        Severity::Error => tag.red(),
        Severity::Warning => tag.yellow(),
        Severity::Fix => tag.cyan(),
    };

    println!("{tag} {}", issue.description);
    println!("   Line {}: {}", issue.line, line_text.trim());
    println!();
}

/// Final report for a validate run
#[derive(Debug, Serialize)]
pub struct ValidateReport {
    /// Whether the document passed all checks
    pub valid: bool,
    /// The document that was scanned
    pub target: String,
    /// Every issue found, in scan order
    pub issues: Vec<Issue>,
}

impl ValidateReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.issues.is_empty() {
            println!("{} No entity reference issues found!", "[SUCCESS]".green());
        } else {
            println!("{} Found {} issues:", "[FAILED]".red(), self.issues.len());
            for issue in &self.issues {
                println!("  - {}", issue.summary());
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of listing the built-in rules
#[derive(Debug, Serialize)]
pub struct RuleListResult {
    /// The rules, in scan order
    pub rules: Vec<RuleInfo>,
}

/// Information about one built-in rule
#[derive(Debug, Serialize)]
pub struct RuleInfo {
    /// Stable rule identifier
    pub id: String,
    /// Severity level
    pub severity: String,
    /// Message attached to findings
    pub description: String,
}

impl RuleListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Rules:\n");
        for r in &self.rules {
            println!("  [{}] {}", r.severity.to_uppercase(), r.id);
            println!("  {}\n", r.description);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
