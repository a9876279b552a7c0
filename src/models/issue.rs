//! Issue model
//!
//! An issue records one finding from a scan: the line it occurred on, how
//! severe it is, and the exact text that matched. Issues are immutable once
//! created and are collected in scan order.

use serde::Serialize;

/// Severity of a finding, mapped 1:1 onto the console output tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Structural problem in the markup (`[ERROR]`)
    Error,
    /// Suspicious but well-formed markup (`[WARNING]`)
    Warning,
    /// Finding with a known remediation (`[FIX]`)
    Fix,
}

impl Severity {
    /// The tag text used in console output, without brackets
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Fix => "FIX",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Fix => write!(f, "fix"),
        }
    }
}

/// One diagnostic finding from a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Line the match occurred on (1-indexed)
    pub line: usize,

    /// Severity of the finding
    pub severity: Severity,

    /// Human-readable description of the problem
    pub description: String,

    /// The exact text that matched the rule
    pub matched_text: String,
}

impl Issue {
    /// Create a new issue
    #[must_use]
    pub fn new(line: usize, severity: Severity, description: &str, matched_text: &str) -> Self {
        Self {
            line,
            severity,
            description: description.to_string(),
            matched_text: matched_text.to_string(),
        }
    }

    /// The one-line form used in the final summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Line {}: {} - '{}'", self.line, self.description, self.matched_text)
    }
}
