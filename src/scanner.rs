//! Line scanner
//!
//! Applies the built-in rule set to a document, line by line. Issues come
//! out in a stable order: line-ascending, then rule order, then match order
//! within the line. Scanning the same content twice yields identical
//! results.

use regex::Regex;
use thiserror::Error;

use crate::models::Issue;
use crate::rules::{self, Rule, RuleKind};

/// Errors that can occur while building a validator
#[derive(Debug, Error)]
pub enum ScanError {
    /// A built-in rule failed to compile
    #[error("invalid pattern for rule `{id}`: {source}")]
    Pattern {
        /// Identifier of the offending rule
        id: &'static str,
        /// Underlying regex error
        source: regex::Error,
    },
}

/// A rule paired with its compiled regex
#[derive(Debug)]
struct CompiledRule {
    rule: Rule,
    regex: Regex,
}

/// Scans document text for entity reference and URL problems
#[derive(Debug)]
pub struct EntityValidator {
    rules: Vec<CompiledRule>,
}

impl EntityValidator {
    /// Compile the built-in rule set
    pub fn new() -> Result<Self, ScanError> {
        let rules = rules::builtin()
            .into_iter()
            .map(|rule| {
                Regex::new(rule.pattern)
                    .map(|regex| CompiledRule { rule, regex })
                    .map_err(|source| ScanError::Pattern { id: rule.id, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!("compiled {} built-in rules", rules.len());

        Ok(Self { rules })
    }

    /// Scan a whole document. Lines are split on `\n` and numbered from 1.
    #[must_use]
    pub fn scan(&self, content: &str) -> Vec<Issue> {
        let mut issues = Vec::new();
        for (idx, line) in content.split('\n').enumerate() {
            issues.extend(self.scan_line(idx + 1, line));
        }
        issues
    }

    /// Scan a single line, returning its issues in rule order then match
    /// order
    #[must_use]
    pub fn scan_line(&self, line_number: usize, line: &str) -> Vec<Issue> {
        let mut issues = Vec::new();

        for compiled in &self.rules {
            for m in compiled.regex.find_iter(line) {
                if !keeps_match(compiled.rule.kind, line, m.end()) {
                    continue;
                }
                issues.push(Issue::new(
                    line_number,
                    compiled.rule.severity,
                    compiled.rule.description,
                    m.as_str(),
                ));
            }
        }

        issues
    }
}

/// Apply a rule's filter to a raw regex match ending at `match_end`
fn keeps_match(kind: RuleKind, line: &str, match_end: usize) -> bool {
    match kind {
        RuleKind::Literal => true,
        RuleKind::NotBeforeSemicolon => line.as_bytes().get(match_end) != Some(&b';'),
        RuleKind::GatedByMarker => line.contains(rules::URL_GATE_MARKER),
    }
}
