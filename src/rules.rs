//! Built-in pattern rules
//!
//! The rule set is fixed: three patterns applied to every line of the
//! document, in this order. Patterns are compiled once at validator
//! construction and never change afterwards.

use crate::models::Severity;

/// Substring that gates the malformed-URL rule.
///
/// The URL pattern only establishes that a URL-shaped run exists on the
/// line; an issue is reported only when this marker is also present. The
/// two checks stay separate and sequential.
pub const URL_GATE_MARKER: &str = "rawtracksqodeinteractivecomlanding";

/// How a rule's raw regex matches are filtered into findings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Keep every match
    Literal,
    /// Keep a match only if the character directly after it is not `;`.
    /// A maximal letter run followed by `;` is a terminated entity.
    NotBeforeSemicolon,
    /// Keep a match only if the line also contains [`URL_GATE_MARKER`]
    GatedByMarker,
}

/// A pattern rule applied to every input line
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Stable identifier, used in rule listings
    pub id: &'static str,

    /// Regex source for the rule
    pub pattern: &'static str,

    /// How raw matches are filtered into findings
    pub kind: RuleKind,

    /// Message attached to each finding
    pub description: &'static str,

    /// Severity for findings produced by this rule
    pub severity: Severity,
}

/// The built-in rule set, in scan order
#[must_use]
pub const fn builtin() -> [Rule; 3] {
    [
        Rule {
            id: "unterminated-entity",
            pattern: "&[A-Za-z]+",
            kind: RuleKind::NotBeforeSemicolon,
            description: "Unterminated entity reference (missing semicolon)",
            severity: Severity::Error,
        },
        Rule {
            id: "double-escaped-entity",
            pattern: "&amp;",
            kind: RuleKind::Literal,
            description: "Double-escaped entity",
            severity: Severity::Warning,
        },
        Rule {
            // The `$-_` range is deliberate: it covers most of the URL-safe
            // ASCII block, including `/` and `:`.
            id: "malformed-url",
            pattern: "https://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*(),]|(?:%[0-9a-fA-F][0-9a-fA-F]))+(?:[a-zA-Z0-9@:$%&+=?/])?",
            kind: RuleKind::GatedByMarker,
            description: "Malformed URL parameter - missing protocol",
            severity: Severity::Fix,
        },
    ]
}
