//! Data models for entlint
//!
//! Core abstractions:
//! - Issue: one diagnostic finding tied to a line
//! - Severity: how a finding is tagged in console output

pub mod issue;

pub use issue::{Issue, Severity};
