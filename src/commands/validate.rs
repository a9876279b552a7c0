//! Validate command - scan one document and report the verdict

use std::fs;
use std::path::Path;

use anyhow::Context;

use entlint::output::{self, OutputMode, ValidateReport};
use entlint::scanner::EntityValidator;

use crate::config::Config;

/// Validate a document. Exits the process with status 1 when issues were
/// found; I/O and decoding failures propagate as errors.
pub fn validate(path: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load();
    let target = config.resolve_target(path);

    log::debug!("validating {}", target.display());

    let content = fs::read_to_string(&target)
        .with_context(|| format!("failed to read {}", target.display()))?;

    let validator = EntityValidator::new()?;

    let issues = if mode == OutputMode::Human {
        // Stream one block per finding while scanning.
        let mut issues = Vec::new();
        for (idx, line) in content.split('\n').enumerate() {
            let found = validator.scan_line(idx + 1, line);
            for issue in &found {
                output::print_finding(issue, line);
            }
            issues.extend(found);
        }
        issues
    } else {
        validator.scan(&content)
    };

    let report = ValidateReport {
        valid: issues.is_empty(),
        target: target.display().to_string(),
        issues,
    };

    report.render(mode);

    if !report.valid {
        std::process::exit(1);
    }

    Ok(())
}
