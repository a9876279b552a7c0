//! Rules command - list the built-in rule set

use entlint::output::{OutputMode, RuleInfo, RuleListResult};
use entlint::rules;

/// List the built-in rules
pub fn rules(mode: OutputMode) -> anyhow::Result<()> {
    let result = RuleListResult {
        rules: rules::builtin()
            .into_iter()
            .map(|rule| RuleInfo {
                id: rule.id.to_string(),
                severity: rule.severity.to_string(),
                description: rule.description.to_string(),
            })
            .collect(),
    };

    result.render(mode);
    Ok(())
}
