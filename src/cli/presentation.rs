//! CLI presentation: text and json formatters per command.

use crate::error::SetupError;
use crate::rules::RuleSet;
use crate::setup::{ConfigOutcome, InstallSummary, ScriptsOutcome};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;

pub fn format_install_summary(summary: &InstallSummary) -> String {
    let mut output = String::from("\nSummary:\n");

    match &summary.config {
        ConfigOutcome::Created { path, finder_paths } => {
            output.push_str(&format!("  ✓ Created {}\n", path.display()));
            if finder_paths.is_empty() {
                output.push_str("    (no autoload paths found, finder is empty)\n");
            } else {
                output.push_str(&format!("    Finder paths: {}\n", finder_paths.join(", ")));
            }
        }
        ConfigOutcome::AlreadyExists(path) => {
            output.push_str(&format!("  ⊘ {} (already exists, skipped)\n", path.display()));
        }
        ConfigOutcome::Declined => {
            output.push_str("  ⊘ CS config not created\n");
        }
    }

    match &summary.scripts {
        ScriptsOutcome::Written { added, conflicts } => {
            for name in added {
                output.push_str(&format!("  ✓ Added script {}\n", name));
            }
            for name in conflicts {
                output.push_str(&format!("  ✗ Script {} left unchanged (conflict)\n", name));
            }
        }
        ScriptsOutcome::AlreadyPresent => {
            output.push_str("  ⊘ Scripts already present, skipped\n");
        }
        ScriptsOutcome::Declined => {
            output.push_str("  ⊘ Scripts not added\n");
        }
    }

    output
}

pub fn format_rules_text(rules: &RuleSet) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Rule", "Value"]);
    for (name, value) in rules {
        table.add_row(vec![name.clone(), value.display_value()]);
    }
    format!("{}\n{} rules", table, rules.len())
}

pub fn format_rules_json(rules: &RuleSet) -> Result<String, SetupError> {
    serde_json::to_string_pretty(rules)
        .map_err(|e| SetupError::ConfigError(format!("Failed to serialize rules: {}", e)))
}
