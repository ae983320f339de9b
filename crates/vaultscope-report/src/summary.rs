//! The human-facing run summary.
//!
//! Goes to stderr so stdout stays machine-readable when the report is
//! piped.

use std::collections::BTreeSet;

use vaultscope_core::{AccessRow, AuditWarning};

/// Renders the end-of-run summary: row and entity counts, then one
/// line per warning.
pub fn render_summary(rows: &[AccessRow], warnings: &[AuditWarning]) -> String {
    let users: BTreeSet<&str> = rows.iter().map(|row| row.user_id.as_str()).collect();
    let vaults: BTreeSet<&str> = rows.iter().map(|row| row.vault_id.as_str()).collect();

    let mut lines = vec![format!(
        "access rows: {} (users: {}, vaults: {})",
        rows.len(),
        users.len(),
        vaults.len()
    )];
    if !warnings.is_empty() {
        lines.push(format!("warnings: {}", warnings.len()));
        for warning in warnings {
            lines.push(format!("  - {warning}"));
        }
    }
    lines.join("\n")
}
