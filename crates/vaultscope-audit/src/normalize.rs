//! Grant validation.
//!
//! Raw grant records arrive with free-form subject tags and noisy
//! permission lists. Normalization turns each record into a typed
//! [`Grant`] or into exactly one [`AuditWarning`]; nothing is dropped
//! silently and nothing stops the audit.

use vaultscope_core::{AuditWarning, Grant, GrantSubject, PermissionSet, RawGrant};

/// Validates raw grant records.
///
/// Returns the grants that survived and one warning per record that
/// did not. Input order is preserved on both sides.
pub fn normalize_grants(raw: &[RawGrant]) -> (Vec<Grant>, Vec<AuditWarning>) {
    let mut grants = Vec::with_capacity(raw.len());
    let mut warnings = Vec::new();
    for record in raw {
        match normalize_grant(record) {
            Ok(grant) => grants.push(grant),
            Err(warning) => warnings.push(warning),
        }
    }
    (grants, warnings)
}

fn normalize_grant(record: &RawGrant) -> Result<Grant, AuditWarning> {
    if record.vault_id.as_str().trim().is_empty() {
        return Err(AuditWarning::malformed_grant(
            record.vault_id.clone(),
            "missing vault id",
        ));
    }

    let subject_id = record.subject_id.trim();
    if subject_id.is_empty() {
        return Err(AuditWarning::malformed_grant(
            record.vault_id.clone(),
            "missing subject id",
        ));
    }

    let kind = record.subject_kind.as_deref().map_or("", str::trim);
    let subject = if kind.eq_ignore_ascii_case("user") {
        GrantSubject::User(subject_id.into())
    } else if kind.eq_ignore_ascii_case("group") {
        GrantSubject::Group(subject_id.into())
    } else if kind.is_empty() {
        return Err(AuditWarning::malformed_grant(
            record.vault_id.clone(),
            format!("missing subject kind for subject `{subject_id}`"),
        ));
    } else {
        return Err(AuditWarning::malformed_grant(
            record.vault_id.clone(),
            format!("unrecognized subject kind `{kind}` for subject `{subject_id}`"),
        ));
    };

    Ok(Grant {
        vault_id: record.vault_id.clone(),
        subject,
        permissions: PermissionSet::from_tokens(&record.permissions),
    })
}
