//! The aggregation join: grants × memberships × entities → rows.
//!
//! One row per (user, vault) pair that any grant reaches. Group grants
//! fan out to every transitive member; permissions union across every
//! contributing grant; provenance records each path once.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use vaultscope_core::{
    AccessRow, AuditWarning, DirectorySnapshot, EntityKind, GrantSubject, Group, PermissionSet,
    Provenance, User, UserId, Vault, VaultId,
};

use crate::membership::MembershipIndex;
use crate::normalize::normalize_grants;

/// Everything one audit run produced.
#[derive(Debug, Clone, Default)]
pub struct AuditOutcome {
    /// Report rows, fully joined and sorted.
    pub rows: Vec<AccessRow>,
    /// Every non-fatal defect encountered along the way.
    pub warnings: Vec<AuditWarning>,
}

/// Accumulates one row's sets while grants stream by. Names are
/// captured on first touch; they come from the entity tables, so every
/// later touch sees the same values.
#[derive(Debug)]
struct RowDraft {
    user_name: String,
    user_email: String,
    vault_name: String,
    permissions: PermissionSet,
    access_via: BTreeSet<Provenance>,
}

impl RowDraft {
    fn new(user: &User, vault: &Vault) -> Self {
        Self {
            user_name: user.name.clone(),
            user_email: user.email.clone(),
            vault_name: vault.name.clone(),
            permissions: PermissionSet::new(),
            access_via: BTreeSet::new(),
        }
    }
}

/// Runs the full audit against one snapshot.
///
/// Never fails: defective records become warnings, and every row that
/// can be produced is produced. Output order is deterministic, so two
/// runs over equal snapshots emit byte-identical reports.
pub fn run_audit(snapshot: &DirectorySnapshot) -> AuditOutcome {
    let (grants, mut warnings) = normalize_grants(&snapshot.grants);
    let (index, membership_warnings) =
        MembershipIndex::build(&snapshot.memberships, &snapshot.users, &snapshot.groups);
    warnings.extend(membership_warnings);

    let users: HashMap<&str, &User> = snapshot
        .users
        .iter()
        .map(|user| (user.id.as_str(), user))
        .collect();
    let groups: HashMap<&str, &Group> = snapshot
        .groups
        .iter()
        .map(|group| (group.id.as_str(), group))
        .collect();
    let vaults: HashMap<&str, &Vault> = snapshot
        .vaults
        .iter()
        .map(|vault| (vault.id.as_str(), vault))
        .collect();

    let mut drafts: BTreeMap<(UserId, VaultId), RowDraft> = BTreeMap::new();

    for grant in &grants {
        let Some(vault) = vaults.get(grant.vault_id.as_str()) else {
            warnings.push(AuditWarning::dangling(
                EntityKind::Vault,
                grant.vault_id.as_str(),
                "grant",
            ));
            continue;
        };

        match &grant.subject {
            GrantSubject::User(user_id) => {
                let Some(user) = users.get(user_id.as_str()) else {
                    warnings.push(AuditWarning::dangling(
                        EntityKind::User,
                        user_id.as_str(),
                        "grant subject",
                    ));
                    continue;
                };
                upsert(&mut drafts, user, vault, &grant.permissions, Provenance::Direct);
            }
            GrantSubject::Group(group_id) => {
                let Some(group) = groups.get(group_id.as_str()) else {
                    warnings.push(AuditWarning::dangling(
                        EntityKind::Group,
                        group_id.as_str(),
                        "grant subject",
                    ));
                    continue;
                };
                for member_id in index.users_of(group_id) {
                    // Members missing from the user table were already
                    // reported when the index was built.
                    if let Some(user) = users.get(member_id.as_str()) {
                        upsert(
                            &mut drafts,
                            user,
                            vault,
                            &grant.permissions,
                            Provenance::group(group.name.clone()),
                        );
                    }
                }
            }
        }
    }

    let mut rows: Vec<AccessRow> = drafts
        .into_iter()
        .map(|((user_id, vault_id), draft)| AccessRow {
            user_id,
            user_name: draft.user_name,
            user_email: draft.user_email,
            vault_id,
            vault_name: draft.vault_name,
            permissions: draft.permissions,
            access_via: draft.access_via,
        })
        .collect();

    // Case-folded names first for human-friendly order, ids last so
    // name collisions cannot make the order run-dependent.
    rows.sort_by_cached_key(|row| {
        (
            row.user_name.to_lowercase(),
            row.vault_name.to_lowercase(),
            row.user_id.clone(),
            row.vault_id.clone(),
        )
    });

    tracing::debug!(
        rows = rows.len(),
        warnings = warnings.len(),
        "aggregation complete"
    );

    AuditOutcome { rows, warnings }
}

fn upsert(
    drafts: &mut BTreeMap<(UserId, VaultId), RowDraft>,
    user: &User,
    vault: &Vault,
    permissions: &PermissionSet,
    provenance: Provenance,
) {
    let draft = drafts
        .entry((user.id.clone(), vault.id.clone()))
        .or_insert_with(|| RowDraft::new(user, vault));
    draft.permissions.merge(permissions);
    draft.access_via.insert(provenance);
}
