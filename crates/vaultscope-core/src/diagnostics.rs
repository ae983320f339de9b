//! Non-fatal findings raised while loading and aggregating.
//!
//! Warnings are values, not errors: the audit always runs to
//! completion and reports what it had to skip or tolerate. Every stage
//! returns its warnings alongside its output, and the CLI decides how
//! to surface them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{GroupId, VaultId};

/// The kind of entity a dangling reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// A user record.
    User,
    /// A group record.
    Group,
    /// A vault record.
    Vault,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::User => "user",
            Self::Group => "group",
            Self::Vault => "vault",
        };
        write!(f, "{name}")
    }
}

/// A defect in the directory data that did not stop the audit.
///
/// Marked `#[non_exhaustive]` so new warning kinds can be added
/// without breaking downstream matches.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AuditWarning {
    /// A grant record that could not be validated and was skipped.
    #[error("malformed grant on vault `{vault_id}`: {reason}")]
    MalformedGrant {
        /// Vault the record claimed to apply to.
        vault_id: VaultId,
        /// What made the record unusable.
        reason: String,
    },

    /// A reference to an entity the directory never listed.
    #[error("dangling {kind} reference `{id}` in {context}")]
    DanglingReference {
        /// What kind of entity the reference points at.
        kind: EntityKind,
        /// The identifier that failed to resolve.
        id: String,
        /// Where the reference was found.
        context: String,
    },

    /// Group memberships that loop back on themselves.
    ///
    /// Traversal stops at visited groups, so cycles cannot affect the
    /// report beyond this warning.
    #[error("membership cycle among groups [{}]", join_ids(.groups))]
    MembershipCycle {
        /// The groups on the cycle, in id order.
        groups: Vec<GroupId>,
    },
}

impl AuditWarning {
    /// Creates a malformed-grant warning.
    pub fn malformed_grant(vault_id: impl Into<VaultId>, reason: impl Into<String>) -> Self {
        Self::MalformedGrant {
            vault_id: vault_id.into(),
            reason: reason.into(),
        }
    }

    /// Creates a dangling-reference warning.
    pub fn dangling(kind: EntityKind, id: impl Into<String>, context: impl Into<String>) -> Self {
        Self::DanglingReference {
            kind,
            id: id.into(),
            context: context.into(),
        }
    }

    /// Creates a membership-cycle warning; the group list is sorted so
    /// equal cycles render identically.
    pub fn membership_cycle(mut groups: Vec<GroupId>) -> Self {
        groups.sort();
        Self::MembershipCycle { groups }
    }
}

fn join_ids(groups: &[GroupId]) -> String {
    let ids: Vec<&str> = groups.iter().map(GroupId::as_str).collect();
    ids.join(", ")
}
