//! Report rows: the joined, user-facing output of the audit.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::grant::PermissionSet;
use super::ids::{UserId, VaultId};

/// Where a user's access to a vault came from.
///
/// The derived ordering is also the presentation ordering: `Direct`
/// sorts before every group label, and group labels sort by name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Provenance {
    /// The user holds a grant on the vault themselves.
    Direct,
    /// Access arrived through membership in the named group.
    Group(String),
}

impl Provenance {
    /// Creates a group provenance label.
    pub fn group(name: impl Into<String>) -> Self {
        Self::Group(name.into())
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct => write!(f, "Direct"),
            Self::Group(name) => write!(f, "Group: {name}"),
        }
    }
}

/// One line of the audit report: everything one user can do in one
/// vault, and every path that led there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRow {
    /// The user's directory identifier.
    pub user_id: UserId,
    /// The user's display name.
    pub user_name: String,
    /// The user's email; may be empty.
    pub user_email: String,
    /// The vault's directory identifier.
    pub vault_id: VaultId,
    /// The vault's display name.
    pub vault_name: String,
    /// Union of permissions over every grant that reaches this pair.
    pub permissions: PermissionSet,
    /// Every provenance path, deduplicated, `Direct` first.
    pub access_via: BTreeSet<Provenance>,
}

impl AccessRow {
    /// Permission tokens joined with `", "`.
    pub fn permissions_display(&self) -> String {
        self.permissions.to_string()
    }

    /// Provenance labels joined with `"; "`.
    pub fn access_via_display(&self) -> String {
        let labels: Vec<String> = self.access_via.iter().map(Provenance::to_string).collect();
        labels.join("; ")
    }
}
