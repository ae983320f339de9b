//! Directory entities: users, groups, vaults, and membership edges.

use serde::{Deserialize, Serialize};

use super::ids::{GroupId, UserId, VaultId};

/// A person known to the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable identifier assigned by the directory.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address; empty when the directory has none on file.
    #[serde(default)]
    pub email: String,
}

impl User {
    /// Creates a user record.
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A named collection of users (and possibly nested groups).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Stable identifier assigned by the directory.
    pub id: GroupId,
    /// Display name; not necessarily unique.
    pub name: String,
}

impl Group {
    /// Creates a group record.
    pub fn new(id: impl Into<GroupId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A container of secrets that grants apply to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vault {
    /// Stable identifier assigned by the directory.
    pub id: VaultId,
    /// Display name.
    pub name: String,
}

impl Vault {
    /// Creates a vault record.
    pub fn new(id: impl Into<VaultId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A member of a group: a user, or another group nested inside it.
///
/// Serialized as a tagged object, so fixture files spell memberships as
/// `{"kind": "user", "id": "u-alice"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum MemberRef {
    /// A user member.
    User(UserId),
    /// A nested group member.
    Group(GroupId),
}

impl MemberRef {
    /// Returns the user ID if this member is a user.
    pub fn as_user(&self) -> Option<&UserId> {
        match self {
            Self::User(id) => Some(id),
            Self::Group(_) => None,
        }
    }

    /// Returns the group ID if this member is a nested group.
    pub fn as_group(&self) -> Option<&GroupId> {
        match self {
            Self::User(_) => None,
            Self::Group(id) => Some(id),
        }
    }
}

/// One membership edge: `member` belongs to `group`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    /// The containing group.
    pub group: GroupId,
    /// The member, a user or a nested group.
    pub member: MemberRef,
}

impl Membership {
    /// Creates a user-in-group membership.
    pub fn user(user: impl Into<UserId>, group: impl Into<GroupId>) -> Self {
        Self {
            group: group.into(),
            member: MemberRef::User(user.into()),
        }
    }

    /// Creates a group-in-group membership: `member` is nested inside
    /// `group`.
    pub fn group(member: impl Into<GroupId>, group: impl Into<GroupId>) -> Self {
        Self {
            group: group.into(),
            member: MemberRef::Group(member.into()),
        }
    }
}
