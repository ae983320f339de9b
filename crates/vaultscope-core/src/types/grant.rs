//! Grants: the raw records a directory reports and their validated form.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

use super::ids::{GroupId, UserId, VaultId};

/// A single permission token, treated as opaque text.
///
/// Vaultscope never interprets permission names: vocabularies differ
/// between directory backends and may change under us. Tokens order
/// lexicographically, which fixes their order inside a report cell.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Permission(String);

impl Permission {
    /// Creates a permission token from a string.
    pub fn new<S: Into<String>>(token: S) -> Self {
        Self(token.into())
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Permission {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Permission {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for Permission {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets a `BTreeSet<Permission>` be probed with a plain `&str`.
impl Borrow<str> for Permission {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// An ordered, duplicate-free set of permission tokens.
///
/// Displays as the tokens joined with `", "`, which is exactly the
/// report cell format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<Permission>);

impl PermissionSet {
    /// Creates an empty permission set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from raw tokens, trimming surrounding whitespace
    /// and dropping tokens that are blank after the trim.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for token in tokens {
            let trimmed = token.as_ref().trim();
            if !trimmed.is_empty() {
                set.0.insert(Permission::new(trimmed));
            }
        }
        set
    }

    /// Inserts a token; returns `true` if it was not already present.
    pub fn insert(&mut self, permission: Permission) -> bool {
        self.0.insert(permission)
    }

    /// Adds every token of `other` to this set.
    pub fn merge(&mut self, other: &PermissionSet) {
        for permission in &other.0 {
            self.0.insert(permission.clone());
        }
    }

    /// Returns `true` if the set holds the given token.
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    /// Iterates tokens in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &Permission> {
        self.0.iter()
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PermissionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for permission in &self.0 {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{permission}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A grant exactly as a directory source reported it, before
/// validation.
///
/// `subject_kind` is free-form on purpose: backends disagree on the tag
/// vocabulary, and the normalizer is where junk gets rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawGrant {
    /// The vault the record applies to.
    pub vault_id: VaultId,
    /// Subject tag as reported (`"user"`, `"group"`, or anything else).
    #[serde(default)]
    pub subject_kind: Option<String>,
    /// Identifier of the subject.
    pub subject_id: String,
    /// Permission tokens as reported, repeats and blanks included.
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl RawGrant {
    /// Creates a raw grant record.
    pub fn new(
        vault_id: impl Into<VaultId>,
        subject_kind: Option<String>,
        subject_id: impl Into<String>,
        permissions: Vec<String>,
    ) -> Self {
        Self {
            vault_id: vault_id.into(),
            subject_kind,
            subject_id: subject_id.into(),
            permissions,
        }
    }

    /// Creates a raw grant tagged as a user grant.
    pub fn user<I, S>(
        vault_id: impl Into<VaultId>,
        subject_id: impl Into<String>,
        permissions: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            vault_id,
            Some("user".to_string()),
            subject_id,
            permissions.into_iter().map(Into::into).collect(),
        )
    }

    /// Creates a raw grant tagged as a group grant.
    pub fn group<I, S>(
        vault_id: impl Into<VaultId>,
        subject_id: impl Into<String>,
        permissions: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            vault_id,
            Some("group".to_string()),
            subject_id,
            permissions.into_iter().map(Into::into).collect(),
        )
    }
}

/// The resolved subject of a validated grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrantSubject {
    /// Permissions granted to one user directly.
    User(UserId),
    /// Permissions granted to every member of a group.
    Group(GroupId),
}

/// A validated grant: a typed subject and a cleaned permission set.
///
/// An empty permission set is legal; the subject still appears in the
/// report with an empty permissions cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grant {
    /// The vault the grant applies to.
    pub vault_id: VaultId,
    /// Who the permissions are granted to.
    pub subject: GrantSubject,
    /// The granted permission tokens.
    pub permissions: PermissionSet,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tokens_trims_and_deduplicates() {
        let set = PermissionSet::from_tokens(["view", " edit ", "view", "", "   "]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("view"));
        assert!(set.contains("edit"));
        assert!(!set.contains(""));
    }

    #[test]
    fn test_permission_set_display_is_sorted() {
        let set = PermissionSet::from_tokens(["view", "edit", "manage"]);
        assert_eq!(set.to_string(), "edit, manage, view");
    }

    #[test]
    fn test_empty_permission_set_displays_empty() {
        assert_eq!(PermissionSet::new().to_string(), "");
    }

    #[test]
    fn test_merge_is_union() {
        let mut set = PermissionSet::from_tokens(["view"]);
        set.merge(&PermissionSet::from_tokens(["edit", "view"]));
        assert_eq!(set.to_string(), "edit, view");
    }

    #[test]
    fn test_permission_set_serializes_as_sequence() {
        let set = PermissionSet::from_tokens(["view", "edit"]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["edit","view"]"#);
    }

    #[test]
    fn test_raw_grant_helpers_tag_subject_kind() {
        let user_grant = RawGrant::user("v-1", "u-alice", ["view"]);
        assert_eq!(user_grant.subject_kind.as_deref(), Some("user"));

        let group_grant = RawGrant::group("v-1", "g-eng", ["edit"]);
        assert_eq!(group_grant.subject_kind.as_deref(), Some("group"));
        assert_eq!(group_grant.permissions, vec!["edit".to_string()]);
    }

    #[test]
    fn test_raw_grant_deserializes_with_missing_fields() {
        let grant: RawGrant =
            serde_json::from_str(r#"{"vault_id": "v-1", "subject_id": "u-1"}"#).unwrap();
        assert_eq!(grant.subject_kind, None);
        assert!(grant.permissions.is_empty());
    }
}
