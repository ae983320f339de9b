//! Common test utilities for audit integration tests.

use vaultscope_core::{DirectorySnapshot, Group, Membership, RawGrant, User, Vault};

/// Builder for directory snapshots used across the integration tests.
///
/// Keeps scenario setup terse: entities are declared by id and name,
/// and the snapshot comes out in one call.
#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    snapshot: DirectorySnapshot,
}

impl SnapshotBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user whose email is derived from the id.
    pub fn user(mut self, id: &str, name: &str) -> Self {
        self.snapshot
            .users
            .push(User::new(id, name, format!("{id}@example.com")));
        self
    }

    /// Adds a group.
    pub fn group(mut self, id: &str, name: &str) -> Self {
        self.snapshot.groups.push(Group::new(id, name));
        self
    }

    /// Adds a vault.
    pub fn vault(mut self, id: &str, name: &str) -> Self {
        self.snapshot.vaults.push(Vault::new(id, name));
        self
    }

    /// Puts a user in a group.
    pub fn member(mut self, user: &str, group: &str) -> Self {
        self.snapshot.memberships.push(Membership::user(user, group));
        self
    }

    /// Nests a group inside another group.
    pub fn nested(mut self, member: &str, group: &str) -> Self {
        self.snapshot
            .memberships
            .push(Membership::group(member, group));
        self
    }

    /// Grants a user permissions on a vault.
    pub fn user_grant(mut self, vault: &str, user: &str, perms: &[&str]) -> Self {
        self.snapshot
            .grants
            .push(RawGrant::user(vault, user, perms.iter().copied()));
        self
    }

    /// Grants a group permissions on a vault.
    pub fn group_grant(mut self, vault: &str, group: &str, perms: &[&str]) -> Self {
        self.snapshot
            .grants
            .push(RawGrant::group(vault, group, perms.iter().copied()));
        self
    }

    /// Pushes an arbitrary raw grant, for malformed-record scenarios.
    pub fn raw_grant(mut self, grant: RawGrant) -> Self {
        self.snapshot.grants.push(grant);
        self
    }

    /// Finishes the snapshot.
    pub fn build(self) -> DirectorySnapshot {
        self.snapshot
    }
}
