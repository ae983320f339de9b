//! A point-in-time copy of the five directory collections.

use serde::{Deserialize, Serialize};

use super::entity::{Group, Membership, User, Vault};
use super::grant::RawGrant;

/// The five directory collections, materialized together.
///
/// Aggregation runs against a snapshot rather than a live source so the
/// report is internally consistent even while the directory changes
/// underneath it. The JSON serialization of this struct is also the
/// fixture file format accepted by `vaultscope audit --fixture`; any
/// collection may be omitted there and defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectorySnapshot {
    /// Every user the directory listed.
    pub users: Vec<User>,
    /// Every group the directory listed.
    pub groups: Vec<Group>,
    /// Every membership edge the directory listed.
    pub memberships: Vec<Membership>,
    /// Every vault the directory listed.
    pub vaults: Vec<Vault>,
    /// Every grant record the directory listed, unvalidated.
    pub grants: Vec<RawGrant>,
}

impl DirectorySnapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the user collection.
    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    /// Replaces the group collection.
    pub fn with_groups(mut self, groups: Vec<Group>) -> Self {
        self.groups = groups;
        self
    }

    /// Replaces the membership collection.
    pub fn with_memberships(mut self, memberships: Vec<Membership>) -> Self {
        self.memberships = memberships;
        self
    }

    /// Replaces the vault collection.
    pub fn with_vaults(mut self, vaults: Vec<Vault>) -> Self {
        self.vaults = vaults;
        self
    }

    /// Replaces the grant collection.
    pub fn with_grants(mut self, grants: Vec<RawGrant>) -> Self {
        self.grants = grants;
        self
    }

    /// Returns `true` when every collection is empty.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
            && self.groups.is_empty()
            && self.memberships.is_empty()
            && self.vaults.is_empty()
            && self.grants.is_empty()
    }
}
