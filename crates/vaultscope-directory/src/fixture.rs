//! In-memory directory source for tests and offline audits.

use std::path::Path;

use async_trait::async_trait;
use vaultscope_core::{DirectorySnapshot, Group, Membership, RawGrant, User, Vault};

use crate::error::{Error, Result};
use crate::source::DirectorySource;

/// A [`DirectorySource`] that serves a fixed [`DirectorySnapshot`].
///
/// Backs `vaultscope audit --fixture <file>` and doubles as the test
/// stand-in for the `op` CLI. Failure injection lets tests drive the
/// error paths of snapshot loading.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    snapshot: DirectorySnapshot,
    failing: Option<String>,
}

impl StaticDirectory {
    /// Creates a source over the given snapshot.
    pub fn new(snapshot: DirectorySnapshot) -> Self {
        Self {
            snapshot,
            failing: None,
        }
    }

    /// Parses a source from fixture JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Reads and parses a fixture file.
    pub async fn from_path(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        Ok(Self::new(serde_json::from_slice(&bytes)?))
    }

    /// Makes the named collection fail with `SourceUnavailable`.
    pub fn with_failure(mut self, collection: impl Into<String>) -> Self {
        self.failing = Some(collection.into());
        self
    }

    /// The snapshot this source serves.
    pub fn snapshot(&self) -> &DirectorySnapshot {
        &self.snapshot
    }

    fn check(&self, collection: &str) -> Result<()> {
        match &self.failing {
            Some(failing) if failing == collection => {
                Err(Error::source_unavailable(collection, "injected failure"))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl DirectorySource for StaticDirectory {
    fn name(&self) -> &str {
        "fixture"
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.check("users")?;
        Ok(self.snapshot.users.clone())
    }

    async fn list_groups(&self) -> Result<Vec<Group>> {
        self.check("groups")?;
        Ok(self.snapshot.groups.clone())
    }

    async fn list_memberships(&self) -> Result<Vec<Membership>> {
        self.check("memberships")?;
        Ok(self.snapshot.memberships.clone())
    }

    async fn list_vaults(&self) -> Result<Vec<Vault>> {
        self.check("vaults")?;
        Ok(self.snapshot.vaults.clone())
    }

    async fn list_grants(&self) -> Result<Vec<RawGrant>> {
        self.check("grants")?;
        Ok(self.snapshot.grants.clone())
    }
}
