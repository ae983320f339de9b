//! The directory source seam.

use async_trait::async_trait;
use vaultscope_core::{DirectorySnapshot, Group, Membership, RawGrant, User, Vault};

use crate::error::Result;

/// A backend that can list the five audit collections.
///
/// Implementations must be safe to query concurrently:
/// [`load_snapshot`] issues all five queries at once. The queries are
/// independent by contract; none may assume another has run first.
#[async_trait]
pub trait DirectorySource: Send + Sync {
    /// Short name for logs (`"op"`, `"fixture"`, ...).
    fn name(&self) -> &str;

    /// Lists every user.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Lists every group.
    async fn list_groups(&self) -> Result<Vec<Group>>;

    /// Lists every membership edge.
    async fn list_memberships(&self) -> Result<Vec<Membership>>;

    /// Lists every vault.
    async fn list_vaults(&self) -> Result<Vec<Vault>>;

    /// Lists every grant record, unvalidated.
    async fn list_grants(&self) -> Result<Vec<RawGrant>>;
}

/// Materializes all five collections from `source` concurrently.
///
/// Any single failure aborts the whole load; a partial snapshot is
/// never returned, so the aggregation stage can trust that an absent
/// entity really was absent from the directory.
pub async fn load_snapshot(source: &dyn DirectorySource) -> Result<DirectorySnapshot> {
    let (users, groups, memberships, vaults, grants) = tokio::try_join!(
        source.list_users(),
        source.list_groups(),
        source.list_memberships(),
        source.list_vaults(),
        source.list_grants(),
    )?;

    tracing::debug!(
        source = source.name(),
        users = users.len(),
        groups = groups.len(),
        memberships = memberships.len(),
        vaults = vaults.len(),
        grants = grants.len(),
        "directory snapshot loaded"
    );

    Ok(DirectorySnapshot {
        users,
        groups,
        memberships,
        vaults,
        grants,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::fixture::StaticDirectory;
    use vaultscope_core::{Group, User, Vault};

    fn sample() -> StaticDirectory {
        StaticDirectory::new(
            DirectorySnapshot::new()
                .with_users(vec![User::new("u-1", "Alice", "alice@example.com")])
                .with_groups(vec![Group::new("g-1", "Engineering")])
                .with_memberships(vec![Membership::user("u-1", "g-1")])
                .with_vaults(vec![Vault::new("v-1", "Infra")])
                .with_grants(vec![RawGrant::group("v-1", "g-1", ["view"])]),
        )
    }

    #[tokio::test]
    async fn test_load_snapshot_materializes_all_collections() {
        let source = sample();
        let snapshot = load_snapshot(&source).await.unwrap();
        assert_eq!(snapshot.users.len(), 1);
        assert_eq!(snapshot.groups.len(), 1);
        assert_eq!(snapshot.memberships.len(), 1);
        assert_eq!(snapshot.vaults.len(), 1);
        assert_eq!(snapshot.grants.len(), 1);
    }

    #[tokio::test]
    async fn test_load_snapshot_fails_when_any_collection_fails() {
        let source = sample().with_failure("vaults");
        let err = load_snapshot(&source).await.unwrap_err();
        let Error::SourceUnavailable { collection, .. } = err else {
            unreachable!("Expected SourceUnavailable error variant");
        };
        assert_eq!(collection, "vaults");
    }
}
