//! Core types for the access audit.

mod entity;
mod grant;
mod ids;
mod proptests;
mod report;
mod snapshot;

pub use entity::{Group, MemberRef, Membership, User, Vault};
pub use grant::{Grant, GrantSubject, Permission, PermissionSet, RawGrant};
pub use ids::{GroupId, UserId, VaultId};
pub use report::{AccessRow, Provenance};
pub use snapshot::DirectorySnapshot;
