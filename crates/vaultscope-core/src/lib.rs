#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Vaultscope Core Library
//!
//! Shared vocabulary for the Vaultscope access audit: identifiers,
//! directory entities, grants and permissions, report rows, and the
//! non-fatal warnings every stage of the audit can raise.

pub mod diagnostics;
pub mod types;

// Re-exports for convenience
pub use diagnostics::{AuditWarning, EntityKind};
pub use types::{
    AccessRow, DirectorySnapshot, Grant, GrantSubject, Group, GroupId, MemberRef, Membership,
    Permission, PermissionSet, Provenance, RawGrant, User, UserId, Vault, VaultId,
};
