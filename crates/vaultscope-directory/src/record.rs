//! Wire records for the `op` CLI's JSON payloads.
//!
//! The CLI reports more fields than the audit consumes (account type,
//! state, timestamps); these structs keep only what the report needs
//! and tolerate everything else.

use serde::Deserialize;
use vaultscope_core::{Group, User, Vault};

/// One entry of `op user list`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UserRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        User::new(record.id, record.name, record.email)
    }
}

/// One entry of `op group list`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GroupRecord {
    pub id: String,
    pub name: String,
}

impl From<GroupRecord> for Group {
    fn from(record: GroupRecord) -> Self {
        Group::new(record.id, record.name)
    }
}

/// One entry of `op vault list`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct VaultRecord {
    pub id: String,
    pub name: String,
}

impl From<VaultRecord> for Vault {
    fn from(record: VaultRecord) -> Self {
        Vault::new(record.id, record.name)
    }
}

/// One entry of `op vault user list` or `op vault group list`: a
/// subject id plus its permissions on that vault. Names and emails are
/// not taken from here; the user and group tables are authoritative.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct VaultAccessRecord {
    pub id: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// One entry of `op group user list`; only the member id is used.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GroupMemberRecord {
    pub id: String,
}
