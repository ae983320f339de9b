//! Directory source backed by the 1Password `op` CLI.
//!
//! Every query shells out to `op ... --format=json` and decodes the
//! payload. Grant listing iterates vaults and merges the per-vault
//! user and group listings; a failure against one vault is logged and
//! skipped so a single revoked share cannot sink the whole audit.

use std::io;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tokio::process::Command;
use vaultscope_core::{Group, Membership, RawGrant, User, Vault};

use crate::error::{Error, Result};
use crate::record::{GroupMemberRecord, GroupRecord, UserRecord, VaultAccessRecord, VaultRecord};
use crate::source::DirectorySource;

/// Default seconds before a single CLI invocation is abandoned.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// A [`DirectorySource`] that shells out to the `op` CLI.
#[derive(Debug, Clone)]
pub struct OpCliDirectory {
    binary: String,
    account: Option<String>,
    timeout: Duration,
}

impl OpCliDirectory {
    /// Creates a source that invokes the given binary (usually `"op"`).
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            account: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Selects a specific account with `--account`.
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    /// Overrides the per-invocation timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The binary this source invokes.
    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Checks that the CLI exists and has a signed-in session.
    ///
    /// `op whoami` exits non-zero when no session is active, which is
    /// the cheapest probe the CLI offers.
    pub async fn preflight(&self) -> Result<()> {
        let output = self.invoke(&["whoami"], "session").await?;
        if output.status.success() {
            tracing::debug!(binary = %self.binary, "directory CLI session verified");
            Ok(())
        } else {
            Err(Error::not_signed_in(
                &self.binary,
                stderr_excerpt(&output.stderr),
            ))
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.args(args);
        if let Some(account) = &self.account {
            cmd.args(["--account", account]);
        }
        // Never let the CLI block on an interactive prompt, and reap
        // the child if the timeout drops the future.
        cmd.stdin(Stdio::null());
        cmd.kill_on_drop(true);
        cmd
    }

    async fn invoke(&self, args: &[&str], collection: &str) -> Result<std::process::Output> {
        tracing::debug!(binary = %self.binary, ?args, "invoking directory CLI");
        let mut cmd = self.command(args);
        let outcome = tokio::time::timeout(self.timeout, cmd.output())
            .await
            .map_err(|_| Error::Timeout {
                collection: collection.to_string(),
                seconds: self.timeout.as_secs(),
            })?;
        outcome.map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => Error::CliNotFound {
                binary: self.binary.clone(),
            },
            _ => Error::source_unavailable(collection, err.to_string()),
        })
    }

    async fn run_json<T: DeserializeOwned>(&self, args: &[&str], collection: &str) -> Result<T> {
        let mut full_args = args.to_vec();
        full_args.push("--format=json");
        let output = self.invoke(&full_args, collection).await?;
        if !output.status.success() {
            return Err(Error::source_unavailable(
                collection,
                stderr_excerpt(&output.stderr),
            ));
        }
        serde_json::from_slice(&output.stdout).map_err(|err| {
            Error::source_unavailable(collection, format!("unparseable JSON payload: {err}"))
        })
    }

    /// Lists one vault's grants for one subject kind. Failures come
    /// back as an empty list after a log line; the rest of the audit
    /// proceeds without this vault's rows for that kind.
    async fn vault_grants(&self, vault_id: &str, kind: &str) -> Vec<RawGrant> {
        let listing = self
            .run_json::<Vec<VaultAccessRecord>>(&["vault", kind, "list", vault_id], "grants")
            .await;
        match listing {
            Ok(records) => records
                .into_iter()
                .map(|record| {
                    RawGrant::new(
                        vault_id,
                        Some(kind.to_string()),
                        record.id,
                        record.permissions,
                    )
                })
                .collect(),
            Err(err) => {
                tracing::warn!(vault = %vault_id, kind, error = %err, "skipping grant listing for vault");
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl DirectorySource for OpCliDirectory {
    fn name(&self) -> &str {
        "op"
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let records: Vec<UserRecord> = self.run_json(&["user", "list"], "users").await?;
        Ok(records.into_iter().map(User::from).collect())
    }

    async fn list_groups(&self) -> Result<Vec<Group>> {
        let records: Vec<GroupRecord> = self.run_json(&["group", "list"], "groups").await?;
        Ok(records.into_iter().map(Group::from).collect())
    }

    async fn list_memberships(&self) -> Result<Vec<Membership>> {
        let groups: Vec<GroupRecord> = self.run_json(&["group", "list"], "memberships").await?;
        let mut memberships = Vec::new();
        for group in &groups {
            let members = self
                .run_json::<Vec<GroupMemberRecord>>(
                    &["group", "user", "list", &group.id],
                    "memberships",
                )
                .await;
            match members {
                Ok(members) => memberships.extend(
                    members
                        .into_iter()
                        .map(|member| Membership::user(member.id, group.id.clone())),
                ),
                Err(err) => {
                    tracing::warn!(group = %group.id, error = %err, "skipping member listing for group");
                }
            }
        }
        Ok(memberships)
    }

    async fn list_vaults(&self) -> Result<Vec<Vault>> {
        let records: Vec<VaultRecord> = self.run_json(&["vault", "list"], "vaults").await?;
        Ok(records.into_iter().map(Vault::from).collect())
    }

    async fn list_grants(&self) -> Result<Vec<RawGrant>> {
        let vaults: Vec<VaultRecord> = self.run_json(&["vault", "list"], "grants").await?;
        let mut grants = Vec::new();
        for vault in &vaults {
            grants.extend(self.vault_grants(&vault.id, "user").await);
            grants.extend(self.vault_grants(&vault.id, "group").await);
        }
        Ok(grants)
    }
}

/// First non-blank line of stderr, trimmed, for error messages.
fn stderr_excerpt(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("(no output)")
        .to_string()
}
