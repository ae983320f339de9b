//! TOML configuration for the vaultscope binary.
//!
//! Resolution order: an explicit `--config` path (which must exist and
//! parse), otherwise the platform config file if present, otherwise
//! built-in defaults. Every key is optional; a partial file overrides
//! only the keys it names.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use vaultscope_directory::op_cli::DEFAULT_TIMEOUT_SECS;

use crate::error::{Error, Result};

/// Root configuration for the binary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory source settings.
    pub directory: DirectoryConfig,
    /// Report emission settings.
    pub report: ReportConfig,
}

/// Settings for the directory CLI source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Binary to invoke for directory queries.
    pub binary: String,
    /// Account to pass via `--account`; `None` uses the CLI's default.
    pub account: Option<String>,
    /// Per-invocation timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            binary: "op".to_string(),
            account: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Settings for report output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Report destination used when `--output` is not given.
    pub output: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("access-report.csv"),
        }
    }
}

impl Config {
    /// Loads configuration, falling back to defaults when no file exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Parses a single TOML file, which must exist.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|err| Error::config(format!("{}: {err}", path.display())))?;
        toml::from_str(&content).map_err(|err| Error::config(format!("{}: {err}", path.display())))
    }

    /// The platform config file location, e.g.
    /// `~/.config/vaultscope/config.toml` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vaultscope").join("config.toml"))
    }

    /// The directory timeout as a [`Duration`].
    pub fn directory_timeout(&self) -> Duration {
        Duration::from_secs(self.directory.timeout_secs)
    }
}
