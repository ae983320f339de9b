//! Error types for directory sources.

/// Errors raised while querying a directory source.
///
/// Warnings about individual records never appear here; anything a
/// source can tolerate it reports through the audit's warning channel
/// instead. An `Error` means a whole collection could not be
/// materialized and the audit cannot proceed.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A collection listing failed outright.
    #[error("{collection} listing unavailable: {reason}")]
    SourceUnavailable {
        /// Which collection could not be listed.
        collection: String,
        /// Why the listing failed.
        reason: String,
    },

    /// The directory CLI binary could not be found.
    #[error("directory CLI `{binary}` not found; install it or set [directory].binary")]
    CliNotFound {
        /// The binary that was invoked.
        binary: String,
    },

    /// The CLI is installed but has no authenticated session.
    #[error("not signed in to `{binary}`: {detail}")]
    NotSignedIn {
        /// The binary that was invoked.
        binary: String,
        /// What the CLI said about the missing session.
        detail: String,
    },

    /// A single CLI invocation exceeded the configured timeout.
    #[error("{collection} listing timed out after {seconds}s")]
    Timeout {
        /// Which collection was being listed.
        collection: String,
        /// The timeout that elapsed.
        seconds: u64,
    },

    /// I/O error while reading a fixture file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A fixture file that did not parse as a snapshot.
    #[error("fixture decode error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience `Result` type alias for directory operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a source-unavailable error.
    pub fn source_unavailable<C, R>(collection: C, reason: R) -> Self
    where
        C: Into<String>,
        R: Into<String>,
    {
        Error::SourceUnavailable {
            collection: collection.into(),
            reason: reason.into(),
        }
    }

    /// Creates a not-signed-in error.
    pub fn not_signed_in<B, D>(binary: B, detail: D) -> Self
    where
        B: Into<String>,
        D: Into<String>,
    {
        Error::NotSignedIn {
            binary: binary.into(),
            detail: detail.into(),
        }
    }

    /// Returns whether the failure is about the CLI environment rather
    /// than the directory data, i.e. whether `vaultscope check` would
    /// have caught it before an audit started.
    pub fn is_environment(&self) -> bool {
        matches!(self, Error::CliNotFound { .. } | Error::NotSignedIn { .. })
    }
}
