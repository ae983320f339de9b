//! Error types for vaultscope-cli

use thiserror::Error;

/// Result type alias for vaultscope-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in vaultscope-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Configuration file problems
    #[error("Config error: {message}")]
    Config {
        /// What went wrong, including the offending path.
        message: String,
    },

    /// Error from a directory source
    #[error("Directory error: {0}")]
    Directory(#[from] vaultscope_directory::Error),

    /// Error while writing the report
    #[error("Report error: {0}")]
    Report(#[from] vaultscope_report::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a config error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}
