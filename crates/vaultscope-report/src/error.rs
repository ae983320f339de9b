//! Error types for report emission.

/// Errors raised while writing a report.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O failure on the underlying writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV emission failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience `Result` type alias for report operations.
pub type Result<T> = std::result::Result<T, Error>;
