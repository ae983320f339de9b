#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Vaultscope Directory Sources
//!
//! Where audit data comes from: the [`DirectorySource`] trait with its
//! five listing queries, the production `op` CLI adapter, and an
//! in-memory fixture source for tests and offline runs.

pub mod error;
pub mod fixture;
pub mod op_cli;
mod record;
pub mod source;

pub use error::{Error, Result};
pub use fixture::StaticDirectory;
pub use op_cli::OpCliDirectory;
pub use source::{DirectorySource, load_snapshot};
