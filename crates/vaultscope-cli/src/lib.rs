#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Vaultscope CLI
//!
//! The `vaultscope` binary: loads a directory snapshot, runs the
//! access audit, and writes the CSV report.
//!
//! - `vaultscope audit` writes one row per user-vault pair
//! - `vaultscope check` verifies the directory CLI environment

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use error::{Error, Result};
