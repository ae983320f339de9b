//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Vaultscope - vault access audit reporting
#[derive(Parser, Debug)]
#[command(name = "vaultscope", version)]
#[command(about = "Reports who can do what in which vault, and why", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, env = "VAULTSCOPE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug-level logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the audit and write the access report
    Audit {
        /// Report destination; `-` writes CSV to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Audit a snapshot JSON file instead of the live directory
        #[arg(long, value_name = "FILE")]
        fixture: Option<PathBuf>,
    },

    /// Verify the directory CLI is installed and signed in
    Check,
}
