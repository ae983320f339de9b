//! Vaultscope CLI
//!
//! Command-line interface for vault access audit reporting.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vaultscope_cli::cli::{Args, Command};
use vaultscope_cli::commands;
use vaultscope_cli::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = Config::load(args.config.as_deref())?;

    match args.command {
        Command::Audit { output, fixture } => {
            commands::cmd_audit(&config, output.as_deref(), fixture.as_deref()).await?;
        }
        Command::Check => commands::cmd_check(&config).await?,
    }

    Ok(())
}

/// Initialize logging on stderr, keeping stdout clean for `--output -`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
