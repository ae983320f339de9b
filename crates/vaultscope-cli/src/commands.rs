//! Command handlers for the vaultscope binary.

use std::fs::File;
use std::io;
use std::path::Path;

use vaultscope_audit::run_audit;
use vaultscope_directory::{DirectorySource, OpCliDirectory, StaticDirectory, load_snapshot};
use vaultscope_report::{render_summary, write_report};

use crate::config::Config;
use crate::error::Result;

/// Runs the audit and writes the access report.
///
/// `output` falls back to the configured destination; `-` sends CSV to
/// stdout. When `fixture` is set the audit reads a snapshot file and
/// never touches the directory CLI.
pub async fn cmd_audit(
    config: &Config,
    output: Option<&Path>,
    fixture: Option<&Path>,
) -> Result<()> {
    let source = resolve_source(config, fixture).await?;
    tracing::info!(source = source.name(), "loading directory snapshot");
    let snapshot = load_snapshot(source.as_ref()).await?;

    let outcome = run_audit(&snapshot);
    for warning in &outcome.warnings {
        tracing::warn!("{warning}");
    }

    let destination = output.unwrap_or(&config.report.output);
    if destination.as_os_str() == "-" {
        write_report(io::stdout().lock(), &outcome.rows)?;
    } else {
        let file = File::create(destination)?;
        write_report(file, &outcome.rows)?;
        tracing::info!(
            path = %destination.display(),
            rows = outcome.rows.len(),
            "report written"
        );
    }

    eprintln!("{}", render_summary(&outcome.rows, &outcome.warnings));
    Ok(())
}

/// Verifies the directory CLI environment without running an audit.
pub async fn cmd_check(config: &Config) -> Result<()> {
    let source = op_source(config);
    source.preflight().await?;
    println!("ok: `{}` is installed and signed in", source.binary());
    Ok(())
}

fn op_source(config: &Config) -> OpCliDirectory {
    let mut source = OpCliDirectory::new(config.directory.binary.clone())
        .with_timeout(config.directory_timeout());
    if let Some(account) = &config.directory.account {
        source = source.with_account(account.clone());
    }
    source
}

async fn resolve_source(
    config: &Config,
    fixture: Option<&Path>,
) -> Result<Box<dyn DirectorySource>> {
    match fixture {
        Some(path) => {
            tracing::info!(path = %path.display(), "auditing snapshot file");
            Ok(Box::new(StaticDirectory::from_path(path).await?))
        }
        None => {
            let source = op_source(config);
            source.preflight().await?;
            Ok(Box::new(source))
        }
    }
}
