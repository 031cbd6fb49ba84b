//! namesync - keep a Mac's ComputerName, HostName and LocalHostName in lockstep

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use namesync_cli::cli::Cli;
use namesync_cli::domain::{ConfigError, HostnameError, TransactionError};
use namesync_cli::output::json::format_error;

/// Environment variable holding the tracing filter.
const LOG_ENV: &str = "NAMESYNC_LOG";

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "namesync_cli=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Stable error code for `--json` output.
fn error_code(e: &anyhow::Error) -> &'static str {
    if let Some(t) = e.downcast_ref::<TransactionError>() {
        return match t {
            TransactionError::InvalidInput(_) => "invalid_input",
            TransactionError::BackupFailed { .. } => "backup_failed",
        };
    }
    if e.downcast_ref::<HostnameError>().is_some() {
        return "invalid_input";
    }
    if e.downcast_ref::<ConfigError>().is_some() {
        return "invalid_config";
    }
    "error"
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json = cli.json;

    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            match format_error(&format!("{e:#}"), error_code(&e)) {
                Ok(obj) if json => println!("{obj}"),
                _ => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
