//! JSON output helpers.
//!
//! Every `--json` code path prints exactly one pretty-printed object to
//! stdout, built here.

use anyhow::{Context, Result};
use serde_json::{Value, json};

use crate::application::services::identity::FieldValue;
use crate::domain::{NamesyncConfig, RollbackCause, TransactionResult};

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// `{"ComputerName": "...", "HostName": null, ...}`
#[must_use]
pub fn identity_json(values: &[FieldValue]) -> Value {
    let map = values
        .iter()
        .map(|f| (f.field.to_string(), json!(f.value)))
        .collect::<serde_json::Map<_, _>>();
    Value::Object(map)
}

/// Outcome object for `set` / `apply`.
#[must_use]
pub fn outcome_json(value: &str, result: &TransactionResult) -> Value {
    match result {
        TransactionResult::Committed => json!({
            "outcome": "committed",
            "value": value,
        }),
        TransactionResult::RolledBack {
            failed_field,
            cause,
            restore_failures,
        } => {
            let (kind, observed) = match cause {
                RollbackCause::WriteFailed(_) => ("write_failed", None),
                RollbackCause::VerificationFailed { observed } => {
                    ("verification_failed", observed.clone())
                }
            };
            json!({
                "outcome": "rolled_back",
                "value": value,
                "failed_field": failed_field,
                "cause": kind,
                "observed": observed,
                "message": cause.to_string(),
                "fully_restored": restore_failures.is_empty(),
                "restore_failures": restore_failures
                    .iter()
                    .map(|f| json!({"field": f.field, "error": f.error.to_string()}))
                    .collect::<Vec<_>>(),
            })
        }
    }
}

/// Config object plus its file location.
#[must_use]
pub fn config_json(config: &NamesyncConfig, path: &std::path::Path) -> Value {
    json!({
        "path": path.display().to_string(),
        "config": config,
    })
}

/// Renders results as JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    fn print(value: &Value) -> Result<()> {
        println!(
            "{}",
            serde_json::to_string_pretty(value).context("JSON serialization failed")?
        );
        Ok(())
    }

    /// Print the identity fields.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_identity(&self, values: &[FieldValue]) -> Result<()> {
        Self::print(&identity_json(values))
    }

    /// Print a transaction outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_outcome(&self, value: &str, result: &TransactionResult) -> Result<()> {
        Self::print(&outcome_json(value, result))
    }

    /// Print the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_config(&self, config: &NamesyncConfig, path: &std::path::Path) -> Result<()> {
        Self::print(&config_json(config, path))
    }

    /// Print the CLI version.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        Self::print(&json!({ "version": version }))
    }
}
