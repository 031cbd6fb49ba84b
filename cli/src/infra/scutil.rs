//! `FieldStore` over macOS `scutil`.
//!
//! `scutil --get <field>` and `scutil --set <field> <value>` read and write
//! the system configuration name records. Writing needs root; with
//! `store.sudo` the write is run as `sudo -n scutil ...`, which requires a
//! cached sudo ticket (`sudo -v`).

use std::process::Output;

use crate::application::ports::{CommandRunner, FieldStore};
use crate::domain::StoreError;

const SCUTIL: &str = "scutil";

/// Production field store driving `scutil` through a `CommandRunner`.
pub struct ScutilFieldStore<R> {
    runner: R,
    sudo: bool,
}

impl<R: CommandRunner> ScutilFieldStore<R> {
    #[must_use]
    pub fn new(runner: R, sudo: bool) -> Self {
        Self { runner, sudo }
    }

    /// The runner the store drives.
    pub fn runner(&self) -> &R {
        &self.runner
    }
}

/// Both streams, trimmed and joined: `scutil` is not consistent about
/// which one carries its diagnostics.
fn diagnostics(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let text = [stdout.trim(), stderr.trim()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("; ");
    if text.is_empty() {
        format!("scutil exited with {}", output.status)
    } else {
        text
    }
}

impl<R: CommandRunner> FieldStore for ScutilFieldStore<R> {
    async fn get(&self, field: &str) -> Result<String, StoreError> {
        let output = self
            .runner
            .run(SCUTIL, &["--get", field])
            .await
            .map_err(|e| StoreError::Unavailable {
                field: field.to_string(),
                reason: format!("{e:#}"),
            })?;

        if output.status.success() {
            return Ok(String::from_utf8_lossy(&output.stdout).trim().to_string());
        }
        let reason = diagnostics(&output);
        if reason.contains("not set") {
            return Err(StoreError::NotFound {
                field: field.to_string(),
            });
        }
        Err(StoreError::Unavailable {
            field: field.to_string(),
            reason,
        })
    }

    async fn set(&self, field: &str, value: &str) -> Result<(), StoreError> {
        let result = if self.sudo {
            self.runner
                .run("sudo", &["-n", SCUTIL, "--set", field, value])
                .await
        } else {
            self.runner.run(SCUTIL, &["--set", field, value]).await
        };
        let write_failed = |reason: String| StoreError::WriteFailed {
            field: field.to_string(),
            reason,
        };
        let output = result.map_err(|e| write_failed(format!("{e:#}")))?;
        if !output.status.success() {
            return Err(write_failed(diagnostics(&output)));
        }
        Ok(())
    }
}
