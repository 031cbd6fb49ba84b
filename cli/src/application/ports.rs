//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and `namesync_common`, never
//! from `crate::infra`, `crate::commands`, or `crate::output`.

use std::path::PathBuf;
use std::process::Output;

use anyhow::Result;
use namesync_common::ChangeRecord;

use crate::domain::{NamesyncConfig, StoreError};

// ── Field Store Port ──────────────────────────────────────────────────────────

/// A key-value store of named system properties.
///
/// Offers no multi-key transaction; `application::services::transaction`
/// builds one on top of it.
#[allow(async_fn_in_trait)]
pub trait FieldStore {
    /// Read the current value of `field`.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if the field has no value,
    /// `StoreError::Unavailable` if the store could not be queried.
    async fn get(&self, field: &str) -> Result<String, StoreError>;

    /// Write `value` to `field`.
    ///
    /// # Errors
    ///
    /// `StoreError::WriteFailed` if the store rejected or could not perform
    /// the write.
    async fn set(&self, field: &str, value: &str) -> Result<(), StoreError>;
}

// ── Change Notification Port ──────────────────────────────────────────────────

/// Delivers a record of an attempted identity change to an external endpoint.
#[allow(async_fn_in_trait)]
pub trait ChangeNotifier {
    /// Send `record`. Callers treat failure as non-fatal.
    async fn notify(&self, record: &ChangeRecord) -> Result<()>;
}

/// Notifications are optional; `None` sends nothing.
impl<N: ChangeNotifier> ChangeNotifier for Option<N> {
    async fn notify(&self, record: &ChangeRecord) -> Result<()> {
        match self {
            Some(n) => n.notify(record).await,
            None => Ok(()),
        }
    }
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// Implementations should delegate to `run_with_timeout` using the
    /// instance's configured default timeout.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program with a custom timeout override.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    /// On timeout, the child process must be killed (not left orphaned).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: std::time::Duration,
    ) -> Result<Output>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait - no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Confirmation Port ─────────────────────────────────────────────────────────

/// Asks the operator a yes/no question before a change is made.
pub trait Confirmer {
    /// `true` to go ahead.
    ///
    /// # Errors
    ///
    /// Returns an error if the question cannot be asked (e.g. no TTY).
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts configuration persistence.
pub trait ConfigStore {
    /// Load the configuration, returning defaults when none is stored.
    fn load(&self) -> Result<NamesyncConfig>;
    /// Persist the configuration.
    fn save(&self, config: &NamesyncConfig) -> Result<()>;
    /// Location of the stored configuration.
    fn path(&self) -> Result<PathBuf>;
}
