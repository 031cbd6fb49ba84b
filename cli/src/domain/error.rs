//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Field store errors ────────────────────────────────────────────────────────

/// Failures reported by a `FieldStore` for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{field} is not set")]
    NotFound { field: String },

    #[error("cannot read {field}: {reason}")]
    Unavailable { field: String, reason: String },

    #[error("cannot write {field}: {reason}")]
    WriteFailed { field: String, reason: String },

    #[error("{field} reads '{observed}' after restore, expected '{expected}'")]
    Diverged {
        field: String,
        expected: String,
        observed: String,
    },
}

// ── Transaction errors ────────────────────────────────────────────────────────

/// Errors that abort an identity transaction before any field is written.
///
/// Failures after the first write are never errors: they are reported as
/// `TransactionResult::RolledBack`.
#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Backup of {field} failed, nothing was changed: {source}")]
    BackupFailed {
        field: String,
        #[source]
        source: StoreError,
    },
}

// ── Hostname errors ───────────────────────────────────────────────────────────

/// Reasons a proposed hostname is unusable for all identity fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostnameError {
    #[error("Hostname is empty")]
    Empty,

    #[error("Hostname '{name}' is {len} bytes long; the limit is 63")]
    TooLong { name: String, len: usize },

    #[error("Hostname '{name}' contains '{ch}'; only letters, digits and '-' are allowed")]
    InvalidChar { name: String, ch: char },

    #[error("Hostname '{0}' must not start or end with '-'")]
    EdgeHyphen(String),

    #[error("Cannot derive a model family from '{0}'")]
    UnknownModel(String),
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\nValid values: {valid}")]
    InvalidValue {
        key: String,
        value: String,
        valid: String,
    },
}
