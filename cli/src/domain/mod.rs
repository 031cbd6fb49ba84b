//! Domain layer - pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod hostname;
pub mod transaction;

pub use config::{NamesyncConfig, validate_config_key, validate_config_value};
pub use error::{ConfigError, HostnameError, StoreError, TransactionError};
pub use hostname::{
    MAX_HOSTNAME_LEN, compose_hostname, model_family, normalize_component, validate_hostname,
};
pub use transaction::{
    IDENTITY_FIELDS, RestoreFailure, RollbackCause, Snapshot, TransactionResult,
};
