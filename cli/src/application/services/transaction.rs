//! Application service - all-or-nothing update of a group of fields.
//!
//! `apply` writes one value to every field of a group and either leaves all
//! of them holding it or puts all of them back. The phases run strictly one
//! after another: backup, apply, verify, then commit or rollback.

use tracing::{debug, info, warn};

use crate::application::ports::{FieldStore, ProgressReporter};
use crate::domain::{
    RestoreFailure, RollbackCause, Snapshot, StoreError, TransactionError, TransactionResult,
};

/// Set every field in `fields` to `desired`, verify, and roll back on any
/// failure.
///
/// Errors are returned only when nothing has been written. Once the first
/// write is issued the call always ends in `Committed` or `RolledBack`.
///
/// # Errors
///
/// - `TransactionError::InvalidInput` if `fields` or `desired` is empty.
///   The store is not touched.
/// - `TransactionError::BackupFailed` if any field cannot be read before the
///   first write. No write is issued.
pub async fn apply(
    store: &impl FieldStore,
    fields: &[&str],
    desired: &str,
    reporter: &impl ProgressReporter,
) -> Result<TransactionResult, TransactionError> {
    if fields.is_empty() {
        return Err(TransactionError::InvalidInput(
            "no fields to update".to_string(),
        ));
    }
    if desired.is_empty() {
        return Err(TransactionError::InvalidInput(
            "desired value is empty".to_string(),
        ));
    }

    reporter.step("Reading current values...");
    let snapshot = backup(store, fields).await?;

    reporter.step(&format!("Setting {} fields to '{desired}'...", fields.len()));
    for (i, field) in fields.iter().enumerate() {
        if let Err(e) = store.set(field, desired).await {
            warn!(field, error = %e, "write failed, rolling back");
            reporter.warn(&format!("Could not write {field}, rolling back"));
            let touched = if changed_by_failed_write(store, field, &snapshot).await {
                i + 1
            } else {
                i
            };
            let restore_failures = restore(store, &snapshot, touched, reporter).await;
            return Ok(TransactionResult::RolledBack {
                failed_field: (*field).to_string(),
                cause: RollbackCause::WriteFailed(e),
                restore_failures,
            });
        }
        debug!(field, value = desired, "written");
    }

    reporter.step("Verifying...");
    if let Some((failed_field, observed)) = verify(store, fields, desired).await {
        warn!(
            field = failed_field,
            observed = observed.as_deref().unwrap_or("<unreadable>"),
            "verification failed, rolling back"
        );
        reporter.warn(&format!("{failed_field} did not take the new value, rolling back"));
        let restore_failures = restore(store, &snapshot, fields.len(), reporter).await;
        return Ok(TransactionResult::RolledBack {
            failed_field: failed_field.to_string(),
            cause: RollbackCause::VerificationFailed { observed },
            restore_failures,
        });
    }

    info!(fields = fields.len(), value = desired, "committed");
    reporter.success(&format!("All fields set to '{desired}'"));
    Ok(TransactionResult::Committed)
}

/// Capture every field before the first write.
async fn backup(store: &impl FieldStore, fields: &[&str]) -> Result<Snapshot, TransactionError> {
    let mut snapshot = Snapshot::with_capacity(fields.len());
    for field in fields {
        let value = store
            .get(field)
            .await
            .map_err(|source| TransactionError::BackupFailed {
                field: (*field).to_string(),
                source,
            })?;
        debug!(field, value = %value, "captured");
        snapshot.record(field, value);
    }
    Ok(snapshot)
}

/// Whether a rejected write still left `field` away from its snapshot value.
/// An unreadable field counts as changed.
async fn changed_by_failed_write(
    store: &impl FieldStore,
    field: &str,
    snapshot: &Snapshot,
) -> bool {
    match store.get(field).await {
        Ok(current) => {
            let changed = snapshot.value_of(field) != Some(current.as_str());
            debug!(field, value = %current, changed, "re-read after failed write");
            changed
        }
        Err(e) => {
            debug!(field, error = %e, "re-read after failed write failed");
            true
        }
    }
}

/// Re-read every field. Returns the first field that does not hold
/// `desired`, with what it held instead (`None` if unreadable).
async fn verify<'f>(
    store: &impl FieldStore,
    fields: &[&'f str],
    desired: &str,
) -> Option<(&'f str, Option<String>)> {
    let mut first_mismatch = None;
    for field in fields {
        let observed = match store.get(field).await {
            Ok(v) => Some(v),
            Err(e) => {
                debug!(field, error = %e, "re-read failed");
                None
            }
        };
        if observed.as_deref() == Some(desired) {
            debug!(field, "verified");
            continue;
        }
        debug!(field, observed = ?observed, "mismatch");
        if first_mismatch.is_none() {
            first_mismatch = Some((*field, observed));
        }
    }
    first_mismatch
}

/// Write snapshot values back to the first `touched` fields, last written
/// first. Every field is attempted; failures are collected, not raised.
async fn restore(
    store: &impl FieldStore,
    snapshot: &Snapshot,
    touched: usize,
    reporter: &impl ProgressReporter,
) -> Vec<RestoreFailure> {
    let mut failures = Vec::new();
    for (field, original) in snapshot.restore_plan(touched) {
        match restore_one(store, field, original).await {
            Ok(()) => debug!(field, value = original, "restored"),
            Err(error) => {
                warn!(field, error = %error, "restore failed");
                reporter.warn(&format!("Could not restore {field}: {error}"));
                failures.push(RestoreFailure {
                    field: field.to_string(),
                    error,
                });
            }
        }
    }
    failures
}

async fn restore_one(store: &impl FieldStore, field: &str, original: &str) -> Result<(), StoreError> {
    store.set(field, original).await?;
    let observed = store.get(field).await?;
    if observed != original {
        return Err(StoreError::Diverged {
            field: field.to_string(),
            expected: original.to_string(),
            observed,
        });
    }
    Ok(())
}
