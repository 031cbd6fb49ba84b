//! Application service - rename this machine.
//!
//! Validates the requested hostname, runs the identity transaction over
//! `ComputerName`, `HostName` and `LocalHostName`, then reports the outcome
//! to the change notifier. Notification never changes the result.

use chrono::Utc;
use namesync_common::{ChangeOutcome, ChangeRecord};
use tracing::{debug, warn};

use crate::application::ports::{ChangeNotifier, Confirmer, FieldStore, ProgressReporter};
use crate::application::services::transaction;
use crate::domain::transaction::COMPUTER_NAME;
use crate::domain::{IDENTITY_FIELDS, TransactionError, TransactionResult, validate_hostname};

/// Inputs gathered by the command layer.
#[derive(Debug, Clone)]
pub struct RenameRequest<'a> {
    /// New value for every identity field.
    pub hostname: &'a str,
    /// Who is running the change, for the notification.
    pub operator: &'a str,
}

/// How a confirmed rename ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The operator said no. Nothing was read or written.
    Declined,
    /// The transaction ran to this result.
    Finished(TransactionResult),
}

/// Validate, ask the operator, then rename.
///
/// The hostname is validated before the question is asked, and a declined
/// question ends the call before the store is touched.
///
/// # Errors
///
/// Returns `TransactionError::InvalidInput` for an unusable hostname, the
/// confirmer's error if the question cannot be asked, or any error from
/// `rename_host`.
pub async fn confirm_and_rename(
    store: &impl FieldStore,
    notifier: &impl ChangeNotifier,
    confirmer: &impl Confirmer,
    request: &RenameRequest<'_>,
    reporter: &impl ProgressReporter,
) -> anyhow::Result<RenameOutcome> {
    validate_hostname(request.hostname)
        .map_err(|e| TransactionError::InvalidInput(e.to_string()))?;

    let prompt = format!(
        "Set ComputerName, HostName and LocalHostName to '{}'?",
        request.hostname
    );
    if !confirmer.confirm(&prompt)? {
        debug!(hostname = request.hostname, "rename declined");
        return Ok(RenameOutcome::Declined);
    }

    let result = rename_host(store, notifier, request, reporter).await?;
    Ok(RenameOutcome::Finished(result))
}

/// Rename the machine and notify.
///
/// The notification is awaited before returning, so a slow endpoint delays
/// the result by at most the notifier's own timeout (`webhook.timeout_secs`
/// for `WebhookNotifier`). Its outcome never changes the result.
///
/// # Errors
///
/// Returns `TransactionError::InvalidInput` if the hostname is not valid for
/// all identity fields, or `TransactionError::BackupFailed` if a field could
/// not be read before writing. No notification is sent in either case.
pub async fn rename_host(
    store: &impl FieldStore,
    notifier: &impl ChangeNotifier,
    request: &RenameRequest<'_>,
    reporter: &impl ProgressReporter,
) -> Result<TransactionResult, TransactionError> {
    validate_hostname(request.hostname)
        .map_err(|e| TransactionError::InvalidInput(e.to_string()))?;

    let previous = match store.get(COMPUTER_NAME).await {
        Ok(v) => Some(v),
        Err(e) => {
            debug!(error = %e, "previous name unavailable for notification");
            None
        }
    };

    let result = transaction::apply(store, &IDENTITY_FIELDS, request.hostname, reporter).await?;

    let record = change_record(request, previous, &result);
    if let Err(e) = notifier.notify(&record).await {
        warn!(error = %e, "change notification not delivered");
        reporter.warn("Change notification could not be delivered");
    }

    Ok(result)
}

/// Build the notification payload for a finished transaction.
#[must_use]
pub fn change_record(
    request: &RenameRequest<'_>,
    previous_value: Option<String>,
    result: &TransactionResult,
) -> ChangeRecord {
    let (outcome, failed_field, restore_failures) = match result {
        TransactionResult::Committed => (ChangeOutcome::Committed, None, 0),
        TransactionResult::RolledBack {
            failed_field,
            restore_failures,
            ..
        } => (
            ChangeOutcome::RolledBack,
            Some(failed_field.clone()),
            restore_failures.len(),
        ),
    };
    ChangeRecord {
        operator: request.operator.to_string(),
        previous_value,
        attempted_value: request.hostname.to_string(),
        outcome,
        failed_field,
        restore_failures,
        timestamp: Utc::now(),
    }
}
