//! Command implementations

pub mod apply;
pub mod config;
pub mod set;
pub mod show;
pub mod version;

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::rename::{self, RenameOutcome, RenameRequest};
use crate::domain::{NamesyncConfig, TransactionResult};
use crate::infra::system::detect_operator;
use crate::infra::webhook::WebhookNotifier;

/// Exit code: rolled back, every field restored.
pub const EXIT_ROLLED_BACK: u8 = 3;
/// Exit code: rolled back, at least one field could not be restored.
pub const EXIT_DEGRADED: u8 = 4;

/// Map a transaction outcome to the process exit code.
#[must_use]
pub fn outcome_exit_code(result: &TransactionResult) -> ExitCode {
    if result.is_committed() {
        ExitCode::SUCCESS
    } else if result.is_degraded() {
        ExitCode::from(EXIT_DEGRADED)
    } else {
        ExitCode::from(EXIT_ROLLED_BACK)
    }
}

/// Confirm with the operator, then rename. Shared by `set` and `apply`.
async fn confirm_and_rename(
    app: &AppContext,
    config: &NamesyncConfig,
    hostname: &str,
    operator: &str,
) -> Result<ExitCode> {
    let store = app.field_store(config);
    let notifier = WebhookNotifier::from_config(&config.webhook);
    let request = RenameRequest { hostname, operator };
    let outcome = rename::confirm_and_rename(&store, &notifier, app, &request, &app.reporter())
        .await?;

    match outcome {
        RenameOutcome::Declined => {
            app.output.warn("Cancelled, nothing was changed.");
            Ok(ExitCode::FAILURE)
        }
        RenameOutcome::Finished(result) => {
            app.renderer().render_outcome(hostname, &result)?;
            Ok(outcome_exit_code(&result))
        }
    }
}

/// Operator for notifications and hostname composition.
async fn operator(app: &AppContext) -> String {
    detect_operator(&app.runner).await
}
