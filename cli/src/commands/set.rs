//! `namesync set` - set all identity fields to an explicit name.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::config_service;

/// Arguments for the set command.
#[derive(Args)]
pub struct SetArgs {
    /// New name, e.g. Dev-alice-MacBookPro
    pub name: String,
}

/// Run the set command.
///
/// # Errors
///
/// Returns an error if the name is invalid, the prompt fails, or a field
/// cannot be backed up.
pub async fn run(app: &AppContext, args: &SetArgs) -> Result<ExitCode> {
    let config = config_service::load_config(&app.config_store)?;
    let operator = super::operator(app).await;
    super::confirm_and_rename(app, &config, &args.name, &operator).await
}
