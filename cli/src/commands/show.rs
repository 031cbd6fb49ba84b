//! `namesync show` - print the current identity fields.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::{config_service, identity};

/// Run the show command.
///
/// # Errors
///
/// Returns an error if `scutil` cannot be queried.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let config = config_service::load_config(&app.config_store)?;
    let values = identity::read_identity(&app.field_store(&config)).await?;
    app.renderer().render_identity(&values)?;
    Ok(ExitCode::SUCCESS)
}
