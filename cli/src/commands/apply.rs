//! `namesync apply` - derive the standard hostname and set it.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::{config_service, identity};
use crate::infra::system::detect_model;
use crate::output::progress;

/// Arguments for the apply command.
#[derive(Args)]
pub struct ApplyArgs {
    /// Department prefix (default: naming.department from config)
    #[arg(long)]
    pub department: Option<String>,

    /// User component (default: the current operator)
    #[arg(long)]
    pub user: Option<String>,

    /// Hardware model, e.g. MacBookPro18,3 (default: sysctl hw.model)
    #[arg(long)]
    pub model: Option<String>,
}

/// Run the apply command.
///
/// # Errors
///
/// Returns an error if the model cannot be detected, the composed name is
/// invalid, the prompt fails, or a field cannot be backed up.
pub async fn run(app: &AppContext, args: &ApplyArgs) -> Result<ExitCode> {
    let config = config_service::load_config(&app.config_store)?;
    let operator = super::operator(app).await;

    let department = args.department.as_deref().unwrap_or(&config.naming.department);
    let user = args.user.as_deref().unwrap_or(&operator);
    let model = match &args.model {
        Some(m) => m.clone(),
        None => {
            let pb = progress::spinner(&app.output, "Detecting hardware model...");
            match detect_model(&app.runner).await {
                Ok(m) => {
                    progress::finish_ok(pb, &format!("Model: {m}"));
                    m
                }
                Err(e) => {
                    progress::clear(pb);
                    return Err(e);
                }
            }
        }
    };

    let hostname = identity::suggest_hostname(department, user, &model)?;
    app.output.info(&format!("Proposed hostname: {hostname}"));

    super::confirm_and_rename(app, &config, &hostname, &operator).await
}
