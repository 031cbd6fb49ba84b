//! Host probes used to compose a hostname.

use anyhow::{Context, Result};

use crate::application::ports::CommandRunner;

/// Environment variable that overrides the detected operator name.
pub const OPERATOR_ENV: &str = "NAMESYNC_OPERATOR";

/// Operator name used when nothing else is available.
pub const UNKNOWN_OPERATOR: &str = "unknown";

/// Raw hardware model, e.g. `MacBookPro18,3`.
///
/// # Errors
///
/// Returns an error if `sysctl` cannot be run or exits non-zero.
pub async fn detect_model(runner: &impl CommandRunner) -> Result<String> {
    let output = runner
        .run("sysctl", &["-n", "hw.model"])
        .await
        .context("cannot query hardware model")?;
    if !output.status.success() {
        anyhow::bail!(
            "sysctl hw.model failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Who is running namesync: `NAMESYNC_OPERATOR`, then `USER`, then
/// `whoami`, then `"unknown"`.
pub async fn detect_operator(runner: &impl CommandRunner) -> String {
    resolve_operator(|var| std::env::var(var).ok(), runner).await
}

/// `detect_operator` with the environment supplied by `lookup`.
pub async fn resolve_operator(
    lookup: impl Fn(&str) -> Option<String>,
    runner: &impl CommandRunner,
) -> String {
    let from_env = [OPERATOR_ENV, "USER"]
        .into_iter()
        .filter_map(&lookup)
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty());
    if let Some(name) = from_env {
        return name;
    }
    match runner.run("whoami", &[]).await {
        Ok(out) if out.status.success() => {
            let name = String::from_utf8_lossy(&out.stdout).trim().to_string();
            if name.is_empty() {
                UNKNOWN_OPERATOR.to_string()
            } else {
                name
            }
        }
        _ => UNKNOWN_OPERATOR.to_string(),
    }
}
