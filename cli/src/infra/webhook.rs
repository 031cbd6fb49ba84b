//! `ChangeNotifier` that POSTs the change record as JSON.

use std::time::Duration;

use anyhow::{Context, Result};
use namesync_common::ChangeRecord;

use crate::application::ports::ChangeNotifier;
use crate::domain::config::WebhookConfig;

/// Posts each `ChangeRecord` to a fixed URL.
pub struct WebhookNotifier {
    url: String,
    timeout: Duration,
}

impl WebhookNotifier {
    #[must_use]
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    /// Notifier for the configured URL, or `None` when no URL is set.
    #[must_use]
    pub fn from_config(config: &WebhookConfig) -> Option<Self> {
        config
            .url
            .as_deref()
            .map(|url| Self::new(url, Duration::from_secs(config.timeout_secs)))
    }
}

impl ChangeNotifier for WebhookNotifier {
    async fn notify(&self, record: &ChangeRecord) -> Result<()> {
        let body = serde_json::to_string(record).context("cannot serialize change record")?;
        let url = self.url.clone();
        let timeout = self.timeout;
        let status = tokio::task::spawn_blocking(move || post_json(&url, &body, timeout))
            .await
            .context("webhook task did not complete")??;
        tracing::debug!(status, "change notification delivered");
        Ok(())
    }
}

fn post_json(url: &str, body: &str, timeout: Duration) -> Result<u16> {
    match ureq::post(url)
        .timeout(timeout)
        .set("Content-Type", "application/json")
        .send_string(body)
    {
        Ok(resp) => Ok(resp.status()),
        Err(ureq::Error::Status(code, _)) => anyhow::bail!("webhook returned HTTP {code}"),
        Err(e) => Err(e).context("webhook request failed"),
    }
}
