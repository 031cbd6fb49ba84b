//! Domain types and validators for namesync configuration.
//!
//! Pure functions only - no I/O, no async, no filesystem access.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &[
    "naming.department",
    "webhook.url",
    "webhook.timeout_secs",
    "store.sudo",
];
pub const VALID_BOOLEANS: &[&str] = &["true", "false"];
pub const WEBHOOK_TIMEOUT_RANGE: std::ops::RangeInclusive<u64> = 1..=60;

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.namesync/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NamesyncConfig {
    /// Hostname composition settings.
    #[serde(default)]
    pub naming: NamingConfig,
    /// Change notification settings.
    #[serde(default)]
    pub webhook: WebhookConfig,
    /// Field store settings.
    #[serde(default)]
    pub store: StoreConfig,
}

/// Hostname composition settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Prefix placed before the user and model, e.g. `Dev`.
    #[serde(default = "default_department")]
    pub department: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            department: default_department(),
        }
    }
}

fn default_department() -> String {
    "Dev".to_string()
}

/// Change notification settings. No URL means notifications are off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default = "default_webhook_timeout")]
    pub timeout_secs: u64,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: default_webhook_timeout(),
        }
    }
}

fn default_webhook_timeout() -> u64 {
    10
}

/// Field store settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    /// Run `scutil --set` through `sudo`.
    #[serde(default)]
    pub sudo: bool,
}

impl NamesyncConfig {
    /// Apply an already-validated `key = value` pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the key or value fails validation.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_config_key(key)?;
        validate_config_value(key, value)?;
        match key {
            "naming.department" => self.naming.department = value.to_string(),
            "webhook.url" => {
                self.webhook.url = (!value.is_empty()).then(|| value.to_string());
            }
            "webhook.timeout_secs" => self.webhook.timeout_secs = value.parse()?,
            "store.sudo" => self.store.sudo = value == "true",
            _ => anyhow::bail!("Unknown setting: {key}"),
        }
        Ok(())
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// An empty `webhook.url` is accepted and clears the setting.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    let invalid = |valid: &str| -> anyhow::Error {
        ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            valid: valid.to_string(),
        }
        .into()
    };
    match key {
        "naming.department" => {
            if crate::domain::hostname::normalize_component(value).is_empty() {
                return Err(invalid("a name containing at least one letter or digit"));
            }
        }
        "webhook.url" => {
            if !value.is_empty() && !value.starts_with("https://") {
                return Err(invalid("an https:// URL, or empty to disable"));
            }
        }
        "webhook.timeout_secs" => match value.parse::<u64>() {
            Ok(n) if WEBHOOK_TIMEOUT_RANGE.contains(&n) => {}
            _ => return Err(invalid("an integer from 1 to 60")),
        },
        "store.sudo" => {
            if !VALID_BOOLEANS.contains(&value) {
                return Err(invalid(&VALID_BOOLEANS.join(", ")));
            }
        }
        _ => {}
    }
    Ok(())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
