//! Application service - configuration use-cases.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::NamesyncConfig;

/// Load configuration.
pub fn load_config(store: &impl ConfigStore) -> Result<NamesyncConfig> {
    store.load()
}

/// Validate and persist a single `key = value` setting.
///
/// The stored file is left untouched if validation fails.
///
/// # Errors
///
/// Returns an error if the key or value is invalid, or the store fails.
pub fn set_value(store: &impl ConfigStore, key: &str, value: &str) -> Result<NamesyncConfig> {
    let mut config = store.load()?;
    config.set(key, value)?;
    store.save(&config)?;
    Ok(config)
}
