//! Application service - inspect and derive the machine identity.

use anyhow::Result;

use crate::application::ports::FieldStore;
use crate::domain::{HostnameError, IDENTITY_FIELDS, StoreError, compose_hostname, model_family};

/// Current value of one identity field; `None` when the field is not set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValue {
    pub field: &'static str,
    pub value: Option<String>,
}

/// Read all identity fields in write order.
///
/// # Errors
///
/// Returns an error if the store cannot be queried. A field that is simply
/// not set is reported as `None`, not as an error.
pub async fn read_identity(store: &impl FieldStore) -> Result<Vec<FieldValue>> {
    let mut values = Vec::with_capacity(IDENTITY_FIELDS.len());
    for field in IDENTITY_FIELDS {
        let value = match store.get(field).await {
            Ok(v) => Some(v),
            Err(StoreError::NotFound { .. }) => None,
            Err(e) => return Err(e.into()),
        };
        values.push(FieldValue { field, value });
    }
    Ok(values)
}

/// `true` when every identity field holds the same value.
#[must_use]
pub fn is_consistent(values: &[FieldValue]) -> bool {
    let mut iter = values.iter().map(|f| f.value.as_deref());
    match iter.next() {
        Some(Some(first)) => iter.all(|v| v == Some(first)),
        _ => false,
    }
}

/// Derive `<department>-<operator>-<model family>` from a raw `hw.model`.
///
/// # Errors
///
/// Returns an error if the model has no family name or the composed name is
/// not a valid hostname.
pub fn suggest_hostname(
    department: &str,
    operator: &str,
    hw_model: &str,
) -> Result<String, HostnameError> {
    let family = model_family(hw_model)?;
    compose_hostname(department, operator, &family)
}
