//! Hostname composition and validation.
//!
//! Pure functions only - no I/O, no async, no process execution.
//! The rules are those of `LocalHostName`, the strictest of the three
//! identity fields, so a name that passes here is accepted by all of them.

use crate::domain::error::HostnameError;

/// Longest name accepted, in bytes (one DNS label).
pub const MAX_HOSTNAME_LEN: usize = 63;

/// Reduce free text to a hostname-safe component.
///
/// ASCII letters and digits are kept; whitespace, `_`, `.` and `-` become a
/// single `-`; anything else is dropped. Leading and trailing hyphens are
/// trimmed.
#[must_use]
pub fn normalize_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch);
        } else if (ch.is_whitespace() || matches!(ch, '_' | '.' | '-')) && !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_matches('-').to_string()
}

/// Strip the generation suffix from a `hw.model` string.
///
/// `"MacBookPro18,3"` becomes `"MacBookPro"`, `"Mac16,1"` becomes `"Mac"`.
///
/// # Errors
///
/// Returns `HostnameError::UnknownModel` if nothing is left after stripping.
pub fn model_family(hw_model: &str) -> Result<String, HostnameError> {
    let family = hw_model
        .trim()
        .trim_end_matches(|c: char| c.is_ascii_digit() || c == ',');
    let family = normalize_component(family);
    if family.is_empty() {
        return Err(HostnameError::UnknownModel(hw_model.trim().to_string()));
    }
    Ok(family)
}

/// Build `<department>-<user>-<model>`, skipping components that normalise
/// to nothing, and validate the result.
///
/// # Errors
///
/// Returns the `validate_hostname` error for the composed name.
pub fn compose_hostname(department: &str, user: &str, model: &str) -> Result<String, HostnameError> {
    let name = [department, user, model]
        .iter()
        .map(|c| normalize_component(c))
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    validate_hostname(&name)?;
    Ok(name)
}

/// Check that `name` can be written to every identity field unchanged.
///
/// # Errors
///
/// Returns an error if the name is empty, longer than 63 bytes, contains a
/// character other than ASCII letters, digits or `-`, or starts or ends
/// with `-`.
pub fn validate_hostname(name: &str) -> Result<(), HostnameError> {
    if name.is_empty() {
        return Err(HostnameError::Empty);
    }
    if let Some(ch) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-'))
    {
        return Err(HostnameError::InvalidChar {
            name: name.to_string(),
            ch,
        });
    }
    if name.len() > MAX_HOSTNAME_LEN {
        return Err(HostnameError::TooLong {
            name: name.to_string(),
            len: name.len(),
        });
    }
    if name.starts_with('-') || name.ends_with('-') {
        return Err(HostnameError::EdgeHyphen(name.to_string()));
    }
    Ok(())
}
