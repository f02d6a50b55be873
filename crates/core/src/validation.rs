//! Field-level input normalization shared by the registries.

use thiserror::Error;

/// A required field was missing or blank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} is required")]
pub struct FieldError {
    /// Name of the offending field.
    pub field: &'static str,
}

/// Trims a required text field, rejecting blank values.
///
/// # Errors
///
/// Returns `FieldError` if the value is empty after trimming.
pub fn required_text(field: &'static str, value: &str) -> Result<String, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError { field });
    }
    Ok(trimmed.to_string())
}

/// Trims an optional text field; blank values become `None`.
#[must_use]
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
