//! Input validation helpers.
//!
//! All of these run before any network call; a failure means no request was
//! issued (spec'd as the "validation failure" error class).

use crate::error::CoreError;

/// Validate that a required text field is non-blank.
///
/// Returns the trimmed value so callers store the normalized form.
pub fn require_non_blank<'a>(value: &'a str, field: &str) -> Result<&'a str, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(trimmed)
}

/// Validate that a numeric field is strictly positive.
pub fn require_positive(value: i64, field: &str) -> Result<(), CoreError> {
    if value <= 0 {
        return Err(CoreError::Validation(format!(
            "{field} must be greater than zero, got {value}"
        )));
    }
    Ok(())
}
