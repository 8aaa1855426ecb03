//! Field validation rules for owner forms
//!
//! Plugged into `validator` derives through `custom(function = ...)`.

use std::borrow::Cow;
use validator::ValidationError;

/// Maximum number of digits accepted in a telephone number
pub const TELEPHONE_MAX_DIGITS: usize = 10;

/// Reject empty or whitespace-only values
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("not_blank", "must not be blank"));
    }
    Ok(())
}

/// Telephone rule: present, digits only, at most `TELEPHONE_MAX_DIGITS`
pub fn telephone(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    telephone_digits(value)
}

/// Accept digits only, at most `TELEPHONE_MAX_DIGITS` of them.
///
/// Blank values pass; `telephone` checks presence first so a missing
/// number reports a single error.
pub fn telephone_digits(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }

    if !value.chars().all(|c| c.is_ascii_digit()) || value.len() > TELEPHONE_MAX_DIGITS {
        return Err(error(
            "digits",
            "numeric value out of bounds (<10 digits>.<0 digits> expected)",
        ));
    }

    Ok(())
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}
