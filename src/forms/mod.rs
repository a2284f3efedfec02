//! Form definitions backing the edit screens.
//!
//! Each screen posts a single flat form; the structs here are both the
//! rendered form values (every field a defined string) and the decoded POST
//! payload. `to_record` conversions parse dates, trim scalars to `None` and
//! sanitize note fields on the way into the domain.

use chrono::NaiveDate;
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::dates::parse_date_input;
use crate::domain::types::NoteText;

pub mod account;
pub mod contact;
pub mod policy;
pub mod policy_type;
pub mod program;
pub mod schedule;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0} is not a valid date")]
    InvalidDate(String),

    #[error("month number {0} is outside the calendar")]
    InvalidMonth(i32),

    #[error("{0} must be a ten digit phone number")]
    InvalidPhone(String),

    #[error("invalid {0} selection")]
    InvalidSelection(String),

    /// A conditionally-required field is missing; carries the full message.
    #[error("{0}")]
    Required(String),
}

impl FormError {
    /// The first user-facing message, for the validation-error dialog.
    pub fn message(&self) -> String {
        match self {
            FormError::Validation(errors) => first_validation_message(errors),
            other => other.to_string(),
        }
    }
}

/// Pulls the first field error message out of a `validator` error set.
pub fn first_validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(_, field_errors)| field_errors.iter())
        .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Form validation failed".to_string())
}

/// Trims a posted scalar; empty means "not set".
pub(crate) fn opt_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Trims and sanitizes a free-text note field.
pub(crate) fn opt_note(value: &str) -> Option<String> {
    let note = NoteText::new(value);
    (!note.is_empty()).then(|| note.into_inner())
}

/// Parses an optional date field, naming the field in the error.
pub(crate) fn opt_date(value: &str, label: &str) -> Result<Option<NaiveDate>, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    parse_date_input(trimmed)
        .map(Some)
        .ok_or_else(|| FormError::InvalidDate(label.to_string()))
}

/// Normalizes a posted currency amount to a two-decimal string.
///
/// Commas are stripped; a blank or unparseable value is "not set".
pub(crate) fn opt_currency(value: &str) -> Option<String> {
    let cleaned = value.replace(',', "");
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().map(|amount| format!("{amount:.2}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "Name is mandatory and cannot be empty"))]
        name: String,
    }

    #[test]
    fn first_message_surfaces_the_declared_text() {
        let sample = Sample {
            name: String::new(),
        };
        let errors = sample.validate().unwrap_err();
        assert_eq!(
            first_validation_message(&errors),
            "Name is mandatory and cannot be empty"
        );
    }

    #[test]
    fn scalars_trim_to_none() {
        assert_eq!(opt_text("  "), None);
        assert_eq!(opt_text(" Worcester "), Some("Worcester".to_string()));
    }

    #[test]
    fn currency_normalizes_to_two_decimals() {
        assert_eq!(opt_currency("1,250,000"), Some("1250000.00".to_string()));
        assert_eq!(opt_currency("985000.5"), Some("985000.50".to_string()));
        assert_eq!(opt_currency(""), None);
        assert_eq!(opt_currency("n/a"), None);
    }

    #[test]
    fn dates_parse_or_name_the_field() {
        assert!(opt_date("", "On Board Date").unwrap().is_none());
        assert!(opt_date("2024-05-01", "On Board Date").unwrap().is_some());
        let err = opt_date("05-2024", "On Board Date").unwrap_err();
        assert_eq!(err.message(), "On Board Date is not a valid date");
    }
}
