//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (non-empty natural keys, month
//! numbers within the calendar, normalized contact data) so that once a value
//! reaches the domain layer it can be treated as trusted.
use std::ops::Deref;

use phonenumber::{Mode, parse};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use validator::ValidateEmail;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Phone number did not meet expected format.
    #[error("invalid phone number")]
    InvalidPhone,
    /// Month number outside the 1..=12 calendar range.
    #[error("month number {0} is outside 1..=12")]
    MonthOutOfRange(i32),
    /// Policy mod is not a zero-padded number.
    #[error("invalid policy mod: {0}")]
    InvalidPolicyMod(String),
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for NonEmptyString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let inner = NonEmptyString::new(value)?;
                Ok(Self(inner.into_inner()))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(
    ProgramName,
    "Affinity program natural key enforcing trimmed, non-empty values."
);

non_empty_string_newtype!(
    CustomerNum,
    "Special-account customer number enforcing trimmed, non-empty values."
);

non_empty_string_newtype!(
    PolicyNumber,
    "Policy number component of the policy natural key."
);

/// Zero-padded policy modification sequence (`"00"`, `"01"`, ...).
///
/// Together with [`PolicyNumber`] this forms the policy natural key. The
/// next-mod clone increments the sequence while keeping two-character zero
/// padding.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PolicyMod(String);

impl PolicyMod {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(TypeConstraintError::InvalidPolicyMod(trimmed));
        }
        Ok(Self(trimmed))
    }

    /// The following modification in the sequence, padded to two digits.
    pub fn next(&self) -> Self {
        let value: u32 = self.0.parse().unwrap_or(0);
        Self(format!("{:02}", value + 1))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for PolicyMod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for PolicyMod {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Calendar month number, always within `1..=12`.
///
/// Child schedule rows are keyed by month; a row with a month outside the
/// calendar is a data-integrity violation and is rejected at construction
/// instead of ever being used as a slot index.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthNumber(u8);

impl MonthNumber {
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if (1..=12).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(TypeConstraintError::MonthOutOfRange(value))
        }
    }

    /// Month number from a zero-based slot index.
    pub fn from_index(index: usize) -> Result<Self, TypeConstraintError> {
        Self::new(index as i32 + 1)
    }

    /// Zero-based slot index for this month.
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    pub const fn get(self) -> i32 {
        self.0 as i32
    }
}

impl Display for MonthNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for MonthNumber {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Lower-cased and validated email address for distribution recipients.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ContactEmail(String);

impl ContactEmail {
    /// Validates and normalizes an email string.
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let normalized = email.into().trim().to_lowercase();
        if normalized.validate_email() {
            Ok(Self(normalized))
        } else {
            Err(TypeConstraintError::InvalidEmail)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ContactEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for ContactEmail {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Normalizes a phone number string to E.164 format.
pub fn normalize_phone_to_e164(value: &str) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    let parsed = parse(None, trimmed).map_err(|_| TypeConstraintError::InvalidPhone)?;
    Ok(parsed.format().mode(Mode::E164).to_string())
}

/// Normalized phone number wrapper (expected E.164).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ContactPhone(String);

impl ContactPhone {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let normalized = normalize_phone_to_e164(&value.into())?;
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ContactPhone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for ContactPhone {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Checks a ten-digit US phone entry on the contact tabs.
///
/// Unlike [`ContactPhone`] this accepts whatever punctuation the user typed;
/// only the digit count matters, and empty values are allowed.
pub fn is_valid_ten_digit_phone(value: &str) -> bool {
    let text = value.trim();
    if text.is_empty() {
        return true;
    }
    text.chars().filter(|c| c.is_ascii_digit()).count() == 10
}

/// Free-text note sanitized of any HTML the user may have pasted in.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NoteText(String);

impl NoteText {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(ammonia::clean(&value.into()).trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for NoteText {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_string_trims_and_rejects_blank() {
        assert_eq!(
            NonEmptyString::new("  Acme Logistics  ").unwrap().as_str(),
            "Acme Logistics"
        );
        assert_eq!(
            NonEmptyString::new("   "),
            Err(TypeConstraintError::EmptyString)
        );
    }

    #[test]
    fn policy_mod_increments_with_zero_padding() {
        let m = PolicyMod::new("00").unwrap();
        assert_eq!(m.next().as_str(), "01");
        let m = PolicyMod::new("09").unwrap();
        assert_eq!(m.next().as_str(), "10");
        let m = PolicyMod::new("10").unwrap();
        assert_eq!(m.next().as_str(), "11");
    }

    #[test]
    fn policy_mod_rejects_non_numeric() {
        assert!(PolicyMod::new("1A").is_err());
        assert!(PolicyMod::new("").is_err());
    }

    #[test]
    fn month_number_bounds() {
        assert!(MonthNumber::new(0).is_err());
        assert!(MonthNumber::new(13).is_err());
        let m = MonthNumber::new(12).unwrap();
        assert_eq!(m.index(), 11);
        assert_eq!(MonthNumber::from_index(0).unwrap().get(), 1);
    }

    #[test]
    fn contact_email_normalizes_case() {
        let email = ContactEmail::new(" JHoule@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "jhoule@example.com");
        assert!(ContactEmail::new("not-an-email").is_err());
    }

    #[test]
    fn ten_digit_phone_ignores_punctuation() {
        assert!(is_valid_ten_digit_phone("(508) 555-0199"));
        assert!(is_valid_ten_digit_phone(""));
        assert!(!is_valid_ten_digit_phone("555-0199"));
    }

    #[test]
    fn note_text_strips_markup() {
        let note = NoteText::new("<script>alert('x')</script>Reviewed with broker");
        assert_eq!(note.as_str(), "Reviewed with broker");
    }
}
