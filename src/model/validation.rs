use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Validation errors for registration fields.
///
/// The `Display` text is the inline message shown beneath the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Must be at least 2 characters")]
    NameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number (10 digits)")]
    InvalidPhone,
    #[error("Please enter a valid postal code (6 digits)")]
    InvalidPostalCode,
    #[error("Student ID must follow the pattern STU1234")]
    InvalidStudentId,
    #[error("Please provide at least 5 characters")]
    SupportDetailsTooShort,
    #[error("You must agree to the Terms and Conditions")]
    TermsNotAccepted,
}

/// Minimum trimmed length of a first or last name.
pub const MIN_NAME_LEN: usize = 2;

/// Minimum trimmed length of the learning-support details.
pub const MIN_SUPPORT_DETAILS_LEN: usize = 5;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid hardcoded regex")
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("valid hardcoded regex"));

static POSTAL_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{6}$").expect("valid hardcoded regex"));

static STUDENT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^STU[0-9]{4}$").expect("valid hardcoded regex"));

/// Validates a first or last name: at least two characters once trimmed.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().chars().count() >= MIN_NAME_LEN {
        Ok(())
    } else {
        Err(ValidationError::NameTooShort)
    }
}

/// Validates an email address of the form `local@domain.tld`.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    match email.trim() {
        "" => Err(ValidationError::InvalidEmail),
        s if EMAIL_RE.is_match(s) => Ok(()),
        _ => Err(ValidationError::InvalidEmail),
    }
}

/// Validates a phone number: exactly ten decimal digits.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_RE.is_match(phone.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone)
    }
}

/// Validates a postal code: exactly six decimal digits.
pub fn validate_postal_code(code: &str) -> Result<(), ValidationError> {
    if POSTAL_CODE_RE.is_match(code.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPostalCode)
    }
}

/// Upper-cases a student identifier as typed (e.g. `stu1234` -> `STU1234`).
///
/// Surrounding whitespace is preserved; only the case changes.
pub fn normalize_student_id(raw: &str) -> String {
    raw.to_uppercase()
}

/// Validates a student identifier (e.g. `STU1234`).
///
/// The value is tested as given after trimming; callers normalize first.
pub fn validate_student_id(id: &str) -> Result<(), ValidationError> {
    if STUDENT_ID_RE.is_match(id.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidStudentId)
    }
}

/// Validates the learning-support details: at least five characters once trimmed.
pub fn validate_support_details(details: &str) -> Result<(), ValidationError> {
    if details.trim().chars().count() >= MIN_SUPPORT_DETAILS_LEN {
        Ok(())
    } else {
        Err(ValidationError::SupportDetailsTooShort)
    }
}

/// Validates that the terms and conditions were accepted.
pub fn validate_terms(accepted: bool) -> Result<(), ValidationError> {
    if accepted {
        Ok(())
    } else {
        Err(ValidationError::TermsNotAccepted)
    }
}
