//! Required-field and email-shape checks.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::submission::ContactSubmission;

/// `local@domain.tld`, nothing more.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Why a submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    /// Name, email, or message is blank.
    MissingFields,
    /// Email is present but not shaped like an address.
    BadEmailFormat,
}

impl InvalidReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvalidReason::MissingFields => "missing_fields",
            InvalidReason::BadEmailFormat => "bad_email_format",
        }
    }
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidReason::MissingFields => write!(f, "name, email, and message are required"),
            InvalidReason::BadEmailFormat => write!(f, "email address is malformed"),
        }
    }
}

/// Result of validating a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(InvalidReason),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Convert into a `Result`, for use with `?`.
    pub fn into_result(self) -> Result<(), InvalidReason> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid(reason) => Err(reason),
        }
    }
}

/// Validate a submission.
///
/// Blank required fields win over a malformed email. The honeypot is not
/// looked at here.
pub fn validate(submission: &ContactSubmission) -> ValidationResult {
    let blank = [
        &submission.full_name,
        &submission.email,
        &submission.message,
    ]
    .iter()
    .any(|value| value.trim().is_empty());

    if blank {
        return ValidationResult::Invalid(InvalidReason::MissingFields);
    }

    if !is_valid_email(&submission.email) {
        return ValidationResult::Invalid(InvalidReason::BadEmailFormat);
    }

    ValidationResult::Valid
}

/// Permissive email shape check. Surrounding whitespace fails the match.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
        ContactSubmission::with_fields(name, email, message)
    }

    #[test]
    fn test_valid_submission() {
        assert_eq!(
            validate(&submission("Jane", "jane@x.com", "Interested")),
            ValidationResult::Valid
        );
    }

    #[test]
    fn test_missing_name() {
        assert_eq!(
            validate(&submission("", "a@b.com", "hi")),
            ValidationResult::Invalid(InvalidReason::MissingFields)
        );
    }

    #[test]
    fn test_whitespace_only_fields_are_missing() {
        for (name, email, message) in [
            ("   ", "a@b.com", "hi"),
            ("Jane", "\t", "hi"),
            ("Jane", "a@b.com", "\n  "),
        ] {
            assert_eq!(
                validate(&submission(name, email, message)),
                ValidationResult::Invalid(InvalidReason::MissingFields),
                "{name:?} {email:?} {message:?}"
            );
        }
    }

    #[test]
    fn test_missing_fields_checked_before_email_shape() {
        assert_eq!(
            validate(&submission("", "not-an-email", "hi")),
            ValidationResult::Invalid(InvalidReason::MissingFields)
        );
    }

    #[test]
    fn test_bad_email_format() {
        assert_eq!(
            validate(&submission("Jane", "not-an-email", "hi")),
            ValidationResult::Invalid(InvalidReason::BadEmailFormat)
        );
    }

    #[test]
    fn test_email_shapes() {
        for good in ["a@b.co", "jane.doe+mentor@mail.example.com", "x@y.z"] {
            assert!(is_valid_email(good), "{good}");
        }
        for bad in [
            "jane@",
            "@x.com",
            "jane@x",
            "jane@@x.com",
            "jane doe@x.com",
            " jane@x.com",
            "jane@x.com ",
            "jane@x.",
        ] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn test_validate_is_idempotent() {
        let s = submission("Jane", "nope", "hi");
        assert_eq!(validate(&s), validate(&s));
    }

    #[test]
    fn test_honeypot_ignored_by_validation() {
        let s = submission("Jane", "jane@x.com", "hi").with_honeypot("filled");
        assert!(validate(&s).is_valid());
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationResult::Valid.into_result(), Ok(()));
        assert_eq!(
            ValidationResult::Invalid(InvalidReason::BadEmailFormat).into_result(),
            Err(InvalidReason::BadEmailFormat)
        );
    }
}
