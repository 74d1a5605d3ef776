//! Constraints checked before a submission leaves the form

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Same grammar browsers apply to `<input type="email">`
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

/// A constraint the form refused to submit past
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill out {0}")]
    Required(&'static str),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please select a subject")]
    MissingSubject,
}

/// Check that a required text value is present.
///
/// Whitespace counts as a value, as with an HTML `required` text input.
pub fn require(value: &str, label: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::Required(label))
    } else {
        Ok(())
    }
}

/// Check email syntax of an already trimmed address
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_rejects_empty() {
        assert_eq!(
            require("", "Full Name"),
            Err(ValidationError::Required("Full Name"))
        );
        assert!(require(" Jane ", "Full Name").is_ok());
    }

    #[test]
    fn test_require_accepts_whitespace() {
        assert!(require("   ", "Message").is_ok());
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("jane@x.com"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(is_valid_email("user@localhost"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("jane"));
        assert!(!is_valid_email("jane@"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("jane doe@x.com"));
        assert!(!is_valid_email("jane@-x.com"));
        assert!(!is_valid_email(" jane@x.com"));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::Required("Contact Number").to_string(),
            "Please fill out Contact Number"
        );
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }
}
