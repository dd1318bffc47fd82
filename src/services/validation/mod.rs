// Field validators shared by the form controller, the use cases and the
// simulated endpoint.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@([A-Za-z0-9.-]+\.[A-Za-z]{2,})$")
        .expect("email pattern is a valid regex")
});

pub const EMAIL_REQUIRED_MESSAGE: &str = "Email is required";
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email format";

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(String),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// The error message, if any, in the shape stored on the form.
    pub fn into_error(self) -> Option<String> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(message) => Some(message),
        }
    }
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn validate_email(email: &str) -> ValidationResult {
    if is_blank(email) {
        ValidationResult::Invalid(EMAIL_REQUIRED_MESSAGE.to_string())
    } else if !is_valid_email(email) {
        ValidationResult::Invalid(INVALID_EMAIL_MESSAGE.to_string())
    } else {
        ValidationResult::Valid
    }
}

/// Full name rules: required, 2 to 100 characters.
pub fn validate_name(name: &str) -> ValidationResult {
    let length = name.chars().count();
    if is_blank(name) {
        ValidationResult::Invalid("Name is required".to_string())
    } else if length < NAME_MIN_CHARS {
        ValidationResult::Invalid(format!(
            "Name must be at least {} characters",
            NAME_MIN_CHARS
        ))
    } else if length > NAME_MAX_CHARS {
        ValidationResult::Invalid(format!(
            "Name must not exceed {} characters",
            NAME_MAX_CHARS
        ))
    } else {
        ValidationResult::Valid
    }
}

pub fn validate_required(value: &str, field_name: &str) -> ValidationResult {
    if is_blank(value) {
        ValidationResult::Invalid(format!("{} is required", field_name))
    } else {
        ValidationResult::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("a@b.co", true)]
    #[test_case("first.last+tag@uni.example.edu", true)]
    #[test_case("", false)]
    #[test_case("a@b", false)]
    #[test_case("a.com", false)]
    #[test_case("a b@c.io", false)]
    #[test_case("a@b.c", false; "single letter tld")]
    fn email_format(email: &str, expected: bool) {
        assert_eq!(is_valid_email(email), expected);
    }

    #[test]
    fn email_messages() {
        assert_eq!(
            validate_email("  "),
            ValidationResult::Invalid("Email is required".to_string())
        );
        assert_eq!(
            validate_email("a@b"),
            ValidationResult::Invalid("Invalid email format".to_string())
        );
        assert!(validate_email("a@b.co").is_valid());
    }

    #[test_case("", Some("Name is required"))]
    #[test_case("A", Some("Name must be at least 2 characters"))]
    #[test_case("Al", None)]
    #[test_case("Zoë", None; "counts characters not bytes")]
    fn name_rules(name: &str, expected: Option<&str>) {
        assert_eq!(validate_name(name).into_error().as_deref(), expected);
    }

    #[test]
    fn name_length_cap() {
        assert!(validate_name(&"x".repeat(100)).is_valid());
        assert_eq!(
            validate_name(&"x".repeat(101)).into_error().as_deref(),
            Some("Name must not exceed 100 characters")
        );
    }

    #[test]
    fn required_field_message_uses_label() {
        assert_eq!(
            validate_required(" ", "Institution").into_error().as_deref(),
            Some("Institution is required")
        );
        assert!(validate_required("MIT", "Institution").is_valid());
    }
}
