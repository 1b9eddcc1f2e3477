//! Validation rules for form field values.
//!
//! This module provides:
//! - Required (non-empty) validation
//! - Minimum length constraints
//! - E-mail format validation

use crate::validation::error::{FieldError, ValidationErrorKind};
use regex::Regex;
use std::sync::LazyLock;

// ═══════════════════════════════════════════════════════════════════════════════
// Pre-compiled Regex Patterns
// ═══════════════════════════════════════════════════════════════════════════════

/// E-mail shape: a local part, `@`, dot-separated labels and an alphabetic TLD.
/// Letters are ASCII only: `ſ` and the Kelvin sign do not count as `s`/`k`.
///
/// The leading-dot and double-dot restrictions on the local part need
/// lookaround, which `regex` does not support; [`is_email`] checks them.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("Invalid email regex")
});

/// Check whether a value has a valid e-mail shape. The empty string does not.
pub fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_REGEX.is_match(value)
}

// ═══════════════════════════════════════════════════════════════════════════════
// Validation Rule Trait
// ═══════════════════════════════════════════════════════════════════════════════

/// A validation rule that can be applied to a value.
pub trait ValidationRule<T: ?Sized> {
    /// Validate the value and return any errors.
    fn validate(&self, value: &T) -> Option<FieldError>;

    /// Get a description of this rule.
    fn description(&self) -> String;
}

// ═══════════════════════════════════════════════════════════════════════════════
// Required Field Rule
// ═══════════════════════════════════════════════════════════════════════════════

/// Rule that validates a string has at least one character.
///
/// Whitespace counts as content: `" "` passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonEmpty;

impl ValidationRule<str> for NonEmpty {
    fn validate(&self, value: &str) -> Option<FieldError> {
        if value.is_empty() {
            Some(FieldError::new(ValidationErrorKind::EmptyField))
        } else {
            None
        }
    }

    fn description(&self) -> String {
        "field is required".to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// String Length Rules
// ═══════════════════════════════════════════════════════════════════════════════

/// Rule that validates string minimum length, counted in UTF-16 code units
/// so that a character outside the BMP counts as two.
#[derive(Debug, Clone, Copy)]
pub struct MinLength(pub usize);

impl ValidationRule<str> for MinLength {
    fn validate(&self, value: &str) -> Option<FieldError> {
        let len = value.encode_utf16().count();
        if len < self.0 {
            Some(FieldError::new(ValidationErrorKind::TooShort {
                min: self.0,
                actual: len,
            }))
        } else {
            None
        }
    }

    fn description(&self) -> String {
        format!("minimum length: {}", self.0)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Format Validation Rules
// ═══════════════════════════════════════════════════════════════════════════════

/// Rule that validates e-mail format.
#[derive(Debug, Clone, Copy, Default)]
pub struct Email;

impl ValidationRule<str> for Email {
    fn validate(&self, value: &str) -> Option<FieldError> {
        if is_email(value) {
            None
        } else {
            Some(FieldError::new(ValidationErrorKind::InvalidFormat {
                format: "email address".to_string(),
            }))
        }
    }

    fn description(&self) -> String {
        "valid email format".to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert!(NonEmpty.validate("Taro").is_none());
        assert!(NonEmpty.validate(" ").is_none());

        let error = NonEmpty.validate("").unwrap();
        assert_eq!(error.kind, ValidationErrorKind::EmptyField);
    }

    #[test]
    fn test_min_length_boundary() {
        assert!(MinLength(8).validate("12345678").is_none());
        assert!(MinLength(8).validate("123456789").is_none());

        let error = MinLength(8).validate("1234567").unwrap();
        assert_eq!(error.kind, ValidationErrorKind::TooShort { min: 8, actual: 7 });
    }

    #[test]
    fn test_min_length_counts_utf16_units() {
        // 8 BMP characters, 24 bytes
        assert!(MinLength(8).validate("パスワードです!").is_none());
        assert!(MinLength(8).validate("パスワード").is_some());

        // Each emoji is a surrogate pair
        assert!(MinLength(8).validate("😀😀😀😀").is_none());
        let error = MinLength(8).validate("😀😀😀").unwrap();
        assert_eq!(error.kind, ValidationErrorKind::TooShort { min: 8, actual: 6 });
    }

    #[test]
    fn test_email_valid() {
        for value in [
            "a@b.com",
            "test@example.com",
            "first.last+tag@mail.example.co.jp",
            "o'neil@example.org",
            "USER_1@EXAMPLE.IO",
        ] {
            assert!(Email.validate(value).is_none(), "{} should be valid", value);
        }
    }

    #[test]
    fn test_email_invalid() {
        for value in [
            "",
            "bad",
            "a@b",
            "@example.com",
            "user@",
            ".user@example.com",
            "us..er@example.com",
            "user.@example.com",
            "user@-example.com",
            "user@example.c",
            "user name@example.com",
            "user@exam_ple.com",
            "user@example.co\u{17F}",
            "\u{212A}@example.com",
            "a@b.\u{212A}\u{212A}",
            "user@ex\u{E4}mple.com",
        ] {
            let error = Email.validate(value);
            assert!(error.is_some(), "{} should be invalid", value);
            assert!(matches!(
                error.unwrap().kind,
                ValidationErrorKind::InvalidFormat { .. }
            ));
        }
    }

    #[test]
    fn test_rule_descriptions() {
        assert_eq!(NonEmpty.description(), "field is required");
        assert_eq!(MinLength(8).description(), "minimum length: 8");
        assert_eq!(Email.description(), "valid email format");
    }
}
