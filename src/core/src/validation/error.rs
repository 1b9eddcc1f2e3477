//! Validation error types with field-level error support.
//!
//! This module provides:
//! - The closed set of failure kinds a form field can report
//! - Field-level error tracking keyed by field path
//! - Multiple errors per field
//! - Serializable error maps for rendering next to inputs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ═══════════════════════════════════════════════════════════════════════════════
// Validation Error Types
// ═══════════════════════════════════════════════════════════════════════════════

/// The kind of validation error that occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ValidationErrorKind {
    /// Field is required but its value is empty.
    EmptyField,
    /// Value does not have the expected shape.
    InvalidFormat { format: String },
    /// String length is below the minimum.
    TooShort { min: usize, actual: usize },
    /// Value must equal another field's value.
    Mismatch { other: String },
}

impl ValidationErrorKind {
    /// Stable machine-readable code for the kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyField => "empty_field",
            Self::InvalidFormat { .. } => "invalid_format",
            Self::TooShort { .. } => "too_short",
            Self::Mismatch { .. } => "mismatch",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField => write!(f, "field is required"),
            Self::InvalidFormat { format } => write!(f, "must be a valid {}", format),
            Self::TooShort { min, actual } => {
                write!(f, "must be at least {} characters (got {})", min, actual)
            }
            Self::Mismatch { other } => write!(f, "must match {}", other),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Field Error
// ═══════════════════════════════════════════════════════════════════════════════

/// A single validation error for a specific field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The kind of validation error.
    #[serde(flatten)]
    pub kind: ValidationErrorKind,
    /// Human-readable error message.
    pub message: String,
}

impl FieldError {
    /// Create a new field error with the kind's default message.
    pub fn new(kind: ValidationErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    /// Create a new field error with a custom message.
    pub fn with_message(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Validation Errors Collection
// ═══════════════════════════════════════════════════════════════════════════════

/// A collection of validation errors organized by field path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    #[serde(flatten)]
    errors: HashMap<String, Vec<FieldError>>,
}

impl ValidationErrors {
    /// Create a new empty validation errors collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if there are any validation errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the total number of errors across all fields.
    pub fn error_count(&self) -> usize {
        self.errors.values().map(|v| v.len()).sum()
    }

    /// Get the number of fields with errors.
    pub fn field_count(&self) -> usize {
        self.errors.len()
    }

    /// Add an error for a specific field.
    pub fn add(&mut self, field: impl Into<String>, error: FieldError) {
        self.errors.entry(field.into()).or_default().push(error);
    }

    /// Add an error with just the kind (auto-generates message).
    pub fn add_error(&mut self, field: impl Into<String>, kind: ValidationErrorKind) {
        self.add(field, FieldError::new(kind));
    }

    /// Add an error with a custom message.
    pub fn add_with_message(
        &mut self,
        field: impl Into<String>,
        kind: ValidationErrorKind,
        message: impl Into<String>,
    ) {
        self.add(field, FieldError::with_message(kind, message));
    }

    /// Get errors for a specific field.
    pub fn get(&self, field: &str) -> Option<&Vec<FieldError>> {
        self.errors.get(field)
    }

    /// First error recorded for a field, in rule order.
    pub fn first(&self, field: &str) -> Option<&FieldError> {
        self.errors.get(field).and_then(|errors| errors.first())
    }

    /// Check if a specific field has errors.
    pub fn has_errors(&self, field: &str) -> bool {
        self.errors.get(field).map(|v| !v.is_empty()).unwrap_or(false)
    }

    /// Keep only the fields accepted by `keep`.
    pub fn retain_fields<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str) -> bool,
    {
        self.errors.retain(|field, _| keep(field));
    }

    /// Get all field paths that have errors.
    pub fn fields(&self) -> impl Iterator<Item = &String> {
        self.errors.keys()
    }

    /// Iterate over all errors.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<FieldError>)> {
        self.errors.iter()
    }

    /// Convert to a flat list of error messages with field prefixes, sorted by
    /// field path.
    pub fn to_flat_messages(&self) -> Vec<String> {
        let mut fields: Vec<_> = self.errors.iter().collect();
        fields.sort_by(|a, b| a.0.cmp(b.0));
        fields
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| format!("{}: {}", field, e.message))
            })
            .collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages = self.to_flat_messages();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = (String, Vec<FieldError>);
    type IntoIter = std::collections::hash_map::IntoIter<String, Vec<FieldError>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Validation Result Type
// ═══════════════════════════════════════════════════════════════════════════════

/// Result type for validation operations.
pub type ValidationResult<T> = std::result::Result<T, ValidationErrors>;

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_display() {
        let error = FieldError::new(ValidationErrorKind::EmptyField);
        assert_eq!(error.to_string(), "field is required");

        let error = FieldError::new(ValidationErrorKind::TooShort { min: 8, actual: 5 });
        assert_eq!(error.to_string(), "must be at least 8 characters (got 5)");
    }

    #[test]
    fn test_error_kind_display_all_variants() {
        assert_eq!(ValidationErrorKind::EmptyField.to_string(), "field is required");
        assert_eq!(
            ValidationErrorKind::InvalidFormat { format: "email address".into() }.to_string(),
            "must be a valid email address"
        );
        assert_eq!(
            ValidationErrorKind::TooShort { min: 8, actual: 0 }.to_string(),
            "must be at least 8 characters (got 0)"
        );
        assert_eq!(
            ValidationErrorKind::Mismatch { other: "password".into() }.to_string(),
            "must match password"
        );
    }

    #[test]
    fn test_error_kind_codes() {
        assert_eq!(ValidationErrorKind::EmptyField.code(), "empty_field");
        assert_eq!(ValidationErrorKind::InvalidFormat { format: "x".into() }.code(), "invalid_format");
        assert_eq!(ValidationErrorKind::TooShort { min: 1, actual: 0 }.code(), "too_short");
        assert_eq!(ValidationErrorKind::Mismatch { other: "x".into() }.code(), "mismatch");
    }

    #[test]
    fn test_field_error_with_custom_message() {
        let error = FieldError::with_message(ValidationErrorKind::EmptyField, "Name is required");
        assert_eq!(error.to_string(), "Name is required");
        assert_eq!(error.kind, ValidationErrorKind::EmptyField);
    }

    #[test]
    fn test_validation_errors_add_and_get() {
        let mut errors = ValidationErrors::new();
        errors.add_error("name", ValidationErrorKind::EmptyField);
        errors.add_error("password", ValidationErrorKind::TooShort { min: 8, actual: 3 });

        assert_eq!(errors.field_count(), 2);
        assert_eq!(errors.error_count(), 2);
        assert!(errors.has_errors("name"));
        assert!(errors.has_errors("password"));
        assert!(!errors.has_errors("email"));
    }

    #[test]
    fn test_validation_errors_empty() {
        let errors = ValidationErrors::new();
        assert!(errors.is_empty());
        assert_eq!(errors.error_count(), 0);
        assert_eq!(errors.field_count(), 0);
        assert!(errors.first("name").is_none());
    }

    #[test]
    fn test_validation_errors_multiple_per_field() {
        let mut errors = ValidationErrors::new();
        errors.add_error("password", ValidationErrorKind::EmptyField);
        errors.add_error("password", ValidationErrorKind::TooShort { min: 8, actual: 0 });
        assert_eq!(errors.field_count(), 1);
        assert_eq!(errors.error_count(), 2);
        assert_eq!(errors.first("password").unwrap().kind, ValidationErrorKind::EmptyField);
    }

    #[test]
    fn test_retain_fields() {
        let mut errors = ValidationErrors::new();
        errors.add_error("name", ValidationErrorKind::EmptyField);
        errors.add_error("password", ValidationErrorKind::TooShort { min: 8, actual: 1 });
        errors.retain_fields(|field| field == "password");
        assert!(!errors.has_errors("name"));
        assert!(errors.has_errors("password"));
    }

    #[test]
    fn test_to_flat_messages_sorted() {
        let mut errors = ValidationErrors::new();
        errors.add_with_message("password", ValidationErrorKind::TooShort { min: 8, actual: 1 }, "too short");
        errors.add_with_message("email", ValidationErrorKind::InvalidFormat { format: "email".into() }, "bad email");
        assert_eq!(
            errors.to_flat_messages(),
            vec!["email: bad email".to_string(), "password: too short".to_string()]
        );
        assert_eq!(errors.to_string(), "email: bad email; password: too short");
    }

    #[test]
    fn test_validation_errors_serialize_flat() {
        let mut errors = ValidationErrors::new();
        errors.add_with_message("name", ValidationErrorKind::EmptyField, "Name is required");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["name"][0]["kind"], "empty_field");
        assert_eq!(json["name"][0]["message"], "Name is required");
    }

    #[test]
    fn test_validation_errors_into_iter() {
        let mut errors = ValidationErrors::new();
        errors.add_error("a", ValidationErrorKind::EmptyField);
        errors.add_error("b", ValidationErrorKind::EmptyField);
        let collected: Vec<_> = errors.into_iter().collect();
        assert_eq!(collected.len(), 2);
    }
}
