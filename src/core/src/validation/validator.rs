//! Validator trait and builders for field and whole-form validation.
//!
//! This module provides:
//! - `Validate` trait for synchronous validation
//! - `FieldValidator` for building field-level validation chains
//! - `RequestValidator` for validating a whole form, including cross-field rules

use crate::validation::error::{FieldError, ValidationErrors, ValidationResult};
use crate::validation::rules::ValidationRule;

// ═══════════════════════════════════════════════════════════════════════════════
// Validate Trait
// ═══════════════════════════════════════════════════════════════════════════════

/// Trait for types that can be validated synchronously.
///
/// # Example
///
/// ```rust,ignore
/// use formgate_core::validation::{Validate, ValidationErrors, ValidationResult};
///
/// struct Login {
///     email: String,
/// }
///
/// impl Validate for Login {
///     fn validate(&self) -> ValidationResult<()> {
///         validate_request()
///             .field(validate_field("email", self.email.as_str()).rule(Email))
///             .result()
///     }
/// }
/// ```
pub trait Validate {
    /// Validate this object and return any validation errors.
    fn validate(&self) -> ValidationResult<()>;

    /// Check if this object is valid without returning detailed errors.
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Field Validator
// ═══════════════════════════════════════════════════════════════════════════════

/// A builder for validating a single field with multiple rules.
///
/// Rules run in the order they are added, and every rule runs.
pub struct FieldValidator<'a, T: ?Sized> {
    field_name: &'a str,
    value: &'a T,
    errors: Vec<FieldError>,
}

impl<'a, T: ?Sized> FieldValidator<'a, T> {
    /// Create a new field validator.
    pub fn new(field_name: &'a str, value: &'a T) -> Self {
        Self {
            field_name,
            value,
            errors: Vec::new(),
        }
    }

    /// Apply a validation rule.
    pub fn rule<R: ValidationRule<T>>(mut self, rule: R) -> Self {
        if let Some(error) = rule.validate(self.value) {
            self.errors.push(error);
        }
        self
    }

    /// Apply a validation rule, replacing its default message on failure.
    pub fn rule_with_message<R: ValidationRule<T>>(mut self, rule: R, message: &str) -> Self {
        if let Some(error) = rule.validate(self.value) {
            self.errors.push(FieldError::with_message(error.kind, message));
        }
        self
    }

    /// Get the field name.
    pub fn field_name(&self) -> &str {
        self.field_name
    }

    /// Consume the validator and return the errors.
    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Request Validator
// ═══════════════════════════════════════════════════════════════════════════════

/// A builder for validating a whole form with multiple fields.
pub struct RequestValidator {
    errors: ValidationErrors,
}

impl RequestValidator {
    /// Create a new request validator.
    pub fn new() -> Self {
        Self {
            errors: ValidationErrors::new(),
        }
    }

    /// Validate a field and collect any errors.
    pub fn field<T: ?Sized>(mut self, validator: FieldValidator<'_, T>) -> Self {
        let field_name = validator.field_name().to_string();
        for error in validator.into_errors() {
            self.errors.add(&field_name, error);
        }
        self
    }

    /// Apply a cross-field rule.
    ///
    /// The check runs regardless of earlier field errors; a failure is
    /// reported on `path` only.
    pub fn refine<F>(mut self, path: &str, check: F, error: FieldError) -> Self
    where
        F: FnOnce() -> bool,
    {
        if !check() {
            self.errors.add(path, error);
        }
        self
    }

    /// Apply a custom validation function.
    pub fn custom<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut ValidationErrors),
    {
        f(&mut self.errors);
        self
    }

    /// Convert to a ValidationResult.
    pub fn result(self) -> ValidationResult<()> {
        self.validate_with(|| ())
    }

    /// Build the value only if no errors were collected.
    pub fn validate_with<T, F>(self, build: F) -> ValidationResult<T>
    where
        F: FnOnce() -> T,
    {
        if self.errors.is_empty() {
            Ok(build())
        } else {
            Err(self.errors)
        }
    }
}

impl Default for RequestValidator {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Convenience Helpers
// ═══════════════════════════════════════════════════════════════════════════════

/// Create a FieldValidator for a field.
pub fn validate_field<'a, T: ?Sized>(field_name: &'a str, value: &'a T) -> FieldValidator<'a, T> {
    FieldValidator::new(field_name, value)
}

/// Create a new RequestValidator.
pub fn validate_request() -> RequestValidator {
    RequestValidator::new()
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════
