//! # Formgate Core
//!
//! A sign-up form as a library: a declarative schema and a form controller
//! that any UI layer can drive.
//!
//! ## Architecture
//!
//! - **Validation**: reusable rules, field and whole-form validators, field-scoped errors
//! - **Schema**: the four sign-up fields, their constraints and the password confirmation rule
//! - **Form**: live values, mode-dependent error visibility and submit gating
//! - **Config**: message overrides, validation mode and logging settings
//! - **Observability**: `tracing` subscriber setup

pub mod config;
pub mod error;
pub mod form;
pub mod observability;
pub mod schema;
pub mod validation;

pub use error::{FormError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, FormConfig, MessageConfig, ObservabilityConfig};
    pub use crate::error::{FormError, Result};
    pub use crate::form::{FieldState, FieldView, FormController, FormState, SubmitHandler, ValidationMode};
    pub use crate::schema::{
        Constraint, ConstraintRule, FieldName, FieldSpec, FormValues, InputType, Refinement,
        SignupData, SignupSchema, PASSWORD_MIN_LENGTH,
    };
    pub use crate::validation::{
        Validate, ValidationRule, ValidationErrors, ValidationResult, ValidationErrorKind, FieldError,
        validate_field, validate_request, NonEmpty, Email, MinLength,
    };
}
