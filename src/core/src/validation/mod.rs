//! Field validation framework for Formgate.
//!
//! - **Validation Rules**: rules for the constraints a form field can carry
//!   - Required (non-empty) strings
//!   - Minimum length
//!   - E-mail format
//!
//! - **Validators**: traits and builders for synchronous validation
//!   - `Validate` trait
//!   - `FieldValidator` for chaining rules on a single field
//!   - `RequestValidator` for whole forms, with cross-field `refine` rules
//!
//! - **Error Handling**: field-level error tracking
//!   - Errors keyed by field path
//!   - Multiple errors per field, first one shown inline
//!   - Serializable error maps
//!
//! # Quick Start
//!
//! ```rust
//! use formgate_core::validation::{
//!     validate_field, validate_request, Email, MinLength, NonEmpty,
//! };
//!
//! let result = validate_request()
//!     .field(validate_field("name", "").rule(NonEmpty))
//!     .field(validate_field("email", "a@b.com").rule(Email))
//!     .field(validate_field("password", "secret").rule(MinLength(8)))
//!     .result();
//!
//! let errors = result.unwrap_err();
//! assert!(errors.has_errors("name"));
//! assert!(!errors.has_errors("email"));
//! assert!(errors.has_errors("password"));
//! ```

pub mod error;
pub mod rules;
pub mod validator;

pub use error::{FieldError, ValidationErrorKind, ValidationErrors, ValidationResult};
pub use rules::{is_email, Email, MinLength, NonEmpty, ValidationRule};
pub use validator::{
    validate_field, validate_request, FieldValidator, RequestValidator, Validate,
};
