//! Operational errors for Formgate.
//!
//! Validation failures are not errors in this sense: they are values
//! ([`ValidationErrors`](crate::validation::ValidationErrors)) shown next to
//! their fields. This module covers everything that can go wrong around the
//! form: loading configuration, parsing field names, reading values files.

use thiserror::Error;

/// A specialized Result type for Formgate operations.
pub type Result<T> = std::result::Result<T, FormError>;

/// Errors raised outside of field validation.
#[derive(Debug, Error)]
pub enum FormError {
    /// Configuration could not be loaded or deserialized.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A field name did not match any declared field.
    #[error("unknown field '{0}' (expected one of: name, email, password, confirmPassword)")]
    UnknownField(String),

    /// A values document could not be parsed.
    #[error("invalid form values: {0}")]
    InvalidValues(#[from] serde_json::Error),

    /// The logging subscriber could not be installed.
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_field_message() {
        let err = FormError::UnknownField("phone".into());
        assert!(err.to_string().contains("'phone'"));
        assert!(err.to_string().contains("confirmPassword"));
    }

    #[test]
    fn test_from_serde_json() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: FormError = parse.unwrap_err().into();
        assert!(matches!(err, FormError::InvalidValues(_)));
    }
}
