//! The sign-up form schema.
//!
//! Declares the four fields, their constraints and the password confirmation
//! rule, and turns a [`FormValues`] snapshot into either typed
//! [`SignupData`] or a field-keyed error map.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::config::MessageConfig;
use crate::error::FormError;
use crate::validation::{
    validate_field, validate_request, Email, FieldError, MinLength, NonEmpty, Validate,
    ValidationErrorKind, ValidationResult, ValidationRule,
};

/// Minimum password length, in UTF-16 code units.
pub const PASSWORD_MIN_LENGTH: usize = 8;

// ═══════════════════════════════════════════════════════════════════════════════
// Field Names
// ═══════════════════════════════════════════════════════════════════════════════

/// The fields of the sign-up form, in evaluation and display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldName {
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Password,
        FieldName::ConfirmPassword,
    ];

    /// Wire name, also used as the error map key.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirmPassword",
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, FieldName::Password | FieldName::ConfirmPassword)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FieldName::Name),
            "email" => Ok(FieldName::Email),
            "password" => Ok(FieldName::Password),
            "confirmPassword" | "confirm_password" => {
                Ok(FieldName::ConfirmPassword)
            }
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Field Specs
// ═══════════════════════════════════════════════════════════════════════════════

/// How the input is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputType {
    Text,
    Email,
    Password,
}

/// A single-field constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "rule", content = "value")]
pub enum ConstraintRule {
    NonEmpty,
    MinLength(usize),
    Email,
}

impl fmt::Display for ConstraintRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintRule::NonEmpty => f.write_str(&NonEmpty.description()),
            ConstraintRule::MinLength(n) => f.write_str(&MinLength(*n).description()),
            ConstraintRule::Email => f.write_str(&Email.description()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    pub rule: ConstraintRule,
    pub message: String,
}

impl Constraint {
    pub fn new(rule: ConstraintRule, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }
}

/// Declared constraint set for one input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: FieldName,
    pub label: String,
    pub placeholder: String,
    pub input_type: InputType,
    pub required: bool,
    pub constraints: Vec<Constraint>,
}

/// A rule over more than one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refinement {
    /// The field whose value is compared.
    pub field: FieldName,
    /// The field it must equal.
    pub equals: FieldName,
    /// Where a failure is reported.
    pub path: FieldName,
    pub message: String,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Form Values
// ═══════════════════════════════════════════════════════════════════════════════

/// Current snapshot of all field values. Absent fields were never set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawValues", into = "RawValues")]
pub struct FormValues {
    values: BTreeMap<FieldName, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.values.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Parse a JSON object of field values. Unknown keys are ignored.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<SignupData> for FormValues {
    fn from(data: SignupData) -> Self {
        FormValues::new()
            .with(FieldName::Name, data.name)
            .with(FieldName::Email, data.email)
            .with(FieldName::Password, data.password)
            .with(FieldName::ConfirmPassword, data.confirm_password)
    }
}

/// Wire shape of [`FormValues`]; unknown keys are dropped by serde.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawValues {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "confirm_password")]
    confirm_password: Option<String>,
}

impl From<RawValues> for FormValues {
    fn from(raw: RawValues) -> Self {
        let mut values = FormValues::new();
        let fields = [
            (FieldName::Name, raw.name),
            (FieldName::Email, raw.email),
            (FieldName::Password, raw.password),
            (FieldName::ConfirmPassword, raw.confirm_password),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                values.set(field, value);
            }
        }
        values
    }
}

impl From<FormValues> for RawValues {
    fn from(mut values: FormValues) -> Self {
        RawValues {
            name: values.values.remove(&FieldName::Name),
            email: values.values.remove(&FieldName::Email),
            password: values.values.remove(&FieldName::Password),
            confirm_password: values.values.remove(&FieldName::ConfirmPassword),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Signup Data
// ═══════════════════════════════════════════════════════════════════════════════

/// The validated record handed to the submit handler.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl fmt::Debug for SignupData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupData")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .finish()
    }
}

impl Validate for SignupData {
    fn validate(&self) -> ValidationResult<()> {
        SignupSchema::new()
            .validate(&FormValues::from(self.clone()))
            .map(|_| ())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Schema
// ═══════════════════════════════════════════════════════════════════════════════

/// The declarative sign-up schema.
#[derive(Debug, Clone)]
pub struct SignupSchema {
    fields: Vec<FieldSpec>,
    refinements: Vec<Refinement>,
    required_message: String,
}

impl Default for SignupSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupSchema {
    /// Schema with the default messages.
    pub fn new() -> Self {
        Self::with_messages(&MessageConfig::default())
    }

    pub fn with_messages(messages: &MessageConfig) -> Self {
        let fields = vec![
            FieldSpec {
                name: FieldName::Name,
                label: "Name".to_string(),
                placeholder: "Taro Yamada".to_string(),
                input_type: InputType::Text,
                required: true,
                constraints: vec![Constraint::new(
                    ConstraintRule::NonEmpty,
                    &messages.name_required,
                )],
            },
            FieldSpec {
                name: FieldName::Email,
                label: "Email".to_string(),
                placeholder: "example@email.com".to_string(),
                input_type: InputType::Email,
                required: true,
                constraints: vec![Constraint::new(ConstraintRule::Email, &messages.invalid_email)],
            },
            FieldSpec {
                name: FieldName::Password,
                label: "Password".to_string(),
                placeholder: format!("At least {} characters", PASSWORD_MIN_LENGTH),
                input_type: InputType::Password,
                required: true,
                constraints: vec![Constraint::new(
                    ConstraintRule::MinLength(PASSWORD_MIN_LENGTH),
                    &messages.password_too_short,
                )],
            },
            FieldSpec {
                name: FieldName::ConfirmPassword,
                label: "Confirm password".to_string(),
                placeholder: "Re-enter your password".to_string(),
                input_type: InputType::Password,
                required: true,
                constraints: Vec::new(),
            },
        ];

        let refinements = vec![Refinement {
            field: FieldName::Password,
            equals: FieldName::ConfirmPassword,
            path: FieldName::ConfirmPassword,
            message: messages.password_mismatch.clone(),
        }];

        Self {
            fields,
            refinements,
            required_message: messages.required.clone(),
        }
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: FieldName) -> &FieldSpec {
        // Every FieldName has exactly one spec, in declaration order.
        &self.fields[name as usize]
    }

    pub fn refinements(&self) -> &[Refinement] {
        &self.refinements
    }

    /// Validate a snapshot.
    ///
    /// Every field rule runs, then every cross-field rule. A required field
    /// that is absent reports a single `EmptyField` error instead of running
    /// its constraints. A cross-field rule runs only when both of its fields
    /// are present, and reports on its `path` alone.
    pub fn validate(&self, values: &FormValues) -> ValidationResult<SignupData> {
        let mut request = validate_request();

        for spec in &self.fields {
            let Some(value) = values.get(spec.name) else {
                if spec.required {
                    request = request.custom(|errors| {
                        errors.add_with_message(
                            spec.name.as_str(),
                            ValidationErrorKind::EmptyField,
                            &self.required_message,
                        )
                    });
                }
                continue;
            };

            let mut field = validate_field(spec.name.as_str(), value);
            for constraint in &spec.constraints {
                field = match constraint.rule {
                    ConstraintRule::NonEmpty => field.rule_with_message(NonEmpty, &constraint.message),
                    ConstraintRule::MinLength(min) => {
                        field.rule_with_message(MinLength(min), &constraint.message)
                    }
                    ConstraintRule::Email => field.rule_with_message(Email, &constraint.message),
                };
            }
            request = request.field(field);
        }

        for refinement in &self.refinements {
            let (Some(left), Some(right)) =
                (values.get(refinement.field), values.get(refinement.equals))
            else {
                continue;
            };
            request = request.refine(
                refinement.path.as_str(),
                || left == right,
                FieldError::with_message(
                    ValidationErrorKind::Mismatch {
                        other: refinement.field.as_str().to_string(),
                    },
                    &refinement.message,
                ),
            );
        }

        request.validate_with(|| {
            let take = |field: FieldName| values.get(field).unwrap_or_default().to_string();
            SignupData {
                name: take(FieldName::Name),
                email: take(FieldName::Email),
                password: take(FieldName::Password),
                confirm_password: take(FieldName::ConfirmPassword),
            }
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn values(name: &str, email: &str, password: &str, confirm: &str) -> FormValues {
        FormValues::new()
            .with(FieldName::Name, name)
            .with(FieldName::Email, email)
            .with(FieldName::Password, password)
            .with(FieldName::ConfirmPassword, confirm)
    }

    #[test]
    fn test_field_name_round_trip() {
        for field in FieldName::ALL {
            assert_eq!(field.as_str().parse::<FieldName>().unwrap(), field);
        }
        assert_eq!("confirm_password".parse::<FieldName>().unwrap(), FieldName::ConfirmPassword);
        assert!("phone".parse::<FieldName>().is_err());
        assert!("confirm-password".parse::<FieldName>().is_err());
    }

    #[test]
    fn test_constraint_rule_display_uses_rule_description() {
        assert_eq!(ConstraintRule::NonEmpty.to_string(), "field is required");
        assert_eq!(ConstraintRule::MinLength(8).to_string(), "minimum length: 8");
        assert_eq!(ConstraintRule::Email.to_string(), "valid email format");
    }

    #[test]
    fn test_field_specs_in_order() {
        let schema = SignupSchema::new();
        let names: Vec<_> = schema.fields().iter().map(|s| s.name).collect();
        assert_eq!(names, FieldName::ALL.to_vec());
        for field in FieldName::ALL {
            assert_eq!(schema.field(field).name, field);
            assert!(schema.field(field).required);
        }
        assert!(schema.field(FieldName::ConfirmPassword).constraints.is_empty());
        assert_eq!(schema.refinements().len(), 1);
    }

    #[test]
    fn test_valid_snapshot_carries_data() {
        let data = SignupSchema::new()
            .validate(&values("Taro", "a@b.com", "longpassword", "longpassword"))
            .unwrap();
        assert_eq!(data.name, "Taro");
        assert_eq!(data.email, "a@b.com");
        assert_eq!(data.password, "longpassword");
        assert_eq!(data.confirm_password, "longpassword");
    }

    #[test]
    fn test_default_messages() {
        let errors = SignupSchema::new()
            .validate(&values("", "bad", "short", "x"))
            .unwrap_err();
        assert_eq!(errors.first("name").unwrap().message, "Name is required");
        assert_eq!(errors.first("email").unwrap().message, "Invalid email address");
        assert_eq!(
            errors.first("password").unwrap().message,
            "Password must be at least 8 characters"
        );
        assert_eq!(errors.first("confirmPassword").unwrap().message, "Passwords do not match");
    }

    #[test]
    fn test_custom_messages() {
        let messages = MessageConfig {
            name_required: "名前は必須です".into(),
            ..MessageConfig::default()
        };
        let errors = SignupSchema::with_messages(&messages)
            .validate(&values("", "a@b.com", "longpassword", "longpassword"))
            .unwrap_err();
        assert_eq!(errors.first("name").unwrap().message, "名前は必須です");
        assert_eq!(errors.field_count(), 1);
    }

    #[test]
    fn test_absent_fields_are_required() {
        let errors = SignupSchema::new().validate(&FormValues::new()).unwrap_err();
        assert_eq!(errors.field_count(), 4);
        for field in FieldName::ALL {
            let error = errors.first(field.as_str()).unwrap();
            assert_eq!(error.kind, ValidationErrorKind::EmptyField);
            assert_eq!(error.message, "This field is required");
        }
    }

    #[test]
    fn test_mismatch_skipped_when_confirmation_absent() {
        let partial = FormValues::new()
            .with(FieldName::Name, "Taro")
            .with(FieldName::Email, "a@b.com")
            .with(FieldName::Password, "longpassword");
        let errors = SignupSchema::new().validate(&partial).unwrap_err();
        assert_eq!(errors.field_count(), 1);
        assert_eq!(
            errors.first("confirmPassword").unwrap().kind,
            ValidationErrorKind::EmptyField
        );
    }

    #[test]
    fn test_form_values_json_ignores_unknown_keys() {
        let values = FormValues::from_json(
            r#"{"name":"Taro","email":"a@b.com","confirm_password":"x","age":3}"#,
        )
        .unwrap();
        assert_eq!(values.get(FieldName::Name), Some("Taro"));
        assert_eq!(values.get(FieldName::ConfirmPassword), Some("x"));
        assert!(!values.contains(FieldName::Password));

        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(json["confirmPassword"], "x");
        assert!(json.get("password").is_none());
        assert!(json.get("age").is_none());
    }

    #[test]
    fn test_form_values_rejects_non_string() {
        assert!(FormValues::from_json(r#"{"name": 42}"#).is_err());
    }

    #[test]
    fn test_signup_data_debug_redacts_passwords() {
        let data = SignupData {
            name: "Taro".into(),
            email: "a@b.com".into(),
            password: "longpassword".into(),
            confirm_password: "longpassword".into(),
        };
        let debug = format!("{:?}", data);
        assert!(debug.contains("Taro"));
        assert!(!debug.contains("longpassword"));
    }

    #[test]
    fn test_signup_data_validate() {
        let data = SignupData {
            name: "Taro".into(),
            email: "a@b.com".into(),
            password: "longpassword".into(),
            confirm_password: "longpasswort".into(),
        };
        let errors = data.validate().unwrap_err();
        assert!(errors.has_errors("confirmPassword"));
        assert_eq!(errors.field_count(), 1);
    }

    #[test]
    fn test_signup_data_serializes_camel_case() {
        let data = SignupData {
            name: "Taro".into(),
            email: "a@b.com".into(),
            password: "longpassword".into(),
            confirm_password: "longpassword".into(),
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["confirmPassword"], "longpassword");
    }
}
