//! Per-field interaction state and render-ready snapshots.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::schema::{FieldName, FieldSpec, FormValues};
use crate::validation::FieldError;

/// Shown in place of a non-empty secret value.
pub const MASK: &str = "••••••••";

/// Interaction flags for one field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState {
    /// The value was changed at least once.
    pub dirty: bool,
    /// The field lost focus at least once.
    pub touched: bool,
    /// The field's error is shown.
    pub revealed: bool,
}

impl FieldState {
    pub fn visited(&self) -> bool {
        self.dirty || self.touched
    }
}

/// Everything a UI needs to draw one input.
#[derive(Debug, Clone, Copy)]
pub struct FieldView<'a> {
    pub spec: &'a FieldSpec,
    pub value: Option<&'a str>,
    pub error: Option<&'a FieldError>,
    pub state: FieldState,
}

impl FieldView<'_> {
    pub fn name(&self) -> FieldName {
        self.spec.name
    }

    /// The value to display, masked for secret fields when asked.
    pub fn display_value(&self, mask_secrets: bool) -> Option<String> {
        self.value.map(|value| {
            if mask_secrets && self.spec.name.is_secret() && !value.is_empty() {
                MASK.to_string()
            } else {
                value.to_string()
            }
        })
    }
}

/// Serializable snapshot of the whole form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub values: FormValues,
    /// Visible error message per field.
    pub errors: BTreeMap<FieldName, String>,
    pub is_valid: bool,
    pub is_submitted: bool,
    pub is_submit_successful: bool,
    pub submit_count: u32,
    pub revision: u64,
}

impl FormState {
    /// Replace secret values with a fixed mask.
    pub fn masked(mut self) -> Self {
        let secrets: Vec<_> = self
            .values
            .iter()
            .filter(|(field, value)| field.is_secret() && !value.is_empty())
            .map(|(field, _)| field)
            .collect();
        for field in secrets {
            self.values.set(field, MASK);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SignupSchema;

    #[test]
    fn test_display_value_masks_secrets() {
        let schema = SignupSchema::new();
        let view = FieldView {
            spec: schema.field(FieldName::Password),
            value: Some("longpassword"),
            error: None,
            state: FieldState::default(),
        };
        assert_eq!(view.display_value(true).as_deref(), Some(MASK));
        assert_eq!(view.display_value(false).as_deref(), Some("longpassword"));

        let view = FieldView {
            spec: schema.field(FieldName::Name),
            value: Some("Taro"),
            error: None,
            state: FieldState::default(),
        };
        assert_eq!(view.display_value(true).as_deref(), Some("Taro"));
    }

    #[test]
    fn test_state_masked() {
        let state = FormState {
            values: FormValues::new()
                .with(FieldName::Name, "Taro")
                .with(FieldName::Password, "longpassword")
                .with(FieldName::ConfirmPassword, ""),
            errors: BTreeMap::new(),
            is_valid: false,
            is_submitted: false,
            is_submit_successful: false,
            submit_count: 0,
            revision: 3,
        };
        let masked = state.masked();
        assert_eq!(masked.values.get(FieldName::Name), Some("Taro"));
        assert_eq!(masked.values.get(FieldName::Password), Some(MASK));
        assert_eq!(masked.values.get(FieldName::ConfirmPassword), Some(""));
    }

    #[test]
    fn test_visited() {
        assert!(!FieldState::default().visited());
        assert!(FieldState { dirty: true, ..Default::default() }.visited());
        assert!(FieldState { touched: true, ..Default::default() }.visited());
    }
}
