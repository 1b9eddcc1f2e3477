//! Form controller: live values, error visibility and submit gating.
//!
//! The controller is a plain state-and-callback object. A UI drives it with
//! input events (`on_field_change`, `on_field_blur`, `on_submit`) and
//! re-renders when [`FormController::revision`] moves.

pub mod controller;
pub mod state;

pub use controller::{FormController, SubmitHandler};
pub use state::{FieldState, FieldView, FormState, MASK};

use serde::{Deserialize, Serialize};

/// When a field's validation error becomes visible.
///
/// Submit gating (`is_valid`) does not depend on the mode; only the visible
/// error map does. After a submit attempt every field's error is visible
/// regardless of mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// On every change of the field.
    #[default]
    OnChange,
    /// When the field loses focus.
    OnBlur,
    /// On first blur, then on every change.
    OnTouched,
    /// On change and on blur.
    All,
    /// Only after a submit attempt.
    OnSubmit,
}

impl ValidationMode {
    pub fn reveals_on_change(self, touched: bool) -> bool {
        match self {
            ValidationMode::OnChange | ValidationMode::All => true,
            ValidationMode::OnTouched => touched,
            ValidationMode::OnBlur | ValidationMode::OnSubmit => false,
        }
    }

    pub fn reveals_on_blur(self) -> bool {
        matches!(
            self,
            ValidationMode::OnBlur | ValidationMode::OnTouched | ValidationMode::All
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_reveal_table() {
        assert!(ValidationMode::OnChange.reveals_on_change(false));
        assert!(!ValidationMode::OnChange.reveals_on_blur());

        assert!(!ValidationMode::OnBlur.reveals_on_change(true));
        assert!(ValidationMode::OnBlur.reveals_on_blur());

        assert!(!ValidationMode::OnTouched.reveals_on_change(false));
        assert!(ValidationMode::OnTouched.reveals_on_change(true));
        assert!(ValidationMode::OnTouched.reveals_on_blur());

        assert!(ValidationMode::All.reveals_on_change(false));
        assert!(ValidationMode::All.reveals_on_blur());

        assert!(!ValidationMode::OnSubmit.reveals_on_change(true));
        assert!(!ValidationMode::OnSubmit.reveals_on_blur());
    }

    #[test]
    fn test_mode_serde_names() {
        let mode: ValidationMode = serde_json::from_str("\"on_touched\"").unwrap();
        assert_eq!(mode, ValidationMode::OnTouched);
        assert_eq!(serde_json::to_string(&ValidationMode::OnSubmit).unwrap(), "\"on_submit\"");
    }
}
