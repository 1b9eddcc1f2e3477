//! The form controller.

use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::config::Config;
use crate::form::state::{FieldState, FieldView, FormState};
use crate::form::ValidationMode;
use crate::schema::{FieldName, FormValues, SignupData, SignupSchema};
use crate::validation::{ValidationErrors, ValidationResult};

// ═══════════════════════════════════════════════════════════════════════════════
// Submit Handler
// ═══════════════════════════════════════════════════════════════════════════════

/// Receives the validated record after a successful submit.
pub trait SubmitHandler {
    fn on_valid_submit(&mut self, data: SignupData);
}

impl<F> SubmitHandler for F
where
    F: FnMut(SignupData),
{
    fn on_valid_submit(&mut self, data: SignupData) {
        self(data)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Form Controller
// ═══════════════════════════════════════════════════════════════════════════════

/// Tracks field values, re-validates on every event and gates submission.
///
/// Two error maps are kept: the full result of validating the current
/// snapshot, and the subset the user should see, filtered by
/// [`ValidationMode`]. A revealed field's error always reflects the current
/// snapshot, so fixing `password` clears a visible mismatch on
/// `confirmPassword` in the same event.
pub struct FormController<H> {
    schema: SignupSchema,
    mode: ValidationMode,
    values: FormValues,
    fields: BTreeMap<FieldName, FieldState>,
    all_errors: ValidationErrors,
    errors: ValidationErrors,
    submit_count: u32,
    is_submitted: bool,
    is_submit_successful: bool,
    revision: u64,
    handler: H,
}

impl<H: SubmitHandler> FormController<H> {
    /// Controller with the default schema and [`ValidationMode::OnChange`].
    pub fn new(handler: H) -> Self {
        Self::with_schema(SignupSchema::new(), ValidationMode::default(), handler)
    }

    /// Controller using the configured messages and mode.
    pub fn from_config(config: &Config, handler: H) -> Self {
        Self::with_schema(
            SignupSchema::with_messages(&config.messages),
            config.form.mode,
            handler,
        )
    }

    pub fn with_schema(schema: SignupSchema, mode: ValidationMode, handler: H) -> Self {
        let mut controller = Self {
            schema,
            mode,
            values: FormValues::new(),
            fields: BTreeMap::new(),
            all_errors: ValidationErrors::new(),
            errors: ValidationErrors::new(),
            submit_count: 0,
            is_submitted: false,
            is_submit_successful: false,
            revision: 0,
            handler,
        };
        controller.revalidate();
        controller
    }

    // ───────────────────────────────────────────────────────────────────────────
    // Events
    // ───────────────────────────────────────────────────────────────────────────

    /// Record a new value for `field` and re-validate the whole snapshot.
    pub fn on_field_change(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.set(field, value);

        let mode = self.mode;
        let state = self.fields.entry(field).or_default();
        state.dirty = true;
        if mode.reveals_on_change(state.touched) {
            state.revealed = true;
        }

        self.revalidate();
        self.revision += 1;

        debug!(
            field = %field,
            visible_errors = self.errors.field_count(),
            valid = self.is_valid(),
            "field changed"
        );
    }

    /// Record that `field` lost focus.
    pub fn on_field_blur(&mut self, field: FieldName) {
        let mode = self.mode;
        let state = self.fields.entry(field).or_default();
        state.touched = true;
        if mode.reveals_on_blur() {
            state.revealed = true;
        }

        self.revalidate();
        self.revision += 1;

        debug!(field = %field, visible_errors = self.errors.field_count(), "field blurred");
    }

    /// Re-validate and, when the snapshot is valid, hand the data to the
    /// handler exactly once and discard the values.
    ///
    /// On failure the handler is not called, every field's error becomes
    /// visible, and the errors are returned.
    pub fn on_submit(&mut self) -> ValidationResult<()> {
        self.submit_count += 1;
        self.is_submitted = true;
        self.revision += 1;

        match self.schema.validate(&self.values) {
            Ok(data) => {
                self.is_submit_successful = true;
                info!(submit_count = self.submit_count, "form submitted");
                self.handler.on_valid_submit(data);
                self.clear_values();
                Ok(())
            }
            Err(errors) => {
                self.is_submit_successful = false;
                for field in FieldName::ALL {
                    self.fields.entry(field).or_default().revealed = true;
                }
                self.revalidate();
                debug!(
                    submit_count = self.submit_count,
                    errors = errors.field_count(),
                    "submit rejected"
                );
                Err(errors)
            }
        }
    }

    /// Return to the freshly mounted state.
    pub fn reset(&mut self) {
        self.clear_values();
        self.submit_count = 0;
        self.is_submitted = false;
        self.is_submit_successful = false;
        self.revision += 1;
    }

    fn clear_values(&mut self) {
        self.values.clear();
        self.fields.clear();
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.all_errors = match self.schema.validate(&self.values) {
            Ok(_) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        let mut visible = self.all_errors.clone();
        let fields = &self.fields;
        visible.retain_fields(|path| {
            path.parse::<FieldName>()
                .ok()
                .and_then(|field| fields.get(&field))
                .map(|state| state.revealed)
                .unwrap_or(false)
        });
        self.errors = visible;
    }

    // ───────────────────────────────────────────────────────────────────────────
    // Queries
    // ───────────────────────────────────────────────────────────────────────────

    /// Whether submit is enabled: the snapshot validates and every required
    /// field was visited or holds a value.
    pub fn is_valid(&self) -> bool {
        self.all_errors.is_empty()
            && self.schema.fields().iter().filter(|spec| spec.required).all(|spec| {
                self.field_state(spec.name).visited()
                    || self.values.get(spec.name).is_some_and(|v| !v.is_empty())
            })
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn schema(&self) -> &SignupSchema {
        &self.schema
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: FieldName) -> Option<&str> {
        self.values.get(field)
    }

    /// Errors the user should currently see.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Every error in the current snapshot, visible or not.
    pub fn all_errors(&self) -> &ValidationErrors {
        &self.all_errors
    }

    /// Visible error message for one field.
    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.errors.first(field.as_str()).map(|e| e.message.as_str())
    }

    pub fn field_state(&self, field: FieldName) -> FieldState {
        self.fields.get(&field).copied().unwrap_or_default()
    }

    /// Render-ready views of every field, in declaration order.
    pub fn fields(&self) -> Vec<FieldView<'_>> {
        self.schema
            .fields()
            .iter()
            .map(|spec| FieldView {
                spec,
                value: self.values.get(spec.name),
                error: self.errors.first(spec.name.as_str()),
                state: self.field_state(spec.name),
            })
            .collect()
    }

    pub fn state(&self) -> FormState {
        FormState {
            values: self.values.clone(),
            errors: FieldName::ALL
                .into_iter()
                .filter_map(|field| self.error(field).map(|m| (field, m.to_string())))
                .collect(),
            is_valid: self.is_valid(),
            is_submitted: self.is_submitted,
            is_submit_successful: self.is_submit_successful,
            submit_count: self.submit_count,
            revision: self.revision,
        }
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    pub fn is_submitted(&self) -> bool {
        self.is_submitted
    }

    pub fn is_submit_successful(&self) -> bool {
        self.is_submit_successful
    }

    /// Bumped on every event; a UI re-renders when it changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════
