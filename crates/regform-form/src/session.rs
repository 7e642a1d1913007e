//! # Registration Form Session
//!
//! Mutable form state owned by one UI thread. Validation itself is
//! delegated to [`FormValidator`]; this module only decides which errors
//! are visible and when the record is reset.

use regform_core::{ErrorMap, FieldKey, FormRecord};
use regform_schema::{FieldError, FormValidator, ValidationErrors};

/// Notice shown after a successful submission.
pub const SUBMIT_SUCCESS_NOTICE: &str = "Registration completed successfully!";

/// The state behind one registration form.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    validator: FormValidator,
    record: FormRecord,
    errors: ErrorMap,
    notice: Option<String>,
}

impl RegistrationForm {
    /// An empty form using `validator`.
    pub fn new(validator: FormValidator) -> Self {
        Self {
            validator,
            record: FormRecord::new(),
            errors: ErrorMap::new(),
            notice: None,
        }
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    pub fn value(&self, field: FieldKey) -> &str {
        self.record.get(field)
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// The visible error for `field`, if any.
    pub fn error(&self, field: FieldKey) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Store an edit. The field's error and the success notice go away
    /// until the next blur or submit.
    pub fn set_field(&mut self, field: FieldKey, value: impl Into<String>) {
        self.record.set(field, value);
        self.errors.clear_field(field);
        self.notice = None;
    }

    /// Validate `field` after it loses focus.
    ///
    /// Other fields' errors are left as they are.
    pub fn blur(&mut self, field: FieldKey) -> Result<(), FieldError> {
        match self.validator.validate_field(&self.record, field) {
            Ok(()) => {
                self.errors.clear_field(field);
                Ok(())
            }
            Err(e) => {
                self.errors.set(field, e.message.clone());
                Err(e)
            }
        }
    }

    /// Validate the whole form.
    ///
    /// On success the submitted record is returned and the form is reset
    /// to empty with the success notice set. On failure every failing
    /// field's message becomes visible and the record is kept.
    pub fn submit(&mut self) -> Result<FormRecord, ValidationErrors> {
        self.notice = None;
        self.errors.clear();

        match self.validator.validate_all(&self.record) {
            Ok(()) => {
                let submitted = std::mem::take(&mut self.record);
                self.notice = Some(SUBMIT_SUCCESS_NOTICE.to_string());
                tracing::info!("registration submitted");
                Ok(submitted)
            }
            Err(e) => {
                self.errors = e.errors().clone();
                tracing::debug!(
                    errors = e.len(),
                    fields = ?e.errors().fields(),
                    "registration rejected"
                );
                Err(e)
            }
        }
    }

    /// Drop all input, errors and the notice.
    pub fn reset(&mut self) {
        self.record.clear();
        self.errors.clear();
        self.notice = None;
    }
}
