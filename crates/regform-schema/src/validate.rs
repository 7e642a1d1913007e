//! # Form Validation
//!
//! Runs the rule table against a [`FormRecord`].
//!
//! Validation outcomes are returned as `Err` values carrying data
//! ([`FieldError`], [`ValidationErrors`]). They are never used for control
//! flow beyond the `Result` itself and never panic.
//!
//! ## Asymmetry between blur and submit
//!
//! Both operations report only the first failing check of a field. The
//! difference is breadth: `validate_field` looks at one field, while
//! `validate_all` visits every field and reports all failing fields at
//! once.

use regform_core::{ErrorMap, FieldKey, FormRecord, RegformError};
use thiserror::Error;

use crate::config::SchemaLimits;
use crate::rules::FieldRule;

/// One field failed one of its checks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// The field that failed.
    pub field: FieldKey,
    /// Message of the first failing check.
    pub message: String,
}

/// One or more fields failed whole-form validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("form validation failed for {} field(s):\n{errors}", .errors.len())]
pub struct ValidationErrors {
    errors: ErrorMap,
}

impl ValidationErrors {
    /// The per-field messages.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Message for `field`, if it failed.
    pub fn get(&self, field: FieldKey) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl From<ValidationErrors> for ErrorMap {
    fn from(e: ValidationErrors) -> Self {
        e.errors
    }
}

/// The registration validator.
///
/// Holds only the immutable rule table, so it is `Send + Sync` and every
/// call is independent of every other.
#[derive(Debug, Clone)]
pub struct FormValidator {
    /// One rule per field, indexed in [`FieldKey::all`] order.
    rules: Vec<FieldRule>,
    limits: SchemaLimits,
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::build(SchemaLimits::default())
    }
}

impl FormValidator {
    /// Validator with the default registration limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validator with configured limits.
    ///
    /// # Errors
    ///
    /// Returns `RegformError::Config` if the limits fail
    /// [`SchemaLimits::validate`].
    pub fn with_limits(limits: SchemaLimits) -> Result<Self, RegformError> {
        limits.validate()?;
        Ok(Self::build(limits))
    }

    fn build(limits: SchemaLimits) -> Self {
        let rules = FieldKey::all()
            .iter()
            .map(|field| FieldRule::for_field(*field, &limits))
            .collect();
        Self { rules, limits }
    }

    pub fn limits(&self) -> &SchemaLimits {
        &self.limits
    }

    /// The rule for `field`.
    pub fn rule(&self, field: FieldKey) -> &FieldRule {
        &self.rules[field as usize]
    }

    /// All rules in form order.
    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Validate a single field against the live record.
    ///
    /// For [`FieldKey::Confirm`] the password is read from `record` on
    /// this call, never from an earlier one.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] with the first failing check's message.
    pub fn validate_field(&self, record: &FormRecord, field: FieldKey) -> Result<(), FieldError> {
        let outcome = self.rule(field).evaluate(record).map_err(|message| FieldError {
            field,
            message: message.to_string(),
        });
        tracing::debug!(field = %field, valid = outcome.is_ok(), "field validated");
        outcome
    }

    /// Validate a field named by its wire identifier.
    ///
    /// The outer `Result` separates a bad key (`RegformError::UnknownField`)
    /// from the validation outcome in the inner one.
    pub fn validate_field_named(
        &self,
        record: &FormRecord,
        name: &str,
    ) -> Result<Result<(), FieldError>, RegformError> {
        let field: FieldKey = name.parse()?;
        Ok(self.validate_field(record, field))
    }

    /// Validate every field, collecting one message per failing field.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] listing every failing field.
    pub fn validate_all(&self, record: &FormRecord) -> Result<(), ValidationErrors> {
        let errors: ErrorMap = self
            .rules
            .iter()
            .filter_map(|rule| {
                rule.evaluate(record)
                    .err()
                    .map(|message| (rule.field(), message.to_string()))
            })
            .collect();

        tracing::debug!(errors = errors.len(), "form validated");

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { errors })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::*;

    fn valid_record() -> FormRecord {
        FormRecord {
            name: "Maria Silva".to_string(),
            email: "maria@example.com".to_string(),
            phone: "(11) 91234-5678".to_string(),
            password: "abcdef".to_string(),
            confirm: "abcdef".to_string(),
        }
    }

    #[test]
    fn test_valid_record_passes() {
        let validator = FormValidator::new();
        validator.validate_all(&valid_record()).unwrap();
        for field in FieldKey::all() {
            validator.validate_field(&valid_record(), *field).unwrap();
        }
    }

    #[test]
    fn test_rules_indexed_by_field() {
        let validator = FormValidator::new();
        for field in FieldKey::all() {
            assert_eq!(validator.rule(*field).field(), *field);
        }
        assert_eq!(validator.rules().len(), FieldKey::all().len());
    }

    #[test]
    fn test_empty_record_reports_every_field() {
        let err = FormValidator::new()
            .validate_all(&FormRecord::new())
            .unwrap_err();
        assert_eq!(err.len(), 5);
        assert_eq!(err.get(FieldKey::Name), Some(NAME_REQUIRED));
        assert_eq!(err.get(FieldKey::Email), Some(EMAIL_REQUIRED));
        assert_eq!(err.get(FieldKey::Phone), Some(PHONE_REQUIRED));
        assert_eq!(err.get(FieldKey::Password), Some(PASSWORD_REQUIRED));
        assert_eq!(err.get(FieldKey::Confirm), Some(CONFIRM_REQUIRED));
    }

    #[test]
    fn test_validate_all_reports_first_check_only() {
        // "  " fails required after trim; the length message must not appear.
        let record = FormRecord {
            name: "  ".to_string(),
            ..valid_record()
        };
        let err = FormValidator::new().validate_all(&record).unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.get(FieldKey::Name), Some(NAME_REQUIRED));
    }

    #[test]
    fn test_validate_field_ignores_other_fields() {
        let record = FormRecord {
            email: "broken".to_string(),
            ..valid_record()
        };
        let validator = FormValidator::new();
        validator.validate_field(&record, FieldKey::Name).unwrap();
        let err = validator.validate_field(&record, FieldKey::Email).unwrap_err();
        assert_eq!(
            err,
            FieldError {
                field: FieldKey::Email,
                message: EMAIL_INVALID.to_string(),
            }
        );
        assert_eq!(err.to_string(), "email: Invalid email.");
    }

    #[test]
    fn test_unknown_field_is_not_a_validation_outcome() {
        let validator = FormValidator::new();
        let err = validator
            .validate_field_named(&valid_record(), "telefone")
            .unwrap_err();
        assert_eq!(err, RegformError::UnknownField("telefone".to_string()));

        let outcome = validator
            .validate_field_named(&valid_record(), "phone")
            .unwrap();
        assert!(outcome.is_ok());
    }

    #[test]
    fn test_with_limits_rejects_bad_config() {
        let limits = SchemaLimits {
            phone_min_digits: 12,
            phone_max_digits: 11,
            ..SchemaLimits::default()
        };
        assert!(matches!(
            FormValidator::with_limits(limits),
            Err(RegformError::Config(_))
        ));
    }

    #[test]
    fn test_with_limits_applies_bounds() {
        let limits = SchemaLimits {
            password_min_chars: 8,
            ..SchemaLimits::default()
        };
        let validator = FormValidator::with_limits(limits).unwrap();
        let err = validator
            .validate_field(&valid_record(), FieldKey::Password)
            .unwrap_err();
        assert_eq!(err.message, "Minimum of 8 characters.");
        assert_eq!(validator.limits().password_min_chars, 8);
    }

    #[test]
    fn test_validation_errors_display() {
        let record = FormRecord {
            name: "Jo".to_string(),
            confirm: "abcxyz".to_string(),
            ..valid_record()
        };
        let err = FormValidator::new().validate_all(&record).unwrap_err();
        assert_eq!(
            err.to_string(),
            "form validation failed for 2 field(s):\n  name: Enter at least 3 letters.\n  confirm: Passwords do not match."
        );
    }

    #[test]
    fn test_validation_errors_convert_to_error_map() {
        let record = FormRecord {
            phone: "123".to_string(),
            ..valid_record()
        };
        let map: ErrorMap = FormValidator::new().validate_all(&record).unwrap_err().into();
        assert_eq!(map.fields(), vec![FieldKey::Phone]);
    }

    #[test]
    fn test_validator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FormValidator>();
    }
}
