//! # regform-schema — Registration Form Validation
//!
//! Evaluates the registration rule table against a [`FormRecord`].
//!
//! ## Rule Table (`rules`)
//!
//! Each field owns an ordered list of `(check, message)` pairs. Checks run
//! in order and the first failing check's message is the field's error.
//! Every check sees both the field value and the whole record, so the
//! confirmation rule reads the live password without special casing.
//!
//! ## Evaluation (`validate`)
//!
//! - [`FormValidator::validate_field`] runs one field's checks (blur).
//! - [`FormValidator::validate_all`] runs every field and collects one
//!   message per failing field (submit).
//!
//! Both return plain `Result` values. Failures are data, never panics.
//!
//! ## Configuration (`config`)
//!
//! [`SchemaLimits`] carries the numeric bounds of the table and can be
//! loaded from YAML or JSON.
//!
//! [`FormRecord`]: regform_core::FormRecord

pub mod config;
pub mod rules;
pub mod validate;

pub use config::SchemaLimits;
pub use rules::{digit_count, is_email, Check, FieldRule, RuleCheck};
pub use validate::{FieldError, FormValidator, ValidationErrors};
