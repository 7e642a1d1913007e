//! # regform-form — Registration Form Lifecycle
//!
//! Drives a [`FormRecord`] through the edits, blurs and submissions a UI
//! produces, keeping the visible error map and success notice in step.
//!
//! | Event | Effect |
//! |---|---|
//! | edit (`set_field`) | store value, clear that field's error, clear notice |
//! | blur (`blur`) | validate that field only, show or clear its error |
//! | submit (`submit`) | validate every field; show all errors, or reset and show notice |
//!
//! Rendering and input masking belong to the host UI.
//!
//! [`FormRecord`]: regform_core::FormRecord

pub mod session;

pub use session::{RegistrationForm, SUBMIT_SUCCESS_NOTICE};
