//! # Error Types
//!
//! Programming and configuration faults. These are kept apart from
//! validation outcomes so a caller can never confuse "the user typed
//! something invalid" with "the caller passed a bad key".

use thiserror::Error;

/// Top-level fault type for the registration form crates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegformError {
    /// A field identifier that is not one of the five form fields.
    #[error("unknown form field: {0:?}")]
    UnknownField(String),

    /// Validator limits that cannot describe a usable rule set.
    #[error("invalid schema configuration: {0}")]
    Config(String),
}
