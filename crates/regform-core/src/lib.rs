//! # regform-core — Foundational Types for the Registration Form
//!
//! Defines the primitives every other crate in the workspace builds on.
//! It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Typed field keys.** `FieldKey` is a closed enum with exhaustive
//!    `match` everywhere. A bad key can only enter through string parsing,
//!    which reports `RegformError::UnknownField` instead of a validation
//!    message.
//!
//! 2. **Text-only record.** `FormRecord` holds the five in-progress values
//!    as `String`s. It is created empty, edited field by field and reset
//!    on successful submission.
//!
//! 3. **Errors as data.** `ErrorMap` maps a field to its single current
//!    message. Absence of a key means the field is valid.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `regform-*` crates (leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod field;
pub mod record;

pub use error::RegformError;
pub use field::{FieldKey, FIELD_COUNT};
pub use record::{ErrorMap, FormRecord};
