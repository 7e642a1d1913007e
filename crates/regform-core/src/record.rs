//! # Form Record and Error Map
//!
//! `FormRecord` is the in-progress value of every field at one point in
//! time. `ErrorMap` is the set of current per-field failures, at most one
//! message per field.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field::FieldKey;

/// The in-progress values of all registration fields.
///
/// Every value is text, including `phone`, which keeps whatever mask
/// formatting the input widget produced.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm: String,
}

impl FormRecord {
    /// An empty record, as shown when the form first renders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of `key`.
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Name => &self.name,
            FieldKey::Email => &self.email,
            FieldKey::Phone => &self.phone,
            FieldKey::Password => &self.password,
            FieldKey::Confirm => &self.confirm,
        }
    }

    /// Replaces the value of `key`.
    pub fn set(&mut self, key: FieldKey, value: impl Into<String>) {
        let slot = match key {
            FieldKey::Name => &mut self.name,
            FieldKey::Email => &mut self.email,
            FieldKey::Phone => &mut self.phone,
            FieldKey::Password => &mut self.password,
            FieldKey::Confirm => &mut self.confirm,
        };
        *slot = value.into();
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, key: FieldKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Resets every field to the empty string.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no field holds any text.
    pub fn is_empty(&self) -> bool {
        FieldKey::all().iter().all(|k| self.get(*k).is_empty())
    }
}

// Secrets stay out of logs and panic messages.
impl fmt::Debug for FormRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormRecord")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &redacted(&self.password))
            .field("confirm", &redacted(&self.confirm))
            .finish()
    }
}

fn redacted(secret: &str) -> &'static str {
    if secret.is_empty() {
        ""
    } else {
        "<redacted>"
    }
}

/// Current validation failures, one message per field, in form order.
///
/// Serializes as a JSON object keyed by field wire identifier, e.g.
/// `{"name":"Enter at least 3 letters."}`. Loading goes through
/// [`set`](Self::set), so an empty message never marks a field as failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<FieldKey, String>",
    into = "BTreeMap<FieldKey, String>"
)]
pub struct ErrorMap {
    errors: BTreeMap<FieldKey, String>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The message for `key`, or `None` if the field is currently valid.
    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.errors.get(&key).map(String::as_str)
    }

    /// Records `message` as the current error for `key`, replacing any
    /// earlier one. An empty message clears the field instead.
    pub fn set(&mut self, key: FieldKey, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            self.errors.remove(&key);
        } else {
            self.errors.insert(key, message);
        }
    }

    /// Marks `key` as valid.
    pub fn clear_field(&mut self, key: FieldKey) {
        self.errors.remove(&key);
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.errors.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failing fields and their messages, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        self.errors.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Failing field keys, in form order.
    pub fn fields(&self) -> Vec<FieldKey> {
        self.errors.keys().copied().collect()
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {field}: {message}")?;
        }
        Ok(())
    }
}

impl From<BTreeMap<FieldKey, String>> for ErrorMap {
    fn from(errors: BTreeMap<FieldKey, String>) -> Self {
        errors.into_iter().collect()
    }
}

impl From<ErrorMap> for BTreeMap<FieldKey, String> {
    fn from(map: ErrorMap) -> Self {
        map.errors
    }
}

impl FromIterator<(FieldKey, String)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (FieldKey, String)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, message) in iter {
            map.set(key, message);
        }
        map
    }
}
