//! # Schema Limits
//!
//! Numeric bounds used to build the rule table. Missing keys fall back to
//! the registration defaults.
//!
//! ```yaml
//! name_min_chars: 3
//! password_min_chars: 6
//! phone_min_digits: 10
//! phone_max_digits: 11
//! ```

use regform_core::RegformError;
use serde::{Deserialize, Serialize};

/// Bounds for the length and digit-count checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemaLimits {
    /// Minimum characters in the trimmed name.
    pub name_min_chars: usize,
    /// Minimum characters in the password.
    pub password_min_chars: usize,
    /// Fewest digits accepted in the phone number (area code included).
    pub phone_min_digits: usize,
    /// Most digits accepted in the phone number (area code included).
    pub phone_max_digits: usize,
}

impl Default for SchemaLimits {
    /// Area code plus an 8- or 9-digit local number.
    fn default() -> Self {
        Self {
            name_min_chars: 3,
            password_min_chars: 6,
            phone_min_digits: 10,
            phone_max_digits: 11,
        }
    }
}

impl SchemaLimits {
    /// Parse limits from a YAML document and check them.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, RegformError> {
        let limits: Self = serde_yaml::from_str(yaml)
            .map_err(|e| RegformError::Config(format!("invalid YAML: {e}")))?;
        limits.validate()?;
        Ok(limits)
    }

    /// Parse limits from a JSON document and check them.
    pub fn from_json_str(json: &str) -> Result<Self, RegformError> {
        let limits: Self = serde_json::from_str(json)
            .map_err(|e| RegformError::Config(format!("invalid JSON: {e}")))?;
        limits.validate()?;
        Ok(limits)
    }

    /// Reject bounds that would make a rule meaningless.
    ///
    /// A zero minimum would let the length check pass values the
    /// required check already rejects, and an inverted digit range
    /// would reject every phone number.
    pub fn validate(&self) -> Result<(), RegformError> {
        if self.name_min_chars == 0 {
            return Err(RegformError::Config(
                "name_min_chars must be at least 1".to_string(),
            ));
        }
        if self.password_min_chars == 0 {
            return Err(RegformError::Config(
                "password_min_chars must be at least 1".to_string(),
            ));
        }
        if self.phone_min_digits == 0 {
            return Err(RegformError::Config(
                "phone_min_digits must be at least 1".to_string(),
            ));
        }
        if self.phone_min_digits > self.phone_max_digits {
            return Err(RegformError::Config(format!(
                "phone_min_digits ({}) exceeds phone_max_digits ({})",
                self.phone_min_digits, self.phone_max_digits
            )));
        }
        Ok(())
    }
}
