//! # Form Fields
//!
//! The five registration fields as a closed enum. Declaration order is
//! form order, which is also the `Ord` used by [`ErrorMap`](crate::ErrorMap).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RegformError;

/// One field of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    /// Full name.
    Name,
    /// Email address.
    Email,
    /// Phone number, usually masked as `(00) 0000-0000` or `(00) 00000-0000`.
    Phone,
    /// Password.
    Password,
    /// Password confirmation. Compared against the live `Password` value.
    Confirm,
}

/// Number of form fields.
pub const FIELD_COUNT: usize = 5;

impl FieldKey {
    /// Returns all fields in form order.
    pub fn all() -> &'static [FieldKey] {
        &[
            Self::Name,
            Self::Email,
            Self::Phone,
            Self::Password,
            Self::Confirm,
        ]
    }

    /// Returns the wire identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Password => "password",
            Self::Confirm => "confirm",
        }
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = RegformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "password" => Ok(Self::Password),
            "confirm" => Ok(Self::Confirm),
            other => Err(RegformError::UnknownField(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_count() {
        assert_eq!(FieldKey::all().len(), FIELD_COUNT);
    }

    #[test]
    fn test_all_fields_in_form_order() {
        let mut sorted = FieldKey::all().to_vec();
        sorted.sort();
        assert_eq!(sorted, FieldKey::all());
    }

    #[test]
    fn test_as_str_parses_back() {
        for field in FieldKey::all() {
            let parsed: FieldKey = field.as_str().parse().unwrap();
            assert_eq!(*field, parsed);
        }
    }

    #[test]
    fn test_from_str_unknown_field() {
        let err = "nome".parse::<FieldKey>().unwrap_err();
        assert_eq!(err, RegformError::UnknownField("nome".to_string()));
        assert!("Name".parse::<FieldKey>().is_err()); // case-sensitive
        assert!("".parse::<FieldKey>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for field in FieldKey::all() {
            let json = serde_json::to_string(field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.as_str()));
        }
    }

    #[test]
    fn test_display_matches_as_str() {
        for field in FieldKey::all() {
            assert_eq!(field.to_string(), field.as_str());
        }
    }
}
