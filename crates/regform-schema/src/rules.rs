//! # Rule Table
//!
//! A field rule is an ordered list of [`RuleCheck`]s. The runner
//! ([`FieldRule::evaluate`]) stops at the first failing check and returns
//! its message.
//!
//! Checks take `(value, record)`. Only [`Check::MatchesField`] reads the
//! record, and it reads it at call time, so the confirmation always
//! compares against the password as it is now.

use std::sync::OnceLock;

use regex_lite::Regex;
use regform_core::{FieldKey, FormRecord};

use crate::config::SchemaLimits;

pub const NAME_REQUIRED: &str = "Name is required.";
/// Wording with the default `name_min_chars`.
pub const NAME_TOO_SHORT: &str = "Enter at least 3 letters.";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Invalid email.";
pub const PHONE_REQUIRED: &str = "Phone is required.";
pub const PHONE_INVALID: &str = "Invalid phone number.";
pub const PASSWORD_REQUIRED: &str = "Password is required.";
/// Wording with the default `password_min_chars`.
pub const PASSWORD_TOO_SHORT: &str = "Minimum of 6 characters.";
pub const CONFIRM_REQUIRED: &str = "Confirm the password.";
pub const CONFIRM_MISMATCH: &str = "Passwords do not match.";

/// HTML living standard "valid e-mail address".
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

static EMAIL_GRAMMAR: OnceLock<Option<Regex>> = OnceLock::new();

/// The compiled email grammar, built on first use.
///
/// A compile failure is logged once and leaves the grammar unavailable,
/// in which case every address is rejected.
fn email_grammar() -> Option<&'static Regex> {
    EMAIL_GRAMMAR
        .get_or_init(|| match Regex::new(EMAIL_PATTERN) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::error!(error = %e, "email grammar failed to compile; all emails will be rejected");
                None
            }
        })
        .as_ref()
}

/// True if `value` is a syntactically valid email address.
pub fn is_email(value: &str) -> bool {
    email_grammar().is_some_and(|re| re.is_match(value))
}

/// Number of ASCII digits in `value`, ignoring all mask punctuation.
pub fn digit_count(value: &str) -> usize {
    value.chars().filter(char::is_ascii_digit).count()
}

/// A single predicate over a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Value is non-empty.
    Required,
    /// Value has at least this many characters.
    ///
    /// Counts Unicode scalar values, so an emoji outside the Basic
    /// Multilingual Plane is one character here where a UTF-16 `.length`
    /// would count two.
    MinChars(usize),
    /// Value matches the email grammar.
    Email,
    /// Digit count, after dropping non-digits, lies in `min..=max`.
    DigitCount { min: usize, max: usize },
    /// Value equals the current value of another field.
    MatchesField(FieldKey),
}

impl Check {
    pub fn passes(&self, value: &str, record: &FormRecord) -> bool {
        match *self {
            Self::Required => !value.is_empty(),
            Self::MinChars(min) => value.chars().count() >= min,
            Self::Email => is_email(value),
            Self::DigitCount { min, max } => (min..=max).contains(&digit_count(value)),
            Self::MatchesField(other) => value == record.get(other),
        }
    }
}

/// A check paired with the message shown when it fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCheck {
    pub check: Check,
    pub message: String,
}

impl RuleCheck {
    pub fn new(check: Check, message: impl Into<String>) -> Self {
        Self {
            check,
            message: message.into(),
        }
    }
}

/// Ordered checks for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    field: FieldKey,
    /// Strip surrounding whitespace before any check runs.
    trim: bool,
    checks: Vec<RuleCheck>,
}

impl FieldRule {
    pub fn new(field: FieldKey, trim: bool, checks: Vec<RuleCheck>) -> Self {
        Self {
            field,
            trim,
            checks,
        }
    }

    pub fn field(&self) -> FieldKey {
        self.field
    }

    pub fn trims(&self) -> bool {
        self.trim
    }

    pub fn checks(&self) -> &[RuleCheck] {
        &self.checks
    }

    /// Run the checks in order against the live record.
    ///
    /// Returns the message of the first failing check.
    pub fn evaluate(&self, record: &FormRecord) -> Result<(), &str> {
        let raw = record.get(self.field);
        let value = if self.trim { raw.trim() } else { raw };
        match self.checks.iter().find(|c| !c.check.passes(value, record)) {
            Some(failed) => Err(failed.message.as_str()),
            None => Ok(()),
        }
    }

    /// The registration rule for `field`.
    pub fn for_field(field: FieldKey, limits: &SchemaLimits) -> Self {
        match field {
            FieldKey::Name => Self::new(
                field,
                true,
                vec![
                    RuleCheck::new(Check::Required, NAME_REQUIRED),
                    RuleCheck::new(
                        Check::MinChars(limits.name_min_chars),
                        format!("Enter at least {} letters.", limits.name_min_chars),
                    ),
                ],
            ),
            FieldKey::Email => Self::new(
                field,
                true,
                vec![
                    RuleCheck::new(Check::Required, EMAIL_REQUIRED),
                    RuleCheck::new(Check::Email, EMAIL_INVALID),
                ],
            ),
            FieldKey::Phone => Self::new(
                field,
                false,
                vec![
                    RuleCheck::new(Check::Required, PHONE_REQUIRED),
                    RuleCheck::new(
                        Check::DigitCount {
                            min: limits.phone_min_digits,
                            max: limits.phone_max_digits,
                        },
                        PHONE_INVALID,
                    ),
                ],
            ),
            FieldKey::Password => Self::new(
                field,
                false,
                vec![
                    RuleCheck::new(Check::Required, PASSWORD_REQUIRED),
                    RuleCheck::new(
                        Check::MinChars(limits.password_min_chars),
                        format!("Minimum of {} characters.", limits.password_min_chars),
                    ),
                ],
            ),
            FieldKey::Confirm => Self::new(
                field,
                false,
                vec![
                    RuleCheck::new(Check::Required, CONFIRM_REQUIRED),
                    RuleCheck::new(Check::MatchesField(FieldKey::Password), CONFIRM_MISMATCH),
                ],
            ),
        }
    }
}
