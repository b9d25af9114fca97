//! Declarative validation rules.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::form::field::{FieldError, FieldErrorKind};

/// RFC-lite email shape, matched case-insensitively.
const EMAIL_PATTERN: &str = r"^[A-Z0-9._%+-]+@[A-Z0-9._%+-]+\.[A-Z]{2,}$";

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(EMAIL_PATTERN)
        .case_insensitive(true)
        .build()
        .expect("email pattern is a valid regex")
});

/// A validation predicate plus the message surfaced when it fails.
#[derive(Debug, Clone)]
pub enum FieldRule {
    /// The value must be non-empty.
    Required { message: &'static str },
    /// The value must match the given pattern.
    Pattern {
        regex: &'static Regex,
        message: &'static str,
    },
}

impl FieldRule {
    /// The required rule with its surfaced message.
    pub fn required(message: &'static str) -> Self {
        FieldRule::Required { message }
    }

    /// The case-insensitive email pattern rule.
    pub fn email(message: &'static str) -> Self {
        FieldRule::Pattern {
            regex: &EMAIL_REGEX,
            message,
        }
    }

    /// Checks `value` against this rule, returning the error to surface
    /// when it fails.
    pub fn check(&self, value: &str) -> Option<FieldError> {
        match self {
            FieldRule::Required { message } => value.is_empty().then(|| FieldError {
                kind: FieldErrorKind::Required,
                message: (*message).to_string(),
            }),
            FieldRule::Pattern { regex, message } => (!regex.is_match(value)).then(|| FieldError {
                kind: FieldErrorKind::Pattern,
                message: (*message).to_string(),
            }),
        }
    }
}
