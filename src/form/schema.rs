//! The declared shape of the contact form.

use crate::form::field::{FieldError, FieldId};
use crate::form::rules::FieldRule;

/// One field's descriptor: identity, label and declared rules, in the
/// order they are checked.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub id: FieldId,
    pub label: &'static str,
    pub rules: Vec<FieldRule>,
}

impl FieldSpec {
    /// Runs this field's rules against `value`.
    ///
    /// Returns the first failing rule's error, so a required failure
    /// shadows a pattern failure on the same value.
    pub fn validate(&self, value: &str) -> Option<FieldError> {
        self.rules.iter().find_map(|rule| rule.check(value))
    }
}

/// Ordered field descriptors for one form.
#[derive(Debug, Clone)]
pub struct FormSchema {
    specs: Vec<FieldSpec>,
}

impl FormSchema {
    /// The two-field contact form: name is required, email is required
    /// and must look like an email address.
    pub fn contact() -> Self {
        Self {
            specs: vec![
                FieldSpec {
                    id: FieldId::Name,
                    label: "Name",
                    rules: vec![FieldRule::required("Please enter your name")],
                },
                FieldSpec {
                    id: FieldId::Email,
                    label: "Email",
                    rules: vec![
                        FieldRule::required("Please enter your email"),
                        FieldRule::email("Please enter a valid email address"),
                    ],
                },
            ],
        }
    }

    pub fn specs(&self) -> &[FieldSpec] {
        &self.specs
    }
}

/// Values collected from a form whose rules all passed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormValues {
    pub name: String,
    pub email: String,
}
