use crate::form::{FieldError, FormValues};
use crate::ui::mvi::Intent;

/// Intents dispatched to the form reducer.
///
/// Validation runs in the app layer against the schema; its outcome
/// enters the reducer as data (`Validated` / `Accepted`), keeping the
/// reducer pure.
#[derive(Debug, Clone)]
pub enum FormIntent {
    /// A printable character was typed into the focused field.
    Input { ch: char },
    /// Backspace in the focused field.
    Backspace,
    /// Move focus to the next field; the field losing focus becomes touched.
    FocusNext,
    /// Move focus to the previous field; the field losing focus becomes touched.
    FocusPrev,
    /// Outcome of a validation pass, one slot per field in schema order.
    /// `None` means the field passed.
    Validated {
        errors: Vec<Option<FieldError>>,
    },
    /// Every rule passed on submit: record the collected values and show
    /// the summary modal.
    Accepted { values: FormValues },
    /// Close the summary modal.
    DismissSubmitted,
}

impl Intent for FormIntent {}
