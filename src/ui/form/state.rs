use crate::form::{FieldId, FieldState, FormSchema, FormValues};
use crate::ui::mvi::UiState;

/// State of the form view.
///
/// Field order matches the schema (name, email). `validated` flips on
/// the first submit attempt; from then on every edit re-validates, so a
/// field's error always reflects the latest pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FormViewState {
    pub fields: Vec<FieldState>,
    pub focused: usize,
    pub validated: bool,
    /// Values of the last accepted submit while its summary modal is open.
    pub submitted: Option<FormValues>,
    /// Number of accepted submits.
    pub submissions: u64,
}

impl Default for FormViewState {
    fn default() -> Self {
        Self::from_schema(&FormSchema::contact())
    }
}

impl UiState for FormViewState {}

impl FormViewState {
    pub fn from_schema(schema: &FormSchema) -> Self {
        Self {
            fields: schema
                .specs()
                .iter()
                .map(|spec| FieldState::new(spec.id, spec.label))
                .collect(),
            focused: 0,
            validated: false,
            submitted: None,
            submissions: 0,
        }
    }

    /// Current value of a field, by id. Missing fields read as empty.
    pub fn value_of(&self, id: FieldId) -> &str {
        self.fields
            .iter()
            .find(|field| field.id == id)
            .map(|field| field.value.as_str())
            .unwrap_or("")
    }

    /// Collects the current values in submit-callback shape.
    pub fn values(&self) -> FormValues {
        FormValues {
            name: self.value_of(FieldId::Name).to_string(),
            email: self.value_of(FieldId::Email).to_string(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|field| field.error.is_some())
    }

    pub fn modal_open(&self) -> bool {
        self.submitted.is_some()
    }
}
