//! Per-field state records.

/// Identifies a field in the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Name,
    Email,
}

impl FieldId {
    /// Stable key used in collected form values and logs.
    pub fn key(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
        }
    }
}

/// Which declared rule a field value failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    Required,
    Pattern,
}

/// A single surfaced validation error.
///
/// At most one error is surfaced per field at a time; when several rules
/// fail, the first declared rule wins (required before pattern).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: String,
}

/// Mutable per-field record owned by the form view state.
///
/// `dirty` is set on the first change, `touched` when the field loses
/// focus. `error` reflects the most recent validation pass only.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    pub id: FieldId,
    pub label: &'static str,
    pub value: String,
    pub dirty: bool,
    pub touched: bool,
    pub error: Option<FieldError>,
}

impl FieldState {
    pub fn new(id: FieldId, label: &'static str) -> Self {
        Self {
            id,
            label,
            value: String::new(),
            dirty: false,
            touched: false,
            error: None,
        }
    }
}
