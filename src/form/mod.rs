//! Explicit form field descriptors and validation.
//!
//! Fields are plain data records rather than implicit two-way bindings:
//! the UI layer owns a [`FieldState`] per field, the [`FormSchema`] owns
//! the declared [`FieldRule`]s, and validation is an explicit pass that
//! produces at most one [`FieldError`] per field.

mod field;
mod rules;
mod schema;

pub use field::{FieldError, FieldErrorKind, FieldId, FieldState};
pub use rules::FieldRule;
pub use schema::{FieldSpec, FormSchema, FormValues};
