//! Error types for the form controller

use login_form_validation::{Field, FieldErrors, UnknownField};
use thiserror::Error;

/// Why `submit()` did not start an attempt
///
/// A backend failure is not a `SubmitError`: it completes the attempt and is
/// reported through the failure callback and the password error slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Validation failed; the backend was not called
    #[error("form has validation errors on: {}", field_list(.0))]
    Invalid(FieldErrors),

    /// Another attempt is still running
    #[error("a submission is already in progress")]
    InFlight,
}

fn field_list(errors: &FieldErrors) -> String {
    errors
        .fields()
        .iter()
        .map(Field::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Misuse of the controller's mutators
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    UnknownField(#[from] UnknownField),

    #[error("field `{field}` expects a {expected} value, got {actual}")]
    ValueKind {
        field: Field,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("cannot reset the form while a submission is in progress")]
    SubmissionInFlight,
}
