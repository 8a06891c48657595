// File: src/errors.rs
// Purpose: Per-field validation errors

use crate::values::Field;
use std::fmt;
use thiserror::Error;

/// Reason a single rule rejected a field value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required")]
    EmptyField,

    #[error("Invalid email address")]
    InvalidFormat,

    #[error("Password must be at least {min} characters")]
    TooShort { min: usize },

    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,

    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,

    #[error("Password must contain at least one digit")]
    MissingDigit,

    #[error("Password must contain at least one special character")]
    MissingSpecial,
}

/// Error held in a field's slot
///
/// Usually produced by a rule. The submission path may also put a backend
/// message into the password slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Rule(ValidationError),
    Submission(String),
}

impl FieldError {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Rule(err) => write!(f, "{}", err),
            FieldError::Submission(message) => f.write_str(message),
        }
    }
}

impl From<ValidationError> for FieldError {
    fn from(err: ValidationError) -> Self {
        FieldError::Rule(err)
    }
}

/// Errors per validated field, at most one each
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        match field {
            Field::Email => self.email.as_ref(),
            Field::Password => self.password.as_ref(),
            Field::RememberMe => None,
        }
    }

    /// The rule error of a field, ignoring injected submission messages
    pub fn validation_error(&self, field: Field) -> Option<&ValidationError> {
        match self.get(field) {
            Some(FieldError::Rule(err)) => Some(err),
            _ => None,
        }
    }

    /// Error message of a field, if any
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(FieldError::message)
    }

    pub fn has_errors(&self) -> bool {
        self.email.is_some() || self.password.is_some()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_errors()
    }

    /// Fields that currently hold an error, in form order
    pub fn fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_some())
            .collect()
    }

    /// Puts a backend failure message into the password slot
    pub fn set_submission_error(&mut self, message: impl Into<String>) {
        self.password = Some(FieldError::Submission(message.into()));
    }
}
