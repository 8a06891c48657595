// File: src/values.rs
// Purpose: Login form values and field identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The credentials entered into the login form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginFormValues {
    pub email: String,
    pub password: String,
    /// Passthrough flag; carried to the success callback and nothing else
    pub remember_me: bool,
}

impl LoginFormValues {
    /// Default values with the email pre-filled
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    /// Current value of a field
    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::Email => FieldValue::Text(self.email.clone()),
            Field::Password => FieldValue::Text(self.password.clone()),
            Field::RememberMe => FieldValue::Flag(self.remember_me),
        }
    }
}

/// Form field identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Email,
    Password,
    RememberMe,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Email, Field::Password, Field::RememberMe];

    /// Field name as the rendering layer knows it
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
            Field::RememberMe => "rememberMe",
        }
    }

    /// Whether the field carries text (as opposed to a checkbox flag)
    pub fn is_text(&self) -> bool {
        !matches!(self, Field::RememberMe)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a field name does not belong to the login form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Field::Email),
            "password" => Ok(Field::Password),
            "rememberMe" | "remember_me" => Ok(Field::RememberMe),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// A value assigned to a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Flag(_) => "flag",
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}
