// File: src/schema.rs
// Purpose: Ordered rule lists per field and their evaluation

use crate::email;
use crate::errors::{FieldError, FieldErrors, ValidationError};
use crate::password;
use crate::values::LoginFormValues;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub(crate) static DEFAULT_SCHEMA: Lazy<ValidationSchema> = Lazy::new(ValidationSchema::default);

/// A single validation predicate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Value must not be empty; with `trim`, whitespace-only counts as empty
    Required { trim: bool },
    EmailFormat,
    MinLength(usize),
    Lowercase,
    Uppercase,
    Digit,
    /// At least one character out of the given set
    Special(String),
}

impl Rule {
    /// Evaluates the rule against a text value
    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        let passed = match self {
            Rule::Required { trim: true } => !email::is_blank(value),
            Rule::Required { trim: false } => !value.is_empty(),
            Rule::EmailFormat => email::is_valid_email(value),
            Rule::MinLength(min) => password::has_min_length(value, *min),
            Rule::Lowercase => password::has_lowercase(value),
            Rule::Uppercase => password::has_uppercase(value),
            Rule::Digit => password::has_digit(value),
            Rule::Special(allowed) => password::has_special(value, allowed),
        };

        if passed {
            Ok(())
        } else {
            Err(self.failure())
        }
    }

    fn failure(&self) -> ValidationError {
        match self {
            Rule::Required { .. } => ValidationError::EmptyField,
            Rule::EmailFormat => ValidationError::InvalidFormat,
            Rule::MinLength(min) => ValidationError::TooShort { min: *min },
            Rule::Lowercase => ValidationError::MissingLowercase,
            Rule::Uppercase => ValidationError::MissingUppercase,
            Rule::Digit => ValidationError::MissingDigit,
            Rule::Special(_) => ValidationError::MissingSpecial,
        }
    }

    /// Short human-readable rule name
    pub fn describe(&self) -> String {
        match self {
            Rule::Required { .. } => "required".to_string(),
            Rule::EmailFormat => "email".to_string(),
            Rule::MinLength(min) => format!("min_length({})", min),
            Rule::Lowercase => "lowercase".to_string(),
            Rule::Uppercase => "uppercase".to_string(),
            Rule::Digit => "digit".to_string(),
            Rule::Special(allowed) => format!("special({})", allowed),
        }
    }
}

/// Tunable parts of the password rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSettings {
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,

    #[serde(default = "default_special_characters")]
    pub special_characters: String,
}

fn default_min_password_length() -> usize {
    password::DEFAULT_MIN_LENGTH
}

fn default_special_characters() -> String {
    password::DEFAULT_SPECIAL_CHARACTERS.to_string()
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            min_password_length: default_min_password_length(),
            special_characters: default_special_characters(),
        }
    }
}

/// Ordered rules for each validated field
///
/// The first failing rule of a field decides its error; later rules are not
/// evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationSchema {
    email: Vec<Rule>,
    password: Vec<Rule>,
}

impl ValidationSchema {
    /// Builds the login rules using the given settings
    pub fn from_settings(settings: &ValidationSettings) -> Self {
        Self {
            email: vec![Rule::Required { trim: true }, Rule::EmailFormat],
            password: vec![
                Rule::Required { trim: false },
                Rule::MinLength(settings.min_password_length),
                Rule::Lowercase,
                Rule::Uppercase,
                Rule::Digit,
                Rule::Special(settings.special_characters.clone()),
            ],
        }
    }

    pub fn email_rules(&self) -> &[Rule] {
        &self.email
    }

    pub fn password_rules(&self) -> &[Rule] {
        &self.password
    }

    /// Validates all fields
    pub fn validate(&self, values: &LoginFormValues) -> FieldErrors {
        FieldErrors {
            email: first_failure(&self.email, &values.email),
            password: first_failure(&self.password, &values.password),
        }
    }

    /// Rule names per field, in evaluation order
    pub fn describe(&self) -> Vec<(&'static str, Vec<String>)> {
        vec![
            ("email", self.email.iter().map(Rule::describe).collect()),
            ("password", self.password.iter().map(Rule::describe).collect()),
        ]
    }
}

impl Default for ValidationSchema {
    fn default() -> Self {
        Self::from_settings(&ValidationSettings::default())
    }
}

fn first_failure(rules: &[Rule], value: &str) -> Option<FieldError> {
    rules
        .iter()
        .find_map(|rule| rule.check(value).err())
        .map(FieldError::Rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_trim() {
        assert_eq!(
            Rule::Required { trim: true }.check("   "),
            Err(ValidationError::EmptyField)
        );
        assert!(Rule::Required { trim: false }.check("   ").is_ok());
    }

    #[test]
    fn test_format_not_checked_when_empty() {
        let schema = ValidationSchema::default();
        let errors = schema.validate(&LoginFormValues::default());
        assert_eq!(
            errors.email,
            Some(FieldError::Rule(ValidationError::EmptyField))
        );
    }

    #[test]
    fn test_custom_min_length() {
        let schema = ValidationSchema::from_settings(&ValidationSettings {
            min_password_length: 12,
            ..ValidationSettings::default()
        });
        let values = LoginFormValues {
            email: "user@example.com".to_string(),
            password: "Password123!".to_string(),
            remember_me: false,
        };
        assert!(schema.validate(&values).is_empty());

        let values = LoginFormValues {
            password: "Passw0rd!".to_string(),
            ..values
        };
        assert_eq!(
            schema.validate(&values).validation_error(crate::Field::Password),
            Some(&ValidationError::TooShort { min: 12 })
        );
    }

    #[test]
    fn test_describe_order() {
        let described = ValidationSchema::default().describe();
        assert_eq!(described[0].0, "email");
        assert_eq!(described[0].1, vec!["required", "email"]);
        assert_eq!(described[1].0, "password");
        assert_eq!(
            described[1].1[..5],
            ["required", "min_length(8)", "lowercase", "uppercase", "digit"]
        );
        assert!(described[1].1[5].starts_with("special("));
    }
}
