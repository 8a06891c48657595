//! Login Form Validation
//!
//! Pure validation rules for the login form. Nothing in this crate performs I/O
//! or holds state: [`validate`] maps a set of [`LoginFormValues`] to
//! [`FieldErrors`], and the same input always produces the same output.
//!
//! Each field has an ordered list of [`Rule`]s. Only the first failing rule of a
//! field is reported, so the order inside a [`ValidationSchema`] is observable.
//!
//! ```rust
//! use login_form_validation::{validate, Field, LoginFormValues, ValidationError};
//!
//! let values = LoginFormValues {
//!     email: "user@example.com".to_string(),
//!     password: "short".to_string(),
//!     remember_me: false,
//! };
//!
//! let errors = validate(&values);
//! assert!(errors.get(Field::Email).is_none());
//! assert_eq!(
//!     errors.validation_error(Field::Password),
//!     Some(&ValidationError::TooShort { min: 8 })
//! );
//! ```

pub mod email;
pub mod errors;
pub mod password;
pub mod schema;
pub mod values;

pub use errors::{FieldError, FieldErrors, ValidationError};
pub use schema::{Rule, ValidationSchema, ValidationSettings};
pub use values::{Field, FieldValue, LoginFormValues, UnknownField};

/// Validates `values` against the default login schema.
pub fn validate(values: &LoginFormValues) -> FieldErrors {
    schema::DEFAULT_SCHEMA.validate(values)
}
