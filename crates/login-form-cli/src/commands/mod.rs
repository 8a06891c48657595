pub mod check;
pub mod rules;
pub mod submit;

use colored::Colorize;
use login_form::validation::{Field, FieldErrors};

/// Prints one status line per validated field
pub(crate) fn print_field_errors(errors: &FieldErrors) {
    for field in [Field::Email, Field::Password] {
        match errors.message(field) {
            Some(message) => println!("  {} {}: {}", "✗".red(), field, message.red()),
            None => println!("  {} {}", "✓".green(), field),
        }
    }
}
