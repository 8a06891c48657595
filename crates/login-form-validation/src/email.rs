//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// local part, '@', domain, then a dot and a TLD of two or more letters
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").expect("email pattern compiles")
});

/// Returns true when the value is empty after trimming whitespace
pub fn is_blank(email: &str) -> bool {
    email.trim().is_empty()
}

/// Validates email format
///
/// The value is matched as given; surrounding whitespace makes it invalid.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
