//! Password validation functions
//!
//! Each check answers a single question about the password. Ordering and
//! error selection live in [`crate::schema`].

/// Minimum number of characters a password needs
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Characters accepted by the special-character rule
pub const DEFAULT_SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Length in characters, not bytes
pub fn char_length(password: &str) -> usize {
    password.chars().count()
}

pub fn has_min_length(password: &str, min: usize) -> bool {
    char_length(password) >= min
}

pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_lowercase())
}

pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_uppercase())
}

pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// Checks for at least one character out of `allowed`
pub fn has_special(password: &str, allowed: &str) -> bool {
    password.chars().any(|c| allowed.contains(c))
}
