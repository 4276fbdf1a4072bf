//! Value validators shared by the user factories.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{
    EMAIL_PATTERN, MIN_PASSWORD_LENGTH, PASSWORD_LOWERCASE_PATTERN, PASSWORD_SPECIAL_PATTERN,
    PASSWORD_UPPERCASE_PATTERN,
};

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

static LOWERCASE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(PASSWORD_LOWERCASE_PATTERN).expect("lowercase pattern is a valid regex")
});

static UPPERCASE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(PASSWORD_UPPERCASE_PATTERN).expect("uppercase pattern is a valid regex")
});

static SPECIAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(PASSWORD_SPECIAL_PATTERN).expect("special pattern is a valid regex")
});

/// Check an email address against [`EMAIL_PATTERN`].
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check password strength.
///
/// A password is valid when it is at least [`MIN_PASSWORD_LENGTH`] bytes long
/// and contains a lowercase letter, an uppercase letter and a punctuation or
/// symbol character (Unicode `P*` / `S*`). Digits and whitespace count
/// towards length only.
pub fn is_valid_password(password: &str) -> bool {
    if password.len() < MIN_PASSWORD_LENGTH {
        return false;
    }

    let has_lower = LOWERCASE_REGEX.is_match(password);
    let has_upper = UPPERCASE_REGEX.is_match(password);
    let has_special = SPECIAL_REGEX.is_match(password);

    has_lower && has_upper && has_special
}
