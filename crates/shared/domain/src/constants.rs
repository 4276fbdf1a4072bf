//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement, counted in bytes
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Accepted shape of an email address
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$";

/// Character classes a password must each hit at least once
pub const PASSWORD_LOWERCASE_PATTERN: &str = r"\p{Ll}";
pub const PASSWORD_UPPERCASE_PATTERN: &str = r"\p{Lu}";
pub const PASSWORD_SPECIAL_PATTERN: &str = r"[\p{P}\p{S}]";
