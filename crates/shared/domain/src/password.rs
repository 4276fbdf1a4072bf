//! Password value object.
//!
//! The core keeps the caller's password verbatim; this wrapper only keeps it
//! out of `Debug` output and serialized views.

use serde::Deserialize;

use crate::error::{DomainError, DomainResult};
use crate::validator::is_valid_password;

/// Validated password value object.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Password {
    value: String,
}

// Don't expose the password in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Validate a plain text password.
    ///
    /// # Errors
    /// `UserPasswordRequired` when empty, `UserPasswordInvalid` when it fails
    /// the strength rules.
    pub fn new(plain_text: &str) -> DomainResult<Self> {
        if plain_text.is_empty() {
            return Err(DomainError::UserPasswordRequired);
        }

        if !is_valid_password(plain_text) {
            return Err(DomainError::UserPasswordInvalid);
        }

        Ok(Self {
            value: plain_text.to_string(),
        })
    }

    /// Wrap a stored password without re-validating it.
    pub fn from_stored(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Compare against a plain text candidate.
    pub fn matches(&self, plain_text: &str) -> bool {
        self.value == plain_text
    }
}
