//! Domain-level errors.
//!
//! Every failure a caller can observe is one variant of [`DomainError`].
//! They are independent of infrastructure concerns (HTTP, gRPC, database);
//! storage failures travel inside [`DomainError::Repository`] untouched.

use thiserror::Error;

/// Failures raised by a repository binding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Forced failure of the in-memory user store
    #[error("database error")]
    SimulatedUserFailure,

    /// Forced failure of the in-memory category store
    #[error("database error")]
    SimulatedCategoryFailure,
}

/// Closed error taxonomy of the user and category core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    // User validation
    #[error("name is required")]
    UserNameRequired,

    #[error("email is required")]
    UserEmailRequired,

    #[error("email invalid")]
    UserEmailInvalid,

    #[error("password is required")]
    UserPasswordRequired,

    #[error("password invalid")]
    UserPasswordInvalid,

    #[error("id is required")]
    UserIdRequired,

    // Lookup
    #[error("user not found")]
    UserNotFound,

    // Category validation
    #[error("user id is required")]
    CategoryUserIdRequired,

    // Persistence
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl DomainError {
    /// Stable token callers can match on across process boundaries
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::UserNameRequired => "USER_NAME_REQUIRED",
            DomainError::UserEmailRequired => "USER_EMAIL_REQUIRED",
            DomainError::UserEmailInvalid => "USER_EMAIL_INVALID",
            DomainError::UserPasswordRequired => "USER_PASSWORD_REQUIRED",
            DomainError::UserPasswordInvalid => "USER_PASSWORD_INVALID",
            DomainError::UserIdRequired => "USER_ID_REQUIRED",
            DomainError::UserNotFound => "USER_NOT_FOUND",
            DomainError::CategoryUserIdRequired => "CATEGORY_USER_ID_REQUIRED",
            DomainError::Repository(_) => "REPOSITORY_FAILURE",
        }
    }

    /// True when the error was caused by caller input rather than state or storage
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            DomainError::UserNotFound | DomainError::Repository(_)
        )
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Extension trait for turning an absent lookup into a domain error
pub trait OptionExt<T> {
    fn ok_or_user_not_found(self) -> DomainResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_user_not_found(self) -> DomainResult<T> {
        self.ok_or(DomainError::UserNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_passes_through_unchanged() {
        let err: DomainError = RepositoryError::SimulatedUserFailure.into();

        assert_eq!(
            err,
            DomainError::Repository(RepositoryError::SimulatedUserFailure)
        );
        assert_eq!(err.to_string(), "database error");
        assert_eq!(err.code(), "REPOSITORY_FAILURE");
    }

    #[test]
    fn test_simulated_failures_are_distinct_per_aggregate() {
        assert_ne!(
            RepositoryError::SimulatedUserFailure,
            RepositoryError::SimulatedCategoryFailure
        );
    }

    #[test]
    fn test_validation_classification() {
        assert!(DomainError::UserEmailInvalid.is_validation());
        assert!(DomainError::CategoryUserIdRequired.is_validation());
        assert!(!DomainError::UserNotFound.is_validation());
        assert!(!DomainError::from(RepositoryError::SimulatedCategoryFailure).is_validation());
    }

    #[test]
    fn test_option_ext() {
        let absent: Option<u8> = None;
        assert_eq!(absent.ok_or_user_not_found(), Err(DomainError::UserNotFound));
        assert_eq!(Some(7).ok_or_user_not_found(), Ok(7));
    }
}
