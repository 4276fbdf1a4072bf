//! User domain entity and its update projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, IdGenerator};
use crate::error::{DomainError, DomainResult};
use crate::password::Password;
use crate::validator::is_valid_email;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: Password,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated changes to an existing user.
///
/// Carries no creation timestamp and no password; whoever applies it must
/// load the stored user first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    pub id: String,
    pub name: String,
    pub email: String,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user.
    ///
    /// Checks run in order and the first failure wins: name, email presence,
    /// email format, password presence, password strength. On success the id
    /// comes from `ids` and both timestamps share one reading of `clock`.
    pub fn new(
        name: &str,
        email: &str,
        password: &str,
        clock: &dyn Clock,
        ids: &dyn IdGenerator,
    ) -> DomainResult<Self> {
        validate_name(name)?;
        validate_email(email)?;
        let password = Password::new(password)?;

        let now = clock.now();
        Ok(Self {
            id: ids.generate(),
            name: name.to_string(),
            email: email.to_string(),
            password,
            created_at: now,
            updated_at: now,
        })
    }

    /// Build the update projection for user `id`.
    ///
    /// Checks run in order: id, name, email presence, email format.
    /// Nothing is loaded or merged here.
    pub fn update(id: &str, name: &str, email: &str, clock: &dyn Clock) -> DomainResult<UserUpdate> {
        if id.is_empty() {
            return Err(DomainError::UserIdRequired);
        }
        validate_name(name)?;
        validate_email(email)?;

        Ok(UserUpdate {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            updated_at: clock.now(),
        })
    }

    /// Apply an update projection, keeping id, password and `created_at`.
    pub fn apply(self, update: UserUpdate) -> Self {
        Self {
            name: update.name,
            email: update.email,
            updated_at: update.updated_at,
            ..self
        }
    }
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.is_empty() {
        return Err(DomainError::UserNameRequired);
    }
    Ok(())
}

fn validate_email(email: &str) -> DomainResult<()> {
    if email.is_empty() {
        return Err(DomainError::UserEmailRequired);
    }
    if !is_valid_email(email) {
        return Err(DomainError::UserEmailInvalid);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{FixedClock, MockIdGenerator, UuidGenerator};
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 9, 30, 0).unwrap()
    }

    fn fixed_ids(id: &'static str) -> MockIdGenerator {
        let mut ids = MockIdGenerator::new();
        ids.expect_generate().returning(move || id.to_string());
        ids
    }

    #[test]
    fn test_new_user_success() {
        let clock = FixedClock::new(t0());
        let user = User::new(
            "Daniel",
            "daniel@gmail.com",
            "@Danel123",
            &clock,
            &fixed_ids("user-1"),
        )
        .unwrap();

        assert_eq!(user.id, "user-1");
        assert_eq!(user.name, "Daniel");
        assert_eq!(user.email, "daniel@gmail.com");
        assert!(user.password.matches("@Danel123"));
        assert_eq!(user.created_at, t0());
        assert_eq!(user.updated_at, user.created_at);
    }

    #[test]
    fn test_new_user_takes_uuid_by_default() {
        let user = User::new(
            "Daniel",
            "daniel@gmail.com",
            "@Danel123",
            &FixedClock::new(t0()),
            &UuidGenerator,
        )
        .unwrap();

        assert!(uuid::Uuid::parse_str(&user.id).is_ok());
    }

    #[test]
    fn test_new_user_validation_order() {
        let clock = FixedClock::new(t0());
        let ids = UuidGenerator;

        // (name, email, password, expected); every later field is also broken
        let cases = [
            ("", "", "", DomainError::UserNameRequired),
            ("Daniel", "", "", DomainError::UserEmailRequired),
            ("Daniel", "daniel.com.br", "", DomainError::UserEmailInvalid),
            ("Daniel", "daniel@gmail.com", "", DomainError::UserPasswordRequired),
            ("Daniel", "daniel@gmail.com", "Daniel123", DomainError::UserPasswordInvalid),
        ];

        for (name, email, password, expected) in cases {
            let result = User::new(name, email, password, &clock, &ids);
            assert_eq!(result, Err(expected));
        }
    }

    #[test]
    fn test_new_user_does_not_consume_an_id_on_failure() {
        let mut ids = MockIdGenerator::new();
        ids.expect_generate().never();

        let result = User::new("", "daniel@gmail.com", "@Daniel123", &FixedClock::new(t0()), &ids);
        assert_eq!(result, Err(DomainError::UserNameRequired));
    }

    #[test]
    fn test_whitespace_name_is_not_empty() {
        let result = User::new(" ", "daniel@gmail.com", "@Daniel123", &FixedClock::new(t0()), &UuidGenerator);
        assert!(result.is_ok());
    }

    #[test]
    fn test_serialized_user_omits_password() {
        let user = User::new(
            "Daniel",
            "daniel@gmail.com",
            "@Danel123",
            &FixedClock::new(t0()),
            &fixed_ids("user-1"),
        )
        .unwrap();

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["id"], "user-1");
    }

    #[test]
    fn test_update_projection_success() {
        let clock = FixedClock::new(t0());
        let update = User::update("123", "Updated", "updated@gmail.com", &clock).unwrap();

        assert_eq!(
            update,
            UserUpdate {
                id: "123".to_string(),
                name: "Updated".to_string(),
                email: "updated@gmail.com".to_string(),
                updated_at: t0(),
            }
        );
    }

    #[test]
    fn test_update_projection_validation_order() {
        let clock = FixedClock::new(t0());

        let cases = [
            ("", "", "", DomainError::UserIdRequired),
            ("123", "", "", DomainError::UserNameRequired),
            ("123", "Daniel", "", DomainError::UserEmailRequired),
            ("123", "Daniel", "danielgmail.com", DomainError::UserEmailInvalid),
        ];

        for (id, name, email, expected) in cases {
            assert_eq!(User::update(id, name, email, &clock), Err(expected));
        }
    }

    #[test]
    fn test_apply_keeps_identity_password_and_creation_time() {
        let clock = FixedClock::new(t0());
        let user = User::new("Daniel", "daniel@gmail.com", "@Danel123", &clock, &fixed_ids("123")).unwrap();

        clock.advance(Duration::minutes(1));
        let update = User::update("123", "Updated", "updated@gmail.com", &clock).unwrap();
        let updated = user.clone().apply(update);

        assert_eq!(updated.id, "123");
        assert_eq!(updated.name, "Updated");
        assert_eq!(updated.email, "updated@gmail.com");
        assert_eq!(updated.password, user.password);
        assert_eq!(updated.created_at, t0());
        assert_eq!(updated.updated_at, t0() + Duration::minutes(1));
    }
}
