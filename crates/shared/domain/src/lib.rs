//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the User and Category aggregates, their validators, the error taxonomy
//! and the time/identity sources the factories read from.

pub mod category;
pub mod clock;
pub mod constants;
pub mod error;
pub mod password;
pub mod user;
pub mod validator;

pub use category::Category;
pub use clock::{Clock, FixedClock, IdGenerator, SystemClock, UuidGenerator};
pub use constants::*;
pub use error::{DomainError, DomainResult, OptionExt, RepositoryError, RepositoryResult};
pub use password::Password;
pub use user::{User, UserUpdate};
pub use validator::{is_valid_email, is_valid_password};

#[cfg(any(test, feature = "test-utils"))]
pub use clock::MockIdGenerator;
