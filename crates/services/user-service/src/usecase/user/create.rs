//! Create user use case.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use domain::{Clock, DomainResult, IdGenerator, User};

use crate::repository::UserRepository;
use crate::usecase::trace_failure;

/// Data needed to register a user
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

// Don't expose the password in debug output
impl std::fmt::Debug for CreateUserInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUserInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Registered user (safe to return to callers)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateUserOutput {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for CreateUserOutput {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Create user use case trait for dependency injection.
#[async_trait]
pub trait CreateUserUseCase: Send + Sync {
    /// Validate and store a new user.
    ///
    /// Validation and repository errors are returned unchanged; nothing is
    /// stored when validation fails.
    async fn perform(&self, input: CreateUserInput) -> DomainResult<CreateUserOutput>;
}

/// Concrete implementation of CreateUserUseCase using repository.
pub struct UserCreator {
    repo: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl UserCreator {
    pub fn new(
        repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self { repo, clock, ids }
    }

    async fn create(&self, input: CreateUserInput) -> DomainResult<CreateUserOutput> {
        let user = User::new(
            &input.name,
            &input.email,
            &input.password,
            self.clock.as_ref(),
            self.ids.as_ref(),
        )?;

        let output = CreateUserOutput::from(&user);
        self.repo.save(user).await?;

        tracing::info!(user_id = %output.id, "User created");
        Ok(output)
    }
}

#[async_trait]
impl CreateUserUseCase for UserCreator {
    async fn perform(&self, input: CreateUserInput) -> DomainResult<CreateUserOutput> {
        self.create(input)
            .await
            .inspect_err(|e| trace_failure("create_user", e))
    }
}
