//! Update user use case.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use domain::{Clock, DomainResult, OptionExt, User};

use crate::repository::UserRepository;
use crate::usecase::trace_failure;

/// New name and email for an existing user
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateUserInput {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Updated user (safe to return to callers)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateUserOutput {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UpdateUserOutput {
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

/// Update user use case trait for dependency injection.
#[async_trait]
pub trait UpdateUserUseCase: Send + Sync {
    /// Validate the changes, then overwrite the stored user.
    ///
    /// The stored `created_at` and password survive the update.
    async fn perform(&self, input: UpdateUserInput) -> DomainResult<UpdateUserOutput>;
}

/// Concrete implementation of UpdateUserUseCase using repository.
pub struct UserUpdater {
    repo: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl UserUpdater {
    pub fn new(repo: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    async fn update(&self, input: UpdateUserInput) -> DomainResult<UpdateUserOutput> {
        tracing::debug!(user_id = %input.id, "Updating user");
        let changes = User::update(&input.id, &input.name, &input.email, self.clock.as_ref())?;

        let existing = self
            .repo
            .get_by_id(&changes.id)
            .await?
            .ok_or_user_not_found()?;

        let user = existing.apply(changes);
        let output = UpdateUserOutput::from(&user);
        self.repo.update(user).await?;

        tracing::info!(user_id = %output.id, "User updated");
        Ok(output)
    }
}

#[async_trait]
impl UpdateUserUseCase for UserUpdater {
    async fn perform(&self, input: UpdateUserInput) -> DomainResult<UpdateUserOutput> {
        self.update(input)
            .await
            .inspect_err(|e| trace_failure("update_user", e))
    }
}
