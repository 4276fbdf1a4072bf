//! Get user by id use case.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use domain::{DomainError, DomainResult, OptionExt, User};

use crate::repository::UserRepository;
use crate::usecase::trace_failure;

/// Stored user as seen by callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetUserByIdOutput {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for GetUserByIdOutput {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Get user by id use case trait for dependency injection.
#[async_trait]
pub trait GetUserByIdUseCase: Send + Sync {
    /// Look up a user. Empty ids are rejected before the repository is asked.
    async fn perform(&self, id: &str) -> DomainResult<GetUserByIdOutput>;
}

/// Concrete implementation of GetUserByIdUseCase using repository.
pub struct UserFinder {
    repo: Arc<dyn UserRepository>,
}

impl UserFinder {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    async fn find(&self, id: &str) -> DomainResult<GetUserByIdOutput> {
        if id.is_empty() {
            return Err(DomainError::UserIdRequired);
        }

        tracing::debug!(user_id = %id, "Fetching user");
        let user = self.repo.get_by_id(id).await?.ok_or_user_not_found()?;

        Ok(GetUserByIdOutput::from(user))
    }
}

#[async_trait]
impl GetUserByIdUseCase for UserFinder {
    async fn perform(&self, id: &str) -> DomainResult<GetUserByIdOutput> {
        self.find(id)
            .await
            .inspect_err(|e| trace_failure("get_user_by_id", e))
    }
}
