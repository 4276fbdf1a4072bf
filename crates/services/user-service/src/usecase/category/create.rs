//! Create category use case.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use domain::{DomainError, DomainResult};

use crate::repository::{CategoryRepository, UserRepository};
use crate::usecase::trace_failure;

/// Data needed to create a category
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCategoryInput {
    pub user_id: String,
    pub name: String,
    pub status: String,
}

/// Created category. Every field is empty until category rules exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateCategoryOutput {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Create category use case trait for dependency injection.
#[async_trait]
pub trait CreateCategoryUseCase: Send + Sync {
    /// Reject a missing owner; otherwise return an empty output.
    async fn perform(&self, input: CreateCategoryInput) -> DomainResult<CreateCategoryOutput>;
}

/// Concrete implementation of CreateCategoryUseCase.
pub struct CategoryCreator {
    // Held for category rules; neither repository is consulted yet.
    #[allow(dead_code)]
    categories: Arc<dyn CategoryRepository>,
    #[allow(dead_code)]
    users: Arc<dyn UserRepository>,
}

impl CategoryCreator {
    pub fn new(categories: Arc<dyn CategoryRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { categories, users }
    }
}

#[async_trait]
impl CreateCategoryUseCase for CategoryCreator {
    async fn perform(&self, input: CreateCategoryInput) -> DomainResult<CreateCategoryOutput> {
        if input.user_id.is_empty() {
            let err = DomainError::CategoryUserIdRequired;
            trace_failure("create_category", &err);
            return Err(err);
        }

        tracing::debug!(user_id = %input.user_id, "Category accepted");
        Ok(CreateCategoryOutput::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::repository::{MockCategoryRepository, MockUserRepository};

    fn creator() -> CategoryCreator {
        // Neither repository may be touched
        let mut categories = MockCategoryRepository::new();
        categories.expect_save().never();
        let mut users = MockUserRepository::new();
        users.expect_get_by_id().never();

        CategoryCreator::new(Arc::new(categories), Arc::new(users))
    }

    fn input(user_id: &str) -> CreateCategoryInput {
        CreateCategoryInput {
            user_id: user_id.to_string(),
            name: "Minha categoria".to_string(),
            status: "ACTIVE".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_category_requires_user_id() {
        let result = creator().perform(input("")).await;
        assert_eq!(result, Err(DomainError::CategoryUserIdRequired));
    }

    #[tokio::test]
    async fn test_create_category_returns_placeholder() {
        let output = creator().perform(input("user-1")).await.unwrap();
        assert_eq!(output, CreateCategoryOutput::default());
    }
}
