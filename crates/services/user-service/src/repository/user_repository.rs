//! User repository contract and its in-memory binding.

use async_trait::async_trait;

use domain::{RepositoryError, RepositoryResult, User};

use super::memory::{FailureFlags, MemoryTable, StoreOperation};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// `get_by_id` reports a missing user as `Ok(None)`; errors are reserved for
/// storage failures.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user, overwriting any user with the same id
    async fn save(&self, user: User) -> RepositoryResult<()>;

    /// Store changes to a user, overwriting by id
    async fn update(&self, user: User) -> RepositoryResult<()>;

    /// Find a user by id
    async fn get_by_id(&self, id: &str) -> RepositoryResult<Option<User>>;

    /// Total number of stored users
    async fn count(&self) -> RepositoryResult<usize>;
}

/// Map-backed UserRepository with injectable failures
#[derive(Debug)]
pub struct InMemoryUserRepository {
    table: MemoryTable<User>,
}

impl InMemoryUserRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// Create a repository with initial users
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            table: MemoryTable::with_rows("user", RepositoryError::SimulatedUserFailure, users),
        }
    }

    /// Failure switches; set one to make the matching call return
    /// `RepositoryError::SimulatedUserFailure`
    pub fn failures(&self) -> &FailureFlags {
        self.table.failures()
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: User) -> RepositoryResult<()> {
        self.table.put(StoreOperation::Save, user).await
    }

    async fn update(&self, user: User) -> RepositoryResult<()> {
        self.table.put(StoreOperation::Update, user).await
    }

    async fn get_by_id(&self, id: &str) -> RepositoryResult<Option<User>> {
        self.table.get(id).await
    }

    async fn count(&self) -> RepositoryResult<usize> {
        self.table.len().await
    }
}
