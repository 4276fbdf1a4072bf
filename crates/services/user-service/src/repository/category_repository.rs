//! Category repository contract and its in-memory binding.

use async_trait::async_trait;

use domain::{Category, RepositoryError, RepositoryResult};

use super::memory::{FailureFlags, MemoryTable, StoreOperation};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Category repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Store a new category, overwriting by id
    async fn save(&self, category: Category) -> RepositoryResult<()>;

    /// Store changes to a category, overwriting by id
    async fn update(&self, category: Category) -> RepositoryResult<()>;

    /// Find a category by id; `Ok(None)` when absent
    async fn get_by_id(&self, id: &str) -> RepositoryResult<Option<Category>>;

    /// Total number of stored categories
    async fn count(&self) -> RepositoryResult<usize>;
}

/// Map-backed CategoryRepository with injectable failures
#[derive(Debug)]
pub struct InMemoryCategoryRepository {
    table: MemoryTable<Category>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::with_categories(Vec::new())
    }

    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            table: MemoryTable::with_rows(
                "category",
                RepositoryError::SimulatedCategoryFailure,
                categories,
            ),
        }
    }

    pub fn failures(&self) -> &FailureFlags {
        self.table.failures()
    }
}

impl Default for InMemoryCategoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn save(&self, category: Category) -> RepositoryResult<()> {
        self.table.put(StoreOperation::Save, category).await
    }

    async fn update(&self, category: Category) -> RepositoryResult<()> {
        self.table.put(StoreOperation::Update, category).await
    }

    async fn get_by_id(&self, id: &str) -> RepositoryResult<Option<Category>> {
        self.table.get(id).await
    }

    async fn count(&self) -> RepositoryResult<usize> {
        self.table.len().await
    }
}
