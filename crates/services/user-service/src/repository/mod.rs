//! Repository layer for data access.
//!
//! The use cases depend only on the traits; the in-memory bindings are the
//! reference implementation.

mod category_repository;
mod memory;
mod user_repository;

pub use category_repository::{CategoryRepository, InMemoryCategoryRepository};
pub use memory::{FailureFlags, StoreOperation};
pub use user_repository::{InMemoryUserRepository, UserRepository};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use category_repository::MockCategoryRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
