//! Service Container - Centralized use case access.
//!
//! Wires repositories and time/id sources into the four use cases and hands
//! them out as shared trait objects.

use std::sync::Arc;

use domain::{Clock, IdGenerator, SystemClock, UuidGenerator};

use crate::repository::{
    CategoryRepository, InMemoryCategoryRepository, InMemoryUserRepository, UserRepository,
};
use crate::usecase::{
    CategoryCreator, CreateCategoryUseCase, CreateUserUseCase, GetUserByIdUseCase,
    UpdateUserUseCase, UserCreator, UserFinder, UserUpdater,
};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    fn create_user(&self) -> Arc<dyn CreateUserUseCase>;

    fn get_user_by_id(&self) -> Arc<dyn GetUserByIdUseCase>;

    fn update_user(&self) -> Arc<dyn UpdateUserUseCase>;

    fn create_category(&self) -> Arc<dyn CreateCategoryUseCase>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    create_user: Arc<dyn CreateUserUseCase>,
    get_user_by_id: Arc<dyn GetUserByIdUseCase>,
    update_user: Arc<dyn UpdateUserUseCase>,
    create_category: Arc<dyn CreateCategoryUseCase>,
}

/// Services backed by in-memory repositories, with the repositories kept
/// reachable for inspection and failure injection.
#[derive(Clone)]
pub struct InMemoryServices {
    pub services: Services,
    pub users: Arc<InMemoryUserRepository>,
    pub categories: Arc<InMemoryCategoryRepository>,
}

impl Services {
    /// Create a service container over the given repositories and sources
    pub fn new(
        users: Arc<dyn UserRepository>,
        categories: Arc<dyn CategoryRepository>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            create_user: Arc::new(UserCreator::new(users.clone(), clock.clone(), ids)),
            get_user_by_id: Arc::new(UserFinder::new(users.clone())),
            update_user: Arc::new(UserUpdater::new(users.clone(), clock)),
            create_category: Arc::new(CategoryCreator::new(categories, users)),
        }
    }

    /// Create a container over empty in-memory repositories, system clock
    /// and v4 UUIDs
    pub fn in_memory() -> InMemoryServices {
        Self::in_memory_with(
            InMemoryUserRepository::new(),
            Arc::new(SystemClock),
            Arc::new(UuidGenerator),
        )
    }

    /// Create an in-memory container around a prepared user repository and
    /// explicit sources
    pub fn in_memory_with(
        users: InMemoryUserRepository,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> InMemoryServices {
        let users = Arc::new(users);
        let categories = Arc::new(InMemoryCategoryRepository::new());

        let services = Self::new(users.clone(), categories.clone(), clock, ids);
        tracing::debug!("In-memory services initialized");

        InMemoryServices {
            services,
            users,
            categories,
        }
    }
}

impl ServiceContainer for Services {
    fn create_user(&self) -> Arc<dyn CreateUserUseCase> {
        self.create_user.clone()
    }

    fn get_user_by_id(&self) -> Arc<dyn GetUserByIdUseCase> {
        self.get_user_by_id.clone()
    }

    fn update_user(&self) -> Arc<dyn UpdateUserUseCase> {
        self.update_user.clone()
    }

    fn create_category(&self) -> Arc<dyn CreateCategoryUseCase> {
        self.create_category.clone()
    }
}
