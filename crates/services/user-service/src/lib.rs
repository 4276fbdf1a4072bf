//! User Service Library
//!
//! Application layer of the user and category core: repository contracts with
//! their in-memory bindings, and one use case object per operation.
//!
//! ```ignore
//! let InMemoryServices { services, users, .. } = Services::in_memory();
//! let created = services.create_user().perform(input).await?;
//! ```

pub mod container;
pub mod repository;
pub mod usecase;

use common::{init_tracing, CoreConfig, TelemetryError};

pub use container::{InMemoryServices, ServiceContainer, Services};
pub use repository::{
    CategoryRepository, FailureFlags, InMemoryCategoryRepository, InMemoryUserRepository,
    StoreOperation, UserRepository,
};
pub use usecase::*;

/// Install tracing from `config` and build in-memory services.
///
/// An already-installed subscriber is kept; an invalid log filter is an error.
pub fn bootstrap(config: &CoreConfig) -> Result<InMemoryServices, TelemetryError> {
    match init_tracing(config) {
        Ok(()) => {}
        Err(TelemetryError::AlreadyInitialized(_)) => {
            tracing::debug!("Tracing already initialized, keeping existing subscriber");
        }
        Err(e) => return Err(e),
    }

    tracing::info!(service = %config.service_name, "Starting user core");
    Ok(Services::in_memory())
}

/// Load [`CoreConfig`] from the process environment (and `.env`), then
/// [`bootstrap`] with it.
pub fn bootstrap_from_env() -> Result<InMemoryServices, TelemetryError> {
    let config = CoreConfig::from_env();
    bootstrap(&config)
}
