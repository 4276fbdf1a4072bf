//! Application use cases.
//!
//! One object per operation. Each owns shared handles to the repositories it
//! needs and exposes a single `perform`; outputs are plain records that never
//! carry a password.

pub mod category;
pub mod user;

use domain::DomainError;

pub use category::{
    CategoryCreator, CreateCategoryInput, CreateCategoryOutput, CreateCategoryUseCase,
};
pub use user::{
    CreateUserInput, CreateUserOutput, CreateUserUseCase, GetUserByIdOutput, GetUserByIdUseCase,
    UpdateUserInput, UpdateUserOutput, UpdateUserUseCase, UserCreator, UserFinder, UserUpdater,
};

/// Record a failed operation: rejected input at debug, anything else at warn.
pub(crate) fn trace_failure(operation: &'static str, err: &DomainError) {
    if err.is_validation() {
        tracing::debug!(operation, code = err.code(), "Input rejected");
    } else {
        tracing::warn!(operation, code = err.code(), error = %err, "Operation failed");
    }
}
