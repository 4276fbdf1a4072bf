//! User use cases.

mod create;
mod get_by_id;
mod update;

pub use create::{CreateUserInput, CreateUserOutput, CreateUserUseCase, UserCreator};
pub use get_by_id::{GetUserByIdOutput, GetUserByIdUseCase, UserFinder};
pub use update::{UpdateUserInput, UpdateUserOutput, UpdateUserUseCase, UserUpdater};
