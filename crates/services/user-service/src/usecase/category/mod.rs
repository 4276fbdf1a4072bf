//! Category use cases.

mod create;

pub use create::{
    CategoryCreator, CreateCategoryInput, CreateCategoryOutput, CreateCategoryUseCase,
};
