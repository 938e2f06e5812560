//! Application layer with use cases and DTOs.

/// Data transfer objects.
pub mod dto;
/// Use case implementations.
pub mod use_cases;

pub use dto::{CreateGraphFailure, CreateGraphRequest, CreateGraphResponse, DirectorySource};
pub use use_cases::{CreateGraphUseCase, ListGraphsUseCase, PickDirectoryUseCase};
