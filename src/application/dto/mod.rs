//! Data transfer objects for the application layer.

mod graph_dto;

pub use graph_dto::{CreateGraphFailure, CreateGraphRequest, CreateGraphResponse, DirectorySource};
