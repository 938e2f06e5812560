//! Use case implementations.

mod create_graph_use_case;
mod list_graphs_use_case;
mod pick_directory_use_case;

pub use create_graph_use_case::CreateGraphUseCase;
pub use list_graphs_use_case::{ListGraphsUseCase, sort_by_recency};
pub use pick_directory_use_case::PickDirectoryUseCase;
