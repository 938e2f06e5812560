//! Domain entity definitions.

mod graph;

pub use graph::{GraphName, GraphRecord};
