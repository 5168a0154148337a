pub mod adjacency;
pub mod fixtures;
pub mod generators;
pub mod traits;

pub use adjacency::{AdjacencyGraph, Edge, GraphBuilder};
pub use traits::Weight;
