//! SSSP Engine - Dijkstra single-source shortest paths
//!
//! Computes, for a weighted directed graph with non-negative integer edge
//! weights, the minimum total weight from one source vertex to every vertex.
//! The graph is an immutable adjacency list; the result is a [`DistanceVector`]
//! in which unreachable vertices are `None`.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    compute_from_sources, compute_shortest_paths, distance_between, DistanceVector,
    ShortestPathEngine,
};
/// Re-export main types for convenient use
pub use graph::{AdjacencyGraph, Edge, GraphBuilder, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Distance to vertex {vertex} exceeds the weight type's range")]
    DistanceOverflow { vertex: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
