pub mod dijkstra;
pub mod distances;

pub use dijkstra::{
    compute_from_sources, compute_shortest_paths, distance_between, SearchStats,
    ShortestPathEngine,
};
pub use distances::DistanceVector;
