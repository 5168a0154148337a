use crate::graph::{AdjacencyGraph, GraphBuilder};
use crate::Result;

/// Edges of the five-vertex demonstration graph as `(from, to, weight)`
pub const EXAMPLE_EDGES: [(usize, usize, u32); 10] = [
    (0, 1, 10),
    (0, 3, 5),
    (1, 2, 1),
    (1, 3, 2),
    (2, 4, 4),
    (3, 1, 3),
    (3, 2, 9),
    (3, 4, 2),
    (4, 0, 7),
    (4, 2, 6),
];

pub const EXAMPLE_VERTICES: usize = 5;

/// Shortest distances from vertex 0 in the demonstration graph
pub const EXAMPLE_DISTANCES_FROM_0: [u32; EXAMPLE_VERTICES] = [0, 8, 9, 5, 7];

/// Builds the five-vertex, ten-edge demonstration graph
pub fn example_graph() -> Result<AdjacencyGraph<u32>> {
    AdjacencyGraph::from_edges(EXAMPLE_VERTICES, &EXAMPLE_EDGES)
}

/// Location names of the delivery network, indexed by vertex
pub const DELIVERY_LOCATIONS: [&str; 10] = [
    "Restaurant A",
    "Hub Central",
    "Customer 1",
    "Restaurant B",
    "Hub North",
    "Customer 2",
    "Restaurant C",
    "Hub South",
    "Customer 3",
    "Customer 4",
];

/// Two-way roads of the delivery network as `(a, b, travel time)`
pub const DELIVERY_ROADS: [(usize, usize, u32); 14] = [
    (0, 1, 5),
    (0, 3, 3),
    (1, 2, 4),
    (1, 4, 6),
    (2, 5, 3),
    (3, 4, 4),
    (3, 6, 5),
    (4, 5, 2),
    (4, 7, 3),
    (4, 8, 5),
    (5, 9, 4),
    (6, 7, 4),
    (7, 8, 3),
    (8, 9, 2),
];

/// Shortest travel times from Restaurant A (vertex 0) in the delivery network
pub const DELIVERY_DISTANCES_FROM_0: [u32; 10] = [0, 5, 9, 3, 7, 9, 8, 10, 12, 13];

/// Builds the ten-location delivery network; each road becomes two directed edges
pub fn delivery_network() -> Result<AdjacencyGraph<u32>> {
    let mut builder = GraphBuilder::new(DELIVERY_LOCATIONS.len());
    for &(a, b, weight) in DELIVERY_ROADS.iter() {
        builder.add_edge(a, b, weight)?;
        builder.add_edge(b, a, weight)?;
    }
    Ok(builder.build())
}

/// Looks up a delivery location's vertex by name
pub fn delivery_location(name: &str) -> Option<usize> {
    DELIVERY_LOCATIONS.iter().position(|&location| location == name)
}
