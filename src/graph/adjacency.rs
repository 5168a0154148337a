use crate::graph::traits::Weight;
use crate::{Error, Result};

/// A directed, weighted edge stored in its tail vertex's slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<W: Weight> {
    /// Head vertex of the edge
    pub to: usize,

    /// Non-negative edge weight
    pub weight: W,
}

/// An immutable directed graph stored as adjacency lists.
///
/// Vertices are the dense indices `0..vertex_count()`. Slot `u` holds every
/// outgoing edge of `u`; parallel edges between the same ordered pair are kept
/// as separate entries. Every endpoint has been validated on construction, so
/// indexing a slot with the `to` of any stored edge is always in range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph<W: Weight> {
    /// Outgoing edges for each vertex, indexed by vertex id
    adjacency: Vec<Vec<Edge<W>>>,
}

impl<W: Weight> AdjacencyGraph<W> {
    /// Builds a graph from one `(to, weight)` list per vertex
    pub fn from_adjacency(lists: Vec<Vec<(usize, W)>>) -> Result<Self> {
        let n = lists.len();
        let mut adjacency = Vec::with_capacity(n);

        for (from, list) in lists.into_iter().enumerate() {
            let mut edges = Vec::with_capacity(list.len());
            for (to, weight) in list {
                if to >= n {
                    return Err(Error::InvalidEdge(from, to));
                }
                edges.push(Edge { to, weight });
            }
            adjacency.push(edges);
        }

        Ok(AdjacencyGraph { adjacency })
    }

    /// Builds a graph with `vertices` vertices from `(from, to, weight)` triples
    pub fn from_edges(vertices: usize, edges: &[(usize, usize, W)]) -> Result<Self> {
        let mut builder = GraphBuilder::new(vertices);
        for &(from, to, weight) in edges {
            builder.add_edge(from, to, weight)?;
        }
        Ok(builder.build())
    }

    /// Returns the number of vertices in the graph
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges in the graph, parallel edges counted separately
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Returns true if the vertex exists in the graph
    pub fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.adjacency.len()
    }

    /// Returns the outgoing edges of `vertex`, or an empty slice if it does not exist
    pub fn outgoing_edges(&self, vertex: usize) -> &[Edge<W>] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterates over every edge as `(from, edge)`, ordered by tail vertex
    pub fn edges(&self) -> impl Iterator<Item = (usize, &Edge<W>)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| edges.iter().map(move |edge| (from, edge)))
    }
}

/// Incremental constructor for an [`AdjacencyGraph`].
///
/// The vertex count is fixed up front; once `build` is called the graph can
/// no longer change.
#[derive(Debug, Clone)]
pub struct GraphBuilder<W: Weight> {
    adjacency: Vec<Vec<Edge<W>>>,
}

impl<W: Weight> GraphBuilder<W> {
    /// Creates a builder for a graph with `vertices` vertices and no edges
    pub fn new(vertices: usize) -> Self {
        GraphBuilder {
            adjacency: vec![Vec::new(); vertices],
        }
    }

    /// Adds a directed edge. Both endpoints must already exist.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<&mut Self> {
        let n = self.adjacency.len();
        if from >= n || to >= n {
            return Err(Error::InvalidEdge(from, to));
        }
        self.adjacency[from].push(Edge { to, weight });
        Ok(self)
    }

    /// Returns the number of vertices the graph will have
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Freezes the builder into an immutable graph
    pub fn build(self) -> AdjacencyGraph<W> {
        AdjacencyGraph {
            adjacency: self.adjacency,
        }
    }
}
