use serde::Serialize;
use std::fmt;
use std::ops::Index;

use crate::graph::Weight;

/// Shortest distances from one source vertex to every vertex of a graph.
///
/// Entry `i` is `Some(d)` when `d` is the minimum total edge weight of a path
/// from the source to `i`, and `None` when no such path exists. The entry for
/// the source itself is always `Some(0)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceVector<W: Weight> {
    source: usize,
    distances: Vec<Option<W>>,
}

impl<W: Weight> DistanceVector<W> {
    pub(crate) fn new(source: usize, distances: Vec<Option<W>>) -> Self {
        DistanceVector { source, distances }
    }

    /// Returns the vertex the distances were measured from
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the number of vertices covered
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns true if the vector covers no vertices
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Distance to `vertex`; `None` if it is unreachable or out of range
    pub fn get(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Returns true if a path from the source to `vertex` exists
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.get(vertex).is_some()
    }

    /// Returns the number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Iterates over the distances in vertex order
    pub fn iter(&self) -> impl Iterator<Item = Option<W>> + '_ {
        self.distances.iter().copied()
    }

    /// Returns the distances as a slice indexed by vertex
    pub fn as_slice(&self) -> &[Option<W>] {
        &self.distances
    }

    /// Consumes the vector, returning the per-vertex distances
    pub fn into_inner(self) -> Vec<Option<W>> {
        self.distances
    }

    /// One `Distance from node <s> to node <i> is <d>` line per vertex, in index order
    pub fn report_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.distances.iter().enumerate().map(move |(vertex, distance)| {
            format!(
                "Distance from node {} to node {} is {}",
                self.source,
                vertex,
                DisplayDistance(*distance)
            )
        })
    }
}

impl<W: Weight> Index<usize> for DistanceVector<W> {
    type Output = Option<W>;

    fn index(&self, vertex: usize) -> &Self::Output {
        &self.distances[vertex]
    }
}

struct DisplayDistance<W>(Option<W>);

impl<W: fmt::Display> fmt::Display for DisplayDistance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(distance) => write!(f, "{}", distance),
            None => f.write_str("unreachable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lines_mark_unreachable() {
        let distances = DistanceVector::new(1, vec![None, Some(0u32), Some(12)]);
        let lines: Vec<String> = distances.report_lines().collect();

        assert_eq!(
            lines,
            vec![
                "Distance from node 1 to node 0 is unreachable",
                "Distance from node 1 to node 1 is 0",
                "Distance from node 1 to node 2 is 12",
            ]
        );
    }

    #[test]
    fn out_of_range_lookup_is_none() {
        let distances = DistanceVector::new(0, vec![Some(0u64)]);
        assert_eq!(distances.get(0), Some(0));
        assert_eq!(distances.get(1), None);
        assert!(!distances.is_reachable(7));
        assert_eq!(distances.reachable_count(), 1);
    }

    #[test]
    fn serializes_unreachable_as_null() {
        let distances = DistanceVector::new(0, vec![Some(0u32), None, Some(3)]);
        let json = serde_json::to_string(&distances).unwrap();
        assert_eq!(json, r#"{"source":0,"distances":[0,null,3]}"#);
    }
}
