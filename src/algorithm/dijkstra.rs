use log::{debug, trace};
use rayon::prelude::*;

use crate::algorithm::DistanceVector;
use crate::data_structures::MinQueue;
use crate::graph::{AdjacencyGraph, Weight};
use crate::{Error, Result};

/// Counters collected during one shortest-path run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Entries removed from the priority queue
    pub pops: usize,

    /// Popped entries discarded because the vertex had since improved
    pub stale_pops: usize,

    /// Edge relaxations that lowered a distance
    pub relaxations: usize,
}

/// Dijkstra's label-setting shortest-path algorithm with a lazy-deletion binary heap
#[derive(Debug, Default, Clone, Copy)]
pub struct ShortestPathEngine;

impl ShortestPathEngine {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        ShortestPathEngine
    }

    /// Returns the name of the algorithm
    pub fn name(&self) -> &'static str {
        "Dijkstra"
    }

    /// Computes shortest distances from `source` to every vertex of `graph`
    pub fn compute_shortest_paths<W: Weight>(
        &self,
        graph: &AdjacencyGraph<W>,
        source: usize,
    ) -> Result<DistanceVector<W>> {
        self.compute_with_stats(graph, source)
            .map(|(distances, _)| distances)
    }

    /// Same as [`compute_shortest_paths`](Self::compute_shortest_paths), also
    /// returning the queue and relaxation counters
    pub fn compute_with_stats<W: Weight>(
        &self,
        graph: &AdjacencyGraph<W>,
        source: usize,
    ) -> Result<(DistanceVector<W>, SearchStats)> {
        let (distances, stats) = self.search(graph, source, None)?;
        Ok((DistanceVector::new(source, distances), stats))
    }

    /// Shortest distance from `source` to `target`, or `None` if `target` is unreachable.
    ///
    /// The search stops as soon as `target` is settled, so only vertices closer
    /// than `target` are expanded.
    pub fn distance_between<W: Weight>(
        &self,
        graph: &AdjacencyGraph<W>,
        source: usize,
        target: usize,
    ) -> Result<Option<W>> {
        if !graph.has_vertex(target) {
            return Err(Error::InvalidVertex(target));
        }
        let (distances, _) = self.search(graph, source, Some(target))?;
        Ok(distances[target])
    }

    fn search<W: Weight>(
        &self,
        graph: &AdjacencyGraph<W>,
        source: usize,
        target: Option<usize>,
    ) -> Result<(Vec<Option<W>>, SearchStats)> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let n = graph.vertex_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut stats = SearchStats::default();
        // Set for vertices that received a candidate distance W cannot represent.
        let mut overflowed = vec![false; n];
        let mut reached_target = false;

        distances[source] = Some(W::zero());

        let mut queue = MinQueue::with_capacity(n);
        queue.push(source, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            stats.pops += 1;

            if let Some(best) = distances[u] {
                if dist_u > best {
                    stats.stale_pops += 1;
                    continue;
                }
            }

            if target == Some(u) {
                reached_target = true;
                break;
            }

            for edge in graph.outgoing_edges(u) {
                let v = edge.to;
                let candidate = match dist_u.checked_add(&edge.weight) {
                    Some(candidate) => candidate,
                    None => {
                        trace!("path sum to {} via {} overflows", v, u);
                        overflowed[v] = true;
                        continue;
                    }
                };

                let improves = match distances[v] {
                    None => true,
                    Some(current) => candidate < current,
                };

                if improves {
                    distances[v] = Some(candidate);
                    stats.relaxations += 1;
                    queue.push(v, candidate);
                }
            }
        }

        debug!(
            "{} from {}: {} pops ({} stale), {} relaxations over {} vertices / {} edges",
            self.name(),
            source,
            stats.pops,
            stats.stale_pops,
            stats.relaxations,
            n,
            graph.edge_count()
        );

        if reached_target {
            return Ok((distances, stats));
        }

        // A vertex only reachable through overflowing sums would otherwise
        // be reported as unreachable.
        if let Some(vertex) = (0..n).find(|&v| overflowed[v] && distances[v].is_none()) {
            debug!("{} from {}: distance to {} overflows", self.name(), source, vertex);
            return Err(Error::DistanceOverflow { vertex });
        }

        Ok((distances, stats))
    }

    /// Runs one independent search per source in parallel.
    ///
    /// Results are returned in the order of `sources`. Every source is checked
    /// before any search starts; the first invalid one is reported.
    pub fn compute_from_sources<W: Weight>(
        &self,
        graph: &AdjacencyGraph<W>,
        sources: &[usize],
    ) -> Result<Vec<DistanceVector<W>>> {
        if let Some(&bad) = sources.iter().find(|&&s| !graph.has_vertex(s)) {
            return Err(Error::InvalidVertex(bad));
        }

        sources
            .par_iter()
            .map(|&source| self.compute_shortest_paths(graph, source))
            .collect()
    }
}

/// Computes shortest distances from `source` to every vertex of `graph`
pub fn compute_shortest_paths<W: Weight>(
    source: usize,
    graph: &AdjacencyGraph<W>,
) -> Result<DistanceVector<W>> {
    ShortestPathEngine::new().compute_shortest_paths(graph, source)
}

/// Shortest distance from `source` to `target`, stopping once `target` is settled
pub fn distance_between<W: Weight>(
    graph: &AdjacencyGraph<W>,
    source: usize,
    target: usize,
) -> Result<Option<W>> {
    ShortestPathEngine::new().distance_between(graph, source, target)
}

/// Runs [`compute_shortest_paths`] for every source in parallel
pub fn compute_from_sources<W: Weight>(
    graph: &AdjacencyGraph<W>,
    sources: &[usize],
) -> Result<Vec<DistanceVector<W>>> {
    ShortestPathEngine::new().compute_from_sources(graph, sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use std::sync::Mutex;

    struct CaptureLogger {
        lines: Mutex<Vec<String>>,
    }

    impl Log for CaptureLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= Level::Debug
        }

        fn log(&self, record: &Record) {
            if self.enabled(record.metadata()) {
                if let Ok(mut lines) = self.lines.lock() {
                    lines.push(record.args().to_string());
                }
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger {
        lines: Mutex::new(Vec::new()),
    };

    #[test]
    fn failed_run_still_logs_its_statistics() {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Debug);

        let graph = AdjacencyGraph::from_edges(3, &[(0, 1, 250u8), (1, 2, 9)]).unwrap();
        let result = ShortestPathEngine::new().compute_shortest_paths(&graph, 0);
        assert_eq!(result, Err(Error::DistanceOverflow { vertex: 2 }));

        let lines = LOGGER.lines.lock().unwrap();
        assert!(lines
            .iter()
            .any(|line| line.starts_with("Dijkstra from 0: 2 pops (0 stale), 1 relaxations")));
        assert!(lines
            .iter()
            .any(|line| line == "Dijkstra from 0: distance to 2 overflows"));
    }
}
