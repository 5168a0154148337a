use crate::graph::{AdjacencyGraph, GraphBuilder};
use crate::Result;
use rand::Rng;

/// Generates a random directed graph with `vertices` vertices and `edges` edges.
///
/// Endpoints are drawn uniformly, so self-loops and parallel edges can occur.
/// Weights are drawn from `0..=max_weight`.
pub fn generate_random<R: Rng>(
    rng: &mut R,
    vertices: usize,
    edges: usize,
    max_weight: u64,
) -> Result<AdjacencyGraph<u64>> {
    let mut builder = GraphBuilder::new(vertices);
    if vertices == 0 {
        return Ok(builder.build());
    }

    for _ in 0..edges {
        let from = rng.gen_range(0..vertices);
        let to = rng.gen_range(0..vertices);
        let weight = rng.gen_range(0..=max_weight);
        builder.add_edge(from, to, weight)?;
    }

    Ok(builder.build())
}

/// Generates a `width` x `height` grid where every cell links to its four
/// neighbours with a random weight in `1..=max_weight`
pub fn generate_grid<R: Rng>(
    rng: &mut R,
    width: usize,
    height: usize,
    max_weight: u64,
) -> Result<AdjacencyGraph<u64>> {
    let mut builder = GraphBuilder::new(width * height);
    let max_weight = max_weight.max(1);

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            let directions: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

            for (dx, dy) in directions {
                let nx = x as isize + dx;
                let ny = y as isize + dy;

                if nx >= 0 && ny >= 0 && (nx as usize) < width && (ny as usize) < height {
                    let neighbor = ny as usize * width + nx as usize;
                    builder.add_edge(vertex, neighbor, rng.gen_range(1..=max_weight))?;
                }
            }
        }
    }

    Ok(builder.build())
}
