use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sssp_engine::graph::generators::{generate_grid, generate_random};
use sssp_engine::{compute_from_sources, ShortestPathEngine};

fn bench_random_graphs(c: &mut Criterion) {
    let engine = ShortestPathEngine::new();
    let mut group = c.benchmark_group("dijkstra_random");

    for &size in &[1_000usize, 10_000, 100_000] {
        let mut rng = StdRng::seed_from_u64(size as u64);
        let graph = generate_random(&mut rng, size, size * 4, 1_000).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| engine.compute_shortest_paths(black_box(graph), 0).unwrap())
        });
    }
    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let graph = generate_grid(&mut rng, 300, 300, 100).unwrap();
    let engine = ShortestPathEngine::new();

    c.bench_function("dijkstra_grid_300x300", |b| {
        b.iter(|| engine.compute_shortest_paths(black_box(&graph), 0).unwrap())
    });

    let sources: Vec<usize> = (0..16).map(|i| i * 5_000).collect();
    c.bench_function("dijkstra_grid_batch_16", |b| {
        b.iter(|| compute_from_sources(black_box(&graph), &sources).unwrap())
    });
}

criterion_group!(benches, bench_random_graphs, bench_grid);
criterion_main!(benches);
