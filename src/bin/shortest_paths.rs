use log::info;
use sssp_engine::config::{DriverConfig, OutputFormat};
use sssp_engine::graph::fixtures::example_graph;
use sssp_engine::ShortestPathEngine;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let config = DriverConfig::from_env()?;
    let graph = example_graph()?;
    info!(
        "example graph: {} vertices, {} edges, source {}",
        graph.vertex_count(),
        graph.edge_count(),
        config.source
    );

    let engine = ShortestPathEngine::new();
    let distances = engine.compute_shortest_paths(&graph, config.source)?;

    match config.format {
        OutputFormat::Text => {
            for line in distances.report_lines() {
                println!("{}", line);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&distances)?),
    }

    Ok(())
}
