//! Single-graph demonstration: each algorithm run once on one small random graph

use std::time::Duration;

use rand::Rng;
use tracing::info;

use crate::config::ExperimentConfig;
use crate::error::Result;
use crate::generation::generate_connected_graph;
use crate::graph::UndirectedGraph;
use crate::mis::{Algorithm, VertexSet};

use super::harness::measure;

#[derive(Clone, Debug)]
pub struct DemoRun {
    pub algorithm: Algorithm,
    pub independent_set: VertexSet,
    pub elapsed: Duration,
}

#[derive(Clone, Debug)]
pub struct DemoOutcome {
    pub graph: UndirectedGraph,
    pub edge_probability: f64,
    /// one run per configured algorithm, in configuration order
    pub runs: Vec<DemoRun>,
}

pub fn run_demo<R: Rng + ?Sized>(config: &ExperimentConfig, rng: &mut R) -> Result<DemoOutcome> {
    config.validate()?;
    let graph = generate_connected_graph(config.demo_vertex_count, config.edge_probability, rng)?;

    let runs = config
        .algorithms
        .iter()
        .map(|&algorithm| {
            let (independent_set, elapsed) =
                measure(|g: &UndirectedGraph| algorithm.run(g), &graph);
            info!(
                algorithm = algorithm.key(),
                size = independent_set.len(),
                elapsed_s = elapsed.as_secs_f64(),
                "demonstration run"
            );
            DemoRun {
                algorithm,
                independent_set,
                elapsed,
            }
        })
        .collect();

    Ok(DemoOutcome {
        graph,
        edge_probability: config.edge_probability,
        runs,
    })
}
