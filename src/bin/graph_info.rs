use std::process;
use std::time::Instant;

use clap::{value_parser, Arg, Command};
use rand::{rngs::StdRng, SeedableRng};

use mmis::config::{DEFAULT_DEMO_VERTEX_COUNT, DEFAULT_EDGE_PROBABILITY};
use mmis::generation::generate_connected_graph;
use mmis::graph::{connectivity::component_count, stats::degree_stats, Graph};
use mmis::logging::init_logging;
use mmis::mis::{is_maximal, Algorithm};
use mmis::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    init_logging()?;

    let matches = Command::new("graph_info")
        .about("Generate a random connected graph and summarise it")
        .arg(
            Arg::new("vertices")
                .long("vertices")
                .short('n')
                .value_parser(value_parser!(usize))
                .default_value("20"),
        )
        .arg(
            Arg::new("probability")
                .long("probability")
                .short('p')
                .value_parser(value_parser!(f64))
                .default_value("0.2"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .short('s')
                .value_parser(value_parser!(u64)),
        )
        .get_matches();

    let vertex_count = matches
        .get_one::<usize>("vertices")
        .copied()
        .unwrap_or(DEFAULT_DEMO_VERTEX_COUNT);
    let probability = matches
        .get_one::<f64>("probability")
        .copied()
        .unwrap_or(DEFAULT_EDGE_PROBABILITY);
    let mut rng = match matches.get_one::<u64>("seed") {
        Some(&seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    println!(
        "Generating connected graph with {} vertices (p = {})",
        vertex_count, probability
    );
    let start = Instant::now();
    let graph = generate_connected_graph(vertex_count, probability, &mut rng)?;
    println!(
        "Graph generated in {:.3} seconds",
        start.elapsed().as_secs_f64()
    );

    let stats = degree_stats(&graph);
    println!("Number of vertices: {}", stats.vertices);
    println!("Number of edges: {}", stats.edges);
    println!("Density: {:.4}", stats.density());
    println!("Components: {}", component_count(&graph));
    println!("Average degree: {:.2}", stats.mean_degree);
    println!("Minimum degree: {}", stats.min_degree);
    println!("Maximum degree: {}", stats.max_degree);

    println!("\nDegree distribution (top 10):");
    for (i, (degree, count)) in stats.distribution.iter().take(10).enumerate() {
        println!(
            "  {}: {} vertices with degree {} ({:.2}%)",
            i + 1,
            count,
            degree,
            (*count as f64 / stats.vertices as f64) * 100.0
        );
    }

    println!("\nSample of neighborhoods:");
    for v in graph.vertices().take(5) {
        let neighborhood = graph.neighbors(v);
        if neighborhood.len() <= 10 {
            println!("Vertex {} (degree {}): {:?}", v, neighborhood.len(), neighborhood);
        } else {
            println!(
                "Vertex {} (degree {}): {:?}...(and {} more)",
                v,
                neighborhood.len(),
                &neighborhood[..10],
                neighborhood.len() - 10
            );
        }
    }

    println!("\nMaximal independent sets:");
    for algorithm in Algorithm::ALL {
        let set = algorithm.run(&graph);
        let mut members: Vec<_> = set.iter().copied().collect();
        members.sort_unstable();
        println!(
            "  {}: {} vertices, maximal = {}, {:?}",
            algorithm,
            set.len(),
            is_maximal(&graph, &set)?,
            members
        );
    }

    Ok(())
}
