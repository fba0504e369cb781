use std::process;
use std::time::Instant;

use clap::Command;
use tracing::info;

use mmis::cli::{config_from_matches, demo_flags, experiment_command};
use mmis::experiment::{run_demo, scaling_sweep};
use mmis::logging::init_logging;
use mmis::report::{demo_charts, demo_table, dot::save_dot, sweep_charts};
use mmis::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    init_logging()?;

    let matches = demo_flags(experiment_command(
        Command::new("main")
            .about("Compare greedy and highest-degree maximal independent set heuristics"),
    ))
    .get_matches();
    let config = config_from_matches(&matches)?;
    let mut rng = config.rng();

    // single graph, one run per algorithm
    let outcome = run_demo(&config, &mut rng)?;
    println!(
        "Random graph: {} vertices, {} edges (p = {})",
        outcome.graph.n(),
        outcome.graph.edge_count(),
        outcome.edge_probability
    );
    for run in &outcome.runs {
        let path = config.output_dir.join(format!("{}.dot", run.algorithm.key()));
        save_dot(
            &path,
            &outcome.graph,
            &run.independent_set,
            run.algorithm.colour(),
            &format!(
                "Random Graph and Minimum Maximal Independent Set ({} Algorithm)",
                run.algorithm.name()
            ),
        )?;
        println!("wrote {}", path.display());
    }
    println!("{}", demo_table(&outcome));
    println!();
    println!("{}", demo_charts(&outcome));
    println!();

    // scaling sweep
    let start = Instant::now();
    let rows = scaling_sweep(&config, &mut rng)?;
    let elapsed = start.elapsed();
    info!(
        rows = rows.len(),
        elapsed_s = elapsed.as_secs_f64(),
        "scaling sweep finished"
    );
    println!("{}", sweep_charts(&rows));

    Ok(())
}
