//! Command line arguments shared by the experiment binaries

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use crate::config::{
    parse_algorithms, parse_vertex_counts, ExperimentConfig, GraphReuse, DEFAULT_OUTPUT_DIR,
    DEFAULT_SWEEP_FILE,
};
use crate::error::Result;

/// Adds the flags shared by every experiment binary; each defaults to the reference experiment.
pub fn experiment_command(command: Command) -> Command {
    command
        .arg(
            Arg::new("vertex_counts")
                .long("vertex-counts")
                .short('n')
                .value_name("LIST")
                .help("Comma-separated graph orders for the scaling sweep")
                .default_value("100,200,300,400,500"),
        )
        .arg(
            Arg::new("probability")
                .long("probability")
                .short('p')
                .value_name("P")
                .help("Edge probability of the random graphs")
                .value_parser(value_parser!(f64))
                .default_value("0.2"),
        )
        .arg(
            Arg::new("trials")
                .long("trials")
                .short('t')
                .help("Runs per vertex count and algorithm")
                .value_parser(value_parser!(usize))
                .default_value("50"),
        )
        .arg(
            Arg::new("algorithms")
                .long("algorithms")
                .short('a')
                .value_name("LIST")
                .help("Comma-separated algorithms: greedy, highest-degree")
                .default_value("greedy,highest-degree"),
        )
        .arg(
            Arg::new("graph_reuse")
                .long("graph-reuse")
                .value_name("MODE")
                .help("per-size: one graph per vertex count; per-trial: a new graph every trial")
                .default_value("per-size"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .short('s')
                .help("Seed for reproducible graphs")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("no_progress")
                .long("no-progress")
                .help("Hide progress bars")
                .action(ArgAction::SetTrue),
        )
}

/// Adds the flags of the single-graph demonstration.
pub fn demo_flags(command: Command) -> Command {
    command
        .arg(
            Arg::new("demo_vertices")
                .long("demo-vertices")
                .help("Order of the demonstration graph")
                .value_parser(value_parser!(usize))
                .default_value("20"),
        )
        .arg(
            Arg::new("output_dir")
                .long("output-dir")
                .short('o')
                .value_name("DIR")
                .help("Directory for DOT renderings")
                .default_value(DEFAULT_OUTPUT_DIR),
        )
}

/// Adds the flag naming the CSV file sweep rows are appended to.
pub fn sweep_log_flags(command: Command) -> Command {
    command
        .arg(
            Arg::new("sweep_file")
                .long("sweep-file")
                .value_name("FILE")
                .help("CSV file sweep results are appended to")
                .default_value(DEFAULT_SWEEP_FILE),
        )
}

/// Builds a validated configuration from parsed flags.
///
/// Flags the command does not define keep their defaults.
pub fn config_from_matches(matches: &ArgMatches) -> Result<ExperimentConfig> {
    let defaults = ExperimentConfig::default();
    let config = ExperimentConfig {
        vertex_counts: match matches.get_one::<String>("vertex_counts") {
            Some(raw) => parse_vertex_counts(raw)?,
            None => defaults.vertex_counts,
        },
        edge_probability: matches
            .get_one::<f64>("probability")
            .copied()
            .unwrap_or(defaults.edge_probability),
        trial_count: matches
            .get_one::<usize>("trials")
            .copied()
            .unwrap_or(defaults.trial_count),
        demo_vertex_count: defined::<usize>(matches, "demo_vertices")
            .copied()
            .unwrap_or(defaults.demo_vertex_count),
        algorithms: match matches.get_one::<String>("algorithms") {
            Some(raw) => parse_algorithms(raw)?,
            None => defaults.algorithms,
        },
        graph_reuse: match matches.get_one::<String>("graph_reuse") {
            Some(raw) => raw.parse::<GraphReuse>()?,
            None => defaults.graph_reuse,
        },
        seed: matches.get_one::<u64>("seed").copied(),
        show_progress: !matches.get_flag("no_progress"),
        output_dir: defined::<String>(matches, "output_dir")
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir),
        sweep_file: defined::<String>(matches, "sweep_file")
            .map(PathBuf::from)
            .unwrap_or(defaults.sweep_file),
    };
    config.validate()?;
    Ok(config)
}

fn defined<'a, T: Clone + Send + Sync + 'static>(matches: &'a ArgMatches, id: &str) -> Option<&'a T> {
    matches.try_get_one::<T>(id).ok().flatten()
}
