use std::process;
use std::time::Instant;

use clap::Command;

use mmis::cli::{config_from_matches, experiment_command, sweep_log_flags};
use mmis::experiment::scaling_sweep_with;
use mmis::logging::init_logging;
use mmis::report::{csv_log::SweepLog, sweep_charts};
use mmis::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    init_logging()?;

    let matches = sweep_log_flags(experiment_command(
        Command::new("mis_scaling")
            .about("Time both heuristics on random connected graphs of increasing order"),
    ))
    .get_matches();
    let config = config_from_matches(&matches)?;

    // opened first so a bad path fails before any timing work
    let mut log = SweepLog::open(&config.sweep_file)?;

    println!(
        "Sweeping {:?} vertices, p = {}, {} trials each",
        config.vertex_counts, config.edge_probability, config.trial_count
    );

    let start = Instant::now();
    // each row is flushed as it finishes, so an interrupted sweep keeps what it finished
    let rows = scaling_sweep_with(&config, &mut config.rng(), |row| {
        log.append(row, config.edge_probability)
    })?;
    let elapsed = start.elapsed();
    println!(
        "sweep finished in {}.{:03} seconds",
        elapsed.as_secs(),
        elapsed.subsec_millis()
    );

    println!("{}", sweep_charts(&rows));
    println!("Results appended to {}", config.sweep_file.display());

    Ok(())
}
