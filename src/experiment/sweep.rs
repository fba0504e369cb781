//! Scaling sweep: mean running time and set size against graph order

use std::num::NonZeroUsize;

use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use tracing::info;

use crate::config::{ExperimentConfig, GraphReuse};
use crate::error::Result;
use crate::generation::generate_connected_graph;
use crate::graph::UndirectedGraph;
use crate::mis::Algorithm;

use super::harness::{average_metrics, run_trials, Metrics};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepRow {
    pub vertex_count: usize,
    pub algorithm: Algorithm,
    pub metrics: Metrics,
}

/// Times every configured algorithm on random connected graphs of every configured order.
///
/// Returns one row per (vertex count, algorithm), vertex counts in
/// configuration order and algorithms in configuration order within each.
/// With [`GraphReuse::PerSize`] a single graph is drawn per vertex count and
/// shared by all trials of all algorithms; with [`GraphReuse::PerTrial`] every
/// trial draws its own graph.
pub fn scaling_sweep<R: Rng + ?Sized>(
    config: &ExperimentConfig,
    rng: &mut R,
) -> Result<Vec<SweepRow>> {
    scaling_sweep_with(config, rng, |_| Ok(()))
}

/// [`scaling_sweep`], handing each row to `on_row` as soon as it is measured.
///
/// An error from `on_row` stops the sweep.
pub fn scaling_sweep_with<R, F>(
    config: &ExperimentConfig,
    rng: &mut R,
    mut on_row: F,
) -> Result<Vec<SweepRow>>
where
    R: Rng + ?Sized,
    F: FnMut(&SweepRow) -> Result<()>,
{
    config.validate()?;
    let trial_count = config.trials()?;

    let pb = progress_bar(
        (config.vertex_counts.len() * config.algorithms.len()) as u64,
        config.show_progress,
    );

    let mut rows = Vec::with_capacity(config.vertex_counts.len() * config.algorithms.len());
    for &vertex_count in &config.vertex_counts {
        pb.set_message(format!("n = {vertex_count}"));
        match config.graph_reuse {
            GraphReuse::PerSize => {
                let graph =
                    generate_connected_graph(vertex_count, config.edge_probability, rng)?;
                for &algorithm in &config.algorithms {
                    let metrics = average_metrics(
                        |g: &UndirectedGraph| algorithm.run(g),
                        &graph,
                        trial_count,
                    );
                    let row = record(vertex_count, algorithm, metrics);
                    on_row(&row)?;
                    rows.push(row);
                    pb.inc(1);
                }
            }
            GraphReuse::PerTrial => {
                for &algorithm in &config.algorithms {
                    let mut samples = Vec::with_capacity(trial_count.get());
                    for _ in 0..trial_count.get() {
                        let graph =
                            generate_connected_graph(vertex_count, config.edge_probability, rng)?;
                        samples.extend(run_trials(
                            |g: &UndirectedGraph| algorithm.run(g),
                            &graph,
                            NonZeroUsize::MIN,
                        ));
                    }
                    let row = record(vertex_count, algorithm, Metrics::from_samples(&samples));
                    on_row(&row)?;
                    rows.push(row);
                    pb.inc(1);
                }
            }
        }
    }
    pb.finish_and_clear();

    Ok(rows)
}

fn record(vertex_count: usize, algorithm: Algorithm, metrics: Metrics) -> SweepRow {
    info!(
        vertex_count,
        algorithm = algorithm.key(),
        trials = metrics.trials,
        mean_time_s = metrics.mean_time,
        mean_size = metrics.mean_size,
        "sweep point"
    );
    SweepRow {
        vertex_count,
        algorithm,
        metrics,
    }
}

pub(crate) fn progress_bar(len: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::default_bar()
        .template("{msg} {wide_bar:.green/gray} {pos}/{len} [{elapsed_precise}]({eta})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓░");
    pb.set_style(style);
    pb
}
