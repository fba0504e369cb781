//! Repeated timed runs of a construction on one graph

use std::{
    num::NonZeroUsize,
    time::{Duration, Instant},
};

use tracing::trace;

use crate::graph::Graph;
use crate::mis::VertexSet;

/// One timed run: wall-clock duration and the size of the returned set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sample {
    pub elapsed: Duration,
    pub size: usize,
}

/// Arithmetic means over a series of samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metrics {
    /// seconds
    pub mean_time: f64,
    pub mean_size: f64,
    pub trials: usize,
}

impl Metrics {
    /// Averages `samples`. An empty slice gives zero means and zero trials.
    pub fn from_samples(samples: &[Sample]) -> Metrics {
        let trials = samples.len();
        if trials == 0 {
            return Metrics {
                mean_time: 0.0,
                mean_size: 0.0,
                trials,
            };
        }
        let total_time: f64 = samples.iter().map(|s| s.elapsed.as_secs_f64()).sum();
        let total_size: usize = samples.iter().map(|s| s.size).sum();
        Metrics {
            mean_time: total_time / trials as f64,
            mean_size: total_size as f64 / trials as f64,
            trials,
        }
    }
}

/// Runs `constructor` once, returning its set and how long it took.
pub fn measure<G, F>(mut constructor: F, graph: &G) -> (VertexSet, Duration)
where
    G: Graph + ?Sized,
    F: FnMut(&G) -> VertexSet,
{
    let start = Instant::now();
    let set = constructor(graph);
    let elapsed = start.elapsed();
    (set, elapsed)
}

/// Runs `constructor` exactly `trial_count` times against the same graph.
pub fn run_trials<G, F>(mut constructor: F, graph: &G, trial_count: NonZeroUsize) -> Vec<Sample>
where
    G: Graph + ?Sized,
    F: FnMut(&G) -> VertexSet,
{
    (0..trial_count.get())
        .map(|trial| {
            let (set, elapsed) = measure(&mut constructor, graph);
            trace!(trial, size = set.len(), elapsed_s = elapsed.as_secs_f64(), "trial");
            Sample {
                elapsed,
                size: set.len(),
            }
        })
        .collect()
}

/// Mean running time and mean set size of `constructor` over `trial_count` runs on `graph`.
///
/// The constructions are deterministic, so on a fixed graph the size is the
/// same every run and the averaging only smooths timing noise. A panic in the
/// constructor propagates; nothing is retried or partially reported.
pub fn average_metrics<G, F>(constructor: F, graph: &G, trial_count: NonZeroUsize) -> Metrics
where
    G: Graph + ?Sized,
    F: FnMut(&G) -> VertexSet,
{
    Metrics::from_samples(&run_trials(constructor, graph, trial_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UndirectedGraph;
    use crate::mis::{greedy_mis, highest_degree_mis};

    #[test]
    fn means_of_samples() {
        let samples = [
            Sample {
                elapsed: Duration::from_millis(10),
                size: 3,
            },
            Sample {
                elapsed: Duration::from_millis(30),
                size: 4,
            },
        ];
        let metrics = Metrics::from_samples(&samples);
        assert_eq!(metrics.trials, 2);
        assert!((metrics.mean_time - 0.02).abs() < 1e-12);
        assert_eq!(metrics.mean_size, 3.5);
    }

    #[test]
    fn no_samples_no_means() {
        let metrics = Metrics::from_samples(&[]);
        assert_eq!(metrics.trials, 0);
        assert_eq!(metrics.mean_time, 0.0);
        assert_eq!(metrics.mean_size, 0.0);
    }

    #[test]
    fn single_trial_means_are_the_measurement() {
        let graph = UndirectedGraph::cycle(9);
        let samples = run_trials(greedy_mis::<UndirectedGraph>, &graph, NonZeroUsize::MIN);
        assert_eq!(samples.len(), 1);

        let metrics = Metrics::from_samples(&samples);
        assert_eq!(metrics.mean_time, samples[0].elapsed.as_secs_f64());
        assert_eq!(metrics.mean_size, samples[0].size as f64);
        assert_eq!(samples[0].size, greedy_mis(&graph).len());

        let metrics = average_metrics(highest_degree_mis::<UndirectedGraph>, &graph, NonZeroUsize::MIN);
        assert_eq!(metrics.trials, 1);
        assert_eq!(metrics.mean_size, highest_degree_mis(&graph).len() as f64);
        assert!(metrics.mean_time >= 0.0);
    }

    #[test]
    fn runs_exactly_trial_count_times() {
        let graph = UndirectedGraph::path(5);
        let mut calls = 0;
        let trials = NonZeroUsize::new(7).unwrap();
        let metrics = average_metrics(
            |g: &UndirectedGraph| {
                calls += 1;
                greedy_mis(g)
            },
            &graph,
            trials,
        );
        assert_eq!(calls, 7);
        assert_eq!(metrics.trials, 7);
        // {0, 2, 4} every time
        assert_eq!(metrics.mean_size, 3.0);
    }
}
