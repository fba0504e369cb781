//! Experiment parameters
//!
//! The defaults reproduce the reference experiment: a 20-vertex demonstration
//! graph, then graphs of 100 to 500 vertices with edge probability 0.2, each
//! constructor timed over 50 trials per size.

use std::{num::NonZeroUsize, path::PathBuf, str::FromStr};

use rand::{rngs::StdRng, SeedableRng};

use crate::error::{MisError, Result};
use crate::mis::Algorithm;

pub const DEFAULT_VERTEX_COUNTS: [usize; 5] = [100, 200, 300, 400, 500];
pub const DEFAULT_EDGE_PROBABILITY: f64 = 0.2;
pub const DEFAULT_TRIAL_COUNT: usize = 50;
pub const DEFAULT_DEMO_VERTEX_COUNT: usize = 20;
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";
pub const DEFAULT_SWEEP_FILE: &str = "outputs/mis_scaling.csv";

/// Which graph each benchmark trial runs against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GraphReuse {
    /// one graph per vertex count, shared by every trial and every algorithm
    #[default]
    PerSize,
    /// a freshly generated graph for every trial, so the means also average over graph instances
    PerTrial,
}

impl FromStr for GraphReuse {
    type Err = MisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "per-size" => Ok(GraphReuse::PerSize),
            "per-trial" => Ok(GraphReuse::PerTrial),
            other => Err(MisError::InvalidConfig(format!(
                "unknown graph reuse mode `{other}`; expected `per-size` or `per-trial`"
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ExperimentConfig {
    /// graph orders visited by the scaling sweep, in order
    pub vertex_counts: Vec<usize>,
    pub edge_probability: f64,
    /// runs per (vertex count, algorithm) pair
    pub trial_count: usize,
    /// order of the single demonstration graph
    pub demo_vertex_count: usize,
    pub algorithms: Vec<Algorithm>,
    pub graph_reuse: GraphReuse,
    /// fixed seed for reproducible graphs; `None` draws one from the thread rng
    pub seed: Option<u64>,
    pub show_progress: bool,
    /// where DOT renderings are written
    pub output_dir: PathBuf,
    /// CSV file the sweep rows are appended to
    pub sweep_file: PathBuf,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            vertex_counts: DEFAULT_VERTEX_COUNTS.to_vec(),
            edge_probability: DEFAULT_EDGE_PROBABILITY,
            trial_count: DEFAULT_TRIAL_COUNT,
            demo_vertex_count: DEFAULT_DEMO_VERTEX_COUNT,
            algorithms: Algorithm::ALL.to_vec(),
            graph_reuse: GraphReuse::default(),
            seed: None,
            show_progress: true,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sweep_file: PathBuf::from(DEFAULT_SWEEP_FILE),
        }
    }
}

impl ExperimentConfig {
    pub fn validate(&self) -> Result<()> {
        if self.vertex_counts.is_empty() {
            return Err(MisError::InvalidConfig(
                "at least one vertex count is required".to_string(),
            ));
        }
        if self.vertex_counts.contains(&0) || self.demo_vertex_count == 0 {
            return Err(MisError::EmptyGraph);
        }
        if !(0.0..=1.0).contains(&self.edge_probability) {
            return Err(MisError::InvalidProbability {
                probability: self.edge_probability,
            });
        }
        if self.trial_count == 0 {
            return Err(MisError::InvalidConfig(
                "trial count must be at least 1".to_string(),
            ));
        }
        if self.algorithms.is_empty() {
            return Err(MisError::InvalidConfig(
                "at least one algorithm is required".to_string(),
            ));
        }
        Ok(())
    }

    pub fn trials(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.trial_count).ok_or_else(|| {
            MisError::InvalidConfig("trial count must be at least 1".to_string())
        })
    }

    /// the generator every run draws its graphs from
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}

/// Parses a comma-separated list such as `100,200,300`.
pub fn parse_vertex_counts(raw: &str) -> Result<Vec<usize>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>().map_err(|e| {
                MisError::InvalidConfig(format!("invalid vertex count `{s}`: {e}"))
            })
        })
        .collect()
}

/// Parses a comma-separated list of algorithm keys.
pub fn parse_algorithms(raw: &str) -> Result<Vec<Algorithm>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<Algorithm>())
        .collect()
}
