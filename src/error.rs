//! Error type shared by the library and the binaries

use thiserror::Error;

use crate::{graph::IndexT, logging::LoggingError};

#[derive(Debug, Error)]
pub enum MisError {
    /// A vertex id that does not name a vertex of the graph.
    #[error("vertex {vertex} is not in the graph (n = {n})")]
    VertexOutOfRange { vertex: IndexT, n: usize },

    #[error("self-loop on vertex {vertex}")]
    SelfLoop { vertex: IndexT },

    #[error("cannot generate a graph with zero vertices")]
    EmptyGraph,

    #[error("edge probability {probability} is outside [0, 1]")]
    InvalidProbability { probability: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Logging(#[from] LoggingError),
}

pub type Result<T, E = MisError> = std::result::Result<T, E>;
