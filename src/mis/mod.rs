//! Maximal independent set constructions
//!
//! Two heuristics build a maximal independent set (an independent set no
//! outside vertex can join): [`greedy_mis`] scans vertices in enumeration
//! order, [`highest_degree_mis`] repeatedly takes the highest-degree vertex
//! still available. Neither promises the smallest or the largest such set.

use std::{collections::HashSet, fmt, str::FromStr};

use crate::error::MisError;
use crate::graph::{Graph, IndexT};

mod greedy;
mod highest_degree;
mod independence;

#[cfg(test)]
mod tests;

pub use greedy::greedy_mis;
pub use highest_degree::highest_degree_mis;
pub use independence::{is_independent, is_maximal};

pub(crate) use independence::is_independent_unchecked;

/// A set of vertex ids; iteration order carries no meaning.
pub type VertexSet = HashSet<IndexT>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Greedy,
    HighestDegree,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Greedy, Algorithm::HighestDegree];

    /// display name used in tables and charts
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Greedy => "Greedy",
            Algorithm::HighestDegree => "Highest Degree",
        }
    }

    /// identifier accepted on the command line and written to CSV
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::Greedy => "greedy",
            Algorithm::HighestDegree => "highest-degree",
        }
    }

    /// highlight colour for the vertices this algorithm selects
    pub fn colour(self) -> &'static str {
        match self {
            Algorithm::Greedy => "#FC3805",
            Algorithm::HighestDegree => "#FCCF07",
        }
    }

    pub fn run<G: Graph + ?Sized>(self, graph: &G) -> VertexSet {
        match self {
            Algorithm::Greedy => greedy_mis(graph),
            Algorithm::HighestDegree => highest_degree_mis(graph),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = MisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "greedy" => Ok(Algorithm::Greedy),
            "highest-degree" | "highest" => Ok(Algorithm::HighestDegree),
            other => Err(MisError::InvalidConfig(format!(
                "unknown algorithm `{other}`; expected `greedy` or `highest-degree`"
            ))),
        }
    }
}
