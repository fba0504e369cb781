//! Graph implementation and associated functionality

pub mod connectivity;
pub mod stats;


mod graph_traits;
mod undirected_graph;

pub use graph_traits::*;
pub use undirected_graph::*;
