//! Traits for graph interfaces

use std::ops::Range;

use crate::error::Result;

pub type IndexT = u32;

/// Read-only view of an undirected, loop-free graph over the vertices `0..n`.
pub trait Graph {
    /// number of vertices
    fn n(&self) -> usize;

    fn neighbors(&self, i: IndexT) -> &[IndexT];

    /// Enumerates the vertices in ascending id order.
    ///
    /// The order is part of the contract: scans that accept vertices one at a
    /// time (see [`crate::mis::greedy_mis`]) are only reproducible because it
    /// never changes for a given graph.
    fn vertices(&self) -> Range<IndexT> {
        0..self.n() as IndexT
    }

    fn degree(&self, i: IndexT) -> usize {
        self.neighbors(i).len()
    }

    fn contains(&self, i: IndexT) -> bool {
        (i as usize) < self.n()
    }
}

pub trait MutableGraph {
    /// adds the undirected edge {u, v}; adding an existing edge is a no-op
    fn add_edge(&mut self, u: IndexT, v: IndexT) -> Result<()>;
}
