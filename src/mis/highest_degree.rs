use std::{cmp::Reverse, collections::BTreeSet};

use crate::graph::{Graph, IndexT};

use super::VertexSet;

/// Builds a maximal independent set by repeatedly selecting the remaining vertex of highest degree.
///
/// Degrees are those of the original graph, which is never modified; a
/// separate working set tracks the vertices still eligible. Among vertices of
/// equal degree the lowest id is selected. Each selection removes the vertex
/// and all of its neighbors from the working set, so no two selections are
/// adjacent, and the loop only ends once every vertex is either selected or
/// next to a selected one.
pub fn highest_degree_mis<G: Graph + ?Sized>(graph: &G) -> VertexSet {
    let mut remaining: BTreeSet<IndexT> = graph.vertices().collect();
    let mut independent_set = VertexSet::new();

    while let Some(selected) = remaining
        .iter()
        .copied()
        .max_by_key(|&v| (graph.degree(v), Reverse(v)))
    {
        independent_set.insert(selected);
        remaining.remove(&selected);
        for neighbor in graph.neighbors(selected) {
            remaining.remove(neighbor);
        }
    }

    independent_set
}
