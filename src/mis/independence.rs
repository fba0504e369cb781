use crate::error::{MisError, Result};
use crate::graph::Graph;

use super::VertexSet;

/// Returns whether no two members of `vertex_set` are adjacent in `graph`.
///
/// The empty set is independent. Every member must be a vertex of the graph;
/// the smallest offending id is reported as [`MisError::VertexOutOfRange`].
pub fn is_independent<G: Graph + ?Sized>(graph: &G, vertex_set: &VertexSet) -> Result<bool> {
    if let Some(vertex) = vertex_set
        .iter()
        .copied()
        .filter(|&v| !graph.contains(v))
        .min()
    {
        return Err(MisError::VertexOutOfRange {
            vertex,
            n: graph.n(),
        });
    }
    Ok(is_independent_unchecked(graph, vertex_set))
}

/// Scans the neighborhood of every member, stopping at the first internal edge.
/// Members must already be known to be vertices of `graph`.
pub(crate) fn is_independent_unchecked<G: Graph + ?Sized>(graph: &G, vertex_set: &VertexSet) -> bool {
    vertex_set.iter().all(|&v| {
        graph
            .neighbors(v)
            .iter()
            .all(|u| !vertex_set.contains(u))
    })
}

/// Returns whether `vertex_set` is independent and every other vertex has a neighbor in it.
pub fn is_maximal<G: Graph + ?Sized>(graph: &G, vertex_set: &VertexSet) -> Result<bool> {
    if !is_independent(graph, vertex_set)? {
        return Ok(false);
    }
    Ok(graph
        .vertices()
        .filter(|v| !vertex_set.contains(v))
        .all(|v| graph.neighbors(v).iter().any(|u| vertex_set.contains(u))))
}
