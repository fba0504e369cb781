use crate::graph::Graph;

use super::{is_independent_unchecked, VertexSet};

/// Builds a maximal independent set by scanning vertices in [`Graph::vertices`] order.
///
/// Each vertex is tentatively added to the set accepted so far and the whole
/// candidate is rechecked for independence; it is kept only if the check
/// passes. A rejected vertex has a neighbor in the set, and the set only
/// grows, so the result is maximal. The full recheck makes a scan cost up to
/// O(V * |S| * deg), which is what the benchmarks compare against
/// [`super::highest_degree_mis`].
pub fn greedy_mis<G: Graph + ?Sized>(graph: &G) -> VertexSet {
    let mut independent_set = VertexSet::new();

    for vertex in graph.vertices() {
        let mut candidate = independent_set.clone();
        candidate.insert(vertex);

        if is_independent_unchecked(graph, &candidate) {
            independent_set = candidate;
        }
    }

    independent_set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UndirectedGraph;

    #[test]
    fn takes_every_vertex_without_edges() {
        let g = UndirectedGraph::empty(4);
        assert_eq!(greedy_mis(&g), VertexSet::from([0, 1, 2, 3]));
    }

    #[test]
    fn prefers_earlier_vertices() {
        // star centred on the last vertex: every leaf comes first
        let g = UndirectedGraph::from_edges(4, &[(3, 0), (3, 1), (3, 2)]).unwrap();
        assert_eq!(greedy_mis(&g), VertexSet::from([0, 1, 2]));

        // star centred on the first vertex: the centre blocks every leaf
        let g = UndirectedGraph::from_edges(4, &[(0, 1), (0, 2), (0, 3)]).unwrap();
        assert_eq!(greedy_mis(&g), VertexSet::from([0]));
    }
}
