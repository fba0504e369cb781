//! Connectivity queries backed by a union-find forest

use super::{Graph, IndexT};

/// Disjoint-set forest over `0..n` with union by rank and path compression.
pub struct DisjointSets {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl DisjointSets {
    /// `n` singleton sets
    pub fn new(n: usize) -> Self {
        DisjointSets {
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    /// representative of the set holding `x`
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // second pass points everything on the walk straight at the root
        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// merges the sets holding `x` and `y`, returning false if they were already one set
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let mut a = self.find(x);
        let mut b = self.find(y);
        if a == b {
            return false;
        }
        if self.rank[a] < self.rank[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        if self.rank[a] == self.rank[b] {
            self.rank[a] += 1;
        }
        self.sets -= 1;
        true
    }

    /// number of disjoint sets left
    pub fn count(&self) -> usize {
        self.sets
    }
}

/// Number of connected components. The empty graph has none.
pub fn component_count<G: Graph + ?Sized>(graph: &G) -> usize {
    let mut sets = DisjointSets::new(graph.n());
    for u in graph.vertices() {
        for &v in graph.neighbors(u) {
            if u < v {
                sets.union(u as usize, v as usize);
            }
        }
    }
    sets.count()
}

/// Whether every vertex is reachable from every other one.
///
/// A single vertex is connected; the graph with no vertices is not.
pub fn is_connected<G: Graph + ?Sized>(graph: &G) -> bool {
    component_count(graph) == 1
}

/// Vertices grouped by component, each group in ascending order, groups ordered by their smallest vertex.
pub fn components<G: Graph + ?Sized>(graph: &G) -> Vec<Vec<IndexT>> {
    let mut sets = DisjointSets::new(graph.n());
    for u in graph.vertices() {
        for &v in graph.neighbors(u) {
            sets.union(u as usize, v as usize);
        }
    }

    let mut slot_of_root = vec![usize::MAX; graph.n()];
    let mut groups: Vec<Vec<IndexT>> = Vec::new();
    for v in graph.vertices() {
        let root = sets.find(v as usize);
        if slot_of_root[root] == usize::MAX {
            slot_of_root[root] = groups.len();
            groups.push(Vec::new());
        }
        groups[slot_of_root[root]].push(v);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UndirectedGraph;

    #[test]
    fn union_reports_merges() {
        let mut sets = DisjointSets::new(4);
        assert!(sets.union(0, 1));
        assert!(sets.union(2, 3));
        assert!(!sets.union(1, 0));
        assert_eq!(sets.count(), 2);
        assert!(sets.union(1, 3));
        assert_eq!(sets.find(0), sets.find(2));
        assert_eq!(sets.count(), 1);
    }

    #[test]
    fn connectivity_of_small_graphs() {
        assert!(!is_connected(&UndirectedGraph::empty(0)));
        assert!(is_connected(&UndirectedGraph::empty(1)));
        assert!(!is_connected(&UndirectedGraph::empty(2)));
        assert!(is_connected(&UndirectedGraph::path(5)));
        assert!(is_connected(&UndirectedGraph::complete(4)));
    }

    #[test]
    fn groups_components_by_smallest_vertex() {
        let g = UndirectedGraph::from_edges(6, &[(4, 1), (2, 5), (5, 3)]).unwrap();
        assert_eq!(component_count(&g), 3);
        assert_eq!(components(&g), vec![vec![0], vec![1, 4], vec![2, 3, 5]]);
    }
}
