//! an undirected graph stored as one neighbor list per vertex

use crate::error::{MisError, Result};

use super::{Graph, IndexT, MutableGraph};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UndirectedGraph {
    neighborhoods: Vec<Vec<IndexT>>,
}

impl UndirectedGraph {
    /// constructs a graph with `n` vertices and no edges
    pub fn empty(n: usize) -> UndirectedGraph {
        UndirectedGraph {
            neighborhoods: vec![Vec::new(); n],
        }
    }

    /// builds a graph with `n` vertices from a list of undirected edges
    ///
    /// Each pair only needs to be listed once; repeated pairs collapse into a single edge.
    pub fn from_edges(n: usize, edges: &[(IndexT, IndexT)]) -> Result<UndirectedGraph> {
        let mut graph = UndirectedGraph::empty(n);
        for &(u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// wraps neighbor lists that are already symmetric, loop-free and duplicate-free
    pub(crate) fn from_neighborhoods(neighborhoods: Vec<Vec<IndexT>>) -> UndirectedGraph {
        debug_assert!(neighborhoods.iter().enumerate().all(|(u, neighborhood)| {
            neighborhood.iter().all(|&v| {
                v as usize != u && neighborhoods[v as usize].contains(&(u as IndexT))
            })
        }));
        UndirectedGraph { neighborhoods }
    }

    /// the complete graph K_n
    pub fn complete(n: usize) -> UndirectedGraph {
        let neighborhoods = (0..n as IndexT)
            .map(|i| (0..n as IndexT).filter(|&j| j != i).collect())
            .collect();
        UndirectedGraph { neighborhoods }
    }

    /// the path 0 - 1 - ... - (n-1)
    pub fn path(n: usize) -> UndirectedGraph {
        let mut graph = UndirectedGraph::empty(n);
        for i in 1..n as IndexT {
            graph.link(i - 1, i);
        }
        graph
    }

    /// the cycle 0 - 1 - ... - (n-1) - 0, for `n >= 3`
    pub fn cycle(n: usize) -> UndirectedGraph {
        let mut graph = UndirectedGraph::path(n);
        if n >= 3 {
            graph.link(n as IndexT - 1, 0);
        }
        graph
    }

    /// returns the number of vertices in the graph
    pub fn n(&self) -> usize {
        self.neighborhoods.len()
    }

    /// returns the neighborhood of a vertex
    pub fn get_neighborhood(&self, i: IndexT) -> &[IndexT] {
        assert!(i < self.n() as IndexT);
        &self.neighborhoods[i as usize]
    }

    pub fn has_edge(&self, u: IndexT, v: IndexT) -> bool {
        self.contains(u) && self.neighborhoods[u as usize].contains(&v)
    }

    /// sum of degrees of all vertices
    pub fn total_degree(&self) -> usize {
        self.neighborhoods.iter().map(|n| n.len()).sum()
    }

    /// number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.total_degree() / 2
    }

    /// maximum degree of the graph
    pub fn max_degree(&self) -> usize {
        self.neighborhoods
            .iter()
            .map(|n| n.len())
            .max()
            .unwrap_or(0)
    }

    /// iterates over every edge once, as `(u, v)` with `u < v`
    pub fn edges(&self) -> impl Iterator<Item = (IndexT, IndexT)> + '_ {
        self.neighborhoods
            .iter()
            .enumerate()
            .flat_map(|(u, neighborhood)| {
                let u = u as IndexT;
                neighborhood
                    .iter()
                    .filter(move |&&v| u < v)
                    .map(move |&v| (u, v))
            })
    }

    // both endpoints are known to be valid and distinct
    fn link(&mut self, u: IndexT, v: IndexT) {
        self.neighborhoods[u as usize].push(v);
        self.neighborhoods[v as usize].push(u);
    }
}

impl Graph for UndirectedGraph {
    fn n(&self) -> usize {
        self.neighborhoods.len()
    }

    fn neighbors(&self, i: IndexT) -> &[IndexT] {
        self.get_neighborhood(i)
    }
}

impl MutableGraph for UndirectedGraph {
    fn add_edge(&mut self, u: IndexT, v: IndexT) -> Result<()> {
        for vertex in [u, v] {
            if !self.contains(vertex) {
                return Err(MisError::VertexOutOfRange {
                    vertex,
                    n: self.n(),
                });
            }
        }
        if u == v {
            return Err(MisError::SelfLoop { vertex: u });
        }
        if !self.has_edge(u, v) {
            self.link(u, v);
        }
        Ok(())
    }
}
