//! Random graph generation in the G(n, p) model

use rand::Rng;
use rand_distr::{Bernoulli, Distribution};
use tracing::{debug, trace};

use crate::error::{MisError, Result};
use crate::graph::{connectivity::is_connected, IndexT, UndirectedGraph};

/// Samples a G(n, p) graph: each of the n(n-1)/2 vertex pairs is joined independently with probability `p`.
pub fn random_graph<R: Rng + ?Sized>(
    vertex_count: usize,
    edge_probability: f64,
    rng: &mut R,
) -> Result<UndirectedGraph> {
    let coin = edge_coin(edge_probability)?;
    Ok(sample_graph(vertex_count, &coin, rng))
}

/// Samples G(n, p) graphs until one is connected.
///
/// There is no bound on the number of attempts: a probability of 0 with more
/// than one vertex never terminates, and very sparse settings can take a long
/// time.
pub fn generate_connected_graph<R: Rng + ?Sized>(
    vertex_count: usize,
    edge_probability: f64,
    rng: &mut R,
) -> Result<UndirectedGraph> {
    if vertex_count == 0 {
        return Err(MisError::EmptyGraph);
    }
    let coin = edge_coin(edge_probability)?;

    let mut attempts: u64 = 0;
    loop {
        attempts += 1;
        let graph = sample_graph(vertex_count, &coin, rng);
        if is_connected(&graph) {
            debug!(
                vertex_count,
                edge_probability,
                attempts,
                edges = graph.edge_count(),
                "generated connected graph"
            );
            return Ok(graph);
        }
        trace!(vertex_count, attempts, "discarding disconnected graph");
    }
}

fn edge_coin(edge_probability: f64) -> Result<Bernoulli> {
    Bernoulli::new(edge_probability).map_err(|_| MisError::InvalidProbability {
        probability: edge_probability,
    })
}

fn sample_graph<R: Rng + ?Sized>(vertex_count: usize, coin: &Bernoulli, rng: &mut R) -> UndirectedGraph {
    let n = vertex_count as IndexT;
    let mut neighborhoods: Vec<Vec<IndexT>> = vec![Vec::new(); vertex_count];
    for u in 0..n {
        for v in (u + 1)..n {
            if coin.sample(rng) {
                neighborhoods[u as usize].push(v);
                neighborhoods[v as usize].push(u);
            }
        }
    }
    UndirectedGraph::from_neighborhoods(neighborhoods)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn generated_graph_is_connected_and_simple() {
        let mut rng = StdRng::seed_from_u64(42);
        let g = generate_connected_graph(50, 0.2, &mut rng).unwrap();
        assert_eq!(g.n(), 50);
        assert!(is_connected(&g));
        for u in g.vertices() {
            assert!(!g.neighbors(u).contains(&u));
            for &v in g.neighbors(u) {
                assert!(g.neighbors(v).contains(&u));
            }
        }
    }

    #[test]
    fn probability_one_is_complete() {
        let mut rng = StdRng::seed_from_u64(1);
        let g = generate_connected_graph(7, 1.0, &mut rng).unwrap();
        assert_eq!(g, UndirectedGraph::complete(7));
    }

    #[test]
    fn probability_zero_has_no_edges() {
        let mut rng = StdRng::seed_from_u64(1);
        let g = random_graph(10, 0.0, &mut rng).unwrap();
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn single_vertex_is_connected() {
        let mut rng = StdRng::seed_from_u64(3);
        let g = generate_connected_graph(1, 0.0, &mut rng).unwrap();
        assert_eq!(g.n(), 1);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn same_seed_same_graph() {
        let a = generate_connected_graph(30, 0.3, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = generate_connected_graph(30, 0.3, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_bad_arguments() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            generate_connected_graph(0, 0.5, &mut rng),
            Err(MisError::EmptyGraph)
        ));
        for p in [-0.1, 1.5, f64::NAN] {
            assert!(matches!(
                generate_connected_graph(5, p, &mut rng),
                Err(MisError::InvalidProbability { .. })
            ));
        }
    }
}
