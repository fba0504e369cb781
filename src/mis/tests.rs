use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use super::*;
use crate::generation::generate_connected_graph;
use crate::graph::UndirectedGraph;

const A: IndexT = 0;
const B: IndexT = 1;
const C: IndexT = 2;
const D: IndexT = 3;

fn both() -> [(Algorithm, fn(&UndirectedGraph) -> VertexSet); 2] {
    [
        (Algorithm::Greedy, greedy_mis::<UndirectedGraph>),
        (Algorithm::HighestDegree, highest_degree_mis::<UndirectedGraph>),
    ]
}

#[test]
fn empty_graph_gives_empty_set() {
    let g = UndirectedGraph::empty(0);
    for (algorithm, construct) in both() {
        assert!(construct(&g).is_empty(), "{algorithm}");
    }
}

#[test]
fn single_vertex_gives_singleton() {
    let g = UndirectedGraph::empty(1);
    for (algorithm, construct) in both() {
        assert_eq!(construct(&g), VertexSet::from([0]), "{algorithm}");
    }
}

#[test]
fn complete_graph_gives_singleton() {
    for n in 1..8 {
        let g = UndirectedGraph::complete(n);
        for (algorithm, construct) in both() {
            let set = construct(&g);
            assert_eq!(set.len(), 1, "{algorithm} on K_{n}");
            assert!(is_maximal(&g, &set).unwrap());
        }
    }
}

#[test]
fn path_of_three() {
    // A - B - C
    let g = UndirectedGraph::from_edges(3, &[(A, B), (B, C)]).unwrap();
    assert_eq!(greedy_mis(&g), VertexSet::from([A, C]));
    assert_eq!(highest_degree_mis(&g), VertexSet::from([B]));
}

#[test]
fn four_cycle() {
    // A - B - C - D - A
    let g = UndirectedGraph::from_edges(4, &[(A, B), (B, C), (C, D), (D, A)]).unwrap();
    assert_eq!(greedy_mis(&g), VertexSet::from([A, C]));
    assert_eq!(highest_degree_mis(&g), VertexSet::from([A, C]));
}

#[test]
fn disconnected_graph_is_fine() {
    // triangle, an isolated vertex and a separate edge
    let g = UndirectedGraph::from_edges(6, &[(0, 1), (1, 2), (2, 0), (4, 5)]).unwrap();
    for (algorithm, construct) in both() {
        let set = construct(&g);
        assert!(is_maximal(&g, &set).unwrap(), "{algorithm}");
        assert!(set.contains(&3), "{algorithm} must keep the isolated vertex");
        assert_eq!(set.len(), 3, "{algorithm}");
    }
}

#[test]
fn repeated_runs_agree() {
    let mut rng = StdRng::seed_from_u64(7);
    let g = generate_connected_graph(60, 0.2, &mut rng).unwrap();
    for algorithm in Algorithm::ALL {
        let first = algorithm.run(&g);
        for _ in 0..5 {
            assert_eq!(algorithm.run(&g), first, "{algorithm}");
        }
    }
}

#[test]
fn algorithm_names_parse() {
    assert_eq!("greedy".parse::<Algorithm>().unwrap(), Algorithm::Greedy);
    assert_eq!(
        "Highest_Degree".parse::<Algorithm>().unwrap(),
        Algorithm::HighestDegree
    );
    for algorithm in Algorithm::ALL {
        assert_eq!(algorithm.key().parse::<Algorithm>().unwrap(), algorithm);
    }
    assert!(matches!(
        "luby".parse::<Algorithm>(),
        Err(MisError::InvalidConfig(_))
    ));
}

fn arbitrary_graph() -> impl Strategy<Value = UndirectedGraph> {
    (0usize..40).prop_flat_map(|n| {
        let max_edges = n * (n.saturating_sub(1)) / 2;
        let endpoints = 0..(n.max(1) as IndexT);
        proptest::collection::vec((endpoints.clone(), endpoints), 0..=max_edges).prop_map(
            move |pairs| {
                let edges: Vec<(IndexT, IndexT)> =
                    pairs.into_iter().filter(|(u, v)| u != v).collect();
                UndirectedGraph::from_edges(n, &edges).expect("endpoints drawn from 0..n")
            },
        )
    })
}

proptest! {
    #[test]
    fn greedy_result_is_maximal_independent(g in arbitrary_graph()) {
        let set = greedy_mis(&g);
        prop_assert!(is_independent(&g, &set).unwrap());
        prop_assert!(is_maximal(&g, &set).unwrap());
    }

    #[test]
    fn highest_degree_result_is_maximal_independent(g in arbitrary_graph()) {
        let set = highest_degree_mis(&g);
        prop_assert!(is_independent(&g, &set).unwrap());
        prop_assert!(is_maximal(&g, &set).unwrap());
    }

    #[test]
    fn constructions_are_deterministic(g in arbitrary_graph()) {
        prop_assert_eq!(greedy_mis(&g), greedy_mis(&g));
        prop_assert_eq!(highest_degree_mis(&g), highest_degree_mis(&g));
    }

    #[test]
    fn sets_only_hold_graph_vertices(g in arbitrary_graph()) {
        for algorithm in Algorithm::ALL {
            let set = algorithm.run(&g);
            prop_assert!(set.iter().all(|&v| g.contains(v)));
            prop_assert!(set.len() <= g.n());
        }
    }
}
