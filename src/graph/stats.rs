//! Summary statistics over vertex degrees

use std::collections::HashMap;

use super::Graph;

#[derive(Clone, Debug, PartialEq)]
pub struct DegreeStats {
    pub vertices: usize,
    pub edges: usize,
    pub min_degree: usize,
    pub max_degree: usize,
    pub mean_degree: f64,
    /// `(degree, vertex count)` pairs, most common degree first, ties by ascending degree
    pub distribution: Vec<(usize, usize)>,
}

impl DegreeStats {
    /// edges divided by the n(n-1)/2 possible pairs
    pub fn density(&self) -> f64 {
        if self.vertices < 2 {
            return 0.0;
        }
        let pairs = self.vertices * (self.vertices - 1) / 2;
        self.edges as f64 / pairs as f64
    }
}

pub fn degree_stats<G: Graph + ?Sized>(graph: &G) -> DegreeStats {
    let mut total_degree = 0;
    let mut min_degree = usize::MAX;
    let mut max_degree = 0;
    let mut counts: HashMap<usize, usize> = HashMap::new();

    for v in graph.vertices() {
        let degree = graph.degree(v);
        total_degree += degree;
        min_degree = min_degree.min(degree);
        max_degree = max_degree.max(degree);
        *counts.entry(degree).or_insert(0) += 1;
    }

    let mut distribution: Vec<(usize, usize)> = counts.into_iter().collect();
    distribution.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let vertices = graph.n();
    DegreeStats {
        vertices,
        edges: total_degree / 2,
        min_degree: if vertices == 0 { 0 } else { min_degree },
        max_degree,
        mean_degree: if vertices == 0 {
            0.0
        } else {
            total_degree as f64 / vertices as f64
        },
        distribution,
    }
}
