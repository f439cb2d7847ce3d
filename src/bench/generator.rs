//! Erdős–Rényi `G(n, p)` random graphs
//!
//! Each of the `n (n - 1) / 2` unordered vertex pairs becomes an edge
//! independently with probability `p`, weighted uniformly from a fixed range.
//! Vertices are `VertexId(0) .. VertexId(n - 1)` in insertion order.
//!
//! In directed mode every chosen pair `{i, j}` with `i < j` is oriented
//! `i -> j`, so generated directed graphs are always acyclic.

use crate::storage::{Graph, GraphKind, VertexId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded `G(n, p)` generator
///
/// # Example
///
/// ```
/// use trueno_graph_algos::bench::ErdosRenyi;
///
/// let graph = ErdosRenyi::new(20).probability(1.0).seed(7).generate();
/// assert_eq!(graph.vertex_count(), 20);
/// assert_eq!(graph.edge_count(), 20 * 19 / 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErdosRenyi {
    vertices: usize,
    probability: f64,
    weight_range: (f64, f64),
    kind: GraphKind,
    seed: u64,
}

impl ErdosRenyi {
    /// Generator for `vertices` vertices with `p = 0.5`, weights in `[1, 10]`
    #[must_use]
    pub fn new(vertices: usize) -> Self {
        Self {
            vertices,
            probability: 0.5,
            weight_range: (1.0, 10.0),
            kind: GraphKind::Undirected,
            seed: 0,
        }
    }

    /// Edge probability
    ///
    /// # Panics
    ///
    /// Panics if `p` is not within `[0, 1]`
    #[must_use]
    pub fn probability(mut self, p: f64) -> Self {
        assert!((0.0..=1.0).contains(&p), "edge probability {p} outside [0, 1]");
        self.probability = p;
        self
    }

    /// Inclusive weight range
    ///
    /// # Panics
    ///
    /// Panics if `low > high` or either bound is not finite
    #[must_use]
    pub fn weights(mut self, low: f64, high: f64) -> Self {
        assert!(
            low.is_finite() && high.is_finite() && low <= high,
            "invalid weight range [{low}, {high}]"
        );
        self.weight_range = (low, high);
        self
    }

    /// Graph kind of the output
    #[must_use]
    pub fn kind(mut self, kind: GraphKind) -> Self {
        self.kind = kind;
        self
    }

    /// RNG seed; equal seeds give identical graphs
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build the graph
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // vertex counts stay far below u32::MAX
    pub fn generate(&self) -> Graph {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut graph = Graph::new(self.kind);
        let (low, high) = self.weight_range;

        for i in 0..self.vertices {
            graph.add_vertex(VertexId(i as u32));
        }

        for i in 0..self.vertices {
            for j in (i + 1)..self.vertices {
                if rng.gen_bool(self.probability) {
                    let weight = rng.gen_range(low..=high);
                    graph.add_edge(VertexId(i as u32), VertexId(j as u32), weight);
                }
            }
        }

        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::toposort;

    #[test]
    fn test_same_seed_same_graph() {
        let a = ErdosRenyi::new(30).probability(0.3).seed(11).generate();
        let b = ErdosRenyi::new(30).probability(0.3).seed(11).generate();
        assert_eq!(a.edges(), b.edges());
    }

    #[test]
    fn test_probability_extremes() {
        let empty = ErdosRenyi::new(10).probability(0.0).generate();
        assert_eq!(empty.vertex_count(), 10);
        assert_eq!(empty.edge_count(), 0);

        let complete = ErdosRenyi::new(10).probability(1.0).generate();
        assert_eq!(complete.edge_count(), 45);
        assert!(complete.is_connected());
    }

    #[test]
    fn test_weights_within_range() {
        let graph = ErdosRenyi::new(25)
            .probability(0.5)
            .weights(2.0, 3.5)
            .seed(3)
            .generate();
        assert!(graph
            .edges()
            .iter()
            .all(|e| (2.0..=3.5).contains(&e.weight)));
    }

    #[test]
    fn test_directed_output_is_acyclic() {
        let graph = ErdosRenyi::new(40)
            .probability(0.4)
            .kind(GraphKind::Directed)
            .seed(5)
            .generate();
        assert!(graph.is_directed());

        let topo = toposort(&graph).unwrap();
        assert!(!topo.has_cycle);
        assert_eq!(topo.order.len(), 40);
    }

    #[test]
    #[should_panic(expected = "outside [0, 1]")]
    fn test_invalid_probability() {
        let _ = ErdosRenyi::new(5).probability(1.5);
    }
}
