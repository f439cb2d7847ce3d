//! Dense adjacency matrix view
//!
//! Derived from a [`Graph`](super::Graph) on demand. Row-major, `+inf` where
//! no edge exists, `0` on the diagonal. Never the source of truth.

use super::VertexId;

/// `n x n` weight matrix indexed by graph slot
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix {
    vertices: Vec<VertexId>,
    weights: Vec<f64>,
}

impl AdjacencyMatrix {
    pub(crate) fn from_adjacency(vertices: Vec<VertexId>, adjacency: &[Vec<(usize, f64)>]) -> Self {
        let n = vertices.len();
        let mut weights = vec![f64::INFINITY; n * n];

        for i in 0..n {
            weights[i * n + i] = 0.0;
        }
        for (u, neighbors) in adjacency.iter().enumerate() {
            for &(v, w) in neighbors {
                if u != v {
                    weights[u * n + v] = w;
                }
            }
        }

        Self { vertices, weights }
    }

    /// Number of rows (= vertices)
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// `true` for a matrix over zero vertices
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex for each row/column, in slot order
    #[must_use]
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Weight at `(row, col)`
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        let n = self.len();
        assert!(row < n && col < n, "matrix index ({row}, {col}) out of range for {n}");
        self.weights[row * n + col]
    }

    /// Row-major weights
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }
}
