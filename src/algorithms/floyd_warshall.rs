//! All-pairs shortest paths (Floyd-Warshall)
//!
//! Works on the graph's dense [`AdjacencyMatrix`](crate::AdjacencyMatrix):
//! O(V^2) memory and O(V^3) time, so intended for small or dense graphs.
//! The run polls its [`RunContext`] once per intermediate vertex.
//!
//! Negative cycles are not detected. If one exists, some diagonal entries
//! end up below zero and the affected distances are meaningless. The
//! diagonal starts at zero, so a self-loop is ignored even when negative,
//! while Bellman-Ford reports the same loop as a negative cycle.

use super::cancel::RunContext;
use super::contract::{check_start, Algorithm, AlgorithmResult};
use crate::error::Result;
use crate::storage::{Graph, VertexId};
use std::collections::HashMap;

/// All-pairs distances with a predecessor matrix for path rebuilding
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FloydWarshallResult {
    vertices: Vec<VertexId>,
    index: HashMap<VertexId, usize>,
    dist: Vec<f64>,
    pred: Vec<Option<usize>>,
}

impl FloydWarshallResult {
    /// Vertices in row order
    #[must_use]
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Shortest distance `from -> to`, `+inf` if unreachable or unknown
    #[must_use]
    pub fn distance(&self, from: VertexId, to: VertexId) -> f64 {
        match (self.index.get(&from), self.index.get(&to)) {
            (Some(&i), Some(&j)) => self.dist[i * self.vertices.len() + j],
            _ => f64::INFINITY,
        }
    }

    /// Vertices on a shortest path `from -> to`, empty if unreachable
    #[must_use]
    pub fn shortest_path(&self, from: VertexId, to: VertexId) -> Vec<VertexId> {
        let n = self.vertices.len();
        let (Some(&i), Some(&j)) = (self.index.get(&from), self.index.get(&to)) else {
            return Vec::new();
        };
        if i == j {
            return vec![from];
        }
        if self.dist[i * n + j].is_infinite() {
            return Vec::new();
        }

        let mut path = vec![j];
        let mut current = j;
        while current != i {
            let Some(prev) = self.pred[i * n + current] else {
                return Vec::new();
            };
            if path.len() > n {
                return Vec::new();
            }
            path.push(prev);
            current = prev;
        }
        path.iter().rev().map(|&slot| self.vertices[slot]).collect()
    }
}

impl AlgorithmResult for FloydWarshallResult {
    fn processed(&self) -> usize {
        self.vertices.len()
    }
}

/// Floyd-Warshall as an [`Algorithm`]; the start vertex is ignored
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydWarshall;

impl Algorithm for FloydWarshall {
    type Output = FloydWarshallResult;

    fn name(&self) -> &'static str {
        "floyd_warshall"
    }

    fn execute_with(
        &self,
        graph: &Graph,
        start: Option<VertexId>,
        ctx: &RunContext,
    ) -> Result<FloydWarshallResult> {
        check_start(graph, start)?;
        let matrix = graph.build_adjacency_matrix();
        let n = matrix.len();
        let mut dist = matrix.as_slice().to_vec();
        let mut pred: Vec<Option<usize>> = (0..n * n)
            .map(|cell| {
                let (i, j) = (cell / n, cell % n);
                (i != j && dist[cell].is_finite()).then_some(i)
            })
            .collect();

        for k in 0..n {
            ctx.check("floyd_warshall")?;
            for i in 0..n {
                let d_ik = dist[i * n + k];
                if d_ik.is_infinite() {
                    continue;
                }
                for j in 0..n {
                    let through_k = d_ik + dist[k * n + j];
                    if through_k < dist[i * n + j] {
                        dist[i * n + j] = through_k;
                        pred[i * n + j] = pred[k * n + j];
                    }
                }
            }
        }

        let vertices = matrix.vertices().to_vec();
        let index = vertices.iter().enumerate().map(|(i, &v)| (v, i)).collect();
        Ok(FloydWarshallResult {
            vertices,
            index,
            dist,
            pred,
        })
    }
}

/// Compute shortest paths between every pair of vertices
///
/// # Errors
///
/// Only fails when run through a cancelled [`RunContext`]; this entry point
/// uses an unbounded one, so it always succeeds
///
/// # Example
///
/// ```
/// use trueno_graph_algos::{floyd_warshall, Graph, GraphKind, VertexId};
///
/// let graph = Graph::from_edge_list(GraphKind::Directed, &[
///     (VertexId(0), VertexId(1), 1.0),
///     (VertexId(1), VertexId(2), 2.0),
///     (VertexId(0), VertexId(2), 5.0),
/// ]);
///
/// let all = floyd_warshall(&graph).unwrap();
/// assert_eq!(all.distance(VertexId(0), VertexId(2)), 3.0);
/// assert!(all.distance(VertexId(2), VertexId(0)).is_infinite());
/// ```
pub fn floyd_warshall(graph: &Graph) -> Result<FloydWarshallResult> {
    FloydWarshall.execute(graph, None)
}
