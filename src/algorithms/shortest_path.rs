//! Single-source shortest path algorithms: Dijkstra and Bellman-Ford
//!
//! Provides shortest path computation for weighted graphs:
//! - `dijkstra`: non-negative weights, binary heap with lazy deletion
//! - `bellman_ford`: arbitrary weights, reports negative cycles as a flag
//!
//! Both return [`ShortestPaths`], which maps every vertex to its distance
//! (`+inf` when unreachable) and rebuilds paths from the predecessor map.
//!
//! # Example
//!
//! ```
//! use trueno_graph_algos::{dijkstra, Graph, GraphKind, VertexId};
//!
//! let graph = Graph::from_edge_list(GraphKind::Directed, &[
//!     (VertexId(0), VertexId(1), 1.0),
//!     (VertexId(1), VertexId(2), 2.0),
//!     (VertexId(0), VertexId(2), 5.0),
//! ]);
//!
//! let paths = dijkstra(&graph, VertexId(0)).unwrap();
//! assert_eq!(paths.distance(VertexId(2)), Some(3.0)); // 0→1→2 = 3.0, not 0→2 = 5.0
//! assert_eq!(paths.shortest_path(VertexId(2)), vec![VertexId(0), VertexId(1), VertexId(2)]);
//! ```

use super::cancel::RunContext;
use super::contract::{resolve_start, Algorithm, AlgorithmResult, Scratch};
use super::queue::MinQueue;
use crate::error::{GraphError, Result};
use crate::storage::{Graph, VertexId};
use std::collections::HashMap;
use tracing::debug;

/// Distances and predecessors from one source
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShortestPaths {
    /// Source vertex (`None` only for an empty graph)
    pub source: Option<VertexId>,
    /// Distance per vertex, `+inf` when unreachable
    pub distances: HashMap<VertexId, f64>,
    /// Last hop on the best known path, reached vertices only
    pub predecessors: HashMap<VertexId, VertexId>,
}

impl ShortestPaths {
    fn from_scratch(graph: &Graph, source: usize, scratch: &Scratch) -> Self {
        let mut distances = HashMap::with_capacity(graph.vertex_count());
        let mut predecessors = HashMap::new();
        for (slot, &id) in graph.vertices().iter().enumerate() {
            distances.insert(id, scratch.distance[slot]);
            if let Some(p) = scratch.predecessor[slot] {
                predecessors.insert(id, graph.vertex_at(p));
            }
        }
        Self {
            source: Some(graph.vertex_at(source)),
            distances,
            predecessors,
        }
    }

    /// Distance to `target`, `None` if the vertex is unknown
    #[must_use]
    pub fn distance(&self, target: VertexId) -> Option<f64> {
        self.distances.get(&target).copied()
    }

    /// Number of vertices with a finite distance
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_finite()).count()
    }

    /// Vertices from the source to `target`
    ///
    /// Empty when `target` is unknown or unreachable, or when walking the
    /// predecessors does not lead back to the source (as can happen after a
    /// negative cycle).
    #[must_use]
    pub fn shortest_path(&self, target: VertexId) -> Vec<VertexId> {
        let Some(source) = self.source else {
            return Vec::new();
        };
        if !self.distance(target).is_some_and(f64::is_finite) {
            return Vec::new();
        }

        let mut path = vec![target];
        let mut current = target;
        while let Some(&prev) = self.predecessors.get(&current) {
            if path.len() > self.distances.len() {
                return Vec::new();
            }
            path.push(prev);
            current = prev;
        }
        path.reverse();

        if path.first() == Some(&source) {
            path
        } else {
            Vec::new()
        }
    }
}

impl AlgorithmResult for ShortestPaths {
    fn processed(&self) -> usize {
        self.reachable_count()
    }
}

/// Bellman-Ford output
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BellmanFordResult {
    /// Distances and predecessors after `|V| - 1` passes
    pub paths: ShortestPaths,
    /// An edge could still be relaxed after the final pass; distances of
    /// vertices on or behind the cycle are meaningless
    pub has_negative_cycle: bool,
}

impl AlgorithmResult for BellmanFordResult {
    fn processed(&self) -> usize {
        self.paths.reachable_count()
    }
}

/// Dijkstra's algorithm as an [`Algorithm`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl Algorithm for Dijkstra {
    type Output = ShortestPaths;

    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn execute_with(
        &self,
        graph: &Graph,
        start: Option<VertexId>,
        ctx: &RunContext,
    ) -> Result<ShortestPaths> {
        let Some(source) = resolve_start(graph, start)? else {
            return Ok(ShortestPaths::default());
        };
        if let Some(edge) = graph.edges().iter().find(|e| e.weight < 0.0) {
            return Err(GraphError::NegativeWeight {
                algorithm: self.name(),
                from: edge.source,
                to: edge.target,
                weight: edge.weight,
            });
        }

        let mut scratch = Scratch::for_graph(graph);
        let mut heap = MinQueue::new();

        scratch.distance[source] = 0.0;
        heap.push(0.0, source);

        while let Some((cost, node)) = heap.pop() {
            ctx.check("dijkstra")?;

            // Stale entry: node was finalized through a cheaper push
            if scratch.visited[node] {
                continue;
            }
            scratch.visited[node] = true;

            for &(neighbor, weight) in graph.adjacent(node) {
                let next_cost = cost + weight;
                if next_cost < scratch.distance[neighbor] {
                    scratch.distance[neighbor] = next_cost;
                    scratch.predecessor[neighbor] = Some(node);
                    heap.push(next_cost, neighbor);
                }
            }
        }

        Ok(ShortestPaths::from_scratch(graph, source, &scratch))
    }
}

/// Bellman-Ford as an [`Algorithm`]
#[derive(Debug, Clone, Copy, Default)]
pub struct BellmanFord;

impl Algorithm for BellmanFord {
    type Output = BellmanFordResult;

    fn name(&self) -> &'static str {
        "bellman_ford"
    }

    fn execute_with(
        &self,
        graph: &Graph,
        start: Option<VertexId>,
        ctx: &RunContext,
    ) -> Result<BellmanFordResult> {
        let Some(source) = resolve_start(graph, start)? else {
            return Ok(BellmanFordResult::default());
        };

        let n = graph.vertex_count();
        let mut scratch = Scratch::for_graph(graph);
        scratch.distance[source] = 0.0;

        for _ in 1..n {
            ctx.check("bellman_ford")?;
            relax_all(graph, &mut scratch);
        }

        let has_negative_cycle = relax_all(graph, &mut scratch);
        if has_negative_cycle {
            debug!(source = %graph.vertex_at(source), "negative cycle reachable from source");
        }

        Ok(BellmanFordResult {
            paths: ShortestPaths::from_scratch(graph, source, &scratch),
            has_negative_cycle,
        })
    }
}

/// One relaxation pass over every adjacency entry; `true` if anything changed
fn relax_all(graph: &Graph, scratch: &mut Scratch) -> bool {
    let mut updated = false;
    for u in 0..graph.vertex_count() {
        let dist_u = scratch.distance[u];
        if dist_u.is_infinite() {
            continue;
        }
        for &(v, weight) in graph.adjacent(u) {
            if dist_u + weight < scratch.distance[v] {
                scratch.distance[v] = dist_u + weight;
                scratch.predecessor[v] = Some(u);
                updated = true;
            }
        }
    }
    updated
}

/// Compute single-source shortest paths using Dijkstra's algorithm
///
/// # Errors
///
/// Returns `VertexNotFound` if `source` is absent and `NegativeWeight` if
/// any edge weight is below zero
///
/// # Complexity
///
/// O((V + E) log V) using a binary heap
pub fn dijkstra(graph: &Graph, source: VertexId) -> Result<ShortestPaths> {
    Dijkstra.execute(graph, Some(source))
}

/// Compute single-source shortest paths using Bellman-Ford
///
/// Runs exactly `|V| - 1` relaxation passes and one detection pass.
///
/// # Errors
///
/// Returns `VertexNotFound` if `source` is absent
///
/// # Example
///
/// ```
/// use trueno_graph_algos::{bellman_ford, Graph, GraphKind, VertexId};
///
/// let graph = Graph::from_edge_list(GraphKind::Directed, &[
///     (VertexId(0), VertexId(1), 4.0),
///     (VertexId(0), VertexId(2), 5.0),
///     (VertexId(2), VertexId(1), -3.0),
/// ]);
///
/// let result = bellman_ford(&graph, VertexId(0)).unwrap();
/// assert!(!result.has_negative_cycle);
/// assert_eq!(result.paths.distance(VertexId(1)), Some(2.0));
/// ```
pub fn bellman_ford(graph: &Graph, source: VertexId) -> Result<BellmanFordResult> {
    BellmanFord.execute(graph, Some(source))
}
