//! Run any algorithm by kind
//!
//! The benchmark harness and other callers that pick algorithms at runtime
//! go through [`run`], which returns the result wrapped in
//! [`AlgorithmOutput`].

use super::cancel::RunContext;
use super::contract::{Algorithm, AlgorithmResult};
use super::floyd_warshall::{FloydWarshall, FloydWarshallResult};
use super::mst::{Kruskal, MstResult, Prim};
use super::shortest_path::{BellmanFord, BellmanFordResult, Dijkstra, ShortestPaths};
use super::topo::{TopologicalOrder, TopologicalSort};
use super::traversal::{Bfs, BfsResult, Dfs, DfsResult};
use crate::error::Result;
use crate::storage::{Graph, GraphKind, VertexId};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Every algorithm the crate provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    /// Breadth-first search
    Bfs,
    /// Depth-first search
    Dfs,
    /// Dijkstra single-source shortest paths
    Dijkstra,
    /// Bellman-Ford single-source shortest paths
    BellmanFord,
    /// Floyd-Warshall all-pairs shortest paths
    FloydWarshall,
    /// Kruskal minimum spanning forest
    Kruskal,
    /// Prim minimum spanning tree
    Prim,
    /// Kahn topological sort
    TopologicalSort,
}

impl AlgorithmKind {
    /// All kinds in a fixed order
    pub const ALL: [Self; 8] = [
        Self::Bfs,
        Self::Dfs,
        Self::Dijkstra,
        Self::BellmanFord,
        Self::FloydWarshall,
        Self::Kruskal,
        Self::Prim,
        Self::TopologicalSort,
    ];

    /// Name used in logs and reports
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
            Self::BellmanFord => "bellman_ford",
            Self::FloydWarshall => "floyd_warshall",
            Self::Kruskal => "kruskal",
            Self::Prim => "prim",
            Self::TopologicalSort => "topological_sort",
        }
    }

    /// Whether the algorithm accepts graphs of `kind`
    #[must_use]
    pub const fn supports(self, kind: GraphKind) -> bool {
        match self {
            Self::Kruskal | Self::Prim => matches!(kind, GraphKind::Undirected),
            Self::TopologicalSort => matches!(kind, GraphKind::Directed),
            _ => true,
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of [`run`], one variant per algorithm
#[derive(Debug, Clone, PartialEq)]
pub enum AlgorithmOutput {
    /// Breadth-first search
    Bfs(BfsResult),
    /// Depth-first search
    Dfs(DfsResult),
    /// Dijkstra
    Dijkstra(ShortestPaths),
    /// Bellman-Ford
    BellmanFord(BellmanFordResult),
    /// Floyd-Warshall
    FloydWarshall(FloydWarshallResult),
    /// Kruskal
    Kruskal(MstResult),
    /// Prim
    Prim(MstResult),
    /// Topological sort
    TopologicalSort(TopologicalOrder),
}

impl AlgorithmResult for AlgorithmOutput {
    fn processed(&self) -> usize {
        match self {
            Self::Bfs(r) => r.processed(),
            Self::Dfs(r) => r.processed(),
            Self::Dijkstra(r) => r.processed(),
            Self::BellmanFord(r) => r.processed(),
            Self::FloydWarshall(r) => r.processed(),
            Self::Kruskal(r) | Self::Prim(r) => r.processed(),
            Self::TopologicalSort(r) => r.processed(),
        }
    }
}

/// Run the algorithm named by `kind`
///
/// # Errors
///
/// Propagates the algorithm's own errors (unknown start vertex, wrong graph
/// kind, negative weight for Dijkstra, cancellation)
///
/// # Example
///
/// ```
/// use trueno_graph_algos::{run, AlgorithmKind, AlgorithmResult, Graph, RunContext, VertexId};
///
/// let mut graph = Graph::undirected();
/// graph.add_edge(VertexId(0), VertexId(1), 2.0);
///
/// let output = run(&graph, AlgorithmKind::Prim, None, &RunContext::unbounded()).unwrap();
/// assert_eq!(output.processed(), 2);
/// ```
pub fn run(
    graph: &Graph,
    kind: AlgorithmKind,
    start: Option<VertexId>,
    ctx: &RunContext,
) -> Result<AlgorithmOutput> {
    let output = match kind {
        AlgorithmKind::Bfs => AlgorithmOutput::Bfs(Bfs.execute_with(graph, start, ctx)?),
        AlgorithmKind::Dfs => AlgorithmOutput::Dfs(Dfs.execute_with(graph, start, ctx)?),
        AlgorithmKind::Dijkstra => {
            AlgorithmOutput::Dijkstra(Dijkstra.execute_with(graph, start, ctx)?)
        }
        AlgorithmKind::BellmanFord => {
            AlgorithmOutput::BellmanFord(BellmanFord.execute_with(graph, start, ctx)?)
        }
        AlgorithmKind::FloydWarshall => {
            AlgorithmOutput::FloydWarshall(FloydWarshall.execute_with(graph, start, ctx)?)
        }
        AlgorithmKind::Kruskal => {
            AlgorithmOutput::Kruskal(Kruskal.execute_with(graph, start, ctx)?)
        }
        AlgorithmKind::Prim => AlgorithmOutput::Prim(Prim.execute_with(graph, start, ctx)?),
        AlgorithmKind::TopologicalSort => {
            AlgorithmOutput::TopologicalSort(TopologicalSort.execute_with(graph, start, ctx)?)
        }
    };

    debug!(
        algorithm = kind.name(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        processed = output.processed(),
        "algorithm finished"
    );
    Ok(output)
}
