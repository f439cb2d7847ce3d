//! Graph algorithms (traversal, shortest paths, spanning trees, topological)
//!
//! Every algorithm is a unit struct implementing [`Algorithm`], with a free
//! function wrapper for the common case. [`run`] picks one by
//! [`AlgorithmKind`] at runtime.

pub mod cancel;
pub mod contract;
pub mod dispatch;
pub mod floyd_warshall;
pub mod mst;
mod queue;
pub mod shortest_path;
pub mod topo;
pub mod traversal;

pub use cancel::{CancellationToken, RunContext};
pub use contract::{Algorithm, AlgorithmResult};
pub use dispatch::{run, AlgorithmKind, AlgorithmOutput};
pub use floyd_warshall::{floyd_warshall, FloydWarshall, FloydWarshallResult};
pub use mst::{kruskal, prim, Kruskal, MstResult, Prim, UnionFind};
pub use shortest_path::{
    bellman_ford, dijkstra, BellmanFord, BellmanFordResult, Dijkstra, ShortestPaths,
};
pub use topo::{toposort, TopologicalOrder, TopologicalSort};
pub use traversal::{bfs, dfs, is_cyclic, Bfs, BfsResult, Dfs, DfsResult, EdgeClass};
