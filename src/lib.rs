//! trueno-graph-algos: classic graph algorithms over an arena-indexed graph
//!
//! # Overview
//!
//! A directed or undirected weighted [`Graph`] plus the textbook algorithms
//! that run on it: BFS, DFS, Dijkstra, Bellman-Ford, Floyd-Warshall,
//! Kruskal, Prim and Kahn's topological sort. A benchmark harness times them
//! on random Erdős–Rényi graphs.
//!
//! # Quick Start
//!
//! ```
//! use trueno_graph_algos::{dijkstra, kruskal, Graph, VertexId};
//!
//! let mut graph = Graph::undirected();
//! graph.add_edge(VertexId(0), VertexId(1), 4.0);
//! graph.add_edge(VertexId(0), VertexId(2), 1.0);
//! graph.add_edge(VertexId(2), VertexId(1), 2.0);
//!
//! let paths = dijkstra(&graph, VertexId(0)).unwrap();
//! assert_eq!(paths.distance(VertexId(1)), Some(3.0));
//! assert_eq!(
//!     paths.shortest_path(VertexId(1)),
//!     vec![VertexId(0), VertexId(2), VertexId(1)]
//! );
//!
//! let tree = kruskal(&graph).unwrap();
//! assert_eq!(tree.total_weight, 3.0);
//! ```
//!
//! # Architecture
//!
//! - **Storage**: adjacency lists indexed by dense slots, with an
//!   external [`VertexId`] mapped to its slot; a cached dense matrix view
//! - **Algorithms**: one unit struct per algorithm implementing
//!   [`Algorithm`]; each run owns its scratch arrays, so the graph is
//!   only borrowed immutably
//! - **Cancellation**: runs poll a [`RunContext`] carrying an optional
//!   [`CancellationToken`] and deadline
//! - **Benchmarks**: [`bench`] generates graphs and aggregates timings

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod bench;
pub mod error;
pub mod storage;

// Re-export core types
pub use algorithms::{
    bellman_ford, bfs, dfs, dijkstra, floyd_warshall, is_cyclic, kruskal, prim, run, toposort,
    Algorithm, AlgorithmKind, AlgorithmOutput, AlgorithmResult, BellmanFord, BellmanFordResult,
    Bfs, BfsResult, CancellationToken, Dfs, DfsResult, Dijkstra, EdgeClass, FloydWarshall,
    FloydWarshallResult, Kruskal, MstResult, Prim, RunContext, ShortestPaths, TopologicalOrder,
    TopologicalSort, UnionFind,
};
pub use error::{GraphError, Result};
pub use storage::{AdjacencyMatrix, Edge, Graph, GraphKind, VertexId};
