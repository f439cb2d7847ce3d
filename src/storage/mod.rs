//! Graph storage layer
//!
//! Provides the adjacency-list graph model and its derived dense matrix view.

pub mod graph;
pub mod matrix;

pub use graph::{Edge, Graph, GraphKind, VertexId};
pub use matrix::AdjacencyMatrix;
