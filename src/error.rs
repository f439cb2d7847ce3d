//! Error types shared by the graph model and the algorithms
//!
//! Only structural problems are errors. Negative cycles, cycles in a
//! topological sort, unreachable vertices and spanning forests are reported
//! as data on the algorithm results.

use crate::storage::{GraphKind, VertexId};
use thiserror::Error;

/// Errors raised by graph operations and algorithm runs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// The referenced vertex is not part of the graph
    #[error("Vertex {0} not found")]
    VertexNotFound(VertexId),

    /// The referenced edge is not part of the graph
    #[error("Edge {from} -> {to} not found")]
    EdgeNotFound {
        /// Edge source
        from: VertexId,
        /// Edge target
        to: VertexId,
    },

    /// The algorithm does not accept this kind of graph
    #[error("{algorithm} requires a graph of kind {expected}, got {actual}")]
    IncompatibleGraphKind {
        /// Algorithm name
        algorithm: &'static str,
        /// Kind the algorithm requires
        expected: GraphKind,
        /// Kind of the supplied graph
        actual: GraphKind,
    },

    /// An edge weight violates the algorithm's non-negativity precondition
    #[error("{algorithm} requires non-negative weights, edge {from} -> {to} has weight {weight}")]
    NegativeWeight {
        /// Algorithm name
        algorithm: &'static str,
        /// Edge source
        from: VertexId,
        /// Edge target
        to: VertexId,
        /// Offending weight
        weight: f64,
    },

    /// The run was cancelled through its token
    #[error("{algorithm} was cancelled")]
    Cancelled {
        /// Algorithm name
        algorithm: &'static str,
    },

    /// The run did not finish before its deadline
    #[error("{algorithm} exceeded its deadline")]
    DeadlineExceeded {
        /// Algorithm name
        algorithm: &'static str,
    },
}

impl GraphError {
    /// Whether the error came from a cancellation token or deadline
    #[must_use]
    pub const fn is_interrupted(&self) -> bool {
        matches!(self, Self::Cancelled { .. } | Self::DeadlineExceeded { .. })
    }
}

/// Result alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
