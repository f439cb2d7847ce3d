//! Common shape of every algorithm run
//!
//! An algorithm takes a graph plus an optional start vertex and returns its
//! own result type. Per-vertex bookkeeping (visited flags, tentative
//! distances, predecessors, timestamps, colors) lives in a [`Scratch`]
//! allocated fresh for each run and indexed by graph slot. Runs never write
//! to the graph, so repeated or concurrent runs cannot observe each other's
//! state.

use super::cancel::RunContext;
use crate::error::{GraphError, Result};
use crate::storage::{Graph, GraphKind, VertexId};

/// Tri-state visit marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VisitState {
    /// Not yet seen
    Unvisited,
    /// Discovered, descendants still being explored
    InProgress,
    /// Fully explored
    Done,
}

/// Per-run vertex state, one entry per graph slot
#[derive(Debug, Clone)]
pub(crate) struct Scratch {
    pub(crate) visited: Vec<bool>,
    pub(crate) distance: Vec<f64>,
    pub(crate) predecessor: Vec<Option<usize>>,
    pub(crate) discovery: Vec<u64>,
    pub(crate) finish: Vec<u64>,
    pub(crate) state: Vec<VisitState>,
}

impl Scratch {
    pub(crate) fn for_graph(graph: &Graph) -> Self {
        let n = graph.vertex_count();
        Self {
            visited: vec![false; n],
            distance: vec![f64::INFINITY; n],
            predecessor: vec![None; n],
            discovery: vec![0; n],
            finish: vec![0; n],
            state: vec![VisitState::Unvisited; n],
        }
    }
}

/// Result types report how much work a run did
pub trait AlgorithmResult {
    /// Vertices visited, finalized or ordered by the run
    fn processed(&self) -> usize;
}

/// Uniform entry point implemented by every algorithm
///
/// # Example
///
/// ```
/// use trueno_graph_algos::{Algorithm, AlgorithmResult, Bfs, Graph, VertexId};
///
/// let mut graph = Graph::undirected();
/// graph.add_edge(VertexId(0), VertexId(1), 1.0);
/// graph.add_edge(VertexId(1), VertexId(2), 1.0);
///
/// let result = Bfs.execute(&graph, Some(VertexId(0))).unwrap();
/// assert_eq!(result.processed(), 3);
/// ```
pub trait Algorithm {
    /// Algorithm-specific result
    type Output: AlgorithmResult;

    /// Stable name used in logs and benchmark reports
    fn name(&self) -> &'static str;

    /// Run with limits from `ctx`
    ///
    /// # Errors
    ///
    /// Returns `VertexNotFound` for an unknown start vertex,
    /// `IncompatibleGraphKind` when the graph kind is not supported, and
    /// `Cancelled`/`DeadlineExceeded` when `ctx` stops the run
    fn execute_with(
        &self,
        graph: &Graph,
        start: Option<VertexId>,
        ctx: &RunContext,
    ) -> Result<Self::Output>;

    /// Run to completion
    ///
    /// # Errors
    ///
    /// See [`Algorithm::execute_with`]
    fn execute(&self, graph: &Graph, start: Option<VertexId>) -> Result<Self::Output> {
        self.execute_with(graph, start, &RunContext::unbounded())
    }
}

/// Slot of the start vertex, defaulting to the earliest-inserted vertex
///
/// `Ok(None)` only for an empty graph with no explicit start.
pub(crate) fn resolve_start(graph: &Graph, start: Option<VertexId>) -> Result<Option<usize>> {
    match start {
        Some(id) => graph.slot(id).map(Some),
        None if graph.is_empty() => Ok(None),
        None => Ok(Some(0)),
    }
}

/// Rejects an explicit start that is not in the graph
///
/// For algorithms that cover the whole graph and never read the start.
pub(crate) fn check_start(graph: &Graph, start: Option<VertexId>) -> Result<()> {
    if let Some(id) = start {
        graph.slot(id)?;
    }
    Ok(())
}

pub(crate) fn require_kind(
    graph: &Graph,
    expected: GraphKind,
    algorithm: &'static str,
) -> Result<()> {
    if graph.kind() == expected {
        Ok(())
    } else {
        Err(GraphError::IncompatibleGraphKind {
            algorithm,
            expected,
            actual: graph.kind(),
        })
    }
}
