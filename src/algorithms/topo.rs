//! Topological ordering (Kahn's algorithm)
//!
//! Repeatedly removes zero in-degree vertices. If some vertices are never
//! released the graph has a cycle; the partial order is still returned
//! because it shows where the cycle blocks progress.
//!
//! # Example
//!
//! ```
//! use trueno_graph_algos::{toposort, Graph, GraphKind, VertexId};
//!
//! // Build a DAG: 0 → 1 → 2
//! let graph = Graph::from_edge_list(GraphKind::Directed, &[
//!     (VertexId(0), VertexId(1), 1.0),
//!     (VertexId(1), VertexId(2), 1.0),
//! ]);
//!
//! let topo = toposort(&graph).unwrap();
//! assert!(!topo.has_cycle);
//! assert_eq!(topo.order, vec![VertexId(0), VertexId(1), VertexId(2)]);
//! ```

use super::cancel::RunContext;
use super::contract::{check_start, require_kind, Algorithm, AlgorithmResult};
use crate::error::Result;
use crate::storage::{Graph, GraphKind, VertexId};
use std::collections::VecDeque;
use tracing::debug;

/// Kahn's algorithm output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopologicalOrder {
    /// Vertices released so far; the full order when `has_cycle` is false
    pub order: Vec<VertexId>,
    /// Fewer vertices were released than the graph holds
    pub has_cycle: bool,
}

impl AlgorithmResult for TopologicalOrder {
    fn processed(&self) -> usize {
        self.order.len()
    }
}

/// Topological sort as an [`Algorithm`]; the start vertex is ignored
#[derive(Debug, Clone, Copy, Default)]
pub struct TopologicalSort;

impl Algorithm for TopologicalSort {
    type Output = TopologicalOrder;

    fn name(&self) -> &'static str {
        "topological_sort"
    }

    fn execute_with(
        &self,
        graph: &Graph,
        start: Option<VertexId>,
        ctx: &RunContext,
    ) -> Result<TopologicalOrder> {
        require_kind(graph, GraphKind::Directed, self.name())?;
        check_start(graph, start)?;

        let n = graph.vertex_count();
        let mut in_degree: Vec<usize> = (0..n).map(|slot| graph.incoming(slot).len()).collect();
        let mut queue: VecDeque<usize> = (0..n).filter(|&slot| in_degree[slot] == 0).collect();
        let mut order = Vec::with_capacity(n);

        while let Some(node) = queue.pop_front() {
            ctx.check("topological_sort")?;
            order.push(graph.vertex_at(node));

            for &(neighbor, _) in graph.adjacent(node) {
                in_degree[neighbor] -= 1;
                if in_degree[neighbor] == 0 {
                    queue.push_back(neighbor);
                }
            }
        }

        let has_cycle = order.len() < n;
        if has_cycle {
            debug!(released = order.len(), vertices = n, "cycle blocks topological order");
        }

        Ok(TopologicalOrder { order, has_cycle })
    }
}

/// Compute topological ordering of a directed graph
///
/// For every edge `u -> v`, `u` appears before `v` whenever `has_cycle` is
/// false. Ties are released in insertion order.
///
/// # Errors
///
/// Returns `IncompatibleGraphKind` for an undirected graph
pub fn toposort(graph: &Graph) -> Result<TopologicalOrder> {
    TopologicalSort.execute(graph, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    fn v(id: u32) -> VertexId {
        VertexId(id)
    }

    fn directed(edges: &[(u32, u32)]) -> Graph {
        let edges: Vec<_> = edges.iter().map(|&(s, t)| (v(s), v(t), 1.0)).collect();
        Graph::from_edge_list(GraphKind::Directed, &edges)
    }

    #[test]
    fn test_empty_graph_toposort() {
        let topo = toposort(&Graph::directed()).unwrap();
        assert!(topo.order.is_empty());
        assert!(!topo.has_cycle);
    }

    #[test]
    fn test_toposort_simple_chain() {
        let topo = toposort(&directed(&[(0, 1), (1, 2)])).unwrap();
        assert_eq!(topo.order, vec![v(0), v(1), v(2)]);
    }

    #[test]
    fn test_toposort_diamond() {
        // Diamond: 0 → 1 → 3, 0 → 2 → 3
        let topo = toposort(&directed(&[(0, 1), (0, 2), (1, 3), (2, 3)])).unwrap();
        assert!(!topo.has_cycle);

        let pos = |n: u32| topo.order.iter().position(|&x| x == v(n)).unwrap();
        assert!(pos(0) < pos(1), "0 must come before 1");
        assert!(pos(0) < pos(2), "0 must come before 2");
        assert!(pos(1) < pos(3), "1 must come before 3");
        assert!(pos(2) < pos(3), "2 must come before 3");
    }

    #[test]
    fn test_toposort_reports_cycle() {
        // 3 → 0 → 1 → 2 → 0 (cycle), 3 released before the cycle blocks
        let topo = toposort(&directed(&[(3, 0), (0, 1), (1, 2), (2, 0)])).unwrap();
        assert!(topo.has_cycle);
        assert_eq!(topo.order, vec![v(3)]);
    }

    #[test]
    fn test_self_loop_is_cycle() {
        let topo = toposort(&directed(&[(0, 0)])).unwrap();
        assert!(topo.has_cycle);
        assert!(topo.order.is_empty());
    }

    #[test]
    fn test_disconnected_components() {
        let mut graph = directed(&[(0, 1), (2, 3)]);
        graph.add_vertex(v(4));

        let topo = toposort(&graph).unwrap();
        assert_eq!(topo.order, vec![v(0), v(2), v(4), v(1), v(3)]);
    }

    #[test]
    fn test_undirected_rejected() {
        let graph = Graph::undirected();
        assert_eq!(
            toposort(&graph),
            Err(GraphError::IncompatibleGraphKind {
                algorithm: "topological_sort",
                expected: GraphKind::Directed,
                actual: GraphKind::Undirected,
            })
        );
    }

    #[test]
    fn test_unknown_start_rejected() {
        let graph = directed(&[(0, 1), (1, 2)]);
        assert_eq!(
            TopologicalSort.execute(&graph, Some(v(9))),
            Err(GraphError::VertexNotFound(v(9)))
        );
        assert_eq!(TopologicalSort.execute(&graph, Some(v(2))).unwrap().order.len(), 3);
    }
}
