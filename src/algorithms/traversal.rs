//! Graph traversal algorithms (BFS, DFS, cycle detection)
//!
//! Based on the CLRS formulations: BFS with hop distances and a predecessor
//! tree, DFS with a global clock stamping discovery and finish times.
//!
//! # Example
//!
//! ```
//! use trueno_graph_algos::{bfs, dfs, Graph, VertexId};
//!
//! let mut graph = Graph::directed();
//! graph.add_edge(VertexId(0), VertexId(1), 1.0);
//! graph.add_edge(VertexId(1), VertexId(2), 1.0);
//! graph.add_vertex(VertexId(3));
//!
//! let result = bfs(&graph, VertexId(0)).unwrap();
//! assert_eq!(result.distance(VertexId(2)), Some(2));
//! assert_eq!(result.distance(VertexId(3)), None);
//!
//! // DFS restarts from unvisited vertices, so 3 is covered too
//! let forest = dfs(&graph, Some(VertexId(0))).unwrap();
//! assert_eq!(forest.order.len(), 4);
//! assert_eq!(forest.trees, 2);
//! ```

use super::cancel::RunContext;
use super::contract::{resolve_start, Algorithm, AlgorithmResult, Scratch, VisitState};
use crate::error::Result;
use crate::storage::{Graph, VertexId};
use std::collections::{HashMap, VecDeque};

/// Breadth-first search result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BfsResult {
    /// Start vertex (`None` only for an empty graph)
    pub source: Option<VertexId>,
    /// Vertices in dequeue order
    pub order: Vec<VertexId>,
    /// Edge count from the source, reached vertices only
    pub distances: HashMap<VertexId, usize>,
    /// BFS tree parent, reached vertices other than the source
    pub predecessors: HashMap<VertexId, VertexId>,
}

impl BfsResult {
    /// Hop distance from the source, `None` if unreachable
    #[must_use]
    pub fn distance(&self, target: VertexId) -> Option<usize> {
        self.distances.get(&target).copied()
    }

    /// Fewest-edges path from the source, empty if unreachable
    #[must_use]
    pub fn path_to(&self, target: VertexId) -> Vec<VertexId> {
        if !self.distances.contains_key(&target) {
            return Vec::new();
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(&prev) = self.predecessors.get(&current) {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        path
    }
}

impl AlgorithmResult for BfsResult {
    fn processed(&self) -> usize {
        self.order.len()
    }
}

/// DFS edge classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeClass {
    /// Edge to a newly discovered vertex
    Tree,
    /// Edge to an ancestor still in progress
    Back,
    /// Edge to an already finished descendant (directed only)
    Forward,
    /// Any other edge to a finished vertex (directed only)
    Cross,
}

/// Depth-first search forest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DfsResult {
    /// Vertices in discovery order
    pub order: Vec<VertexId>,
    /// Clock value when each vertex was entered (starts at 1)
    pub discovery: HashMap<VertexId, u64>,
    /// Clock value when each vertex was left
    pub finish: HashMap<VertexId, u64>,
    /// DFS tree parent; roots have none
    pub predecessors: HashMap<VertexId, VertexId>,
    /// Every explored edge with its class
    pub edge_classes: Vec<(VertexId, VertexId, EdgeClass)>,
    /// Number of trees in the forest
    pub trees: usize,
}

impl DfsResult {
    /// Whether any back edge was found (the graph has a cycle)
    #[must_use]
    pub fn has_back_edge(&self) -> bool {
        self.edge_classes
            .iter()
            .any(|&(_, _, class)| class == EdgeClass::Back)
    }
}

impl AlgorithmResult for DfsResult {
    fn processed(&self) -> usize {
        self.order.len()
    }
}

/// Breadth-first search as an [`Algorithm`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Bfs;

impl Algorithm for Bfs {
    type Output = BfsResult;

    fn name(&self) -> &'static str {
        "bfs"
    }

    fn execute_with(
        &self,
        graph: &Graph,
        start: Option<VertexId>,
        ctx: &RunContext,
    ) -> Result<BfsResult> {
        match resolve_start(graph, start)? {
            Some(source) => bfs_from(graph, source, ctx),
            None => Ok(BfsResult::default()),
        }
    }
}

/// Depth-first search as an [`Algorithm`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Dfs;

impl Algorithm for Dfs {
    type Output = DfsResult;

    fn name(&self) -> &'static str {
        "dfs"
    }

    fn execute_with(
        &self,
        graph: &Graph,
        start: Option<VertexId>,
        ctx: &RunContext,
    ) -> Result<DfsResult> {
        let first = resolve_start(graph, start)?;
        dfs_forest(graph, first, ctx)
    }
}

/// Breadth-First Search from source vertex
///
/// Edge weights are ignored; distances count edges.
///
/// # Errors
///
/// Returns `VertexNotFound` if `source` is not in the graph
pub fn bfs(graph: &Graph, source: VertexId) -> Result<BfsResult> {
    Bfs.execute(graph, Some(source))
}

/// Depth-First Search covering every vertex
///
/// Starts at `start` (or the earliest-inserted vertex), then restarts from
/// each still-unvisited vertex in insertion order.
///
/// # Errors
///
/// Returns `VertexNotFound` if `start` is not in the graph
pub fn dfs(graph: &Graph, start: Option<VertexId>) -> Result<DfsResult> {
    Dfs.execute(graph, start)
}

/// Check if the graph contains any cycles
///
/// A cycle exists iff DFS finds a back edge. Works for both graph kinds; on
/// an undirected graph the edge back to the DFS parent does not count, but a
/// self-loop does.
///
/// # Example
///
/// ```
/// use trueno_graph_algos::{is_cyclic, Graph, GraphKind, VertexId};
///
/// let dag = Graph::from_edge_list(GraphKind::Directed, &[
///     (VertexId(0), VertexId(1), 1.0),
///     (VertexId(1), VertexId(2), 1.0),
/// ]);
/// assert!(!is_cyclic(&dag));
///
/// let cyclic = Graph::from_edge_list(GraphKind::Directed, &[
///     (VertexId(0), VertexId(1), 1.0),
///     (VertexId(1), VertexId(2), 1.0),
///     (VertexId(2), VertexId(0), 1.0),
/// ]);
/// assert!(is_cyclic(&cyclic));
/// ```
#[must_use]
pub fn is_cyclic(graph: &Graph) -> bool {
    dfs_forest(graph, None, &RunContext::unbounded()).is_ok_and(|forest| forest.has_back_edge())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // hop counts are small integers
fn bfs_from(graph: &Graph, source: usize, ctx: &RunContext) -> Result<BfsResult> {
    let mut scratch = Scratch::for_graph(graph);
    let mut queue = VecDeque::new();
    let mut order = Vec::new();

    scratch.visited[source] = true;
    scratch.distance[source] = 0.0;
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        ctx.check("bfs")?;
        order.push(current);

        for &(neighbor, _) in graph.adjacent(current) {
            if !scratch.visited[neighbor] {
                scratch.visited[neighbor] = true;
                scratch.distance[neighbor] = scratch.distance[current] + 1.0;
                scratch.predecessor[neighbor] = Some(current);
                queue.push_back(neighbor);
            }
        }
    }

    let distances = order
        .iter()
        .map(|&slot| (graph.vertex_at(slot), scratch.distance[slot] as usize))
        .collect();
    let predecessors = order
        .iter()
        .filter_map(|&slot| {
            scratch.predecessor[slot].map(|p| (graph.vertex_at(slot), graph.vertex_at(p)))
        })
        .collect();

    Ok(BfsResult {
        source: Some(graph.vertex_at(source)),
        order: order.into_iter().map(|slot| graph.vertex_at(slot)).collect(),
        distances,
        predecessors,
    })
}

fn dfs_forest(graph: &Graph, first: Option<usize>, ctx: &RunContext) -> Result<DfsResult> {
    let n = graph.vertex_count();
    let directed = graph.is_directed();
    let mut scratch = Scratch::for_graph(graph);
    let mut result = DfsResult::default();
    let mut clock = 0_u64;

    // (vertex, index of the next adjacency entry to explore)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in first.into_iter().chain(0..n) {
        if scratch.state[root] != VisitState::Unvisited {
            continue;
        }
        result.trees += 1;

        clock += 1;
        scratch.discovery[root] = clock;
        scratch.state[root] = VisitState::InProgress;
        result.order.push(graph.vertex_at(root));
        stack.push((root, 0));

        while let Some(top) = stack.last_mut() {
            let (u, next) = *top;
            let Some(&(v, _)) = graph.adjacent(u).get(next) else {
                stack.pop();
                clock += 1;
                scratch.finish[u] = clock;
                scratch.state[u] = VisitState::Done;
                continue;
            };
            top.1 += 1;

            let class = match scratch.state[v] {
                VisitState::Unvisited => EdgeClass::Tree,
                VisitState::InProgress if directed || scratch.predecessor[u] != Some(v) => {
                    EdgeClass::Back
                }
                // undirected: the parent edge, or the mirror of an edge already classified
                VisitState::InProgress | VisitState::Done if !directed => continue,
                VisitState::InProgress | VisitState::Done => {
                    if scratch.discovery[u] < scratch.discovery[v] {
                        EdgeClass::Forward
                    } else {
                        EdgeClass::Cross
                    }
                }
            };
            result
                .edge_classes
                .push((graph.vertex_at(u), graph.vertex_at(v), class));

            if class == EdgeClass::Tree {
                ctx.check("dfs")?;
                clock += 1;
                scratch.discovery[v] = clock;
                scratch.predecessor[v] = Some(u);
                scratch.state[v] = VisitState::InProgress;
                result.order.push(graph.vertex_at(v));
                stack.push((v, 0));
            }
        }
    }

    for slot in 0..n {
        let id = graph.vertex_at(slot);
        result.discovery.insert(id, scratch.discovery[slot]);
        result.finish.insert(id, scratch.finish[slot]);
        if let Some(p) = scratch.predecessor[slot] {
            result.predecessors.insert(id, graph.vertex_at(p));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::storage::GraphKind;

    fn v(id: u32) -> VertexId {
        VertexId(id)
    }

    fn graph(kind: GraphKind, edges: &[(u32, u32)]) -> Graph {
        let edges: Vec<_> = edges.iter().map(|&(s, t)| (v(s), v(t), 1.0)).collect();
        Graph::from_edge_list(kind, &edges)
    }

    #[test]
    fn test_bfs_simple() {
        let g = graph(GraphKind::Directed, &[(0, 1), (1, 2)]);
        let result = bfs(&g, v(0)).unwrap();

        assert_eq!(result.order, vec![v(0), v(1), v(2)]);
        assert_eq!(result.distance(v(0)), Some(0));
        assert_eq!(result.distance(v(2)), Some(2));
        assert_eq!(result.path_to(v(2)), vec![v(0), v(1), v(2)]);
    }

    #[test]
    fn test_bfs_disconnected() {
        let g = graph(GraphKind::Directed, &[(0, 1), (2, 3)]);
        let result = bfs(&g, v(0)).unwrap();

        assert_eq!(result.order.len(), 2);
        assert_eq!(result.distance(v(2)), None);
        assert!(result.path_to(v(3)).is_empty());
    }

    #[test]
    fn test_bfs_ignores_weights() {
        let mut g = Graph::undirected();
        g.add_edge(v(0), v(1), 100.0);
        g.add_edge(v(0), v(2), 1.0);
        g.add_edge(v(2), v(1), 1.0);

        let result = bfs(&g, v(0)).unwrap();
        assert_eq!(result.distance(v(1)), Some(1));
        assert_eq!(result.predecessors.get(&v(1)), Some(&v(0)));
    }

    #[test]
    fn test_bfs_neighbor_insertion_order() {
        let g = graph(GraphKind::Directed, &[(0, 3), (0, 1), (0, 2)]);
        let result = bfs(&g, v(0)).unwrap();
        assert_eq!(result.order, vec![v(0), v(3), v(1), v(2)]);
    }

    #[test]
    fn test_bfs_unknown_source() {
        let g = graph(GraphKind::Directed, &[(0, 1)]);
        assert_eq!(bfs(&g, v(9)), Err(GraphError::VertexNotFound(v(9))));
    }

    #[test]
    fn test_bfs_default_start_and_empty_graph() {
        let g = graph(GraphKind::Undirected, &[(5, 6)]);
        let result = Bfs.execute(&g, None).unwrap();
        assert_eq!(result.source, Some(v(5)));

        let empty = Graph::undirected();
        assert_eq!(Bfs.execute(&empty, None).unwrap(), BfsResult::default());
    }

    #[test]
    fn test_dfs_timestamps_nest() {
        // 0 -> 1 -> 2, 0 -> 3
        let g = graph(GraphKind::Directed, &[(0, 1), (1, 2), (0, 3)]);
        let result = dfs(&g, Some(v(0))).unwrap();

        assert_eq!(result.order, vec![v(0), v(1), v(2), v(3)]);
        assert_eq!(result.discovery[&v(0)], 1);
        assert_eq!(result.discovery[&v(1)], 2);
        assert_eq!(result.discovery[&v(2)], 3);
        assert_eq!(result.finish[&v(2)], 4);
        assert_eq!(result.finish[&v(1)], 5);
        assert_eq!(result.discovery[&v(3)], 6);
        assert_eq!(result.finish[&v(3)], 7);
        assert_eq!(result.finish[&v(0)], 8);
        assert_eq!(result.trees, 1);
    }

    #[test]
    fn test_dfs_covers_disconnected_graph() {
        let g = graph(GraphKind::Directed, &[(0, 1), (2, 3)]);
        let result = dfs(&g, Some(v(2))).unwrap();

        assert_eq!(result.order, vec![v(2), v(3), v(0), v(1)]);
        assert_eq!(result.trees, 2);
        assert!(!result.predecessors.contains_key(&v(0)));
        assert!(!result.predecessors.contains_key(&v(2)));
    }

    #[test]
    fn test_dfs_edge_classes_directed() {
        // 0 -> 1 -> 2 -> 0 (back), 0 -> 2 (forward), 3 -> 1 (cross)
        let g = graph(GraphKind::Directed, &[(0, 1), (1, 2), (2, 0), (0, 2), (3, 1)]);
        let result = dfs(&g, Some(v(0))).unwrap();

        let class_of = |s: u32, t: u32| {
            result
                .edge_classes
                .iter()
                .find(|&&(a, b, _)| a == v(s) && b == v(t))
                .map(|&(_, _, c)| c)
        };
        assert_eq!(class_of(0, 1), Some(EdgeClass::Tree));
        assert_eq!(class_of(1, 2), Some(EdgeClass::Tree));
        assert_eq!(class_of(2, 0), Some(EdgeClass::Back));
        assert_eq!(class_of(0, 2), Some(EdgeClass::Forward));
        assert_eq!(class_of(3, 1), Some(EdgeClass::Cross));
    }

    #[test]
    fn test_dfs_undirected_tree_has_no_back_edges() {
        let g = graph(GraphKind::Undirected, &[(0, 1), (1, 2), (1, 3)]);
        let result = dfs(&g, None).unwrap();

        assert!(!result.has_back_edge());
        assert_eq!(result.edge_classes.len(), 3);
    }

    #[test]
    fn test_dfs_cancelled() {
        use crate::algorithms::cancel::CancellationToken;

        let g = graph(GraphKind::Directed, &[(0, 1), (1, 2)]);
        let token = CancellationToken::new();
        token.cancel();
        let ctx = RunContext::unbounded().with_token(token);

        assert_eq!(
            Dfs.execute_with(&g, None, &ctx),
            Err(GraphError::Cancelled { algorithm: "dfs" })
        );
    }

    #[test]
    fn test_empty_graph_not_cyclic() {
        assert!(!is_cyclic(&Graph::directed()));
    }

    #[test]
    fn test_self_loop_is_cyclic() {
        assert!(is_cyclic(&graph(GraphKind::Directed, &[(0, 0)])));
        assert!(is_cyclic(&graph(GraphKind::Undirected, &[(0, 0)])));
    }

    #[test]
    fn test_simple_cycle() {
        assert!(is_cyclic(&graph(GraphKind::Directed, &[(0, 1), (1, 2), (2, 0)])));
        assert!(is_cyclic(&graph(GraphKind::Undirected, &[(0, 1), (1, 2), (2, 0)])));
    }

    #[test]
    fn test_diamond_dag_not_cyclic() {
        let g = graph(GraphKind::Directed, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        assert!(!is_cyclic(&g));
    }

    #[test]
    fn test_cycle_in_subgraph() {
        let g = graph(GraphKind::Directed, &[(0, 1), (1, 2), (2, 1), (3, 4)]);
        assert!(is_cyclic(&g));
    }
}
