//! Minimum spanning trees: Kruskal and Prim
//!
//! Both require an undirected graph. On a disconnected graph Kruskal returns
//! a spanning forest and Prim returns the tree of the start vertex's
//! component; in both cases fewer than `|V| - 1` edges come back.
//!
//! # Example
//!
//! ```
//! use trueno_graph_algos::{kruskal, prim, Graph, GraphKind, VertexId};
//!
//! let graph = Graph::from_edge_list(GraphKind::Undirected, &[
//!     (VertexId(0), VertexId(1), 1.0),
//!     (VertexId(1), VertexId(2), 2.0),
//!     (VertexId(0), VertexId(2), 3.0),
//! ]);
//!
//! let k = kruskal(&graph).unwrap();
//! let p = prim(&graph, None).unwrap();
//! assert_eq!(k.total_weight, 3.0);
//! assert_eq!(p.total_weight, 3.0);
//! assert!(k.is_spanning_tree(graph.vertex_count()));
//! ```

use super::cancel::RunContext;
use super::contract::{
    check_start, require_kind, resolve_start, Algorithm, AlgorithmResult, Scratch,
};
use super::queue::MinQueue;
use crate::error::Result;
use crate::storage::{Edge, Graph, GraphKind, VertexId};

/// Disjoint-set forest with union by rank and path compression
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    /// `size` singleton sets `{0} .. {size - 1}`
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    /// Representative of the set containing `x`
    ///
    /// # Panics
    ///
    /// Panics if `x` is out of range
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Path compression
        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merge the sets of `x` and `y`; `false` if they were already one set
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let x_root = self.find(x);
        let y_root = self.find(y);
        if x_root == y_root {
            return false;
        }

        match self.rank[x_root].cmp(&self.rank[y_root]) {
            std::cmp::Ordering::Less => self.parent[x_root] = y_root,
            std::cmp::Ordering::Greater => self.parent[y_root] = x_root,
            std::cmp::Ordering::Equal => {
                self.parent[y_root] = x_root;
                self.rank[x_root] += 1;
            }
        }
        true
    }
}

/// Selected spanning edges
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MstResult {
    /// Edges in the order they were accepted
    pub edges: Vec<Edge>,
    /// Sum of accepted edge weights
    pub total_weight: f64,
    /// Edges examined (Kruskal) or vertices added (Prim)
    pub processed: usize,
}

impl MstResult {
    /// Whether the edges span `vertex_count` vertices as a single tree
    #[must_use]
    pub fn is_spanning_tree(&self, vertex_count: usize) -> bool {
        self.edges.len() + 1 == vertex_count.max(1)
    }
}

impl AlgorithmResult for MstResult {
    fn processed(&self) -> usize {
        self.processed
    }
}

/// Kruskal's algorithm as an [`Algorithm`]; the start vertex is ignored
#[derive(Debug, Clone, Copy, Default)]
pub struct Kruskal;

impl Algorithm for Kruskal {
    type Output = MstResult;

    fn name(&self) -> &'static str {
        "kruskal"
    }

    fn execute_with(
        &self,
        graph: &Graph,
        start: Option<VertexId>,
        ctx: &RunContext,
    ) -> Result<MstResult> {
        require_kind(graph, GraphKind::Undirected, self.name())?;
        check_start(graph, start)?;

        // Stable sort: equal weights keep insertion order
        let mut sorted: Vec<&Edge> = graph.edges().iter().collect();
        sorted.sort_by(|a, b| a.weight.total_cmp(&b.weight));

        let target_edges = graph.vertex_count().saturating_sub(1);
        let mut sets = UnionFind::new(graph.vertex_count());
        let mut result = MstResult::default();

        for edge in sorted {
            ctx.check("kruskal")?;
            result.processed += 1;
            if sets.union(graph.slot(edge.source)?, graph.slot(edge.target)?) {
                result.total_weight += edge.weight;
                result.edges.push(*edge);
                if result.edges.len() == target_edges {
                    break;
                }
            }
        }

        Ok(result)
    }
}

/// Prim's algorithm as an [`Algorithm`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Prim;

impl Algorithm for Prim {
    type Output = MstResult;

    fn name(&self) -> &'static str {
        "prim"
    }

    fn execute_with(
        &self,
        graph: &Graph,
        start: Option<VertexId>,
        ctx: &RunContext,
    ) -> Result<MstResult> {
        require_kind(graph, GraphKind::Undirected, self.name())?;
        let Some(start) = resolve_start(graph, start)? else {
            return Ok(MstResult::default());
        };

        let n = graph.vertex_count();
        let mut scratch = Scratch::for_graph(graph);
        let mut heap = MinQueue::new();
        let mut result = MstResult::default();

        // Zero-weight self-loop seeds the start vertex
        heap.push(0.0, (start, start));

        while let Some((weight, (source, target))) = heap.pop() {
            ctx.check("prim")?;
            if scratch.visited[target] {
                continue;
            }
            scratch.visited[target] = true;
            result.processed += 1;

            if source != target {
                result.total_weight += weight;
                result
                    .edges
                    .push(Edge::new(graph.vertex_at(source), graph.vertex_at(target), weight));
            }
            if result.processed == n {
                break;
            }

            for &(neighbor, w) in graph.adjacent(target) {
                if !scratch.visited[neighbor] {
                    heap.push(w, (target, neighbor));
                }
            }
        }

        Ok(result)
    }
}

/// Minimum spanning forest by Kruskal's algorithm
///
/// # Errors
///
/// Returns `IncompatibleGraphKind` for a directed graph
pub fn kruskal(graph: &Graph) -> Result<MstResult> {
    Kruskal.execute(graph, None)
}

/// Minimum spanning tree of `start`'s component by Prim's algorithm
///
/// # Errors
///
/// Returns `IncompatibleGraphKind` for a directed graph and
/// `VertexNotFound` for an unknown start vertex
pub fn prim(graph: &Graph, start: Option<VertexId>) -> Result<MstResult> {
    Prim.execute(graph, start)
}
