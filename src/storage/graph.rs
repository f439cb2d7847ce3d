//! Adjacency-list graph model
//!
//! Vertices live in a dense arena: every [`VertexId`] maps to a slot index in
//! insertion order, and adjacency is stored per slot. Algorithms work on slot
//! indices and keep their per-run state in private arrays, so the graph
//! itself is never written during a run.
//!
//! ```text
//! Undirected: add_edge(0, 1, 4.0)
//!
//!   edges:     [Edge { 0 - 1, 4.0 }]        one logical record
//!   adjacency: slot0 -> [(slot1, 4.0)]
//!              slot1 -> [(slot0, 4.0)]      mirrored entry
//! ```

use super::matrix::AdjacencyMatrix;
use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::OnceLock;

/// Vertex identifier supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u32);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether edges have a direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    /// `u -> v` does not imply `v -> u`
    Directed,
    /// Every edge is queryable from both endpoints
    Undirected,
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directed => f.write_str("directed"),
            Self::Undirected => f.write_str("undirected"),
        }
    }
}

/// Logical edge record
///
/// Negative weights are representable; algorithms that cannot handle them
/// check at call time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Source endpoint (first endpoint for undirected graphs)
    pub source: VertexId,
    /// Target endpoint
    pub target: VertexId,
    /// Edge weight
    pub weight: f64,
}

impl Edge {
    /// Create an edge record
    #[must_use]
    pub const fn new(source: VertexId, target: VertexId, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

/// Weighted graph with a fixed [`GraphKind`]
///
/// # Example
///
/// ```
/// use trueno_graph_algos::{Graph, VertexId};
///
/// let mut graph = Graph::undirected();
/// graph.add_edge(VertexId(0), VertexId(1), 4.0);
/// graph.add_edge(VertexId(1), VertexId(2), 1.0);
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_weight(VertexId(1), VertexId(0)), 4.0);
/// assert!(graph.edge_weight(VertexId(0), VertexId(2)).is_infinite());
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    kind: GraphKind,

    /// External id -> arena slot
    slots: HashMap<VertexId, usize>,

    /// Arena: slot -> external id, insertion order
    vertices: Vec<VertexId>,

    /// Outgoing (slot, weight) per slot, insertion order
    adjacency: Vec<Vec<(usize, f64)>>,

    /// Incoming (slot, weight) per slot; only maintained for directed graphs
    reverse: Vec<Vec<(usize, f64)>>,

    /// Logical edges, insertion order
    edges: Vec<Edge>,

    /// Endpoint pair -> position in `edges` (normalized for undirected)
    edge_index: HashMap<(VertexId, VertexId), usize>,

    /// Optional labels for display
    names: HashMap<VertexId, String>,

    /// Dense view, built on demand and dropped on mutation
    matrix: OnceLock<AdjacencyMatrix>,
}

impl Graph {
    /// Create an empty graph of the given kind
    #[must_use]
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            slots: HashMap::new(),
            vertices: Vec::new(),
            adjacency: Vec::new(),
            reverse: Vec::new(),
            edges: Vec::new(),
            edge_index: HashMap::new(),
            names: HashMap::new(),
            matrix: OnceLock::new(),
        }
    }

    /// Create an empty directed graph
    #[must_use]
    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    /// Create an empty undirected graph
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    /// Create graph from an edge list
    ///
    /// Endpoints are created in the order they first appear.
    #[must_use]
    pub fn from_edge_list(kind: GraphKind, edges: &[(VertexId, VertexId, f64)]) -> Self {
        let mut graph = Self::new(kind);
        for &(src, dst, weight) in edges {
            graph.add_edge(src, dst, weight);
        }
        graph
    }

    /// Graph kind
    #[must_use]
    pub const fn kind(&self) -> GraphKind {
        self.kind
    }

    /// `true` for directed graphs
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.kind == GraphKind::Directed
    }

    /// Add a vertex
    ///
    /// Returns `false` if the vertex was already present.
    pub fn add_vertex(&mut self, id: VertexId) -> bool {
        if self.slots.contains_key(&id) {
            return false;
        }
        self.insert_vertex(id);
        true
    }

    /// Add a weighted edge, creating missing endpoints
    ///
    /// Adding an edge that already exists replaces its weight. On an
    /// undirected graph `(u, v)` and `(v, u)` are the same edge.
    pub fn add_edge(&mut self, src: VertexId, dst: VertexId, weight: f64) {
        let s = self.slot_or_insert(src);
        let d = self.slot_or_insert(dst);
        self.matrix = OnceLock::new();

        let key = self.edge_key(src, dst);
        if let Some(&pos) = self.edge_index.get(&key) {
            self.edges[pos].weight = weight;
            self.set_weight(s, d, weight);
            return;
        }

        self.edge_index.insert(key, self.edges.len());
        self.edges.push(Edge::new(src, dst, weight));

        self.adjacency[s].push((d, weight));
        match self.kind {
            GraphKind::Directed => self.reverse[d].push((s, weight)),
            GraphKind::Undirected if s != d => self.adjacency[d].push((s, weight)),
            GraphKind::Undirected => {}
        }
    }

    /// Remove a vertex and every edge incident to it
    ///
    /// # Errors
    ///
    /// Returns `VertexNotFound` if the vertex is absent
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<()> {
        let slot = self.slot(id)?;
        self.matrix = OnceLock::new();

        self.slots.remove(&id);
        self.names.remove(&id);
        self.vertices.remove(slot);
        self.adjacency.remove(slot);
        self.reverse.remove(slot);

        for list in self.adjacency.iter_mut().chain(self.reverse.iter_mut()) {
            list.retain(|&(v, _)| v != slot);
            for entry in list.iter_mut() {
                if entry.0 > slot {
                    entry.0 -= 1;
                }
            }
        }
        for (i, v) in self.vertices.iter().enumerate().skip(slot) {
            self.slots.insert(*v, i);
        }

        self.edges.retain(|e| e.source != id && e.target != id);
        self.rebuild_edge_index();
        Ok(())
    }

    /// Remove a single edge
    ///
    /// # Errors
    ///
    /// Returns `VertexNotFound` if an endpoint is absent and `EdgeNotFound`
    /// if the endpoints are not connected
    pub fn remove_edge(&mut self, src: VertexId, dst: VertexId) -> Result<()> {
        let s = self.slot(src)?;
        let d = self.slot(dst)?;
        let pos = self
            .edge_index
            .get(&self.edge_key(src, dst))
            .copied()
            .ok_or(GraphError::EdgeNotFound { from: src, to: dst })?;
        self.matrix = OnceLock::new();

        self.edges.remove(pos);
        self.rebuild_edge_index();

        self.adjacency[s].retain(|&(v, _)| v != d);
        match self.kind {
            GraphKind::Directed => self.reverse[d].retain(|&(v, _)| v != s),
            GraphKind::Undirected => self.adjacency[d].retain(|&(v, _)| v != s),
        }
        Ok(())
    }

    /// Outgoing neighbors with weights, in insertion order
    ///
    /// # Errors
    ///
    /// Returns `VertexNotFound` if the vertex is absent
    pub fn neighbors(&self, id: VertexId) -> Result<Vec<(VertexId, f64)>> {
        let slot = self.slot(id)?;
        Ok(self.resolve(&self.adjacency[slot]))
    }

    /// Incoming neighbors with weights
    ///
    /// Same as [`Graph::neighbors`] on undirected graphs.
    ///
    /// # Errors
    ///
    /// Returns `VertexNotFound` if the vertex is absent
    pub fn incoming_neighbors(&self, id: VertexId) -> Result<Vec<(VertexId, f64)>> {
        let slot = self.slot(id)?;
        Ok(self.resolve(self.incoming(slot)))
    }

    /// Number of outgoing adjacency entries
    ///
    /// # Errors
    ///
    /// Returns `VertexNotFound` if the vertex is absent
    pub fn out_degree(&self, id: VertexId) -> Result<usize> {
        Ok(self.adjacency[self.slot(id)?].len())
    }

    /// Number of incoming adjacency entries
    ///
    /// # Errors
    ///
    /// Returns `VertexNotFound` if the vertex is absent
    pub fn in_degree(&self, id: VertexId) -> Result<usize> {
        Ok(self.incoming(self.slot(id)?).len())
    }

    /// Weight of `src -> dst`, or `+inf` when there is no such edge
    #[must_use]
    pub fn edge_weight(&self, src: VertexId, dst: VertexId) -> f64 {
        self.edge_index
            .get(&self.edge_key(src, dst))
            .map_or(f64::INFINITY, |&pos| self.edges[pos].weight)
    }

    /// Whether the vertex is present
    #[must_use]
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Vertices in insertion order
    #[must_use]
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Logical edges in insertion order
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of vertices
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of logical edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// `true` if the graph has no vertices
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Set vertex label (for display)
    ///
    /// # Errors
    ///
    /// Returns `VertexNotFound` if the vertex is absent
    pub fn set_vertex_name(&mut self, id: VertexId, name: impl Into<String>) -> Result<()> {
        self.slot(id)?;
        self.names.insert(id, name.into());
        Ok(())
    }

    /// Get vertex label
    #[must_use]
    pub fn vertex_name(&self, id: VertexId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Whether every vertex is reachable from the first one
    ///
    /// Edge direction is ignored, so on a directed graph this is weak
    /// connectivity. The empty graph counts as connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        let n = self.vertex_count();
        if n == 0 {
            return true;
        }

        let mut visited = vec![false; n];
        let mut queue = VecDeque::from([0]);
        visited[0] = true;
        let mut seen = 1;

        while let Some(u) = queue.pop_front() {
            for &(v, _) in self.adjacency[u].iter().chain(self.incoming(u)) {
                if !visited[v] {
                    visited[v] = true;
                    seen += 1;
                    queue.push_back(v);
                }
            }
        }

        seen == n
    }

    /// Dense weight matrix over the current vertices
    ///
    /// Built on first use and cached until the next mutation.
    pub fn build_adjacency_matrix(&self) -> &AdjacencyMatrix {
        self.matrix.get_or_init(|| {
            AdjacencyMatrix::from_adjacency(self.vertices.clone(), &self.adjacency)
        })
    }

    pub(crate) fn slot(&self, id: VertexId) -> Result<usize> {
        self.slots
            .get(&id)
            .copied()
            .ok_or(GraphError::VertexNotFound(id))
    }

    pub(crate) fn vertex_at(&self, slot: usize) -> VertexId {
        self.vertices[slot]
    }

    pub(crate) fn adjacent(&self, slot: usize) -> &[(usize, f64)] {
        &self.adjacency[slot]
    }

    pub(crate) fn incoming(&self, slot: usize) -> &[(usize, f64)] {
        match self.kind {
            GraphKind::Directed => &self.reverse[slot],
            GraphKind::Undirected => &self.adjacency[slot],
        }
    }

    fn resolve(&self, list: &[(usize, f64)]) -> Vec<(VertexId, f64)> {
        list.iter().map(|&(v, w)| (self.vertices[v], w)).collect()
    }

    fn insert_vertex(&mut self, id: VertexId) -> usize {
        let slot = self.vertices.len();
        self.slots.insert(id, slot);
        self.vertices.push(id);
        self.adjacency.push(Vec::new());
        self.reverse.push(Vec::new());
        self.matrix = OnceLock::new();
        slot
    }

    fn slot_or_insert(&mut self, id: VertexId) -> usize {
        match self.slots.get(&id) {
            Some(&slot) => slot,
            None => self.insert_vertex(id),
        }
    }

    fn edge_key(&self, src: VertexId, dst: VertexId) -> (VertexId, VertexId) {
        match self.kind {
            GraphKind::Directed => (src, dst),
            GraphKind::Undirected => (src.min(dst), src.max(dst)),
        }
    }

    fn set_weight(&mut self, s: usize, d: usize, weight: f64) {
        fn update(list: &mut [(usize, f64)], to: usize, weight: f64) {
            if let Some(entry) = list.iter_mut().find(|(v, _)| *v == to) {
                entry.1 = weight;
            }
        }

        update(&mut self.adjacency[s], d, weight);
        match self.kind {
            GraphKind::Directed => update(&mut self.reverse[d], s, weight),
            GraphKind::Undirected => update(&mut self.adjacency[d], s, weight),
        }
    }

    fn rebuild_edge_index(&mut self) {
        let keys: Vec<_> = self
            .edges
            .iter()
            .map(|e| self.edge_key(e.source, e.target))
            .collect();
        self.edge_index = keys.into_iter().enumerate().map(|(i, k)| (k, i)).collect();
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::undirected()
    }
}
