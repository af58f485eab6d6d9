//! The replicated value: four identity → timestamp maps.
//!
//! Presence is decided per key by comparing the add and remove timestamps.
//! An add must be strictly after the remove to win, so a tie leaves the
//! element removed. Maps only ever grow; tombstones are never dropped.
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use lwwgraph_crdt::{Edge, ElementStore};
//!
//! let t = |s| Utc.timestamp_opt(s, 0).unwrap();
//! let mut store = ElementStore::new();
//! store.add_vertex(1, t(1));
//! store.add_vertex(2, t(1));
//! store.add_edge(1, 2, || t(2)).unwrap();
//!
//! assert!(store.contains_edge(&Edge::new(1, 2)));
//! // Still referenced by a present edge.
//! assert!(store.remove_vertex(&1, || t(3)).is_err());
//! ```

use std::collections::BTreeMap;

use lwwgraph_core::clock::Timestamp;
use lwwgraph_core::errors::{GraphError, GraphOperation, GraphResult};

use crate::element::{Edge, VertexId};

/// LWW vertex/edge store with referential-integrity guards.
///
/// Guarded mutators take the clock as a closure so that a rejected
/// operation never reads time and never touches the maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementStore<V> {
    pub(crate) vertex_added: BTreeMap<V, Timestamp>,
    pub(crate) vertex_removed: BTreeMap<V, Timestamp>,
    pub(crate) edge_added: BTreeMap<Edge<V>, Timestamp>,
    pub(crate) edge_removed: BTreeMap<Edge<V>, Timestamp>,
}

/// Last-writer-wins presence: an add exists and is strictly after any remove.
fn lww_present(added: Option<&Timestamp>, removed: Option<&Timestamp>) -> bool {
    match (added, removed) {
        (None, _) => false,
        (Some(_), None) => true,
        (Some(added), Some(removed)) => added > removed,
    }
}

impl<V: VertexId> ElementStore<V> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            vertex_added: BTreeMap::new(),
            vertex_removed: BTreeMap::new(),
            edge_added: BTreeMap::new(),
            edge_removed: BTreeMap::new(),
        }
    }

    // --- Vertices ---

    /// Record an add for `vertex` at `at`. Never fails.
    ///
    /// Re-adding refreshes the timestamp, which resurrects a removed vertex
    /// once the new add is later than its tombstone.
    pub fn add_vertex(&mut self, vertex: V, at: Timestamp) {
        self.vertex_added.insert(vertex, at);
    }

    /// Record a removal for `vertex`.
    ///
    /// Fails unless the vertex is present and no present edge touches it.
    pub fn remove_vertex<F>(&mut self, vertex: &V, now: F) -> GraphResult<Timestamp>
    where
        F: FnOnce() -> Timestamp,
    {
        if !self.contains_vertex(vertex) || self.vertex_in_edge(vertex) {
            return Err(GraphError::invalid(GraphOperation::RemoveVertex, vertex));
        }
        let at = now();
        self.vertex_removed.insert(vertex.clone(), at);
        Ok(at)
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        lww_present(self.vertex_added.get(vertex), self.vertex_removed.get(vertex))
    }

    /// Whether any present edge has `vertex` as an endpoint.
    pub fn vertex_in_edge(&self, vertex: &V) -> bool {
        self.edges().any(|edge| edge.touches(vertex))
    }

    // --- Edges ---

    /// Record an add for the directional edge `(v1, v2)`.
    ///
    /// Fails unless both endpoints are present.
    pub fn add_edge<F>(&mut self, v1: V, v2: V, now: F) -> GraphResult<Timestamp>
    where
        F: FnOnce() -> Timestamp,
    {
        if !self.contains_vertex(&v1) || !self.contains_vertex(&v2) {
            return Err(GraphError::invalid(
                GraphOperation::AddEdge,
                &Edge::new(v1, v2),
            ));
        }
        let at = now();
        self.edge_added.insert(Edge::new(v1, v2), at);
        Ok(at)
    }

    /// Record a removal for `edge`. Fails unless the edge is present.
    pub fn remove_edge<F>(&mut self, edge: &Edge<V>, now: F) -> GraphResult<Timestamp>
    where
        F: FnOnce() -> Timestamp,
    {
        if !self.contains_edge(edge) {
            return Err(GraphError::invalid(GraphOperation::RemoveEdge, edge));
        }
        let at = now();
        self.edge_removed.insert(edge.clone(), at);
        Ok(at)
    }

    /// Both endpoints present, then LWW on this exact directional key.
    pub fn contains_edge(&self, edge: &Edge<V>) -> bool {
        self.contains_vertex(&edge.v1)
            && self.contains_vertex(&edge.v2)
            && lww_present(self.edge_added.get(edge), self.edge_removed.get(edge))
    }

    // --- Effective graph ---

    /// Present vertices, in identity order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertex_added
            .keys()
            .filter(move |vertex| self.contains_vertex(vertex))
    }

    /// Present edges, in key order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<V>> + '_ {
        self.edge_added
            .keys()
            .filter(move |edge| self.contains_edge(edge))
    }

    // --- Raw timestamps ---

    pub fn vertex_added_at(&self, vertex: &V) -> Option<Timestamp> {
        self.vertex_added.get(vertex).copied()
    }

    pub fn vertex_removed_at(&self, vertex: &V) -> Option<Timestamp> {
        self.vertex_removed.get(vertex).copied()
    }

    pub fn edge_added_at(&self, edge: &Edge<V>) -> Option<Timestamp> {
        self.edge_added.get(edge).copied()
    }

    pub fn edge_removed_at(&self, edge: &Edge<V>) -> Option<Timestamp> {
        self.edge_removed.get(edge).copied()
    }

    /// Number of retained removal records across vertices and edges.
    pub fn tombstone_count(&self) -> usize {
        self.vertex_removed.len() + self.edge_removed.len()
    }

    /// True when nothing has ever been recorded.
    pub fn is_empty(&self) -> bool {
        self.vertex_added.is_empty()
            && self.vertex_removed.is_empty()
            && self.edge_added.is_empty()
            && self.edge_removed.is_empty()
    }
}

impl<V: VertexId> Default for ElementStore<V> {
    fn default() -> Self {
        Self::new()
    }
}
