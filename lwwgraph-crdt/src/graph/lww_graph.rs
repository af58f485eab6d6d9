//! LWW graph replica: an [`ElementStore`] bound to a time source.
//!
//! Each mutation reads the clock once, after its precondition holds, and
//! records that instant against the affected key. Queries never read it.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use chrono::Duration;
//! use lwwgraph_core::ManualClock;
//! use lwwgraph_crdt::{Edge, LwwGraph};
//!
//! let clock = ManualClock::at_epoch();
//! let mut a = LwwGraph::with_clock(Arc::new(clock.clone()));
//! let mut b = LwwGraph::with_clock(Arc::new(clock.clone()));
//!
//! a.add_vertex(1);
//! a.add_vertex(2);
//! a.add_edge(1, 2).unwrap();
//! b.add_vertex(3);
//!
//! clock.advance(Duration::seconds(1));
//! a.remove_edge(&Edge::new(1, 2)).unwrap();
//!
//! b.merge(&a);
//! assert!(b.contains_vertex(&1) && b.contains_vertex(&3));
//! assert!(!b.contains_edge(&Edge::new(1, 2)));
//! ```

use std::sync::Arc;

use lwwgraph_core::clock::{SystemClock, TimeSource, Timestamp};
use lwwgraph_core::config::ClockConfig;
use lwwgraph_core::errors::{ConfigError, GraphResult};
use tracing::{debug, info};

use crate::element::{Edge, VertexId};
use crate::merge::{MergeReport, MergeResolver};
use crate::store::ElementStore;
use crate::traversal;

/// A replica of the last-writer-wins graph.
///
/// Not synchronised: one writer per replica, with merges as the only way
/// state moves between replicas.
#[derive(Debug, Clone)]
pub struct LwwGraph<V> {
    store: ElementStore<V>,
    clock: Arc<dyn TimeSource>,
}

impl<V: VertexId> LwwGraph<V> {
    /// Create an empty replica on the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty replica on the given time source.
    pub fn with_clock(clock: Arc<dyn TimeSource>) -> Self {
        Self::from_store(ElementStore::new(), clock)
    }

    /// Create an empty replica on the configured time source.
    pub fn from_config(config: &ClockConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_clock(config.build()?))
    }

    /// Wrap an existing store.
    pub fn from_store(store: ElementStore<V>, clock: Arc<dyn TimeSource>) -> Self {
        Self { store, clock }
    }

    // --- Vertices ---

    /// Add `vertex`, or refresh its add timestamp. Never fails.
    pub fn add_vertex(&mut self, vertex: V) {
        let at = self.clock.now();
        debug!(?vertex, timestamp = %at, "vertex added");
        self.store.add_vertex(vertex, at);
    }

    /// Remove `vertex` if it is present and no present edge touches it.
    pub fn remove_vertex(&mut self, vertex: &V) -> GraphResult<()> {
        let clock = &self.clock;
        match self.store.remove_vertex(vertex, || clock.now()) {
            Ok(at) => {
                debug!(?vertex, timestamp = %at, "vertex removed");
                Ok(())
            }
            Err(e) => {
                debug!(?vertex, error = %e, "vertex removal rejected");
                Err(e)
            }
        }
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.store.contains_vertex(vertex)
    }

    /// Whether any present edge touches `vertex`.
    pub fn vertex_in_edge(&self, vertex: &V) -> bool {
        self.store.vertex_in_edge(vertex)
    }

    // --- Edges ---

    /// Add the directional edge `(v1, v2)` if both endpoints are present.
    pub fn add_edge(&mut self, v1: V, v2: V) -> GraphResult<()> {
        let clock = &self.clock;
        match self.store.add_edge(v1, v2, || clock.now()) {
            Ok(at) => {
                debug!(timestamp = %at, "edge added");
                Ok(())
            }
            Err(e) => {
                debug!(error = %e, "edge addition rejected");
                Err(e)
            }
        }
    }

    /// Remove `edge` if it is present.
    pub fn remove_edge(&mut self, edge: &Edge<V>) -> GraphResult<()> {
        let clock = &self.clock;
        match self.store.remove_edge(edge, || clock.now()) {
            Ok(at) => {
                debug!(?edge, timestamp = %at, "edge removed");
                Ok(())
            }
            Err(e) => {
                debug!(?edge, error = %e, "edge removal rejected");
                Err(e)
            }
        }
    }

    /// Whether this exact directional edge is present.
    pub fn contains_edge(&self, edge: &Edge<V>) -> bool {
        self.store.contains_edge(edge)
    }

    // --- Traversal ---

    /// Vertices joined to `vertex` by a present edge, in either direction.
    pub fn connected_vertices(&self, vertex: &V) -> Vec<V> {
        traversal::connected_vertices(&self.store, vertex)
    }

    /// One path from `source` to `target`, or empty if there is none.
    pub fn path(&self, source: &V, target: &V) -> Vec<V> {
        let _span = tracing::debug_span!("lwwgraph.path", ?source, ?target).entered();
        traversal::find_path(&self.store, source, target)
    }

    // --- Replication ---

    /// Absorb `remote` into this replica.
    pub fn merge(&mut self, remote: &LwwGraph<V>) -> MergeReport {
        let _span = tracing::info_span!("lwwgraph.merge").entered();
        let report = MergeResolver::merge_into(&mut self.store, &remote.store);
        info!(
            inserted = report.inserted(),
            advanced = report.advanced(),
            "replica merged"
        );
        report
    }

    /// The merge of this replica and `remote`, on this replica's clock.
    pub fn merged(&self, remote: &LwwGraph<V>) -> LwwGraph<V> {
        Self::from_store(
            MergeResolver::merged(&self.store, &remote.store),
            Arc::clone(&self.clock),
        )
    }

    /// The entries of this replica that `remote` has not yet seen.
    pub fn delta_since(&self, remote: &LwwGraph<V>) -> LwwGraph<V> {
        Self::from_store(
            MergeResolver::delta(&self.store, &remote.store),
            Arc::clone(&self.clock),
        )
    }

    // --- Introspection ---

    /// Present vertices, in identity order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.store.vertices()
    }

    /// Present edges, in key order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<V>> + '_ {
        self.store.edges()
    }

    pub fn vertex_added_at(&self, vertex: &V) -> Option<Timestamp> {
        self.store.vertex_added_at(vertex)
    }

    pub fn vertex_removed_at(&self, vertex: &V) -> Option<Timestamp> {
        self.store.vertex_removed_at(vertex)
    }

    pub fn edge_added_at(&self, edge: &Edge<V>) -> Option<Timestamp> {
        self.store.edge_added_at(edge)
    }

    pub fn edge_removed_at(&self, edge: &Edge<V>) -> Option<Timestamp> {
        self.store.edge_removed_at(edge)
    }

    pub fn tombstone_count(&self) -> usize {
        self.store.tombstone_count()
    }

    pub fn store(&self) -> &ElementStore<V> {
        &self.store
    }

    pub fn clock(&self) -> &Arc<dyn TimeSource> {
        &self.clock
    }
}

impl<V: VertexId> Default for LwwGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Replicas are equal when their stores are; the clock is not state.
impl<V: VertexId> PartialEq for LwwGraph<V> {
    fn eq(&self, other: &Self) -> bool {
        self.store == other.store
    }
}

impl<V: VertexId> Eq for LwwGraph<V> {}
