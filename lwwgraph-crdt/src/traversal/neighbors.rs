//! Direct neighbors through present edges.

use crate::element::VertexId;
use crate::store::ElementStore;

/// Endpoints opposite `vertex` across every present edge touching it.
///
/// Order follows the store's edge-key order. A vertex reachable through
/// both `(a, b)` and `(b, a)` appears once per edge.
pub fn connected_vertices<V: VertexId>(store: &ElementStore<V>, vertex: &V) -> Vec<V> {
    store
        .edges()
        .filter_map(|edge| edge.other(vertex))
        .cloned()
        .collect()
}
