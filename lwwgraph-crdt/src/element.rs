//! Vertex and edge identities.

use std::fmt::Debug;

/// Anything usable as a vertex identity.
///
/// Vertices carry no payload. `Ord` keeps the stores enumerable in a
/// stable order, which is what makes neighbor discovery deterministic.
pub trait VertexId: Ord + Clone + Debug {}

impl<T: Ord + Clone + Debug> VertexId for T {}

/// A stored edge between two vertices.
///
/// `Edge { v1: a, v2: b }` and `Edge { v1: b, v2: a }` are distinct keys in
/// the store. Traversal treats either one as an undirected connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<V> {
    pub v1: V,
    pub v2: V,
}

impl<V> Edge<V> {
    pub fn new(v1: V, v2: V) -> Self {
        Self { v1, v2 }
    }

    /// The same endpoints in the opposite storage direction.
    pub fn reversed(self) -> Self {
        Self {
            v1: self.v2,
            v2: self.v1,
        }
    }
}

impl<V: PartialEq> Edge<V> {
    /// Whether `vertex` is either endpoint.
    pub fn touches(&self, vertex: &V) -> bool {
        self.v1 == *vertex || self.v2 == *vertex
    }

    /// The endpoint opposite `vertex`, or `None` if the edge does not touch it.
    ///
    /// `v1` is checked first, so a self-loop yields the vertex itself.
    pub fn other(&self, vertex: &V) -> Option<&V> {
        if self.v1 == *vertex {
            Some(&self.v2)
        } else if self.v2 == *vertex {
            Some(&self.v1)
        } else {
            None
        }
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from((v1, v2): (V, V)) -> Self {
        Self { v1, v2 }
    }
}
