//! Depth-first path search with explicit backtracking.
//!
//! The search keeps the path so far, a visited set, and one frame of
//! not-yet-tried neighbors per path entry. Advancing pops the next
//! neighbor from the top frame; an exhausted frame backtracks by dropping
//! the last path entry and un-marking it. The first path that reaches the
//! target wins; this is not a shortest-path search.

use std::collections::{BTreeSet, VecDeque};

use crate::element::VertexId;
use crate::store::ElementStore;

use super::neighbors::connected_vertices;

/// Find one path from `source` to `target` over the effective graph.
///
/// Returns an empty path if either endpoint is absent or `target` is
/// unreachable, and `[source]` when the two are equal.
pub fn find_path<V: VertexId>(store: &ElementStore<V>, source: &V, target: &V) -> Vec<V> {
    if !store.contains_vertex(source) || !store.contains_vertex(target) {
        return Vec::new();
    }
    if source == target {
        return vec![source.clone()];
    }

    let mut search = Search::new(store);
    search.descend(source.clone());

    loop {
        let next = match search.frames.last_mut() {
            Some(frame) => frame.pop_front(),
            None => break,
        };
        match next {
            Some(vertex) => {
                if !store.contains_vertex(&vertex) {
                    continue;
                }
                search.descend(vertex);
                if search.path.last() == Some(target) {
                    return search.path;
                }
            }
            None => search.backtrack(),
        }
    }

    tracing::trace!(?source, ?target, "no path");
    search.path
}

struct Search<'a, V> {
    store: &'a ElementStore<V>,
    path: Vec<V>,
    visited: BTreeSet<V>,
    frames: Vec<VecDeque<V>>,
}

impl<'a, V: VertexId> Search<'a, V> {
    fn new(store: &'a ElementStore<V>) -> Self {
        Self {
            store,
            path: Vec::new(),
            visited: BTreeSet::new(),
            frames: Vec::new(),
        }
    }

    /// Push `vertex` onto the path with a frame of its unvisited neighbors.
    fn descend(&mut self, vertex: V) {
        self.visited.insert(vertex.clone());
        let frame = connected_vertices(self.store, &vertex)
            .into_iter()
            .filter(|neighbor| !self.visited.contains(neighbor))
            .collect();
        self.path.push(vertex);
        self.frames.push(frame);
    }

    fn backtrack(&mut self) {
        self.frames.pop();
        if let Some(vertex) = self.path.pop() {
            self.visited.remove(&vertex);
        }
    }
}
