//! Property tests for lwwgraph-crdt: merge algebra, delta sync, and path validity
//! over randomly generated replica histories.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use lwwgraph_core::ManualClock;
use lwwgraph_crdt::{Edge, LwwGraph};
use proptest::prelude::*;

const VERTICES: u8 = 6;

#[derive(Debug, Clone)]
enum Op {
    AddVertex(u8),
    RemoveVertex(u8),
    AddEdge(u8, u8),
    RemoveEdge(u8, u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..VERTICES).prop_map(Op::AddVertex),
        1 => (0..VERTICES).prop_map(Op::RemoveVertex),
        3 => (0..VERTICES, 0..VERTICES).prop_map(|(a, b)| Op::AddEdge(a, b)),
        1 => (0..VERTICES, 0..VERTICES).prop_map(|(a, b)| Op::RemoveEdge(a, b)),
    ]
}

/// A replica history: operations stamped with (possibly colliding) ticks.
fn history_strategy() -> impl Strategy<Value = Vec<(i64, Op)>> {
    prop::collection::vec((1_i64..30, op_strategy()), 0..40)
}

/// Replay a history. Rejected operations are part of normal use and skipped.
fn build(history: &[(i64, Op)]) -> LwwGraph<u8> {
    let clock = ManualClock::at_epoch();
    let mut graph = LwwGraph::with_clock(Arc::new(clock.clone()));
    for (tick, op) in history {
        clock.set(Utc.timestamp_opt(*tick, 0).unwrap());
        let _ = match op {
            Op::AddVertex(v) => {
                graph.add_vertex(*v);
                Ok(())
            }
            Op::RemoveVertex(v) => graph.remove_vertex(v),
            Op::AddEdge(a, b) => graph.add_edge(*a, *b),
            Op::RemoveEdge(a, b) => graph.remove_edge(&Edge::new(*a, *b)),
        };
    }
    graph
}

fn containment(graph: &LwwGraph<u8>) -> (Vec<u8>, Vec<Edge<u8>>) {
    (graph.vertices().copied().collect(), graph.edges().copied().collect())
}

proptest! {
    #[test]
    fn merge_is_commutative(h1 in history_strategy(), h2 in history_strategy()) {
        let a = build(&h1);
        let b = build(&h2);
        let ab = a.merged(&b);
        let ba = b.merged(&a);
        prop_assert_eq!(&ab, &ba);
        prop_assert_eq!(containment(&ab), containment(&ba));
    }

    #[test]
    fn merge_is_associative(
        h1 in history_strategy(),
        h2 in history_strategy(),
        h3 in history_strategy(),
    ) {
        let a = build(&h1);
        let b = build(&h2);
        let c = build(&h3);
        prop_assert_eq!(a.merged(&b).merged(&c), a.merged(&b.merged(&c)));
    }

    #[test]
    fn merge_is_idempotent(h1 in history_strategy(), h2 in history_strategy()) {
        let a = build(&h1);
        let b = build(&h2);
        prop_assert_eq!(&a.merged(&a), &a);

        let mut ab = a.merged(&b);
        let before = ab.clone();
        prop_assert!(ab.merge(&b).is_noop());
        prop_assert!(ab.merge(&a).is_noop());
        prop_assert_eq!(ab, before);
    }

    #[test]
    fn merge_keeps_latest_timestamp(h1 in history_strategy(), h2 in history_strategy()) {
        let a = build(&h1);
        let b = build(&h2);
        let ab = a.merged(&b);
        for v in 0..VERTICES {
            prop_assert_eq!(ab.vertex_added_at(&v), a.vertex_added_at(&v).max(b.vertex_added_at(&v)));
            prop_assert_eq!(ab.vertex_removed_at(&v), a.vertex_removed_at(&v).max(b.vertex_removed_at(&v)));
            for w in 0..VERTICES {
                let e = Edge::new(v, w);
                prop_assert_eq!(ab.edge_added_at(&e), a.edge_added_at(&e).max(b.edge_added_at(&e)));
                prop_assert_eq!(ab.edge_removed_at(&e), a.edge_removed_at(&e).max(b.edge_removed_at(&e)));
            }
        }
    }

    #[test]
    fn delta_equivalent_to_full_merge(h1 in history_strategy(), h2 in history_strategy()) {
        let a = build(&h1);
        let b = build(&h2);
        let delta = a.delta_since(&b);
        prop_assert_eq!(b.merged(&delta), b.merged(&a));
        // Nothing left to send once the remote has it all.
        prop_assert!(a.delta_since(&b.merged(&a)).store().is_empty());
    }

    #[test]
    fn present_edges_have_present_endpoints(h1 in history_strategy(), h2 in history_strategy()) {
        let merged = build(&h1).merged(&build(&h2));
        for edge in merged.edges() {
            prop_assert!(merged.contains_vertex(&edge.v1));
            prop_assert!(merged.contains_vertex(&edge.v2));
        }
    }

    #[test]
    fn paths_are_simple_walks_over_present_edges(h1 in history_strategy(), h2 in history_strategy()) {
        let graph = build(&h1).merged(&build(&h2));
        for source in 0..VERTICES {
            for target in 0..VERTICES {
                let path = graph.path(&source, &target);
                if path.is_empty() {
                    continue;
                }
                prop_assert_eq!(path.first(), Some(&source));
                prop_assert_eq!(path.last(), Some(&target));
                let distinct: BTreeSet<_> = path.iter().collect();
                prop_assert_eq!(distinct.len(), path.len());
                for pair in path.windows(2) {
                    let linked = graph.contains_edge(&Edge::new(pair[0], pair[1]))
                        || graph.contains_edge(&Edge::new(pair[1], pair[0]));
                    prop_assert!(linked, "{:?} -> {:?} is not an edge", pair[0], pair[1]);
                }
            }
        }
    }
}
