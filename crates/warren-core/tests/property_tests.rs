//! Property tests for the geometric and structural primitives.

use proptest::prelude::*;

use warren_core::geom::Rect;
use warren_core::graph::Graph;
use warren_core::pqueue::MinQueue;

fn arb_rect() -> impl Strategy<Value = Rect> {
    (0..40i32, 0..40i32, 1..20i32, 1..20i32)
        .prop_map(|(x, y, width, height)| Rect::new(x, y, width, height))
}

proptest! {
    #[test]
    fn intersects_is_symmetric(a in arb_rect(), b in arb_rect()) {
        prop_assert_eq!(a.intersects(&b), b.intersects(&a));
    }

    #[test]
    fn intersection_agrees_with_intersects(a in arb_rect(), b in arb_rect()) {
        // None exactly when the rects do not strictly overlap, and any
        // returned overlap has positive extent and commutes.
        let forward = a.intersection(&b);
        prop_assert_eq!(forward.is_some(), a.intersects(&b));
        prop_assert_eq!(forward, b.intersection(&a));
        if let Some(overlap) = forward {
            prop_assert!(overlap.width > 0 && overlap.height > 0);
        }
    }

    #[test]
    fn queue_pops_in_nondecreasing_priority_order(
        entries in proptest::collection::vec((0..30u32, 0..1000i32), 1..40)
    ) {
        let mut queue = MinQueue::new();
        let mut expected: Vec<(u32, f64)> = Vec::new();
        for &(key, priority) in &entries {
            // First priority wins on duplicate keys.
            if queue.enqueue(key, f64::from(priority)) {
                expected.push((key, f64::from(priority)));
            }
        }

        let mut last = f64::NEG_INFINITY;
        let mut popped = 0;
        while let Ok(key) = queue.dequeue() {
            let (_, priority) = expected
                .iter()
                .find(|&&(k, _)| k == key)
                .copied()
                .expect("popped key was never enqueued");
            prop_assert!(priority >= last);
            last = priority;
            popped += 1;
        }
        prop_assert_eq!(popped, expected.len());
    }

    #[test]
    fn node_removal_never_disconnects(
        node_count in 2..10u32,
        edges in proptest::collection::vec((0..10u32, 0..10u32), 0..30),
        target in 0..10u32,
        anchor in 0..10u32,
    ) {
        let target = target % node_count;
        let anchor = anchor % node_count;

        let mut graph = Graph::new();
        for node in 0..node_count {
            graph.add_node(node);
        }
        let mut seen = std::collections::HashSet::new();
        for &(a, b) in &edges {
            let (a, b) = (a % node_count, b % node_count);
            if a != b && seen.insert((a.min(b), a.max(b))) {
                graph.add_edge(a, b).unwrap();
            }
        }

        let snapshot: Vec<(u32, Vec<u32>)> = graph
            .nodes()
            .iter()
            .map(|&n| (n, graph.neighbours(n).unwrap().to_vec()))
            .collect();

        if graph.try_remove_node(target, anchor) {
            // The survivors must all still be mutually reachable.
            prop_assert!(!graph.contains(target));
            prop_assert!(graph.is_connected_from(anchor));
            prop_assert_eq!(graph.node_count() as u32, node_count - 1);
        } else {
            // A refusal must leave the graph untouched.
            let after: Vec<(u32, Vec<u32>)> = graph
                .nodes()
                .iter()
                .map(|&n| (n, graph.neighbours(n).unwrap().to_vec()))
                .collect();
            prop_assert_eq!(snapshot, after);
        }
    }
}
