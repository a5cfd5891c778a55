//! Structural invariants over arbitrary heading sequences.

use mindmap_core::{build_from_events, HeadingEvent, MindMap};
use proptest::prelude::*;

fn events() -> impl Strategy<Value = Vec<HeadingEvent>> {
    prop::collection::vec(1u8..=6, 1..64).prop_map(|levels| {
        levels
            .into_iter()
            .enumerate()
            .map(|(i, level)| HeadingEvent::new(level, format!("h{i}"), Some(i + 1)))
            .collect()
    })
}

/// Parent by definition: the nearest preceding heading with a smaller level.
fn expected_parent(levels: &[u8], index: usize) -> Option<usize> {
    (0..index).rev().find(|&j| levels[j] < levels[index])
}

fn build(events: &[HeadingEvent]) -> MindMap {
    build_from_events(events.iter().cloned()).unwrap()
}

proptest! {
    #[test]
    fn ids_follow_document_order(events in events()) {
        let map = build(&events);
        prop_assert_eq!(map.len(), events.len());
        for (i, (node, event)) in map.nodes().iter().zip(&events).enumerate() {
            prop_assert_eq!(node.id(), i);
            prop_assert_eq!(node.label(), event.text.as_str());
            prop_assert_eq!(node.source_line(), event.source_line);
        }
    }

    #[test]
    fn parent_is_nearest_shallower_heading(events in events()) {
        let map = build(&events);
        let levels: Vec<u8> = events.iter().map(|e| e.level).collect();
        for i in 0..levels.len() {
            prop_assert_eq!(map.parent_of(i), expected_parent(&levels, i));
        }
    }

    #[test]
    fn edges_form_a_forest(events in events()) {
        let map = build(&events);
        let mut incoming = vec![0usize; map.len()];
        for edge in map.edges() {
            prop_assert!(edge.from < edge.to);
            incoming[edge.to] += 1;
        }
        prop_assert!(incoming.iter().all(|&n| n <= 1));
        let roots = map.roots().count();
        prop_assert_eq!(map.edges().len() + roots, map.len());
    }

    #[test]
    fn only_top_level_starts_visible(events in events()) {
        let map = build(&events);
        for node in map.nodes() {
            prop_assert_eq!(node.hidden(), node.level() > 1);
        }
    }
}
