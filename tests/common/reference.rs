//! Reference distances computed on the projected person graph

#![allow(dead_code)]

use sixdegrees::{Connection, EntityStore, PersonIdx};
use std::collections::{HashMap, HashSet, VecDeque};

/// Person-to-person adjacency, projected through shared events
fn project(store: &EntityStore) -> HashMap<PersonIdx, HashSet<PersonIdx>> {
    let mut adjacency: HashMap<PersonIdx, HashSet<PersonIdx>> = HashMap::new();
    for (_, event) in store.all_events() {
        for &a in event.participants() {
            for &b in event.participants() {
                if a != b {
                    adjacency.entry(a).or_default().insert(b);
                }
            }
        }
    }
    adjacency
}

/// Shortest hop count from `start` to `end`, never passing *through* a
/// person whose name is in `denied` (lowercase). `None` when unreachable.
pub fn reference_distance(
    store: &EntityStore,
    start: PersonIdx,
    end: PersonIdx,
    denied: &[&str],
) -> Option<usize> {
    if start == end {
        return Some(0);
    }
    let adjacency = project(store);
    let is_denied = |p: PersonIdx| {
        let name = store.person(p).name.to_lowercase();
        denied.iter().any(|d| *d == name)
    };

    let mut distance: HashMap<PersonIdx, usize> = HashMap::new();
    let mut queue = VecDeque::new();
    distance.insert(start, 0);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let d = distance[&current];
        let Some(neighbors) = adjacency.get(&current) else {
            continue;
        };
        for &next in neighbors {
            if distance.contains_key(&next) {
                continue;
            }
            if next == end {
                return Some(d + 1);
            }
            distance.insert(next, d + 1);
            if !is_denied(next) {
                queue.push_back(next);
            }
        }
    }
    None
}

/// Check that every step's event really contains the previous and the next
/// person, and that the chain ends at `end`
pub fn validate_chain(store: &EntityStore, start: PersonIdx, end: PersonIdx, connection: &Connection) {
    let mut previous = start;
    for step in connection.steps() {
        let event = store
            .event_by_id(&step.event.id)
            .expect("step event exists");
        let next = store.person_by_id(&step.person.id).expect("step person exists");
        assert!(store.event(event).has_participant(previous));
        assert!(store.event(event).has_participant(next));
        previous = next;
    }
    if !connection.steps().is_empty() {
        assert_eq!(previous, end);
    }
}
