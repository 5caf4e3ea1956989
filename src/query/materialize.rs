//! Turn a person chain into reportable (event, person) steps

use super::types::{ChainStep, EventSummary, PersonChain, PersonSummary, QueryError, QueryResult};
use crate::graph::{EntityStore, PersonId, PersonIdx};

/// Materialize `chain` into steps ordered from the query's start person to
/// its end person.
///
/// Each step names the first event, by ascending event index, that the
/// previous person shares with the step's person. The output has one step
/// fewer than the chain has persons. A pair with no shared event, or a member
/// this store does not hold, means the chain did not come from this store's
/// adjacency and is reported as [`QueryError::BrokenChain`].
pub fn materialize(store: &EntityStore, chain: &PersonChain) -> QueryResult<Vec<ChainStep>> {
    let persons: Vec<_> = chain.from_start().collect();
    let mut steps = Vec::with_capacity(persons.len().saturating_sub(1));

    for pair in persons.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        let shared = match (store.get_person(prev), store.get_person(next)) {
            (Some(_), Some(person)) => store
                .first_shared_event(prev, next)
                .map(|event| (store.event(event), person)),
            _ => None,
        };
        let Some((event, person)) = shared else {
            let err = QueryError::BrokenChain {
                from: member_id(store, prev),
                to: member_id(store, next),
            };
            tracing::error!(error = %err, "chain materialization failed");
            return Err(err);
        };

        steps.push(ChainStep {
            event: EventSummary::from(event),
            person: PersonSummary::from(person),
        });
    }

    Ok(steps)
}

/// Stable id of a chain member, or its raw index when the store lacks it
fn member_id(store: &EntityStore, idx: PersonIdx) -> PersonId {
    match store.get_person(idx) {
        Some(person) => person.id.clone(),
        None => PersonId::from_string(format!("#{}", idx.index())),
    }
}
