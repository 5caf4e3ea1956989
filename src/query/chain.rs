//! Shortest-chain search over the person/event graph

use std::collections::VecDeque;

use super::config::SearchConfig;
use super::types::{PersonChain, QueryError, QueryResult, SearchOutcome};
use crate::graph::{EntityStore, PersonIdx};

/// Find a shortest chain of co-participants between `start` and `end`.
///
/// The search is a level-synchronized BFS seeded from `end`, looking for
/// `start`. A person is marked visited when first discovered, so each person
/// is expanded at most once. Neighbors are enumerated by ascending event index
/// and then ascending person index, which makes the returned chain
/// deterministic when several shortest chains exist.
///
/// Persons on the config's denylist are never expanded and so never appear
/// inside a chain; they can still be an endpoint.
///
/// Returns `BudgetExhausted` when `max_expansions` persons have been expanded
/// without reaching `start`. Chains longer than `max_depth` are `NotFound`.
pub fn shortest_chain(
    store: &EntityStore,
    start: PersonIdx,
    end: PersonIdx,
    config: &SearchConfig,
) -> QueryResult<SearchOutcome> {
    if start == end {
        return Ok(SearchOutcome::Same);
    }
    if store.get_person(start).is_none() || store.get_person(end).is_none() {
        return Ok(SearchOutcome::NotFound);
    }

    let denylist = config.denylist();
    let n = store.person_count();
    let mut visited = vec![false; n];
    let mut predecessor: Vec<Option<PersonIdx>> = vec![None; n];
    let mut queue: VecDeque<PersonIdx> = VecDeque::new();

    visited[end.index()] = true;
    queue.push_back(end);

    let mut depth = 0;
    let mut expanded = 0;

    while !queue.is_empty() {
        if config.max_depth.is_some_and(|max| depth >= max.get()) {
            tracing::debug!(depth, expanded, "chain search reached depth cap");
            break;
        }

        let level_size = queue.len();
        for _ in 0..level_size {
            let Some(current) = queue.pop_front() else {
                break;
            };

            if config.max_expansions.is_some_and(|max| expanded >= max.get()) {
                tracing::warn!(expanded, "chain search exhausted its expansion budget");
                return Err(QueryError::BudgetExhausted { expanded });
            }
            expanded += 1;

            for &event in store.person(current).events() {
                for &co_star in store.event(event).participants() {
                    if visited[co_star.index()] {
                        continue;
                    }
                    visited[co_star.index()] = true;
                    predecessor[co_star.index()] = Some(current);

                    if co_star == start {
                        let chain = reconstruct(&predecessor, start, end);
                        tracing::debug!(hops = chain.hops(), expanded, "chain found");
                        return Ok(SearchOutcome::Found(chain));
                    }

                    if denylist.is_denied(&store.person(co_star).name) {
                        continue;
                    }
                    queue.push_back(co_star);
                }
            }
        }

        depth += 1;
    }

    tracing::debug!(expanded, "no chain");
    Ok(SearchOutcome::NotFound)
}

/// Walk predecessors from `start` back to the seed, then flip so the seed
/// comes first
fn reconstruct(predecessor: &[Option<PersonIdx>], start: PersonIdx, end: PersonIdx) -> PersonChain {
    let mut persons = vec![start];
    let mut current = start;
    while current != end {
        match predecessor[current.index()] {
            Some(prev) => {
                persons.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    persons.reverse();
    PersonChain { persons }
}
