//! Graph fixtures for integration tests

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sixdegrees::{EntityStore, StoreBuilder};

/// Build a store from `(event, [members])` pairs; persons are named by id
pub fn scenario(persons: &[&str], events: &[(&str, Vec<&str>)]) -> EntityStore {
    let mut builder = StoreBuilder::new();
    for id in persons {
        builder.person(*id, id).unwrap();
    }
    for (event, members) in events {
        builder.event(*event, event, "episode").unwrap();
        for member in members {
            builder.membership(*member, *event).unwrap();
        }
    }
    builder.build()
}

/// Shape of a generated graph
#[derive(Debug, Clone)]
pub struct RandomGraphConfig {
    pub persons: usize,
    pub events: usize,
    /// Inclusive range of participants per event
    pub min_cast: usize,
    pub max_cast: usize,
    /// Every n-th person is named "Ensign" (0 disables)
    pub ensign_every: usize,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            persons: 60,
            events: 30,
            min_cast: 2,
            max_cast: 5,
            ensign_every: 0,
        }
    }
}

/// Seeded random bipartite graph. Person ids are `p{i}`, event ids `e{j}`.
pub fn random_graph(seed: u64, config: &RandomGraphConfig) -> EntityStore {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder = StoreBuilder::new();

    let ids: Vec<String> = (0..config.persons).map(|i| format!("p{}", i)).collect();
    for (i, id) in ids.iter().enumerate() {
        let name = if config.ensign_every > 0 && i % config.ensign_every == config.ensign_every - 1 {
            "Ensign".to_string()
        } else {
            format!("Person {}", i)
        };
        builder.person(id.as_str(), &name).unwrap();
    }

    for j in 0..config.events {
        let event = format!("e{}", j);
        builder.event(event.as_str(), &format!("Episode {}", j), "episode").unwrap();
        let cast = rng.gen_range(config.min_cast..=config.max_cast);
        for member in ids.choose_multiple(&mut rng, cast) {
            builder.membership(member.as_str(), event.as_str()).unwrap();
        }
    }

    builder.build()
}
