//! Common test utilities for SixDegrees integration tests
//!
//! Graph fixtures, a seeded random graph generator and an independent
//! person-to-person BFS used as the reference distance.

pub mod graph_builder;
pub mod reference;

pub use graph_builder::{random_graph, scenario, RandomGraphConfig};
pub use reference::{reference_distance, validate_chain};
