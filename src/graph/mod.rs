//! Core graph data structures

mod builder;
mod engine;
mod event;
mod pattern;
mod person;
mod store;


pub use builder::{BuildError, StoreBuilder};
pub use engine::{GraphId, SixDegrees, SixDegreesError, SixDegreesResult};
pub use event::{Event, EventId, EventIdx};
pub use pattern::NamePattern;
pub use person::{Person, PersonId, PersonIdx};
pub use store::{EntityStore, StoreMetadata};
