// Domain layer: core simulation types and rules.

pub mod bullet;
pub mod entity;
pub mod events;
pub mod level;
pub mod motion;
pub mod raycast;
pub mod slime;
pub mod snapshot;
pub mod stickman;
pub mod systems;
pub mod tuning;

#[cfg(test)]
pub(crate) mod test_support;

pub use entity::{Bounds, Entity, EntityId, Layer};
pub use events::GameEventSink;
pub use level::{HeroSpawn, Level, LevelLayout, SlimeSpawn};
pub use snapshot::{EntityKind, EntitySnapshot, HeroSnapshot};
pub use stickman::{PlayerSize, StickMan, UnknownSize};
