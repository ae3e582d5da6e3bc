// Read-only views of simulation state handed to the outer layers.

use crate::domain::entity::{Entity, Layer};
use crate::domain::stickman::{PlayerSize, StickMan};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Platform,
    Slime,
    Mushroom,
    Flag,
    Bullet,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntitySnapshot {
    pub id: u64,
    pub kind: EntityKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub layer: Layer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroSnapshot {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub size: PlayerSize,
    pub left_facing: bool,
    pub upgraded: bool,
}

impl From<&Entity> for EntitySnapshot {
    fn from(e: &Entity) -> Self {
        let kind = match e {
            Entity::Platform(_) => EntityKind::Platform,
            Entity::Slime(_) => EntityKind::Slime,
            Entity::Mushroom(_) => EntityKind::Mushroom,
            Entity::Flag(_) => EntityKind::Flag,
            Entity::Bullet(_) => EntityKind::Bullet,
        };
        let body = e.body();
        Self {
            id: body.id.0,
            kind,
            x: body.bounds.x,
            y: body.bounds.y,
            width: body.bounds.width,
            height: body.bounds.height,
            layer: body.layer,
        }
    }
}

impl From<&StickMan> for HeroSnapshot {
    fn from(h: &StickMan) -> Self {
        Self {
            id: h.body.id.0,
            x: h.body.bounds.x,
            y: h.body.bounds.y,
            width: h.body.bounds.width,
            height: h.body.bounds.height,
            size: h.size(),
            left_facing: h.is_left_facing(),
            upgraded: h.upgraded(),
        }
    }
}
