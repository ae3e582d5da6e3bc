// Shared entity primitives: identity, bounds, and the per-tick world view.

use crate::domain::bullet::Bullet;
use crate::domain::slime::Slime;
use crate::domain::tuning::enemy::{FLAG_HEIGHT, FLAG_WIDTH, MUSHROOM_HEIGHT, MUSHROOM_WIDTH};

/// Identifier unique within one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

/// Axis-aligned rectangle. `(x, y)` is the top-left corner and y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// True when the vertical extents share more than an edge.
    pub fn overlaps_vertically(&self, other: &Bounds) -> bool {
        self.top() < other.bottom() && other.top() < self.bottom()
    }

    /// True when the horizontal extents share more than an edge.
    pub fn overlaps_horizontally(&self, other: &Bounds) -> bool {
        self.left() < other.right() && other.left() < self.right()
    }

    pub fn intersects(&self, other: &Bounds) -> bool {
        self.overlaps_vertically(other) && self.overlaps_horizontally(other)
    }
}

/// Draw-order tag. Carried for renderers; the simulation ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Background,
    Foreground,
    Effect,
}

/// State every simulated object carries.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub id: EntityId,
    pub bounds: Bounds,
    // False once the entity is scheduled for removal; never set back.
    pub active: bool,
    // Solid bodies block raycasts.
    pub solid: bool,
    pub layer: Layer,
}

impl Body {
    pub fn new(id: EntityId, bounds: Bounds, solid: bool, layer: Layer) -> Self {
        Self {
            id,
            bounds,
            active: true,
            solid,
            layer,
        }
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn obstacle(&self) -> Obstacle {
        Obstacle {
            id: self.id,
            bounds: self.bounds,
            solid: self.solid,
        }
    }
}

/// Frozen view of one entity, captured before anything ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub id: EntityId,
    pub bounds: Bounds,
    pub solid: bool,
}

/// Everything an entity may read while ticking.
#[derive(Debug, Clone, Copy)]
pub struct TickContext<'a> {
    // Pre-tick snapshot of every active entity, the ticking one included.
    pub obstacles: &'a [Obstacle],
    // Player's horizontal centre at the start of the tick.
    pub hero_center_x: f64,
    pub floor_height: f64,
    pub level_width: f64,
}

/// Solid static block the player can stand on or bump into.
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub body: Body,
}

impl Platform {
    pub fn new(id: EntityId, bounds: Bounds) -> Self {
        Self {
            body: Body::new(id, bounds, true, Layer::Background),
        }
    }
}

/// Pickup that upgrades the player.
#[derive(Debug, Clone, PartialEq)]
pub struct Mushroom {
    pub body: Body,
}

impl Mushroom {
    pub fn new(id: EntityId, x: f64, y: f64) -> Self {
        let bounds = Bounds::new(x, y, MUSHROOM_WIDTH, MUSHROOM_HEIGHT);
        Self {
            body: Body::new(id, bounds, false, Layer::Foreground),
        }
    }
}

/// Touching the flag finishes the level.
#[derive(Debug, Clone, PartialEq)]
pub struct Flag {
    pub body: Body,
}

impl Flag {
    pub fn new(id: EntityId, x: f64, y: f64) -> Self {
        let bounds = Bounds::new(x, y, FLAG_WIDTH, FLAG_HEIGHT);
        Self {
            body: Body::new(id, bounds, false, Layer::Foreground),
        }
    }
}

/// Every non-player entity a level can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Platform(Platform),
    Slime(Slime),
    Mushroom(Mushroom),
    Flag(Flag),
    Bullet(Bullet),
}

impl Entity {
    pub fn body(&self) -> &Body {
        match self {
            Entity::Platform(p) => &p.body,
            Entity::Slime(s) => &s.body,
            Entity::Mushroom(m) => &m.body,
            Entity::Flag(f) => &f.body,
            Entity::Bullet(b) => &b.body,
        }
    }

    pub fn body_mut(&mut self) -> &mut Body {
        match self {
            Entity::Platform(p) => &mut p.body,
            Entity::Slime(s) => &mut s.body,
            Entity::Mushroom(m) => &mut m.body,
            Entity::Flag(f) => &mut f.body,
            Entity::Bullet(b) => &mut b.body,
        }
    }

    pub fn is_active(&self) -> bool {
        self.body().active
    }

    /// Advances the entity by one frame. Static entities do nothing.
    pub fn tick(&mut self, ctx: &TickContext<'_>) {
        match self {
            Entity::Slime(slime) => slime.tick(ctx),
            Entity::Bullet(bullet) => bullet.tick(),
            Entity::Platform(_) | Entity::Mushroom(_) | Entity::Flag(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(10.0, 0.0, 10.0, 10.0);
        let c = Bounds::new(0.0, 10.0, 10.0, 10.0);

        assert!(!a.overlaps_horizontally(&b));
        assert!(a.overlaps_vertically(&b));
        assert!(!a.overlaps_vertically(&c));
        assert!(!a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn deactivated_entities_report_inactive() {
        let mut entity = Entity::Mushroom(Mushroom::new(EntityId(4), 0.0, 0.0));
        assert!(entity.is_active());

        entity.body_mut().deactivate();
        assert!(!entity.is_active());
    }
}
