// The player-controlled stick figure.

use std::fmt;
use std::str::FromStr;

use crate::domain::bullet::Bullet;
use crate::domain::entity::{Body, Bounds, EntityId, Layer, Obstacle, TickContext};
use crate::domain::events::GameEventSink;
use crate::domain::motion::{self, Motion};
use crate::domain::raycast::{self, Horizontal};
use crate::domain::tuning::player::{
    BOUNCE_IMPULSE, HORIZONTAL_SPEED, JUMP_IMPULSE, LARGE_HEIGHT, LARGE_WIDTH, NORMAL_HEIGHT,
    NORMAL_WIDTH, UPGRADE_BONUS,
};
use crate::domain::tuning::projectile::{BULLET_HEIGHT, BULLET_WIDTH};

/// Size variants the player can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerSize {
    Normal,
    Large,
}

impl PlayerSize {
    /// `(width, height)` of the variant.
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            PlayerSize::Normal => (NORMAL_WIDTH, NORMAL_HEIGHT),
            PlayerSize::Large => (LARGE_WIDTH, LARGE_HEIGHT),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlayerSize::Normal => "normal",
            PlayerSize::Large => "large",
        }
    }
}

/// Size tag that is neither `normal` nor `large`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSize(pub String);

impl fmt::Display for UnknownSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown player size {:?} (expected \"normal\" or \"large\")", self.0)
    }
}

impl std::error::Error for UnknownSize {}

impl FromStr for PlayerSize {
    type Err = UnknownSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(PlayerSize::Normal),
            "large" => Ok(PlayerSize::Large),
            other => Err(UnknownSize(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StickMan {
    pub body: Body,
    pub motion: Motion,
    size: PlayerSize,

    // Held input; at most one is true.
    left: bool,
    right: bool,

    left_facing: bool,
    upgraded: bool,

    // Top-left corner captured at construction, restored on death.
    spawn_x: f64,
    spawn_y: f64,
}

impl StickMan {
    /// Places the figure with its feet on `ground_y` and its left edge on `x`.
    pub fn new(id: EntityId, x: f64, ground_y: f64, size: PlayerSize) -> Self {
        Self::with_upgrade(id, x, ground_y, size, false)
    }

    pub fn with_upgrade(
        id: EntityId,
        x: f64,
        ground_y: f64,
        size: PlayerSize,
        upgraded: bool,
    ) -> Self {
        let (width, height) = size.dimensions();
        let y = ground_y - height;
        Self {
            body: Body::new(id, Bounds::new(x, y, width, height), false, Layer::Foreground),
            motion: Motion::default(),
            size,
            left: false,
            right: false,
            left_facing: false,
            upgraded,
            spawn_x: x,
            spawn_y: y,
        }
    }

    pub fn size(&self) -> PlayerSize {
        self.size
    }

    pub fn is_left_facing(&self) -> bool {
        self.left_facing
    }

    pub fn upgraded(&self) -> bool {
        self.upgraded
    }

    pub fn holding_left(&self) -> bool {
        self.left
    }

    pub fn holding_right(&self) -> bool {
        self.right
    }

    pub fn spawn(&self) -> (f64, f64) {
        (self.spawn_x, self.spawn_y)
    }

    /// Gravity and vertical motion first, then horizontal motion from held input.
    pub fn tick(&mut self, ctx: &TickContext<'_>) {
        motion::apply_gravity(&self.body, &mut self.motion, ctx);
        motion::integrate_y(&mut self.body, &self.motion);

        self.motion.x_velocity = if self.left {
            let gap = raycast::horizontal(&self.body, Horizontal::Left, ctx.obstacles, 0.0);
            (-HORIZONTAL_SPEED).max(-gap)
        } else if self.right {
            let gap =
                raycast::horizontal(&self.body, Horizontal::Right, ctx.obstacles, ctx.level_width);
            HORIZONTAL_SPEED.min(gap)
        } else {
            0.0
        };
        motion::integrate_x(&mut self.body, &self.motion);
    }

    /// Holds left. Returns whether there is room to move left right now.
    pub fn move_left(&mut self, obstacles: &[Obstacle]) -> bool {
        self.left = true;
        self.right = false;
        self.left_facing = true;
        raycast::horizontal(&self.body, Horizontal::Left, obstacles, 0.0) > 0.0
    }

    /// Holds right. Returns whether there is room before `level_width`.
    pub fn move_right(&mut self, obstacles: &[Obstacle], level_width: f64) -> bool {
        self.right = true;
        self.left = false;
        self.left_facing = false;
        raycast::horizontal(&self.body, Horizontal::Right, obstacles, level_width) > 0.0
    }

    pub fn stop(&mut self) -> bool {
        self.motion.x_velocity = 0.0;
        self.left = false;
        self.right = false;
        true
    }

    pub fn can_jump(&self, obstacles: &[Obstacle], floor_height: f64) -> bool {
        motion::is_grounded(&self.body, obstacles, floor_height)
    }

    pub fn jump(&mut self, obstacles: &[Obstacle], floor_height: f64) -> bool {
        if !self.can_jump(obstacles, floor_height) {
            return false;
        }
        self.motion.y_velocity = -JUMP_IMPULSE;
        true
    }

    /// Small hop after landing on an enemy.
    pub fn bounce(&mut self) {
        self.motion.y_velocity = -BOUNCE_IMPULSE;
    }

    /// Not guarded: every call awards the bonus again.
    pub fn upgrade(&mut self, events: &mut dyn GameEventSink) {
        self.upgraded = true;
        events.score_changed(UPGRADE_BONUS);
    }

    /// Costs a life and returns to the spawn point. Velocity, size and upgrade
    /// state are kept.
    pub fn die(&mut self, events: &mut dyn GameEventSink) {
        events.life_lost();
        self.body.bounds.x = self.spawn_x;
        self.body.bounds.y = self.spawn_y;
    }

    pub fn next_level(&self, events: &mut dyn GameEventSink) {
        events.level_complete();
    }

    /// Fires from the facing edge at mid height. Only upgraded players can shoot.
    pub fn shoot(&self, id: EntityId) -> Option<Bullet> {
        if !self.upgraded {
            return None;
        }
        let bounds = &self.body.bounds;
        let y = bounds.center_y() - BULLET_HEIGHT / 2.0;
        let bullet = if self.left_facing {
            Bullet::new(id, bounds.left() - BULLET_WIDTH, y, true)
        } else {
            Bullet::new(id, bounds.right(), y, false)
        };
        Some(bullet)
    }
}
