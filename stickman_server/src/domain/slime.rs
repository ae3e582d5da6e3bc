// Ground enemy: walks back and forth, or toward the player when chasing.

use crate::domain::entity::{Body, Bounds, EntityId, Layer, TickContext};
use crate::domain::motion::{self, Motion};
use crate::domain::raycast::{self, Horizontal};
use crate::domain::tuning::enemy::{SLIME_HEIGHT, SLIME_SPEED, SLIME_WIDTH};

#[derive(Debug, Clone, PartialEq)]
pub struct Slime {
    pub body: Body,
    pub motion: Motion,
    heading: Horizontal,
    chases: bool,
}

impl Slime {
    pub fn new(id: EntityId, x: f64, y: f64, chases: bool) -> Self {
        let bounds = Bounds::new(x, y, SLIME_WIDTH, SLIME_HEIGHT);
        Self {
            body: Body::new(id, bounds, false, Layer::Foreground),
            motion: Motion::default(),
            heading: Horizontal::Left,
            chases,
        }
    }

    pub fn heading(&self) -> Horizontal {
        self.heading
    }

    pub fn chases(&self) -> bool {
        self.chases
    }

    pub fn tick(&mut self, ctx: &TickContext<'_>) {
        motion::apply_gravity(&self.body, &mut self.motion, ctx);
        motion::integrate_y(&mut self.body, &self.motion);

        if self.chases {
            let center = self.body.bounds.center_x();
            if ctx.hero_center_x < center {
                self.heading = Horizontal::Left;
            } else if ctx.hero_center_x > center {
                self.heading = Horizontal::Right;
            }
        }

        let mut gap = self.gap(self.heading, ctx);
        // Patrollers turn around at walls; chasers wait against them.
        if gap <= 0.0 && !self.chases {
            self.heading = self.heading.reversed();
            gap = self.gap(self.heading, ctx);
        }

        let speed = SLIME_SPEED.min(gap);
        self.motion.x_velocity = match self.heading {
            Horizontal::Left => -speed,
            Horizontal::Right => speed,
        };
        motion::integrate_x(&mut self.body, &self.motion);
    }

    /// Kills the slime; it is removed at the end of the frame.
    pub fn squash(&mut self) {
        self.body.deactivate();
    }

    fn gap(&self, heading: Horizontal, ctx: &TickContext<'_>) -> f64 {
        let boundary = match heading {
            Horizontal::Left => 0.0,
            Horizontal::Right => ctx.level_width,
        };
        raycast::horizontal(&self.body, heading, ctx.obstacles, boundary)
    }
}
