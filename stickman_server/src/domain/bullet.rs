// Straight-line projectile fired by an upgraded player.

use crate::domain::entity::{Body, Bounds, EntityId, Layer};
use crate::domain::motion::{self, Motion};
use crate::domain::tuning::projectile::{BULLET_HEIGHT, BULLET_SPEED, BULLET_WIDTH};

/// Non-solid, constant-velocity projectile. Collisions are resolved by the
/// level; the bullet only moves and can be stopped.
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub body: Body,
    pub motion: Motion,
    left: bool,
}

impl Bullet {
    pub fn new(id: EntityId, x: f64, y: f64, left: bool) -> Self {
        let bounds = Bounds::new(x, y, BULLET_WIDTH, BULLET_HEIGHT);
        Self {
            body: Body::new(id, bounds, false, Layer::Effect),
            motion: Motion {
                x_velocity: if left { -BULLET_SPEED } else { BULLET_SPEED },
                y_velocity: 0.0,
            },
            left,
        }
    }

    pub fn is_left(&self) -> bool {
        self.left
    }

    pub fn tick(&mut self) {
        motion::integrate_x(&mut self.body, &self.motion);
        motion::integrate_y(&mut self.body, &self.motion);
    }

    /// Marks the bullet for removal at the end of the frame.
    pub fn stop(&mut self) {
        self.body.deactivate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_bullet_moves_two_pixels_left_per_tick() {
        let mut bullet = Bullet::new(EntityId(1), 50.0, 20.0, true);
        assert_eq!(bullet.motion.x_velocity, -2.0);
        assert_eq!(bullet.motion.y_velocity, 0.0);

        bullet.tick();
        assert_eq!(bullet.body.bounds.x, 48.0);
        assert_eq!(bullet.body.bounds.y, 20.0);
    }

    #[test]
    fn right_bullet_keeps_its_speed() {
        let mut bullet = Bullet::new(EntityId(1), 0.0, 0.0, false);
        for _ in 0..5 {
            bullet.tick();
        }
        assert_eq!(bullet.body.bounds.x, 10.0);
        assert!(!bullet.body.solid);
    }

    #[test]
    fn stop_deactivates() {
        let mut bullet = Bullet::new(EntityId(1), 0.0, 0.0, false);
        bullet.stop();
        assert!(!bullet.body.active);
    }
}
