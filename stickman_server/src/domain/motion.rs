// Velocity state and the gravity step shared by every mover.

use crate::domain::entity::{Body, Obstacle, TickContext};
use crate::domain::raycast::{self, Vertical};
use crate::domain::tuning::world::{CEILING_Y, GRAVITY, GROUNDED_EPSILON};

/// Per-tick displacement. Positive y is downward.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Motion {
    pub x_velocity: f64,
    pub y_velocity: f64,
}

/// True when the body rests on the floor or on a solid.
pub fn is_grounded(body: &Body, obstacles: &[Obstacle], floor_height: f64) -> bool {
    raycast::vertical(body, Vertical::Down, obstacles, floor_height) < GROUNDED_EPSILON
}

/// Finalizes `motion.y_velocity` for this tick.
///
/// Airborne bodies accelerate downward; grounded bodies lose any downward speed
/// but keep an upward jump impulse. The result never exceeds the open gap in
/// its direction, so movers land flush instead of sinking into what they hit.
pub fn apply_gravity(body: &Body, motion: &mut Motion, ctx: &TickContext<'_>) {
    let below = raycast::vertical(body, Vertical::Down, ctx.obstacles, ctx.floor_height);
    if below > GROUNDED_EPSILON {
        motion.y_velocity += GRAVITY;
    } else if motion.y_velocity > 0.0 {
        motion.y_velocity = 0.0;
    }

    if motion.y_velocity > 0.0 {
        motion.y_velocity = motion.y_velocity.min(below);
    } else if motion.y_velocity < 0.0 {
        let above = raycast::vertical(body, Vertical::Up, ctx.obstacles, CEILING_Y);
        motion.y_velocity = motion.y_velocity.max(-above);
    }
}

/// Moves the body by its vertical velocity.
pub fn integrate_y(body: &mut Body, motion: &Motion) {
    body.bounds.y += motion.y_velocity;
}

/// Moves the body by its horizontal velocity.
pub fn integrate_x(body: &mut Body, motion: &Motion) {
    body.bounds.x += motion.x_velocity;
}
