//! Gameplay tuning for projectiles.

/// Horizontal speed of every bullet in pixels per tick.
pub const BULLET_SPEED: f64 = 2.0;

pub const BULLET_WIDTH: f64 = 10.0;
pub const BULLET_HEIGHT: f64 = 10.0;
