//! Gameplay tuning for the player-controlled stick figure.

/// Maximum horizontal speed in pixels per tick.
pub const HORIZONTAL_SPEED: f64 = 1.0;

/// Upward velocity applied by a successful jump.
pub const JUMP_IMPULSE: f64 = 4.0;

/// Upward velocity after squashing an enemy.
pub const BOUNCE_IMPULSE: f64 = 2.0;

pub const NORMAL_WIDTH: f64 = 24.0;
pub const NORMAL_HEIGHT: f64 = 40.0;

pub const LARGE_WIDTH: f64 = 36.0;
pub const LARGE_HEIGHT: f64 = 60.0;

/// Score awarded for each upgrade.
pub const UPGRADE_BONUS: i64 = 50;
