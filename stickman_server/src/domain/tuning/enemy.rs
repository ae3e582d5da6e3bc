//! Gameplay tuning for enemies and the pickups placed alongside them.

/// Walking speed of a slime in pixels per tick.
pub const SLIME_SPEED: f64 = 0.5;

pub const SLIME_WIDTH: f64 = 26.0;
pub const SLIME_HEIGHT: f64 = 18.0;

/// Score awarded for squashing or shooting a slime.
pub const SLIME_KILL_SCORE: i64 = 100;

pub const MUSHROOM_WIDTH: f64 = 20.0;
pub const MUSHROOM_HEIGHT: f64 = 20.0;

pub const FLAG_WIDTH: f64 = 16.0;
pub const FLAG_HEIGHT: f64 = 48.0;
