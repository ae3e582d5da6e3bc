//! Gameplay tuning shared by every mover.
//!
//! Units are pixels and ticks: velocities are per-tick displacements.

/// Downward acceleration added to an airborne mover each tick.
pub const GRAVITY: f64 = 0.1;

/// A downward gap smaller than this counts as standing on something.
pub const GROUNDED_EPSILON: f64 = 0.05;

/// Overlap thinner than this does not put a solid in a raycast's lane, so a
/// body resting within rounding error of a surface can still move along it.
pub const CONTACT_SKIN: f64 = 1e-6;

/// Top edge of every level; upward motion stops here.
pub const CEILING_Y: f64 = 0.0;
