// Gameplay tuning, one module per entity kind.
//
// Keep this separate from runtime/server configuration (tick rates, ports, file paths).

pub mod enemy;
pub mod player;
pub mod projectile;
pub mod world;
