// Use cases layer: application workflows for the game server.

pub mod game;
pub mod manager;
pub mod progress;
pub mod types;

pub use manager::{GameError, GameManager};
pub use types::{Command, GameEvent, GameState, GameStatus, WorldUpdate};
