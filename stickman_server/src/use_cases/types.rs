// Use-case level inputs/outputs for the game loop.

use crate::domain::{EntitySnapshot, HeroSnapshot};
use crate::use_cases::manager::GameError;
use tokio::sync::oneshot;

/// Player commands delivered by clients between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Stop,
    Jump,
    Shoot,
}

#[derive(Debug)]
pub enum GameEvent {
    Command { client_id: u64, command: Command },
    Save { reply: oneshot::Sender<()> },
    Load { reply: oneshot::Sender<Result<(), GameError>> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// Progress summary published whenever it changes.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub status: GameStatus,
    // 1-based level number.
    pub level: usize,
    pub lives: u32,
    pub score: i64,
    pub total_score: i64,
}

#[derive(Debug, Clone)]
pub struct WorldUpdate {
    pub tick: u64,
    pub state: GameState,
    pub level_ticks: u64,
    pub hero: HeroSnapshot,
    pub entities: Vec<EntitySnapshot>,
}
