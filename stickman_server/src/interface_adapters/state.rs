use crate::use_cases::{GameEvent, GameState};
use axum::extract::ws::Utf8Bytes;
use tokio::sync::{broadcast, mpsc, watch};

#[derive(Clone)]
pub struct AppState {
    // Commands and save/load requests flowing into the world task.
    pub input_tx: mpsc::Sender<GameEvent>,
    // Serialized world updates, shared across all connections.
    pub world_bytes_tx: broadcast::Sender<Utf8Bytes>,
    // Latest serialized world update for lag recovery.
    pub world_latest_tx: watch::Sender<Utf8Bytes>,
    // Status, level, lives and scores; changes only on transitions.
    pub game_state_tx: watch::Sender<GameState>,
}
