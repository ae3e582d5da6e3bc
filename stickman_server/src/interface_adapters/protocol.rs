// Wire protocol DTOs and conversions for public game server messages.

use crate::domain::{EntityKind, EntitySnapshot, HeroSnapshot, Layer};
use crate::use_cases::{Command, GameState, GameStatus, WorldUpdate};
use serde::{Deserialize, Serialize};

/// Messages the server sends to connected clients over the WebSocket.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum ServerMessage {
    // Assigned once, right after the socket opens.
    Identity { client_id: String },
    // Snapshot of the level for a given tick.
    WorldUpdate(WorldUpdateDto),
    // Sent on connect and whenever status, level, lives or score change.
    GameState(GameStateDto),
}

/// Messages the client sends to the server over the WebSocket.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ClientMessage {
    Command(CommandDto),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum CommandDto {
    MoveLeft,
    MoveRight,
    Stop,
    Jump,
    Shoot,
}

impl From<CommandDto> for Command {
    fn from(command: CommandDto) -> Self {
        match command {
            CommandDto::MoveLeft => Command::MoveLeft,
            CommandDto::MoveRight => Command::MoveRight,
            CommandDto::Stop => Command::Stop,
            CommandDto::Jump => Command::Jump,
            CommandDto::Shoot => Command::Shoot,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub enum GameStatusDto {
    Playing,
    Won,
    Lost,
}

impl From<GameStatus> for GameStatusDto {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::Playing => GameStatusDto::Playing,
            GameStatus::Won => GameStatusDto::Won,
            GameStatus::Lost => GameStatusDto::Lost,
        }
    }
}

/// Progress summary; also the body of `GET /status`.
#[derive(Debug, Clone, Serialize)]
pub struct GameStateDto {
    pub status: GameStatusDto,
    pub level: usize,
    pub lives: u32,
    pub score: i64,
    pub total_score: i64,
}

impl From<&GameState> for GameStateDto {
    fn from(state: &GameState) -> Self {
        Self {
            status: state.status.into(),
            level: state.level,
            lives: state.lives,
            score: state.score,
            total_score: state.total_score,
        }
    }
}

/// Snapshot of the level sent to clients on each tick.
#[derive(Debug, Clone, Serialize)]
pub struct WorldUpdateDto {
    pub tick: u64,
    pub level: usize,
    pub lives: u32,
    pub score: i64,
    pub total_score: i64,
    pub level_ticks: u64,
    pub hero: HeroDto,
    pub entities: Vec<EntityDto>,
}

impl From<WorldUpdate> for WorldUpdateDto {
    fn from(update: WorldUpdate) -> Self {
        Self {
            tick: update.tick,
            level: update.state.level,
            lives: update.state.lives,
            score: update.state.score,
            total_score: update.state.total_score,
            level_ticks: update.level_ticks,
            hero: HeroDto::from(&update.hero),
            entities: update.entities.iter().map(EntityDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroDto {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub size: &'static str,
    pub left_facing: bool,
    pub upgraded: bool,
}

impl From<&HeroSnapshot> for HeroDto {
    fn from(hero: &HeroSnapshot) -> Self {
        Self {
            id: hero.id,
            x: hero.x,
            y: hero.y,
            width: hero.width,
            height: hero.height,
            size: hero.size.as_str(),
            left_facing: hero.left_facing,
            upgraded: hero.upgraded,
        }
    }
}

/// Flattened entity state for wire transmission in world updates.
#[derive(Debug, Clone, Serialize)]
pub struct EntityDto {
    pub id: u64,
    pub kind: &'static str,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub layer: &'static str,
}

impl From<&EntitySnapshot> for EntityDto {
    fn from(entity: &EntitySnapshot) -> Self {
        let kind = match entity.kind {
            EntityKind::Platform => "platform",
            EntityKind::Slime => "slime",
            EntityKind::Mushroom => "mushroom",
            EntityKind::Flag => "flag",
            EntityKind::Bullet => "bullet",
        };
        let layer = match entity.layer {
            Layer::Background => "background",
            Layer::Foreground => "foreground",
            Layer::Effect => "effect",
        };
        Self {
            id: entity.id,
            kind,
            x: entity.x,
            y: entity.y,
            width: entity.width,
            height: entity.height,
            layer,
        }
    }
}
