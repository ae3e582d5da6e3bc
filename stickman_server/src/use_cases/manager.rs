// Level sequencing, win/loss, and save/restore around the level simulation.

use std::fmt;

use super::progress::Progress;
use super::types::{Command, GameState, GameStatus, WorldUpdate};
use crate::domain::{EntitySnapshot, HeroSnapshot, Level, LevelLayout};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    NoLevels,
    NothingSaved,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NoLevels => write!(f, "at least one level is required"),
            GameError::NothingSaved => write!(f, "no saved game to load"),
        }
    }
}

impl std::error::Error for GameError {}

// Point-in-time copy of a session. Lives are not part of a save.
#[derive(Debug, Clone)]
struct SavedGame {
    level: Level,
    level_index: usize,
    current_score: i64,
    previous_score: i64,
}

/// Runs a sequence of levels and tracks the player's progress through them.
#[derive(Debug)]
pub struct GameManager {
    layouts: Vec<LevelLayout>,
    level: Level,
    progress: Progress,
    status: GameStatus,
    saves: Vec<SavedGame>,
}

impl GameManager {
    pub fn new(layouts: Vec<LevelLayout>, hero_lives: u32) -> Result<Self, GameError> {
        let first = layouts.first().ok_or(GameError::NoLevels)?;
        let level = Level::build(first);
        let status = if hero_lives == 0 {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        };
        Ok(Self {
            layouts,
            level,
            progress: Progress::new(hero_lives),
            status,
            saves: Vec::new(),
        })
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    /// 1-based number of the current level.
    pub fn level_number(&self) -> usize {
        self.progress.level_index() + 1
    }

    pub fn level_count(&self) -> usize {
        self.layouts.len()
    }

    pub fn lives(&self) -> u32 {
        self.progress.lives()
    }

    pub fn current_score(&self) -> i64 {
        self.progress.current_score()
    }

    pub fn previous_score(&self) -> i64 {
        self.progress.previous_score()
    }

    pub fn total_score(&self) -> i64 {
        self.progress.total_score()
    }

    /// Frames since the current level started.
    pub fn level_ticks(&self) -> u64 {
        self.level.ticks()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn state(&self) -> GameState {
        GameState {
            status: self.status,
            level: self.level_number(),
            lives: self.lives(),
            score: self.current_score(),
            total_score: self.total_score(),
        }
    }

    pub fn world_update(&self, tick: u64) -> WorldUpdate {
        WorldUpdate {
            tick,
            state: self.state(),
            level_ticks: self.level.ticks(),
            hero: HeroSnapshot::from(self.level.hero()),
            entities: self
                .level
                .entities()
                .iter()
                .map(EntitySnapshot::from)
                .collect(),
        }
    }

    /// Simulates one frame. Does nothing once the game is won or lost.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        self.level.tick(&mut self.progress);

        if self.progress.lives() == 0 {
            self.status = GameStatus::Lost;
            info!(
                level = self.level_number(),
                total_score = self.total_score(),
                "game lost"
            );
            return;
        }

        if self.progress.take_advance() {
            self.advance();
        }
    }

    fn advance(&mut self) {
        let next = self.progress.level_index() + 1;
        match self.layouts.get(next) {
            Some(layout) => {
                self.progress.begin_level(next);
                self.level = Level::build(layout);
                info!(
                    level = next + 1,
                    total_score = self.total_score(),
                    "level started"
                );
            }
            None => {
                self.status = GameStatus::Won;
                info!(total_score = self.total_score(), "game won");
            }
        }
    }

    /// Routes a player command to the level. Rejected unless playing.
    pub fn apply(&mut self, command: Command) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        match command {
            Command::MoveLeft => self.level.move_left(),
            Command::MoveRight => self.level.move_right(),
            Command::Stop => self.level.stop(),
            Command::Jump => self.level.jump(),
            Command::Shoot => self.level.shoot(),
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.apply(Command::MoveLeft)
    }

    pub fn move_right(&mut self) -> bool {
        self.apply(Command::MoveRight)
    }

    pub fn stop(&mut self) -> bool {
        self.apply(Command::Stop)
    }

    pub fn jump(&mut self) -> bool {
        self.apply(Command::Jump)
    }

    pub fn shoot(&mut self) -> bool {
        self.apply(Command::Shoot)
    }

    /// Stores an independent copy of the session.
    pub fn save(&mut self) {
        self.saves.push(SavedGame {
            level: self.level.clone(),
            level_index: self.progress.level_index(),
            current_score: self.progress.current_score(),
            previous_score: self.progress.previous_score(),
        });
        debug!(
            saves = self.saves.len(),
            level = self.level_number(),
            "game saved"
        );
    }

    /// Restores the most recent save; the save stays available.
    pub fn load(&mut self) -> Result<(), GameError> {
        let saved = self.saves.last().cloned().ok_or(GameError::NothingSaved)?;
        self.level = saved.level;
        self.progress
            .restore(saved.level_index, saved.current_score, saved.previous_score);
        self.status = if self.progress.lives() == 0 {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        };
        info!(level = self.level_number(), "game loaded");
        Ok(())
    }
}
