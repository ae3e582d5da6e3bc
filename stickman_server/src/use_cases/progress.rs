// Score, lives and level index for one play session.

use crate::domain::GameEventSink;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    lives: u32,
    // Score earned in the current level.
    current_score: i64,
    // Score carried over from finished levels.
    previous_score: i64,
    level_index: usize,
    pending_advance: bool,
}

impl Progress {
    pub fn new(lives: u32) -> Self {
        Self {
            lives,
            current_score: 0,
            previous_score: 0,
            level_index: 0,
            pending_advance: false,
        }
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn current_score(&self) -> i64 {
        self.current_score
    }

    pub fn previous_score(&self) -> i64 {
        self.previous_score
    }

    pub fn total_score(&self) -> i64 {
        self.previous_score + self.current_score
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    /// Returns whether the level was completed since the last call.
    pub fn take_advance(&mut self) -> bool {
        std::mem::take(&mut self.pending_advance)
    }

    /// Banks the current score and moves to `index`.
    pub fn begin_level(&mut self, index: usize) {
        self.previous_score += self.current_score;
        self.current_score = 0;
        self.level_index = index;
        self.pending_advance = false;
    }

    /// Rewinds everything except lives.
    pub fn restore(&mut self, level_index: usize, current_score: i64, previous_score: i64) {
        self.level_index = level_index;
        self.current_score = current_score;
        self.previous_score = previous_score;
        self.pending_advance = false;
    }
}

impl GameEventSink for Progress {
    fn score_changed(&mut self, delta: i64) {
        self.current_score += delta;
        debug!(delta, score = self.current_score, "score changed");
    }

    fn life_lost(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        info!(lives = self.lives, "life lost");
    }

    fn level_complete(&mut self) {
        self.pending_advance = true;
    }
}
