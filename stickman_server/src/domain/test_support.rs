// Shared fixtures for domain unit tests.

use crate::domain::events::GameEventSink;

/// Sink that tallies every event it receives.
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    pub score: i64,
    pub lives_lost: u32,
    pub completions: u32,
}

impl GameEventSink for RecordingSink {
    fn score_changed(&mut self, delta: i64) {
        self.score += delta;
    }

    fn life_lost(&mut self) {
        self.lives_lost += 1;
    }

    fn level_complete(&mut self) {
        self.completions += 1;
    }
}
