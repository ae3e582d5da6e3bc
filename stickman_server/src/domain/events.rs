// Narrow notification port from the simulation to whoever tracks progress.

/// Receives the gameplay outcomes a level produces while ticking.
///
/// The player and level report through this instead of holding a reference to
/// their owner.
pub trait GameEventSink {
    fn score_changed(&mut self, delta: i64);
    fn life_lost(&mut self);
    fn level_complete(&mut self);
}
