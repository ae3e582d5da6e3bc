use super::manager::GameManager;
use super::types::{GameEvent, GameState, WorldUpdate};
use std::time::Duration;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::sync::{broadcast, mpsc, watch};
use tracing::{debug, info};

/// Owns the game and drives it at a fixed tick rate.
///
/// Events queued between ticks are applied before the next frame is simulated.
/// Exits once every input sender is dropped.
pub async fn world_task(
    mut input_rx: mpsc::Receiver<GameEvent>,
    world_tx: broadcast::Sender<WorldUpdate>,
    game_state_tx: watch::Sender<GameState>,
    tick_interval: Duration,
    mut game: GameManager,
) {
    let mut tick: u64 = 0;
    let mut interval = tokio::time::interval(tick_interval);
    let _ = game_state_tx.send(game.state());
    info!(
        levels = game.level_count(),
        lives = game.lives(),
        tick_ms = tick_interval.as_millis() as u64,
        "world task started"
    );

    loop {
        interval.tick().await;

        loop {
            match input_rx.try_recv() {
                Ok(ev) => handle_event(&mut game, ev),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    info!(tick, "input channel closed; world task exiting");
                    return;
                }
            }
        }

        game.tick();
        tick += 1;

        let state = game.state();
        game_state_tx.send_if_modified(|current| {
            if *current == state {
                return false;
            }
            *current = state;
            true
        });

        // No subscribers is fine; updates are simply dropped.
        let _ = world_tx.send(game.world_update(tick));
    }
}

fn handle_event(game: &mut GameManager, ev: GameEvent) {
    match ev {
        GameEvent::Command { client_id, command } => {
            let accepted = game.apply(command);
            debug!(client_id, ?command, accepted, "command applied");
        }
        GameEvent::Save { reply } => {
            game.save();
            let _ = reply.send(());
        }
        GameEvent::Load { reply } => {
            let _ = reply.send(game.load());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HeroSpawn, LevelLayout, PlayerSize};
    use crate::use_cases::{Command, GameError, GameStatus};
    use tokio::sync::oneshot;

    fn open_field() -> LevelLayout {
        LevelLayout {
            width: 2000.0,
            floor_height: 400.0,
            hero: HeroSpawn {
                x: 100.0,
                y: 400.0,
                size: PlayerSize::Large,
            },
            platforms: Vec::new(),
            slimes: Vec::new(),
            mushrooms: Vec::new(),
            flag: None,
        }
    }

    fn spawn_world() -> (
        mpsc::Sender<GameEvent>,
        broadcast::Receiver<WorldUpdate>,
        watch::Receiver<GameState>,
    ) {
        let game = GameManager::new(vec![open_field()], 3).expect("levels");
        let (input_tx, input_rx) = mpsc::channel(16);
        let (world_tx, world_rx) = broadcast::channel(256);
        let (state_tx, state_rx) = watch::channel(game.state());
        tokio::spawn(world_task(
            input_rx,
            world_tx,
            state_tx,
            Duration::from_millis(1),
            game,
        ));
        (input_tx, world_rx, state_rx)
    }

    #[tokio::test]
    async fn broadcasts_world_updates_with_increasing_ticks() {
        let (_input_tx, mut world_rx, state_rx) = spawn_world();

        let first = world_rx.recv().await.expect("first update");
        let second = world_rx.recv().await.expect("second update");

        assert!(second.tick > first.tick);
        assert_eq!(second.hero.size, PlayerSize::Large);
        assert_eq!(state_rx.borrow().status, GameStatus::Playing);
    }

    #[tokio::test]
    async fn commands_move_the_hero_between_ticks() {
        let (input_tx, mut world_rx, _state_rx) = spawn_world();
        input_tx
            .send(GameEvent::Command {
                client_id: 1,
                command: Command::MoveRight,
            })
            .await
            .expect("world task running");

        let mut moved = false;
        for _ in 0..50 {
            let update = world_rx.recv().await.expect("update");
            if update.hero.x > 100.0 {
                moved = true;
                break;
            }
        }
        assert!(moved);
    }

    #[tokio::test]
    async fn save_and_load_round_trip_through_the_channel() {
        let (input_tx, _world_rx, _state_rx) = spawn_world();

        let (reply, loaded) = oneshot::channel();
        input_tx
            .send(GameEvent::Load { reply })
            .await
            .expect("world task running");
        assert_eq!(loaded.await.expect("reply"), Err(GameError::NothingSaved));

        let (reply, saved) = oneshot::channel();
        input_tx
            .send(GameEvent::Save { reply })
            .await
            .expect("world task running");
        saved.await.expect("reply");

        let (reply, loaded) = oneshot::channel();
        input_tx
            .send(GameEvent::Load { reply })
            .await
            .expect("world task running");
        assert_eq!(loaded.await.expect("reply"), Ok(()));
    }
}
