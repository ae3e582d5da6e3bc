// Framework bootstrap for the game server runtime.

use crate::frameworks::config;
use crate::frameworks::levels::{GameSetup, load_game};
use crate::interface_adapters::net::{
    load_handler, save_handler, status_handler, world_update_serializer, ws_handler,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::{GameEvent, GameManager, WorldUpdate, game::world_task};

use axum::{
    Router,
    extract::ws::Utf8Bytes,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::{io::Result, sync::Arc};
use tokio::sync::{broadcast, mpsc, watch};

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener, setup: GameSetup) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state(setup)?;
    let app = Router::new()
        .route("/ws", get(ws_handler))
        .route("/status", get(status_handler))
        .route("/save", post(save_handler))
        .route("/load", post(load_handler))
        .with_state(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let path = config::config_path();
    let setup = load_game(&path).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "failed to load game config");
        std::io::Error::other(e)
    })?;

    let address = SocketAddr::from(([127, 0, 0, 1], config::http_port()));

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, setup).await
}

fn build_state(setup: GameSetup) -> Result<Arc<AppState>> {
    let manager = GameManager::new(setup.layouts, setup.hero_lives)
        .map_err(|e| std::io::Error::other(format!("failed to initialize game: {e}")))?;

    // input_tx/rx: all client commands go to the single world task.
    let (input_tx, input_rx) = mpsc::channel::<GameEvent>(config::INPUT_CHANNEL_CAPACITY);
    // world_tx/rx: domain snapshots, consumed only by the serializer.
    let (world_tx, world_rx) =
        broadcast::channel::<WorldUpdate>(config::WORLD_BROADCAST_CAPACITY);
    // Serialized world updates shared across all connections.
    let (world_bytes_tx, _world_bytes_rx) =
        broadcast::channel::<Utf8Bytes>(config::WORLD_BROADCAST_CAPACITY);
    let (world_latest_tx, _world_latest_rx) = watch::channel::<Utf8Bytes>(Utf8Bytes::from(""));
    let (game_state_tx, _game_state_rx) = watch::channel(manager.state());

    let tick_interval = config::tick_interval();
    tracing::debug!(tick_ms = tick_interval.as_millis() as u64, "tick rate configured");

    tokio::spawn(world_task(
        input_rx,
        world_tx,
        game_state_tx.clone(),
        tick_interval,
        manager,
    ));
    tokio::spawn(world_update_serializer(
        world_rx,
        world_bytes_tx.clone(),
        world_latest_tx.clone(),
    ));

    Ok(Arc::new(AppState {
        input_tx,
        world_bytes_tx,
        world_latest_tx,
        game_state_tx,
    }))
}
