use crate::interface_adapters::http::ErrorResponse;
use crate::interface_adapters::protocol::GameStateDto;
use crate::interface_adapters::state::AppState;
use crate::use_cases::{GameError, GameEvent};

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::{info, warn};

#[derive(Debug, serde::Serialize)]
struct SaveResponse {
    saved: bool,
}

#[derive(Debug, serde::Serialize)]
struct LoadResponse {
    loaded: bool,
}

fn world_unavailable() -> Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorResponse {
            error: "game loop unavailable".to_string(),
        }),
    )
        .into_response()
}

pub async fn status_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    // Clone out of the borrow before serializing.
    let current = state.game_state_tx.borrow().clone();
    Json(GameStateDto::from(&current))
}

pub async fn save_handler(State(state): State<Arc<AppState>>) -> Response {
    let (reply, done) = oneshot::channel();
    if state.input_tx.send(GameEvent::Save { reply }).await.is_err() {
        warn!("save requested but input channel is closed");
        return world_unavailable();
    }
    match done.await {
        Ok(()) => {
            info!("save completed");
            (StatusCode::CREATED, Json(SaveResponse { saved: true })).into_response()
        }
        Err(_) => world_unavailable(),
    }
}

pub async fn load_handler(State(state): State<Arc<AppState>>) -> Response {
    let (reply, done) = oneshot::channel();
    if state.input_tx.send(GameEvent::Load { reply }).await.is_err() {
        warn!("load requested but input channel is closed");
        return world_unavailable();
    }
    match done.await {
        Ok(Ok(())) => (StatusCode::OK, Json(LoadResponse { loaded: true })).into_response(),
        Ok(Err(e @ GameError::NothingSaved)) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
        Ok(Err(e)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
        Err(_) => world_unavailable(),
    }
}
