//! HTTP surface of the snake: info handshake, lifecycle hooks and `/move`.
//!
//! All logging for a turn happens here, around the pure engine calls.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::config::Config;
use crate::engine::Direction;
use crate::game::GameState;
use crate::strategy::{decide, MoveSelector};

// Shared, read-only per-process state. Games never write into it.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub selector: Arc<dyn MoveSelector>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let selector = config.strategy.selector();
        Self {
            config: Arc::new(config),
            selector,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct InfoResponse {
    pub apiversion: String,
    pub author: String,
    pub color: String,
    pub head: String,
    pub tail: String,
    pub version: String,
}

#[derive(Serialize, Debug)]
pub struct MoveResponse {
    pub r#move: Direction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shout: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_info))
        .route("/start", post(handle_start))
        .route("/move", post(handle_move))
        .route("/end", post(handle_end))
        .with_state(state)
}

pub async fn handle_info(State(state): State<AppState>) -> Json<InfoResponse> {
    tracing::info!("INFO");
    let config = &state.config;
    Json(InfoResponse {
        apiversion: "1".into(),
        author: config.author.clone(),
        color: config.color.clone(),
        head: config.head.clone(),
        tail: config.tail.clone(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

pub async fn handle_start(Json(req): Json<GameState>) -> StatusCode {
    tracing::info!(game = %req.game.id, "GAME START");
    StatusCode::OK
}

pub async fn handle_end(Json(req): Json<GameState>) -> StatusCode {
    tracing::info!(game = %req.game.id, turn = req.turn, "GAME OVER");
    StatusCode::OK
}

pub async fn handle_move(
    State(state): State<AppState>,
    Json(req): Json<GameState>,
) -> Json<MoveResponse> {
    let decision = decide(&req, state.selector.as_ref());
    tracing::debug!(game = %req.game.id, turn = req.turn, safe = %decision.safe, "classified");

    if decision.fallback {
        tracing::warn!(
            "MOVE {}: No safe moves detected! Moving {}",
            req.turn,
            decision.direction
        );
    } else {
        tracing::info!("MOVE {}: {}", req.turn, decision.direction);
    }

    Json(MoveResponse {
        r#move: decision.direction,
        shout: state.config.shout.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::SelectionStrategy;

    fn request(json: &str) -> GameState {
        serde_json::from_str(json).unwrap()
    }

    const OPEN_BOARD: &str = r#"{
        "game": {"id": "g1"},
        "turn": 3,
        "board": {
            "height": 11, "width": 11,
            "food": [{"x": 8, "y": 5}, {"x": 1, "y": 1}],
            "hazards": [],
            "snakes": [
                {"id": "me", "health": 97, "body": [{"x": 5, "y": 5}, {"x": 5, "y": 4}, {"x": 5, "y": 3}]}
            ]
        },
        "you": {"id": "me", "health": 97, "body": [{"x": 5, "y": 5}, {"x": 5, "y": 4}, {"x": 5, "y": 3}]}
    }"#;

    const BOXED_IN: &str = r#"{
        "turn": 40,
        "board": {
            "height": 11, "width": 11,
            "food": [],
            "snakes": [
                {"id": "me", "body": [{"x": 0, "y": 0}, {"x": 0, "y": 1}]},
                {"id": "enemy", "body": [{"x": 1, "y": 0}, {"x": 1, "y": 1}, {"x": 1, "y": 2}]}
            ]
        },
        "you": {"id": "me", "body": [{"x": 0, "y": 0}, {"x": 0, "y": 1}]}
    }"#;

    #[tokio::test]
    async fn test_move_seeks_food() {
        let state = AppState::new(Config::default());
        let Json(res) = handle_move(State(state), Json(request(OPEN_BOARD))).await;
        assert_eq!(res.r#move, Direction::Right);

        let body = serde_json::to_value(&res).unwrap();
        assert_eq!(body, serde_json::json!({"move": "right"}));
    }

    #[tokio::test]
    async fn test_move_without_safe_options() {
        let state = AppState::new(Config::default());
        let Json(res) = handle_move(State(state), Json(request(BOXED_IN))).await;
        assert_eq!(res.r#move, Direction::Down);
    }

    #[tokio::test]
    async fn test_random_strategy_and_shout() {
        let config = Config {
            strategy: SelectionStrategy::Random,
            shout: Some("hiss".to_string()),
            ..Config::default()
        };
        let state = AppState::new(config);
        assert_eq!(state.selector.name(), "random");

        let Json(res) = handle_move(State(state), Json(request(OPEN_BOARD))).await;
        assert_ne!(res.r#move, Direction::Down);
        assert_eq!(res.shout.as_deref(), Some("hiss"));
    }

    #[tokio::test]
    async fn test_info() {
        let config = Config {
            color: "#6B3A3A".to_string(),
            head: "rose".to_string(),
            ..Config::default()
        };
        let Json(info) = handle_info(State(AppState::new(config))).await;
        assert_eq!(info.apiversion, "1");
        assert_eq!(info.color, "#6B3A3A");
        assert_eq!(info.head, "rose");
        assert_eq!(info.tail, "default");
    }

    #[tokio::test]
    async fn test_lifecycle_hooks_ack() {
        assert_eq!(handle_start(Json(request(OPEN_BOARD))).await, StatusCode::OK);
        assert_eq!(handle_end(Json(request(OPEN_BOARD))).await, StatusCode::OK);
    }

    #[test]
    fn test_router_builds() {
        let _ = router(AppState::new(Config::default()));
    }
}
