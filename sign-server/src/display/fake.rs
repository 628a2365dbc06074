//! Fake display server for testing without the LCD.
//!
//! Accepts the same write requests as the real display server, remembers
//! the latest one and logs it.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::{Color, WriteRequest};

/// What the fake LCD is currently showing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LcdState {
    pub message: String,
    pub color: Option<Color>,
    pub writes: u64,
}

/// In-memory stand-in for the LCD.
#[derive(Debug, Clone, Default)]
pub struct FakeDisplay {
    state: Arc<RwLock<LcdState>>,
}

impl FakeDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the screen, then show `request`.
    pub async fn apply(&self, request: WriteRequest) {
        let mut state = self.state.write().await;
        state.message.clear();

        info!(color = %request.color, "set color");
        state.color = Some(request.color);

        info!(message = %request.message, "set message");
        state.message = request.message;
        state.writes += 1;
    }

    pub async fn state(&self) -> LcdState {
        self.state.read().await.clone()
    }
}

/// Create the fake display router.
///
/// Colour channels outside `0.0..=1.0` are rejected by the JSON extractor.
pub fn create_router(display: FakeDisplay) -> Router {
    Router::new()
        .route("/write", post(write))
        .route("/state", get(state))
        .with_state(display)
}

async fn write(State(display): State<FakeDisplay>, Json(request): Json<WriteRequest>) -> StatusCode {
    display.apply(request).await;
    StatusCode::OK
}

async fn state(State(display): State<FakeDisplay>) -> Json<LcdState> {
    Json(display.state().await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn write_replaces_screen() {
        let display = FakeDisplay::new();

        let status = write(
            State(display.clone()),
            Json(WriteRequest::new("38-Geary\n5 mins", Color::RED)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        write(
            State(display.clone()),
            Json(WriteRequest::new("N-Ocean Beach\n2 & 9 mins", Color::YELLOW)),
        )
        .await;

        let Json(shown) = state(State(display)).await;
        assert_eq!(
            shown,
            LcdState {
                message: "N-Ocean Beach\n2 & 9 mins".into(),
                color: Some(Color::YELLOW),
                writes: 2,
            }
        );
    }

    #[tokio::test]
    async fn starts_blank() {
        let display = FakeDisplay::new();
        assert_eq!(display.state().await, LcdState::default());
    }
}
