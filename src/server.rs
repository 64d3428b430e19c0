use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::error;

use crate::bot::BotAdapter;
use crate::platform::telegram::TelegramApi;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Routes for the Telegram webhook, nested under `/telegram`.
pub fn router<A: TelegramApi>(adapter: Arc<BotAdapter<A>>) -> Router {
    let telegram = Router::new()
        .route("/health", get(health))
        .route("/webhook", post(webhook::<A>))
        .with_state(adapter);

    Router::new().nest("/telegram", telegram)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Telegram bot service is running",
    })
}

async fn webhook<A: TelegramApi>(
    State(adapter): State<Arc<BotAdapter<A>>>,
    body: Bytes,
) -> (StatusCode, &'static str) {
    match adapter.dispatch(&body).await {
        Ok(()) => (StatusCode::OK, "OK"),
        Err(e) => {
            error!("Error processing webhook: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error processing webhook")
        }
    }
}
