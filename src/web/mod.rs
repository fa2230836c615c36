// HTTP surface
// Takes the structural place of a command layer: one module per user
// action, every failure becomes a user-visible message

pub mod page;
pub mod search;
pub mod summarize;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::sync::Mutex;
use tower_http::timeout::TimeoutLayer;

use crate::error::AppError;
use crate::features::assembler::Assembler;
use crate::features::searcher::SearchAssistant;
use crate::models::session::Session;

/// State shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
    pub assembler: Arc<Assembler>,
    pub search: Arc<SearchAssistant>,
}

pub fn build_router(state: AppState, handler_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(page::index))
        .route("/summarize", post(summarize::summarize))
        .route("/search/stream", get(search::stream))
        .route("/search/clear", post(search::clear))
        .route("/health", get(health))
        .layer(TimeoutLayer::new(handler_timeout))
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true, "service": "akari" }))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::MetadataLookup { .. }
            | AppError::TranscriptLookup { .. }
            | AppError::Generation { .. }
            | AppError::Http(_) => StatusCode::BAD_GATEWAY,
            AppError::MissingEnv { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}
