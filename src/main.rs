// Akari - AI YouTube video digest service
// A lightweight web app: paste a video link, get a summary, formatted
// captions and an article, plus a grounded web-search sidebar

mod api;
mod error;
mod features;
mod models;
mod utils;
mod web;

use std::env;
use std::sync::Arc;

use anyhow::Context;
use tokio::sync::Mutex;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::gemini::GeminiClient;
use crate::api::transcript::CaptionClient;
use crate::api::youtube::YouTubeDataApi;
use crate::features::assembler::Assembler;
use crate::features::searcher::SearchAssistant;
use crate::models::session::Session;
use crate::utils::config::Config;
use crate::web::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "akari_rs=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();
    let config = Config::from_env().context("Failed to load configuration")?;

    info!("Starting Akari digest service...");

    // Build HTTP client for API calls, with a defensive timeout since the
    // upstream APIs specify none
    let http_client = reqwest::Client::builder()
        .user_agent("Akari/1.0")
        .timeout(config.request_timeout)
        .build()
        .context("Failed to create HTTP client")?;

    let gemini = Arc::new(GeminiClient::new(
        http_client.clone(),
        config.gemini_api_key.clone(),
        config.model.clone(),
    ));

    let assembler = Arc::new(Assembler::new(
        Arc::new(YouTubeDataApi::new(
            http_client.clone(),
            config.youtube_api_key.clone(),
        )),
        Arc::new(CaptionClient::new()),
        gemini.clone(),
        config.caption_languages.clone(),
    ));

    let search = Arc::new(SearchAssistant::new(gemini, config.search_reveal_delay));

    let state = AppState {
        session: Arc::new(Mutex::new(Session::new())),
        assembler,
        search,
    };

    // The summarize handler awaits two lookups plus the joined generation
    // calls, so its budget is a multiple of the per-call timeout
    let app = web::build_router(state, config.request_timeout * 3);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;
    info!("Listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Goodbye!");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to register Ctrl+C handler");
    info!("Shutting down...");
}
