// Centralized configuration for the digest service
// Loaded once at startup from the environment (after dotenvy)

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::error::{AppError, Result};

/// Default Gemini model for all generation calls
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default caption language preference order
pub const DEFAULT_CAPTION_LANGUAGES: &str = "en,hi,te,ta";

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub youtube_api_key: String,
    pub model: String,
    pub bind_addr: SocketAddr,
    /// Defensive timeout applied to every outbound API call
    pub request_timeout: Duration,
    /// Cosmetic delay between revealed search chunks
    pub search_reveal_delay: Duration,
    pub caption_languages: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let gemini_api_key = require("GEMINI_API_KEY")?;
        let youtube_api_key = require("YOUTUBE_API_KEY")?;

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let bind_addr = env::var("BIND_ADDR")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 8390)));

        let request_timeout = Duration::from_secs(
            env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        );

        let search_reveal_delay = Duration::from_millis(
            env::var("SEARCH_REVEAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(80),
        );

        let caption_languages = parse_languages(
            &env::var("CAPTION_LANGUAGES").unwrap_or_else(|_| DEFAULT_CAPTION_LANGUAGES.to_string()),
        );

        Ok(Self {
            gemini_api_key,
            youtube_api_key,
            model,
            bind_addr,
            request_timeout,
            search_reveal_delay,
            caption_languages,
        })
    }
}

fn require(env_var: &str) -> Result<String> {
    env::var(env_var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::MissingEnv {
            env_var: env_var.to_string(),
        })
}

/// Parse a comma-separated language list, skipping empty entries
fn parse_languages(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
