// Error taxonomy for the digest service
// Every external-call failure is converted to a user-visible message at
// the web boundary; nothing here retries

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Couldn't fetch video metadata: {reason}")]
    MetadataLookup { reason: String },

    #[error("Couldn't fetch captions: {reason}")]
    TranscriptLookup { reason: String },

    #[error("Generation failed: {reason}")]
    Generation { reason: String },

    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Missing configuration: {env_var} environment variable is not set")]
    MissingEnv { env_var: String },
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
