// External capability interfaces and their HTTP implementations
// Each trait has one narrow method so callers can be tested with mocks

pub mod gemini;
pub mod transcript;
pub mod youtube;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::video::VideoMetadata;

/// Video metadata lookup keyed by canonical video ID
#[async_trait]
pub trait MetadataLookup: Send + Sync {
    async fn lookup(&self, video_id: &str) -> Result<VideoMetadata>;
}

/// Caption text lookup; `None` means the video has no usable captions
#[async_trait]
pub trait TranscriptLookup: Send + Sync {
    async fn fetch(&self, video_id: &str, languages: &[String]) -> Result<Option<String>>;
}

/// Plain text generation from a prompt
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Text generation with web-search grounding enabled
#[async_trait]
pub trait WebSearcher: Send + Sync {
    async fn search(&self, prompt: &str) -> Result<String>;
}
