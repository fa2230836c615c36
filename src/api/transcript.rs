// Caption lookup via the shared YouTube transcript API
// Missing or disabled captions are absence, not failure; the assembler
// substitutes the video description for them

use async_trait::async_trait;
use tracing::warn;
use yt_transcript_rs::api::YouTubeTranscriptApi;

use crate::api::TranscriptLookup;
use crate::error::{AppError, Result};

#[derive(Default)]
pub struct CaptionClient;

impl CaptionClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TranscriptLookup for CaptionClient {
    async fn fetch(&self, video_id: &str, languages: &[String]) -> Result<Option<String>> {
        let api = YouTubeTranscriptApi::new(None, None, None).map_err(|e| {
            AppError::TranscriptLookup {
                reason: e.to_string(),
            }
        })?;

        let langs: Vec<&str> = languages.iter().map(String::as_str).collect();

        match api.fetch_transcript(video_id, &langs, false).await {
            Ok(transcript) => {
                let text = transcript
                    .snippets
                    .iter()
                    .map(|s| s.text.as_str())
                    .collect::<Vec<_>>()
                    .join("\n");

                if text.trim().is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(text))
                }
            }
            // disabled transcripts, no matching language, unavailable video:
            // all degrade the same way
            Err(e) => {
                warn!("Transcript unavailable for {}: {}", video_id, e);
                Ok(None)
            }
        }
    }
}
