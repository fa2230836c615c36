// Content assembly pipeline
// Metadata is a hard prerequisite; captions degrade to the description;
// the three generation calls succeed or fail independently

use std::sync::Arc;

use futures::future;
use tracing::{info, warn};

use crate::api::{MetadataLookup, TextGenerator, TranscriptLookup};
use crate::error::Result;
use crate::models::video::{
    GeneratedContent, GeneratedText, OutputKind, VideoDigest, VideoMetadata, VideoReference,
};
use crate::utils::prompts;

/// Substitute content when neither captions nor a description exist
const NO_CONTENT: &str = "No content available";

pub struct Assembler {
    metadata: Arc<dyn MetadataLookup>,
    transcripts: Arc<dyn TranscriptLookup>,
    generator: Arc<dyn TextGenerator>,
    caption_languages: Vec<String>,
}

impl Assembler {
    pub fn new(
        metadata: Arc<dyn MetadataLookup>,
        transcripts: Arc<dyn TranscriptLookup>,
        generator: Arc<dyn TextGenerator>,
        caption_languages: Vec<String>,
    ) -> Self {
        Self {
            metadata,
            transcripts,
            generator,
            caption_languages,
        }
    }

    /// Assemble a digest for one video reference
    ///
    /// A metadata failure aborts before any generation call is issued. A
    /// failed generation call only marks its own slot; sibling outputs
    /// are kept.
    pub async fn assemble(&self, reference: VideoReference) -> Result<VideoDigest> {
        let metadata = self.metadata.lookup(&reference.id).await?;
        info!(
            "Fetched metadata for {}: {:?}",
            reference.id, metadata.title
        );

        let content_text = self.caption_content(&reference, &metadata).await;

        let watch_url = reference.watch_url();
        let (summary, captions, article) = future::join3(
            self.generate_one(OutputKind::Summary, &watch_url, &content_text),
            self.generate_one(OutputKind::Captions, &watch_url, &content_text),
            self.generate_one(OutputKind::Article, &watch_url, &content_text),
        )
        .await;

        Ok(VideoDigest {
            reference,
            metadata,
            content: GeneratedContent {
                summary,
                captions,
                article,
            },
        })
    }

    /// Caption text for the prompts, falling back to the description
    async fn caption_content(&self, reference: &VideoReference, metadata: &VideoMetadata) -> String {
        match self
            .transcripts
            .fetch(&reference.id, &self.caption_languages)
            .await
        {
            Ok(Some(text)) => text,
            Ok(None) => {
                warn!("No captions for {}, using description", reference.id);
                description_fallback(metadata)
            }
            Err(e) => {
                warn!("Caption lookup failed for {}: {}", reference.id, e);
                description_fallback(metadata)
            }
        }
    }

    async fn generate_one(&self, kind: OutputKind, watch_url: &str, content: &str) -> GeneratedText {
        let prompt = prompts::build_prompt(kind, watch_url, content);
        match self.generator.generate(&prompt).await {
            Ok(text) => GeneratedText::Ready(text),
            Err(e) => {
                warn!("{} generation failed: {}", kind.label(), e);
                GeneratedText::Failed(e.to_string())
            }
        }
    }
}

fn description_fallback(metadata: &VideoMetadata) -> String {
    metadata
        .description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| NO_CONTENT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::error::AppError;

    struct FixedMetadata {
        fail: bool,
        description: Option<&'static str>,
    }

    #[async_trait]
    impl MetadataLookup for FixedMetadata {
        async fn lookup(&self, video_id: &str) -> Result<VideoMetadata> {
            if self.fail {
                return Err(AppError::MetadataLookup {
                    reason: "unreachable".to_string(),
                });
            }
            Ok(VideoMetadata {
                title: Some(format!("title of {}", video_id)),
                description: self.description.map(str::to_owned),
                ..Default::default()
            })
        }
    }

    struct FixedCaptions(Option<&'static str>);

    #[async_trait]
    impl TranscriptLookup for FixedCaptions {
        async fn fetch(&self, _video_id: &str, _languages: &[String]) -> Result<Option<String>> {
            Ok(self.0.map(str::to_owned))
        }
    }

    /// Records every prompt; fails calls whose prompt contains the marker
    struct RecordingGenerator {
        prompts: Mutex<Vec<String>>,
        fail_marker: Option<&'static str>,
    }

    impl RecordingGenerator {
        fn new(fail_marker: Option<&'static str>) -> Self {
            Self {
                prompts: Mutex::new(Vec::new()),
                fail_marker,
            }
        }
    }

    #[async_trait]
    impl TextGenerator for RecordingGenerator {
        async fn generate(&self, prompt: &str) -> Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            if let Some(marker) = self.fail_marker {
                if prompt.contains(marker) {
                    return Err(AppError::Generation {
                        reason: "model unavailable".to_string(),
                    });
                }
            }
            Ok(format!("generated from {} chars", prompt.len()))
        }
    }

    fn assembler(
        metadata: FixedMetadata,
        captions: FixedCaptions,
        generator: Arc<RecordingGenerator>,
    ) -> Assembler {
        Assembler::new(
            Arc::new(metadata),
            Arc::new(captions),
            generator,
            vec!["en".to_string()],
        )
    }

    fn reference() -> VideoReference {
        VideoReference::new("dQw4w9WgXcQ", "https://youtu.be/dQw4w9WgXcQ")
    }

    #[tokio::test]
    async fn test_metadata_failure_skips_generation() {
        let generator = Arc::new(RecordingGenerator::new(None));
        let assembler = assembler(
            FixedMetadata { fail: true, description: None },
            FixedCaptions(Some("captions")),
            generator.clone(),
        );

        let result = assembler.assemble(reference()).await;

        assert!(matches!(result, Err(AppError::MetadataLookup { .. })));
        assert!(generator.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_single_failure_keeps_siblings() {
        let generator = Arc::new(RecordingGenerator::new(Some("Format the captions")));
        let assembler = assembler(
            FixedMetadata { fail: false, description: None },
            FixedCaptions(Some("caption text")),
            generator,
        );

        let digest = assembler.assemble(reference()).await.unwrap();

        assert!(digest.content.summary.is_ready());
        assert!(!digest.content.captions.is_ready());
        assert!(digest.content.article.is_ready());
        assert_eq!(digest.content.failed_kinds(), vec!["Captions"]);
    }

    #[tokio::test]
    async fn test_missing_captions_fall_back_to_description() {
        let generator = Arc::new(RecordingGenerator::new(None));
        let assembler = assembler(
            FixedMetadata { fail: false, description: Some("a video about ducks") },
            FixedCaptions(None),
            generator.clone(),
        );

        assembler.assemble(reference()).await.unwrap();

        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 3);
        assert!(prompts.iter().all(|p| p.contains("a video about ducks")));
    }

    #[tokio::test]
    async fn test_missing_captions_and_description() {
        let generator = Arc::new(RecordingGenerator::new(None));
        let assembler = assembler(
            FixedMetadata { fail: false, description: None },
            FixedCaptions(None),
            generator.clone(),
        );

        assembler.assemble(reference()).await.unwrap();

        let prompts = generator.prompts.lock().unwrap();
        assert!(prompts.iter().all(|p| p.contains(NO_CONTENT)));
    }

    #[tokio::test]
    async fn test_digest_matches_reference() {
        let generator = Arc::new(RecordingGenerator::new(None));
        let assembler = assembler(
            FixedMetadata { fail: false, description: None },
            FixedCaptions(Some("caption text")),
            generator,
        );

        let digest = assembler.assemble(reference()).await.unwrap();

        assert_eq!(digest.reference.id, "dQw4w9WgXcQ");
        assert_eq!(digest.metadata.title.as_deref(), Some("title of dQw4w9WgXcQ"));
    }
}
