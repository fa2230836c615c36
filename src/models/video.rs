// Video domain types
// A digest bundles reference, metadata and generated content so a new
// submission replaces all of them at once, never mixing two videos

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Canonical 11-character video identifier plus the raw user input it
/// was extracted from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoReference {
    pub id: String,
    pub raw: String,
}

impl VideoReference {
    pub fn new(id: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            raw: raw.into(),
        }
    }

    /// Normalized watch URL for the video
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }

    /// Embeddable player URL for the video
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.id)
    }
}

/// Video metadata from the lookup capability
///
/// Every field is optional: the API may omit any of them and the page
/// renders placeholders for whatever is missing.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VideoMetadata {
    pub title: Option<String>,
    pub channel: Option<String>,
    pub duration_seconds: Option<i64>,
    pub view_count: Option<u64>,
    pub published_at: Option<DateTime<Utc>>,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
}

/// The three generated outputs, keyed by kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Summary,
    Captions,
    Article,
}

impl OutputKind {
    pub const ALL: [OutputKind; 3] = [OutputKind::Summary, OutputKind::Captions, OutputKind::Article];

    pub fn label(&self) -> &'static str {
        match self {
            OutputKind::Summary => "Summary",
            OutputKind::Captions => "Captions",
            OutputKind::Article => "Article",
        }
    }
}

/// Outcome of one generation call
#[derive(Debug, Clone)]
pub enum GeneratedText {
    Ready(String),
    Failed(String),
}

impl GeneratedText {
    pub fn is_ready(&self) -> bool {
        matches!(self, GeneratedText::Ready(_))
    }
}

/// The three independently produced text blobs for one video
#[derive(Debug, Clone)]
pub struct GeneratedContent {
    pub summary: GeneratedText,
    pub captions: GeneratedText,
    pub article: GeneratedText,
}

impl GeneratedContent {
    pub fn get(&self, kind: OutputKind) -> &GeneratedText {
        match kind {
            OutputKind::Summary => &self.summary,
            OutputKind::Captions => &self.captions,
            OutputKind::Article => &self.article,
        }
    }

    /// Labels of the outputs whose generation call failed
    pub fn failed_kinds(&self) -> Vec<&'static str> {
        OutputKind::ALL
            .iter()
            .filter(|k| !self.get(**k).is_ready())
            .map(|k| k.label())
            .collect()
    }
}

/// One fully assembled result: everything shown in the tabs corresponds
/// to this single reference
#[derive(Debug, Clone)]
pub struct VideoDigest {
    pub reference: VideoReference,
    pub metadata: VideoMetadata,
    pub content: GeneratedContent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url() {
        let r = VideoReference::new("dQw4w9WgXcQ", "dQw4w9WgXcQ");
        assert_eq!(r.watch_url(), "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert_eq!(r.embed_url(), "https://www.youtube.com/embed/dQw4w9WgXcQ");
    }

    #[test]
    fn test_failed_kinds() {
        let content = GeneratedContent {
            summary: GeneratedText::Ready("ok".into()),
            captions: GeneratedText::Failed("boom".into()),
            article: GeneratedText::Ready("ok".into()),
        };
        assert_eq!(content.failed_kinds(), vec!["Captions"]);
    }
}
