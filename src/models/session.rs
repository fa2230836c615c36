// Interactive session state
// Replaces page-global state with an owned object handlers lock briefly

use crate::models::video::VideoDigest;

/// One web-search reply, kept so a page reload shows the last result
/// without re-running the search
#[derive(Debug, Clone)]
pub struct SearchReply {
    pub query: String,
    pub lines: Vec<String>,
}

impl SearchReply {
    pub fn new(query: impl Into<String>, text: &str) -> Self {
        Self {
            query: query.into(),
            lines: text.lines().map(str::to_owned).collect(),
        }
    }

    pub fn full_text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Per-deployment interactive state
///
/// The digest is a single slot: storing a new one replaces reference,
/// metadata and generated content together, so the tabs can never show
/// content from two different videos.
#[derive(Debug, Default)]
pub struct Session {
    digest: Option<VideoDigest>,
    search: Option<SearchReply>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn digest(&self) -> Option<&VideoDigest> {
        self.digest.as_ref()
    }

    pub fn replace_digest(&mut self, digest: VideoDigest) {
        self.digest = Some(digest);
    }

    pub fn search(&self) -> Option<&SearchReply> {
        self.search.as_ref()
    }

    pub fn record_search(&mut self, reply: SearchReply) {
        self.search = Some(reply);
    }

    pub fn clear_search(&mut self) {
        self.search = None;
    }
}
