// Web-search assistant
// One grounded generation call per query; the paced line-by-line reveal
// is cosmetic and isolated in `reveal` so a true streaming backend could
// replace it without changing callers

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, Stream};

use crate::api::WebSearcher;
use crate::error::{AppError, Result};
use crate::models::session::SearchReply;
use crate::utils::prompts;

pub struct SearchAssistant {
    searcher: Arc<dyn WebSearcher>,
    reveal_delay: Duration,
}

impl SearchAssistant {
    pub fn new(searcher: Arc<dyn WebSearcher>, reveal_delay: Duration) -> Self {
        Self {
            searcher,
            reveal_delay,
        }
    }

    /// Run one search; empty queries fail before any network call
    pub async fn search(&self, query: &str) -> Result<SearchReply> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::validation("Please enter a search query"));
        }

        let prompt = prompts::build_search_prompt(query);
        let text = self.searcher.search(&prompt).await?;

        Ok(SearchReply::new(query, &text))
    }

    /// Reveal a reply one line at a time with the configured delay
    /// between chunks; line order is preserved
    pub fn reveal(&self, reply: &SearchReply) -> impl Stream<Item = String> + Send + 'static {
        let delay = self.reveal_delay;
        let lines: VecDeque<String> = reply.lines.iter().cloned().collect();

        stream::unfold(lines, move |mut rest| async move {
            let line = rest.pop_front()?;
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            Some((line, rest))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use futures::StreamExt;

    struct CountingSearcher {
        calls: AtomicUsize,
        response: &'static str,
    }

    impl CountingSearcher {
        fn new(response: &'static str) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                response,
            })
        }
    }

    #[async_trait]
    impl WebSearcher for CountingSearcher {
        async fn search(&self, _prompt: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.response.to_string())
        }
    }

    #[tokio::test]
    async fn test_empty_query_is_validation_error() {
        let searcher = CountingSearcher::new("never seen");
        let assistant = SearchAssistant::new(searcher.clone(), Duration::ZERO);

        for query in ["", "   ", "\n\t"] {
            let result = assistant.search(query).await;
            assert!(matches!(result, Err(AppError::Validation(_))));
        }
        // no network call was issued
        assert_eq!(searcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_chunks_round_trip_response() {
        let response = "🥇 finding one\n🥈 finding two\n\nBottom line: both matter";
        let searcher = CountingSearcher::new(response);
        let assistant = SearchAssistant::new(searcher.clone(), Duration::ZERO);

        let reply = assistant.search("climate change news").await.unwrap();
        assert_eq!(searcher.calls.load(Ordering::SeqCst), 1);

        let chunks: Vec<String> = assistant.reveal(&reply).collect().await;
        assert!(!chunks.is_empty());
        assert_eq!(chunks.join("\n"), response);
    }

    #[tokio::test]
    async fn test_chunk_order_preserved() {
        let searcher = CountingSearcher::new("first\nsecond\nthird");
        let assistant = SearchAssistant::new(searcher, Duration::ZERO);

        let reply = assistant.search("anything").await.unwrap();
        let chunks: Vec<String> = assistant.reveal(&reply).collect().await;

        assert_eq!(chunks, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_each_search_issues_fresh_request() {
        let searcher = CountingSearcher::new("result");
        let assistant = SearchAssistant::new(searcher.clone(), Duration::ZERO);

        assistant.search("one").await.unwrap();
        assistant.search("two").await.unwrap();

        assert_eq!(searcher.calls.load(Ordering::SeqCst), 2);
    }
}
