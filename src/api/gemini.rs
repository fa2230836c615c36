// Gemini API client
// One unary generateContent call per output; the search variant enables
// Google Search grounding via the googleSearch tool

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::api::{TextGenerator, WebSearcher};
use crate::error::{AppError, Result};

#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    async fn generate_content(&self, prompt: &str, with_search: bool) -> Result<String> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, self.api_key
        );

        let mut body = json!({
            "contents": [{
                "parts": [{
                    "text": prompt
                }]
            }]
        });
        if with_search {
            body["tools"] = json!([{ "googleSearch": {} }]);
        }

        let res = self.client.post(&url).json(&body).send().await?;

        if !res.status().is_success() {
            let status = res.status();
            let error_text = res.text().await.unwrap_or_default();
            return Err(AppError::Generation {
                reason: format!("Gemini API error {}: {}", status, error_text),
            });
        }

        let response: GeminiResponse = res.json().await?;

        let text = response
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AppError::Generation {
                reason: "no text in Gemini response".to_string(),
            });
        }

        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.generate_content(prompt, false).await
    }
}

#[async_trait]
impl WebSearcher for GeminiClient {
    async fn search(&self, prompt: &str) -> Result<String> {
        self.generate_content(prompt, true).await
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiResponse {
    pub candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiCandidate {
    pub content: GeminiContent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiContent {
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiPart {
    pub text: Option<String>,
}
