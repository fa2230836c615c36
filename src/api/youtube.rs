// YouTube Data API client
// For fetching video metadata

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::api::MetadataLookup;
use crate::error::{AppError, Result};
use crate::models::video::VideoMetadata;

pub struct YouTubeDataApi {
    client: reqwest::Client,
    api_key: String,
}

impl YouTubeDataApi {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl MetadataLookup for YouTubeDataApi {
    async fn lookup(&self, video_id: &str) -> Result<VideoMetadata> {
        let url = format!(
            "https://www.googleapis.com/youtube/v3/videos?part=snippet,contentDetails,statistics&id={}&key={}",
            video_id, self.api_key
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::MetadataLookup {
                reason: format!("YouTube API returned {}", response.status()),
            });
        }

        let data: YouTubeResponse = response.json().await?;

        let item = data.items.into_iter().next().ok_or_else(|| AppError::MetadataLookup {
            reason: format!("no video found for ID {}", video_id),
        })?;

        Ok(item.into_metadata())
    }
}

/// Parse ISO 8601 duration (PT1H30M45S) to seconds
fn parse_iso8601_duration(duration: &str) -> i64 {
    let mut seconds = 0;
    let mut current_num = String::new();

    for c in duration.chars() {
        if c.is_ascii_digit() {
            current_num.push(c);
        } else {
            if let Ok(num) = current_num.parse::<i64>() {
                match c {
                    'H' => seconds += num * 3600,
                    'M' => seconds += num * 60,
                    'S' => seconds += num,
                    _ => {}
                }
            }
            current_num.clear();
        }
    }

    seconds
}

// YouTube API response structures
#[derive(Debug, Deserialize)]
struct YouTubeResponse {
    #[serde(default)]
    items: Vec<YouTubeVideoItem>,
}

#[derive(Debug, Deserialize)]
struct YouTubeVideoItem {
    snippet: Option<YouTubeSnippet>,
    #[serde(rename = "contentDetails")]
    content_details: Option<YouTubeContentDetails>,
    statistics: Option<YouTubeStatistics>,
}

impl YouTubeVideoItem {
    fn into_metadata(self) -> VideoMetadata {
        let snippet = self.snippet;
        let thumbnail = snippet.as_ref().and_then(|s| {
            s.thumbnails
                .get("high")
                .or_else(|| s.thumbnails.get("medium"))
                .or_else(|| s.thumbnails.get("default"))
                .map(|t| t.url.clone())
        });

        VideoMetadata {
            title: snippet.as_ref().map(|s| s.title.clone()),
            channel: snippet.as_ref().map(|s| s.channel_title.clone()),
            duration_seconds: self
                .content_details
                .map(|d| parse_iso8601_duration(&d.duration)),
            view_count: self
                .statistics
                .and_then(|s| s.view_count)
                .and_then(|v| v.parse().ok()),
            published_at: snippet.as_ref().and_then(|s| s.published_at),
            thumbnail,
            description: snippet.and_then(|s| s.description),
        }
    }
}

#[derive(Debug, Deserialize)]
struct YouTubeSnippet {
    title: String,
    #[serde(rename = "channelTitle")]
    channel_title: String,
    #[serde(rename = "publishedAt")]
    published_at: Option<DateTime<Utc>>,
    description: Option<String>,
    #[serde(default)]
    thumbnails: std::collections::HashMap<String, YouTubeThumbnail>,
}

#[derive(Debug, Deserialize)]
struct YouTubeContentDetails {
    duration: String,
}

#[derive(Debug, Deserialize)]
struct YouTubeStatistics {
    #[serde(rename = "viewCount")]
    view_count: Option<String>,
}

#[derive(Debug, Deserialize)]
struct YouTubeThumbnail {
    url: String,
}
