use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, instrument};

use super::{ClientError, VideoSearchClientTrait};
use crate::models::VideoSearchResult;

/// Base URL for the YouTube Data API
pub const DEFAULT_YOUTUBE_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

const SERVICE: &str = "YouTube";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: ItemId,
    snippet: Option<Snippet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemId {
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    #[serde(default)]
    title: String,
    channel_title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// YouTube Data API v3 search client
pub struct YouTubeClient {
    api_key: Option<String>,
    client: Client,
    base_url: String,
}

impl Debug for YouTubeClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("YouTubeClient")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl YouTubeClient {
    /// Create a client; without an API key every call fails with `NotConfigured`
    pub fn new(api_key: Option<String>, base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

/// Convert a search response body into video results, skipping non-video items
pub(crate) fn parse_search_response(body: &str) -> Result<Vec<VideoSearchResult>, ClientError> {
    let response: SearchResponse = serde_json::from_str(body).map_err(|e| ClientError::Parse {
        service: SERVICE,
        message: e.to_string(),
    })?;

    if let Some(error) = response.error {
        return Err(ClientError::Api {
            service: SERVICE,
            message: error.message,
        });
    }

    Ok(response
        .items
        .into_iter()
        .filter_map(|item| {
            let video_id = item.id.video_id?;
            let (title, channel_title) = item
                .snippet
                .map(|snippet| (snippet.title, snippet.channel_title))
                .unwrap_or_default();
            Some(VideoSearchResult {
                video_id,
                title,
                channel_title,
            })
        })
        .collect())
}

#[async_trait]
impl VideoSearchClientTrait for YouTubeClient {
    #[instrument(skip(self))]
    async fn search_videos(&self, query: &str, max_results: u32) -> Result<Vec<VideoSearchResult>, ClientError> {
        let api_key = self.api_key.as_deref().ok_or(ClientError::NotConfigured(SERVICE))?;
        let max_results = max_results.to_string();

        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("q", query),
                ("maxResults", max_results.as_str()),
                ("key", api_key),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!(status = %status, "YouTube API error");
            return match parse_search_response(&body) {
                Err(err @ ClientError::Api { .. }) => Err(err),
                _ => Err(ClientError::UnexpectedStatus {
                    service: SERVICE,
                    status: status.as_u16(),
                }),
            };
        }

        let videos = parse_search_response(&body)?;
        debug!(count = videos.len(), "Fetched videos");
        Ok(videos)
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
