//! Clients for the external services behind the pregnancy assistant
//!
//! Each service sits behind a small trait so the domain layer can swap in
//! test doubles. None of the clients retry; a failed call is returned as a
//! `ClientError` and the caller decides how to report it.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::VideoSearchResult;

mod gemini;
mod web_search;
mod youtube;

pub use gemini::{GeminiClient, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
pub use web_search::{extract_result_links, GoogleSearchClient, DEFAULT_SEARCH_URL};
pub use youtube::{YouTubeClient, DEFAULT_YOUTUBE_BASE_URL};

/// External service client errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// The service has no credentials configured
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    /// The HTTP request could not be completed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("{service} returned status {status}")]
    UnexpectedStatus { service: &'static str, status: u16 },

    /// The service reported an error in its response body
    #[error("{service} API error: {message}")]
    Api { service: &'static str, message: String },

    /// The response body could not be understood
    #[error("Failed to parse {service} response: {message}")]
    Parse { service: &'static str, message: String },
}

/// Large-language-model completion
#[async_trait]
pub trait LlmClientTrait: Send + Sync {
    /// Generate an answer for a single user prompt
    async fn complete(&self, prompt: &str) -> Result<String, ClientError>;

    /// Whether credentials are available
    fn is_configured(&self) -> bool {
        true
    }
}

/// Web search returning result links
#[async_trait]
pub trait WebSearchClientTrait: Send + Sync {
    /// Search the web and return result URLs in ranking order
    async fn search_links(&self, query: &str) -> Result<Vec<String>, ClientError>;

    /// Whether the client can be used
    fn is_configured(&self) -> bool {
        true
    }
}

/// Video search
#[async_trait]
pub trait VideoSearchClientTrait: Send + Sync {
    /// Search for videos matching a query
    async fn search_videos(&self, query: &str, max_results: u32) -> Result<Vec<VideoSearchResult>, ClientError>;

    /// Whether credentials are available
    fn is_configured(&self) -> bool {
        true
    }
}
