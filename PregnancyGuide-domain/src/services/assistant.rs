use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::stream::{self, Stream, StreamExt};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::config::AppConfig;
use crate::entities::assistant::{AssistantAnswer, AssistantStatus};
use crate::entities::conversions::convert_to_domain_video;
use pregnancy_guide_data::clients::{
    ClientError, GeminiClient, GoogleSearchClient, LlmClientTrait, VideoSearchClientTrait, WebSearchClientTrait,
    YouTubeClient,
};

/// Most links shown with an answer
pub const MAX_LINKS: usize = 3;

/// Most videos requested for an answer
pub const MAX_VIDEOS: u32 = 3;

/// Warning used when the search page answers with a non-success status
pub const SEARCH_STATUS_WARNING: &str = "Failed to retrieve search results.";

/// Warning used when the video search finds nothing
pub const NO_VIDEOS_WARNING: &str = "No videos found.";

/// Assistant service errors
#[derive(Debug, Error)]
pub enum AssistantServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The clients could not be built
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

/// Limits applied to the supporting material
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssistantSettings {
    pub max_links: usize,
    pub max_videos: u32,
    pub stream_word_delay: Duration,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            max_links: MAX_LINKS,
            max_videos: MAX_VIDEOS,
            stream_word_delay: Duration::from_millis(crate::config::DEFAULT_STREAM_WORD_DELAY_MS),
        }
    }
}

/// Trait for the pregnancy assistant
#[async_trait]
pub trait AssistantServiceTrait: Send + Sync {
    /// Answer a question with links and videos; service failures become warnings
    async fn ask(&self, question: &str) -> Result<AssistantAnswer, AssistantServiceError>;

    /// Which backends have credentials
    fn status(&self) -> AssistantStatus;

    /// Delay between words when the answer is streamed
    fn stream_word_delay(&self) -> Duration;
}

/// Assistant backed by an LLM, a web search page and a video search API
pub struct AssistantService {
    llm: Arc<dyn LlmClientTrait>,
    web_search: Arc<dyn WebSearchClientTrait>,
    video_search: Arc<dyn VideoSearchClientTrait>,
    settings: AssistantSettings,
}

impl AssistantService {
    /// Create an assistant over the given clients
    pub fn new(
        llm: Arc<dyn LlmClientTrait>,
        web_search: Arc<dyn WebSearchClientTrait>,
        video_search: Arc<dyn VideoSearchClientTrait>,
        settings: AssistantSettings,
    ) -> Self {
        Self {
            llm,
            web_search,
            video_search,
            settings,
        }
    }

    /// Build the HTTP clients from configuration
    pub fn from_config(config: &AppConfig) -> Result<Self, AssistantServiceError> {
        let to_config_error = |e: ClientError| AssistantServiceError::ConfigurationError(e.to_string());

        let llm = GeminiClient::new(
            config.google_api_key.clone(),
            config.gemini_model.clone(),
            config.gemini_base_url.clone(),
            config.http_timeout,
        )
        .map_err(to_config_error)?;
        let web_search = GoogleSearchClient::new(config.search_url.clone(), config.http_timeout).map_err(to_config_error)?;
        let video_search = YouTubeClient::new(
            config.youtube_api_key.clone(),
            config.youtube_base_url.clone(),
            config.http_timeout,
        )
        .map_err(to_config_error)?;

        let settings = AssistantSettings {
            stream_word_delay: config.stream_word_delay,
            ..AssistantSettings::default()
        };

        Ok(Self::new(Arc::new(llm), Arc::new(web_search), Arc::new(video_search), settings))
    }
}

#[async_trait]
impl AssistantServiceTrait for AssistantService {
    #[instrument(skip(self))]
    async fn ask(&self, question: &str) -> Result<AssistantAnswer, AssistantServiceError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AssistantServiceError::ValidationError(
                "Question must not be empty".to_string(),
            ));
        }

        let mut answer = AssistantAnswer {
            question: question.to_string(),
            ..AssistantAnswer::default()
        };

        match self.llm.complete(question).await {
            Ok(text) => answer.answer = Some(text),
            Err(e) => {
                warn!("Answer generation failed: {}", e);
                answer.warnings.push(format!("Failed to generate an answer: {}", e));
            }
        }

        match self.web_search.search_links(question).await {
            Ok(links) => answer.links = links.into_iter().take(self.settings.max_links).collect(),
            Err(ClientError::UnexpectedStatus { status, .. }) => {
                warn!(status, "Search page returned an error status");
                answer.warnings.push(SEARCH_STATUS_WARNING.to_string());
            }
            Err(e) => {
                warn!("Web search failed: {}", e);
                answer.warnings.push(format!("Error occurred during web scraping: {}", e));
            }
        }

        match self.video_search.search_videos(question, self.settings.max_videos).await {
            Ok(videos) if videos.is_empty() => answer.warnings.push(NO_VIDEOS_WARNING.to_string()),
            Ok(videos) => {
                answer.videos = videos
                    .into_iter()
                    .take(self.settings.max_videos as usize)
                    .map(convert_to_domain_video)
                    .collect();
            }
            Err(e) => {
                warn!("Video search failed: {}", e);
                answer.warnings.push(format!("Failed to fetch related videos: {}", e));
            }
        }

        info!(
            answered = answer.answer.is_some(),
            links = answer.links.len(),
            videos = answer.videos.len(),
            warnings = answer.warnings.len(),
            "Assistant request complete"
        );

        Ok(answer)
    }

    fn status(&self) -> AssistantStatus {
        AssistantStatus {
            llm_configured: self.llm.is_configured(),
            web_search_configured: self.web_search.is_configured(),
            video_search_configured: self.video_search.is_configured(),
        }
    }

    fn stream_word_delay(&self) -> Duration {
        self.settings.stream_word_delay
    }
}

/// Split an answer into the chunks emitted while streaming, each word followed by a space
pub fn answer_words(answer: &str) -> Vec<String> {
    answer.split(' ').map(|word| format!("{} ", word)).collect()
}

/// Emit the words of an answer one at a time, waiting `delay` before each
pub fn word_stream(answer: &str, delay: Duration) -> impl Stream<Item = String> + Send + 'static {
    let words = answer_words(answer);
    debug!(words = words.len(), "Streaming answer");

    stream::iter(words).then(move |word| async move {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        word
    })
}
