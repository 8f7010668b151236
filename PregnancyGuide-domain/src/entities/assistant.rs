use serde::{Deserialize, Serialize};

/// Base URL for embedding a YouTube video
pub const YOUTUBE_EMBED_BASE_URL: &str = "https://www.youtube.com/embed/";

/// Video suggested alongside an answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedVideo {
    pub video_id: String,
    pub title: String,
    pub embed_url: String,
}

impl RelatedVideo {
    /// Build a related video, deriving the embed URL from the id
    pub fn new(video_id: impl Into<String>, title: impl Into<String>) -> Self {
        let video_id = video_id.into();
        Self {
            embed_url: format!("{}{}", YOUTUBE_EMBED_BASE_URL, video_id),
            video_id,
            title: title.into(),
        }
    }
}

/// Answer to a pregnancy question with supporting material
///
/// Each external service contributes independently; a failing service leaves
/// its field empty and adds a warning instead of failing the whole answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantAnswer {
    pub question: String,
    pub answer: Option<String>,
    pub links: Vec<String>,
    pub videos: Vec<RelatedVideo>,
    pub warnings: Vec<String>,
}

/// Which assistant backends have credentials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantStatus {
    pub llm_configured: bool,
    pub web_search_configured: bool,
    pub video_search_configured: bool,
}

impl AssistantStatus {
    /// True when every backend can be called
    pub fn fully_configured(&self) -> bool {
        self.llm_configured && self.web_search_configured && self.video_search_configured
    }
}
