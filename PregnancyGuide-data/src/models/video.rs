use serde::{Deserialize, Serialize};

/// A single video returned by the video search service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoSearchResult {
    /// YouTube video identifier
    pub video_id: String,

    /// Video title
    pub title: String,

    /// Channel that published the video
    pub channel_title: Option<String>,
}
