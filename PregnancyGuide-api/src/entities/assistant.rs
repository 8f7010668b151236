use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Question for the pregnancy assistant
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AskRequest {
    #[schema(example = "What are the symptoms in the first trimester?")]
    #[validate(length(min = 1, max = 2000, message = "Question must be between 1 and 2000 characters"))]
    pub question: String,
}

/// Video suggested with an answer
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VideoResponse {
    pub video_id: String,
    pub title: String,
    pub embed_url: String,
}

/// Assistant answer with supporting material
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AskResponse {
    pub question: String,

    /// Missing when the answer could not be generated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,

    /// Up to three useful links
    pub links: Vec<String>,

    /// Up to three related videos
    pub videos: Vec<VideoResponse>,

    /// Failures of individual services
    pub warnings: Vec<String>,
}
