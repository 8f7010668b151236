use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use super::{ClientError, LlmClientTrait};

/// Default model used for answers
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";

/// Base URL for the Gemini API
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const SERVICE: &str = "Gemini";

/// Gemini `generateContent` request body
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

/// Content block of a request or response
#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

/// Text part of a content block
#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: Option<String>,
}

/// Gemini `generateContent` response body
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<GeminiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

/// Google Gemini completion client
pub struct GeminiClient {
    api_key: Option<String>,
    client: Client,
    base_url: String,
    model: String,
}

impl Debug for GeminiClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiClient")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl GeminiClient {
    /// Create a client; without an API key every call fails with `NotConfigured`
    pub fn new(
        api_key: Option<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }

    fn build_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn build_request(prompt: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: Some(prompt.to_string()),
                }],
            }],
        }
    }
}

/// Pull the answer text out of a `generateContent` response body
pub(crate) fn parse_generate_response(body: &str) -> Result<String, ClientError> {
    let response: GeminiResponse = serde_json::from_str(body).map_err(|e| ClientError::Parse {
        service: SERVICE,
        message: e.to_string(),
    })?;

    if let Some(error) = response.error {
        return Err(ClientError::Api {
            service: SERVICE,
            message: error.message,
        });
    }

    let text = response
        .candidates
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(ClientError::Parse {
            service: SERVICE,
            message: "response contained no text".to_string(),
        });
    }

    Ok(text)
}

#[async_trait]
impl LlmClientTrait for GeminiClient {
    #[instrument(skip(self, prompt), fields(model = %self.model))]
    async fn complete(&self, prompt: &str) -> Result<String, ClientError> {
        let api_key = self.api_key.as_deref().ok_or(ClientError::NotConfigured(SERVICE))?;

        debug!("Sending request to Gemini API");

        let response = self
            .client
            .post(self.build_url())
            .query(&[("key", api_key)])
            .json(&Self::build_request(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return match parse_generate_response(&body) {
                Err(err @ ClientError::Api { .. }) => Err(err),
                _ => Err(ClientError::UnexpectedStatus {
                    service: SERVICE,
                    status: status.as_u16(),
                }),
            };
        }

        parse_generate_response(&body)
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
