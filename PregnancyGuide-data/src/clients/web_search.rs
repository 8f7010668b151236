use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{header, Client, StatusCode};
use tracing::{debug, instrument, warn};

use super::{ClientError, WebSearchClientTrait};

/// Search page that is scraped for result links
pub const DEFAULT_SEARCH_URL: &str = "https://www.google.com/search";

const SERVICE: &str = "Web search";

/// Desktop browser agent; the search page serves a different layout to unknown agents
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Opening tag of an organic result container
static RESULT_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<div\b[^>]*\bclass\s*=\s*"[^"]*\btF2Cxc\b[^"]*"[^>]*>"#).expect("result block pattern is valid")
});

/// First anchor with an href inside a result container
static ANCHOR_HREF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<a\b[^>]*?\bhref\s*=\s*"([^"]*)""#).expect("anchor pattern is valid")
});

/// Scrapes result links from a search results page
#[derive(Debug, Clone)]
pub struct GoogleSearchClient {
    client: Client,
    search_url: String,
}

impl GoogleSearchClient {
    /// Create a client for the given search page
    pub fn new(search_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(BROWSER_USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            search_url: search_url.into(),
        })
    }
}

/// Extract the first link of every organic result container, in page order
pub fn extract_result_links(html: &str) -> Vec<String> {
    let starts: Vec<(usize, usize)> = RESULT_BLOCK
        .find_iter(html)
        .map(|m| (m.start(), m.end()))
        .collect();

    starts
        .iter()
        .enumerate()
        .filter_map(|(index, &(_, body_start))| {
            let body_end = starts.get(index + 1).map(|&(next, _)| next).unwrap_or(html.len());
            let block = &html[body_start..body_end];
            ANCHOR_HREF
                .captures(block)
                .and_then(|captures| captures.get(1))
                .map(|href| html_escape::decode_html_entities(href.as_str()).into_owned())
        })
        .filter(|link| !link.is_empty())
        .collect()
}

#[async_trait]
impl WebSearchClientTrait for GoogleSearchClient {
    #[instrument(skip(self))]
    async fn search_links(&self, query: &str) -> Result<Vec<String>, ClientError> {
        let response = self
            .client
            .get(&self.search_url)
            .header(header::ACCEPT, "text/html")
            .query(&[("q", query)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = %status, "Search page request failed");
            return Err(ClientError::UnexpectedStatus {
                service: SERVICE,
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let links = extract_result_links(&body);
        debug!(count = links.len(), "Extracted search result links");

        Ok(links)
    }
}
