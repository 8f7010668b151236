//! Application configuration read from the environment

use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, warn};

use pregnancy_guide_data::clients::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_SEARCH_URL, DEFAULT_YOUTUBE_BASE_URL,
};
use pregnancy_guide_data::tables::TableSource;

/// Port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 3000;

/// Outbound request timeout used when `HTTP_TIMEOUT_SECS` is not set
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Per-word delay of streamed answers used when `STREAM_WORD_DELAY_MS` is not set
pub const DEFAULT_STREAM_WORD_DELAY_MS: u64 = 20;

/// Configuration shared by the services and the server
#[derive(Clone)]
pub struct AppConfig {
    /// Port the HTTP server listens on
    pub port: u16,
    /// Directory holding the CSV tables; bundled tables are used when unset
    pub data_dir: Option<PathBuf>,
    /// Key for the Gemini API
    pub google_api_key: Option<String>,
    /// Key for the YouTube Data API
    pub youtube_api_key: Option<String>,
    /// Gemini model name
    pub gemini_model: String,
    /// Gemini API base URL
    pub gemini_base_url: String,
    /// Search page scraped for useful links
    pub search_url: String,
    /// YouTube Data API base URL
    pub youtube_base_url: String,
    /// Timeout for each outbound request
    pub http_timeout: Duration,
    /// Delay between words of a streamed answer
    pub stream_word_delay: Duration,
    /// Deployment environment name
    pub environment: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("data_dir", &self.data_dir)
            .field("google_api_key", &self.google_api_key.as_ref().map(|_| "[REDACTED]"))
            .field("youtube_api_key", &self.youtube_api_key.as_ref().map(|_| "[REDACTED]"))
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("search_url", &self.search_url)
            .field("youtube_base_url", &self.youtube_base_url)
            .field("http_timeout", &self.http_timeout)
            .field("stream_word_delay", &self.stream_word_delay)
            .field("environment", &self.environment)
            .finish()
    }
}

impl AppConfig {
    /// Read the configuration from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from any variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).map(|value| value.trim().to_string()).filter(|value| !value.is_empty());

        let port = match non_empty("PORT") {
            Some(value) => value.parse::<u16>().unwrap_or_else(|_| {
                warn!("PORT '{}' is not a valid port, using {}", value, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let http_timeout_secs = match non_empty("HTTP_TIMEOUT_SECS") {
            Some(value) => value.parse::<u64>().unwrap_or_else(|_| {
                warn!("HTTP_TIMEOUT_SECS '{}' is not a whole number of seconds, using {}", value, DEFAULT_HTTP_TIMEOUT_SECS);
                DEFAULT_HTTP_TIMEOUT_SECS
            }),
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        let stream_word_delay_ms = match non_empty("STREAM_WORD_DELAY_MS") {
            Some(value) => value.parse::<u64>().unwrap_or_else(|_| {
                warn!("STREAM_WORD_DELAY_MS '{}' is not a whole number of milliseconds, using {}", value, DEFAULT_STREAM_WORD_DELAY_MS);
                DEFAULT_STREAM_WORD_DELAY_MS
            }),
            None => DEFAULT_STREAM_WORD_DELAY_MS,
        };

        let google_api_key = non_empty("GOOGLE_API_KEY");
        if google_api_key.is_none() {
            warn!("GOOGLE_API_KEY not set - the assistant will not generate answers.");
        }

        let youtube_api_key = non_empty("YOUTUBE_API_KEY");
        if youtube_api_key.is_none() {
            warn!("YOUTUBE_API_KEY not set - the assistant will not suggest videos.");
        }

        Self {
            port,
            data_dir: non_empty("DATA_DIR").map(PathBuf::from),
            google_api_key,
            youtube_api_key,
            gemini_model: non_empty("GEMINI_MODEL").unwrap_or_else(|| {
                debug!("GEMINI_MODEL not set - using {}", DEFAULT_GEMINI_MODEL);
                DEFAULT_GEMINI_MODEL.to_string()
            }),
            gemini_base_url: non_empty("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            search_url: non_empty("SEARCH_URL").unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string()),
            youtube_base_url: non_empty("YOUTUBE_BASE_URL").unwrap_or_else(|| DEFAULT_YOUTUBE_BASE_URL.to_string()),
            http_timeout: Duration::from_secs(http_timeout_secs),
            stream_word_delay: Duration::from_millis(stream_word_delay_ms),
            environment: non_empty("APP_ENV").unwrap_or_else(|| "development".to_string()),
        }
    }

    /// Where the static tables are loaded from
    pub fn table_source(&self) -> TableSource {
        TableSource::from_dir(self.data_dir.clone())
    }

    /// Validate the configuration, returning every problem found
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.google_api_key.is_none() {
            errors.push("GOOGLE_API_KEY is not configured".to_string());
        }

        if self.youtube_api_key.is_none() {
            errors.push("YOUTUBE_API_KEY is not configured".to_string());
        }

        for (name, value) in [
            ("GEMINI_BASE_URL", &self.gemini_base_url),
            ("SEARCH_URL", &self.search_url),
            ("YOUTUBE_BASE_URL", &self.youtube_base_url),
        ] {
            if let Err(e) = url::Url::parse(value) {
                errors.push(format!("{} is not a valid URL: {}", name, e));
            }
        }

        if let Some(dir) = &self.data_dir {
            if !dir.is_dir() {
                errors.push(format!("DATA_DIR {} is not a directory", dir.display()));
            }
        }

        if self.http_timeout.is_zero() {
            errors.push("HTTP_TIMEOUT_SECS must be greater than zero".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);

        assert_eq!(config.port, 3000);
        assert_eq!(config.gemini_model, "gemini-pro");
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert_eq!(config.stream_word_delay, Duration::from_millis(20));
        assert_eq!(config.environment, "development");
        assert!(config.data_dir.is_none());
        assert_eq!(config.table_source(), TableSource::Bundled);
    }

    #[test]
    fn test_values_from_lookup() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("GOOGLE_API_KEY", "g-key"),
            ("YOUTUBE_API_KEY", "  "),
            ("GEMINI_MODEL", "gemini-1.5-flash"),
            ("STREAM_WORD_DELAY_MS", "0"),
            ("APP_ENV", "production"),
        ]);

        assert_eq!(config.port, 8080);
        assert_eq!(config.google_api_key.as_deref(), Some("g-key"));
        assert!(config.youtube_api_key.is_none());
        assert_eq!(config.gemini_model, "gemini-1.5-flash");
        assert!(config.stream_word_delay.is_zero());
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn test_invalid_port_falls_back() {
        assert_eq!(config_from(&[("PORT", "not-a-port")]).port, DEFAULT_PORT);
    }

    #[test]
    fn test_invalid_durations_fall_back() {
        let config = config_from(&[("HTTP_TIMEOUT_SECS", "ten"), ("STREAM_WORD_DELAY_MS", "-5")]);

        assert_eq!(config.http_timeout, Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS));
        assert_eq!(config.stream_word_delay, Duration::from_millis(DEFAULT_STREAM_WORD_DELAY_MS));
        assert_eq!(config_from(&[("HTTP_TIMEOUT_SECS", "5")]).http_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_validate_reports_problems() {
        let config = config_from(&[("GEMINI_BASE_URL", "not a url")]);
        let errors = config.validate().unwrap_err();

        assert!(errors.iter().any(|e| e.contains("GOOGLE_API_KEY")));
        assert!(errors.iter().any(|e| e.contains("YOUTUBE_API_KEY")));
        assert!(errors.iter().any(|e| e.contains("GEMINI_BASE_URL")));
    }

    #[test]
    fn test_validate_complete_config() {
        let config = config_from(&[("GOOGLE_API_KEY", "g"), ("YOUTUBE_API_KEY", "y")]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_debug_redacts_keys() {
        let config = config_from(&[("GOOGLE_API_KEY", "secret-value")]);
        assert!(!format!("{:?}", config).contains("secret-value"));
    }
}
