use std::time::Duration;

use reqwest::{Client, Url};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite";

/// Header carrying the API key. Keeps the key out of URLs, which show up in
/// transport error messages.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Shared Gemini HTTP client configuration.
pub struct GeminiClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl GeminiClient {
    pub fn new(
        api_key: String,
        model: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key,
            base_url,
            model,
        })
    }

    /// Returns the generateContent endpoint URL.
    pub fn generate_content_url(&self) -> Result<Url, url::ParseError> {
        let endpoint = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );
        Url::parse(&endpoint)
    }
}
