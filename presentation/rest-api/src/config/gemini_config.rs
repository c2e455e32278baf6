use std::env;
use std::time::Duration;

use anyhow::Context;
use gemini::client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Configuration for Gemini API access.
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Load Gemini configuration from environment variables
    ///
    /// Environment variables:
    /// - GEMINI_API_KEY: API key (required)
    /// - GEMINI_MODEL: Model name (default: "gemini-2.5-flash-lite")
    /// - GEMINI_BASE_URL: API root (default: "https://generativelanguage.googleapis.com/v1beta")
    /// - GEMINI_TIMEOUT_SECS: Request timeout in seconds (default: 30)
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key =
            env::var("GEMINI_API_KEY").context("GEMINI_API_KEY environment variable must be set")?;
        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url = env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = parse_timeout(env::var("GEMINI_TIMEOUT_SECS").ok().as_deref())?;

        Ok(Self {
            api_key,
            model,
            base_url,
            timeout,
        })
    }
}

fn parse_timeout(raw: Option<&str>) -> anyhow::Result<Duration> {
    match raw {
        None => Ok(Duration::from_secs(30)),
        Some(value) => {
            let secs: u64 = value
                .trim()
                .parse()
                .with_context(|| format!("GEMINI_TIMEOUT_SECS is not a number: {}", value))?;
            Ok(Duration::from_secs(secs))
        }
    }
}
