//! Gemini implementation of the model client trait.
//!
//! A reference implementation against the Generative Language API.
//!
//! # Example
//!
//! ```rust,ignore
//! use mailscout::{EmailExtractor, model::Gemini};
//!
//! let model = Gemini::from_env()?.with_model("gemini-2.5-flash");
//! let extractor = EmailExtractor::new(model);
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{ExtractError, Result};
use crate::traits::model::ModelClient;

/// Bound on the fallback call so a dead endpoint cannot hang the caller.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Gemini-backed model client.
#[derive(Clone)]
pub struct Gemini {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl Gemini {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| ExtractError::Config("GEMINI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set the model (default: gemini-2.5-flash).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom base URL (for proxies, regional endpoints).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-request timeout (default: 30s).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the current model name.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ModelClient for Gemini {
    async fn send_prompt(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self
            .client
            .post(url)
            .timeout(self.timeout)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ExtractError::Model(e.to_string().into()))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ExtractError::Model(
                format!("Gemini API error: {error_text}").into(),
            ));
        }

        let generated: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ExtractError::Model(e.to_string().into()))?;

        generated
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| ExtractError::Model("empty response from Gemini".into()))
    }
}

// Request/Response types

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

#[derive(Deserialize)]
struct ResponseCandidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let model = Gemini::new("key")
            .with_model("gemini-2.0-pro")
            .with_base_url("https://proxy.local/v1beta")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(model.model(), "gemini-2.0-pro");
        assert_eq!(model.base_url, "https://proxy.local/v1beta");
        assert_eq!(model.timeout, Duration::from_secs(5));
    }

    #[test]
    fn response_shape_parses() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"hi"}]}}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.candidates[0].content.parts[0].text, "hi");
    }
}
