//! Gemini Suggestion Provider
//!
//! generateContent-backed implementation of the suggestion seam.

use async_trait::async_trait;
use log::warn;
use reqwest::Client;

use super::{build_prompt, generate_content_body, parse_candidates, Suggestion, SuggestionProvider};
use crate::domain::{DomainError, DomainResult, Field};

const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Read the API key from GEMINI_API_KEY. Key provisioning itself is
    /// external setup, not part of the core.
    pub fn from_env() -> DomainResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| DomainError::Suggestion("GEMINI_API_KEY is not set".to_string()))?;
        Ok(Self::new(api_key))
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            API_BASE, self.model, self.api_key
        )
    }
}

#[async_trait]
impl SuggestionProvider for GeminiProvider {
    async fn suggest(&self, price_fields: &[Field], details: &str) -> DomainResult<Suggestion> {
        let prompt = build_prompt(price_fields, details)?;

        let response = self
            .client
            .post(self.endpoint())
            .json(&generate_content_body(&prompt))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                warn!("suggestion request failed: {}", e);
                DomainError::Suggestion("failed to get a response from the suggestion service".to_string())
            })?;

        let body: serde_json::Value = response.json().await.map_err(|e| {
            warn!("suggestion response was not JSON: {}", e);
            DomainError::Suggestion("failed to get a response from the suggestion service".to_string())
        })?;

        let text = body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                DomainError::Suggestion("the suggestion service returned an empty answer".to_string())
            })?
            .to_string();

        let fields = parse_candidates(&text);
        Ok(Suggestion { text, fields })
    }
}
