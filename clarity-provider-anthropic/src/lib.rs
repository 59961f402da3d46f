//! clarity-provider-anthropic - task extraction through the Anthropic Messages API
//!
//! Implements [`clarity_core::extract::Extractor`] with a single, non-retried
//! request per submission.

mod types;

use clarity_core::config::ClarityConfig;
use clarity_core::error::{ClarityError, ClarityResult};
use clarity_core::extract::Extractor;
use tracing::debug;
use types::{Message, MessagesRequest, MessagesResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5";
pub const DEFAULT_MAX_TOKENS: u32 = 2048;

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Reply used when the model returns no text block; it fails plan parsing downstream.
const EMPTY_REPLY: &str = "{}";

pub struct AnthropicExtractor {
    client: reqwest::Client,
    api_key: String,
    model: String,
    max_tokens: u32,
    base_url: String,
}

impl AnthropicExtractor {
    pub fn new(api_key: impl Into<String>) -> Self {
        AnthropicExtractor {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Build from config. Fails with a configuration error when no API key is available,
    /// before any request is attempted.
    pub fn from_config(config: &ClarityConfig) -> ClarityResult<Self> {
        let mut extractor = Self::new(config.api_key()?);
        if let Some(model) = &config.model {
            extractor = extractor.with_model(model);
        }
        if let Some(max_tokens) = config.max_tokens {
            extractor = extractor.with_max_tokens(max_tokens);
        }
        if let Some(base_url) = &config.base_url {
            extractor = extractor.with_base_url(base_url);
        }
        Ok(extractor)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Use a different endpoint (for proxies or gateways).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn messages_url(&self) -> String {
        format!("{}/messages", self.base_url.trim_end_matches('/'))
    }

    fn request_body<'a>(&'a self, instruction: &'a str, text: &'a str) -> MessagesRequest<'a> {
        MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            system: instruction,
            messages: vec![Message {
                role: "user",
                content: text,
            }],
        }
    }
}

impl Extractor for AnthropicExtractor {
    async fn complete(&self, instruction: &str, text: &str) -> ClarityResult<String> {
        let body = self.request_body(instruction, text);
        debug!(model = %self.model, chars = text.len(), "Calling Anthropic Messages API");

        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClarityError::Extraction(format!("Failed to call Anthropic API: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ClarityError::Extraction(format!(
                "Anthropic API returned {status}: {detail}"
            )));
        }

        let reply: MessagesResponse = response.json().await.map_err(|e| {
            ClarityError::Extraction(format!("Failed to read Anthropic response: {e}"))
        })?;

        Ok(reply.first_text().unwrap_or(EMPTY_REPLY).to_string())
    }
}
