//! DeepSeek API client
//!
//! Direct HTTP client for calling the DeepSeek chat-completions API. This is
//! the only generation backend; the `TextGenerator` trait exists so the
//! orchestrator can be driven by scripted fakes in tests.

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::generation::types::{ChatMessage, ChatRequest, ChatResponse};
use async_trait::async_trait;

/// System text sent with every generation request
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// One prompt for the generation service
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// The user prompt (role instructions plus accumulated stage context)
    pub prompt: String,
    /// The system/persona text
    pub system: String,
    /// Sampling temperature
    pub temperature: f32,
}

impl GenerationRequest {
    /// Build a request with the default system prompt
    pub fn new(prompt: String, temperature: f32) -> Self {
        Self {
            prompt,
            system: DEFAULT_SYSTEM_PROMPT.to_string(),
            temperature,
        }
    }
}

/// A text-generation capability: prompt in, raw text out
///
/// Implementations may be non-deterministic, network-bound, and rate-limited.
/// A returned `Ok` is guaranteed non-empty by `DeepSeekClient`; other
/// implementations should uphold the same.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for the given request
    ///
    /// # Errors
    /// * `GenerationError::Transport` - request could not be sent, the
    ///   response could not be read/parsed, or the status was unexpected
    /// * `GenerationError::RateLimited` - the service returned HTTP 429
    /// * `GenerationError::Empty` - the response carried no usable text
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}

/// HTTP client for the DeepSeek chat-completions API
pub struct DeepSeekClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl DeepSeekClient {
    /// Create a client from configuration, sharing the given HTTP client
    /// (connection pooling). The base URL is taken from the config so tests
    /// can point it at a mock server.
    pub fn new(client: reqwest::Client, config: &GenerationConfig) -> Self {
        Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.api_url.clone(),
            model: config.model.clone(),
        }
    }
}

#[async_trait]
impl TextGenerator for DeepSeekClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        if self.api_key.is_empty() {
            return Err(GenerationError::Transport("API key is empty".to_string()));
        }

        let url = format!("{}/chat/completions", self.base_url);
        let request_body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: request.system.clone(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: request.prompt.clone(),
                },
            ],
            stream: false,
            temperature: request.temperature,
        };

        tracing::debug!(
            url = %url,
            model = %self.model,
            prompt_len = request.prompt.len(),
            "Calling DeepSeek API"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                GenerationError::Transport(format!("failed to send request to DeepSeek API: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());

            tracing::error!(
                status_code = status_code,
                error_body = %error_body,
                "DeepSeek API returned error status"
            );

            if status_code == 429 {
                return Err(GenerationError::RateLimited);
            }

            return Err(GenerationError::Transport(format!(
                "DeepSeek API returned status {status_code}: {error_body}"
            )));
        }

        let response_body = response.text().await.map_err(|e| {
            GenerationError::Transport(format!("failed to read DeepSeek response body: {e}"))
        })?;

        let parsed: ChatResponse = serde_json::from_str(&response_body).map_err(|e| {
            GenerationError::Transport(format!(
                "failed to parse DeepSeek response: {e} - body: {response_body}"
            ))
        })?;

        let choice = parsed.choices.first().ok_or(GenerationError::Empty)?;

        let text = choice.message.content.trim();
        if text.is_empty() {
            return Err(GenerationError::Empty);
        }

        tracing::debug!(
            response_len = text.len(),
            "Successfully received response from DeepSeek API"
        );

        Ok(text.to_string())
    }
}
