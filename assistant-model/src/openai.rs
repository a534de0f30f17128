//! OpenAI-compatible chat client.
//!
//! Works against any endpoint speaking the OpenAI chat-completions protocol:
//! LM Studio, Ollama's OpenAI shim, vLLM, or OpenAI itself.

use async_openai::{
    config::OpenAIConfig as AsyncOpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use tracing::{debug, error};

use crate::chat::ChatModel;
use crate::error::{ModelError, Result};

/// The default base URL (LM Studio / local OpenAI-compatible server).
const DEFAULT_BASE_URL: &str = "http://localhost:1234/v1";

/// The default API key. Local servers accept any non-empty value.
const DEFAULT_API_KEY: &str = "ollama";

/// The default chat model.
const DEFAULT_MODEL: &str = "llama3.2";

/// The default sampling temperature.
const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Configuration for an [`OpenAiCompatClient`].
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Base URL of the OpenAI-compatible endpoint.
    pub base_url: String,
    /// API key (local servers accept any non-empty value).
    pub api_key: String,
    /// Model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: DEFAULT_API_KEY.into(),
            model: DEFAULT_MODEL.into(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Chat client for OpenAI-compatible APIs.
///
/// Issues a single non-streaming request per completion. A non-text or
/// empty response is normalized to a string representation at this boundary
/// rather than surfaced as an error, so downstream code never branches on
/// response shape.
pub struct OpenAiCompatClient {
    client: Client<AsyncOpenAIConfig>,
    model: String,
    temperature: f32,
}

impl OpenAiCompatClient {
    /// Create a new client from a [`GenerationConfig`].
    pub fn new(config: GenerationConfig) -> Self {
        let openai_config = AsyncOpenAIConfig::new()
            .with_api_key(&config.api_key)
            .with_api_base(&config.base_url);

        Self {
            client: Client::with_config(openai_config),
            model: config.model,
            temperature: config.temperature,
        }
    }

    /// Create a client for an OpenAI-compatible API with explicit parameters.
    pub fn compatible(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self::new(GenerationConfig {
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: model.into(),
            ..GenerationConfig::default()
        })
    }

    fn generation_error(&self, message: impl std::fmt::Display) -> ModelError {
        ModelError::Generation { model: self.model.clone(), message: message.to_string() }
    }
}

#[async_trait]
impl ChatModel for OpenAiCompatClient {
    fn name(&self) -> &str {
        &self.model
    }

    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        debug!(model = %self.model, user_len = user.len(), "sending chat completion request");

        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(system)
                .build()
                .map_err(|e| self.generation_error(format!("failed to build message: {e}")))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(user)
                .build()
                .map_err(|e| self.generation_error(format!("failed to build message: {e}")))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .temperature(self.temperature)
            .build()
            .map_err(|e| self.generation_error(format!("failed to build request: {e}")))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            error!(model = %self.model, error = %e, "chat completion request failed");
            self.generation_error(format!("API error: {e}"))
        })?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| self.generation_error("API returned no choices"))?;

        // Normalize response shape here: fall back to a string rendering of
        // the message when the content field is absent or empty.
        let text = match choice.message.content {
            Some(content) if !content.is_empty() => content,
            _ => format!("{:?}", choice.message),
        };

        debug!(model = %self.model, answer_len = text.len(), "chat completion received");
        Ok(text)
    }
}
