//! Ollama embedding provider using the local Ollama embeddings API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::embedding::EmbeddingProvider;
use crate::error::{RagError, Result};

/// The default Ollama base URL.
const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// The default embedding model.
const DEFAULT_MODEL: &str = "mxbai-embed-large:latest";

/// An [`EmbeddingProvider`] backed by a local Ollama server.
///
/// Uses `reqwest` to call the `/api/embeddings` endpoint directly. Requires
/// `ollama serve` to be running with the model pulled. Failures propagate as
/// [`RagError::Embedding`]; there is no internal retry — retry policy
/// belongs to the caller.
///
/// # Configuration
///
/// - `model` — defaults to `mxbai-embed-large:latest`.
/// - `base_url` — defaults to `http://localhost:11434`.
pub struct OllamaEmbeddingProvider {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl Default for OllamaEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl OllamaEmbeddingProvider {
    /// Create a new provider with the default model and base URL.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.into(),
            model: DEFAULT_MODEL.into(),
        }
    }

    /// Set the embedding model name (e.g. `nomic-embed-text`).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the Ollama base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

// ── Ollama API request/response types ──────────────────────────────

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    embedding: Vec<f32>,
}

// ── EmbeddingProvider implementation ───────────────────────────────

#[async_trait]
impl EmbeddingProvider for OllamaEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        debug!(provider = "Ollama", model = %self.model, text_len = text.len(), "embedding text");

        let url = format!("{}/api/embeddings", self.base_url);
        let request_body = EmbeddingRequest { model: &self.model, prompt: text };

        let response =
            self.client.post(&url).json(&request_body).send().await.map_err(|e| {
                error!(provider = "Ollama", error = %e, "request failed");
                RagError::Embedding {
                    provider: "Ollama".into(),
                    message: format!("request failed (is `ollama serve` running?): {e}"),
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            error!(provider = "Ollama", %status, "API error");
            return Err(RagError::Embedding {
                provider: "Ollama".into(),
                message: format!("API returned {status}: {body}"),
            });
        }

        let embedding_response: EmbeddingResponse = response.json().await.map_err(|e| {
            error!(provider = "Ollama", error = %e, "failed to parse response");
            RagError::Embedding {
                provider: "Ollama".into(),
                message: format!("failed to parse response: {e}"),
            }
        })?;

        Ok(embedding_response.embedding)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
