//! The grounded answer pipeline: retrieve → assemble → generate.

use std::sync::Arc;

use anyhow::Result;
use assistant_model::ChatModel;
use assistant_rag::Retriever;
use tracing::info;

use crate::prompt;

/// The long-lived pipeline handle: a retriever bound to the index, a chat
/// model, and optional system instructions.
///
/// Constructed once at startup and reused across questions — there is no
/// ambient global state. Stateless across turns: each `answer` call starts
/// clean with no memory of prior questions.
pub struct ResumeAssistant {
    retriever: Retriever,
    model: Arc<dyn ChatModel>,
    system_instructions: Option<String>,
}

impl ResumeAssistant {
    /// Create an assistant with the default grounding instructions.
    pub fn new(retriever: Retriever, model: Arc<dyn ChatModel>) -> Self {
        Self { retriever, model, system_instructions: None }
    }

    /// Replace the default system instructions.
    pub fn with_system_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.system_instructions = Some(instructions.into());
        self
    }

    /// Answer one question grounded in the retrieved resume chunks.
    ///
    /// An answer expressing uncertainty ("I don't know") is an ordinary
    /// value produced by the same path as any other answer.
    ///
    /// # Errors
    ///
    /// Propagates embedding-service and generation-service failures; the
    /// caller decides whether to retry or report.
    pub async fn answer(&self, question: &str) -> Result<String> {
        let results = self.retriever.retrieve(question).await?;
        info!(result_count = results.len(), "retrieved context for question");

        let prompt = prompt::assemble(question, &results, self.system_instructions.as_deref());

        let answer = self.model.complete(&prompt.system, &prompt.user).await?;
        info!(model = self.model.name(), answer_len = answer.len(), "generated answer");

        Ok(answer)
    }
}
