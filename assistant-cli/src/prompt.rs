//! Prompt assembly: retrieved chunks + question → two-role prompt.

use assistant_rag::SearchResult;

/// Default grounding instructions for the system role.
///
/// The "don't know" behavior lives here: when the context lacks the answer,
/// the model declines on its own — there is no early exit in the assembler.
pub const DEFAULT_SYSTEM_INSTRUCTIONS: &str = "You are a helpful personal assistant answering \
     questions about a resume. Answer ONLY using the information in the provided resume \
     context. If the answer is not present in the context, say you don't know. Be concise \
     and factual.";

/// A two-role prompt: system instructions plus a user message carrying the
/// labeled context block and the question. Built fresh per query, never
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    /// System-role instructions.
    pub system: String,
    /// User-role message with context and question.
    pub user: String,
}

/// Assemble a prompt from a question and its retrieval result.
///
/// Chunks are rendered as `[Chunk 1]`, `[Chunk 2]`, … in the order given —
/// descending similarity, not document order — joined by blank lines. An
/// empty retrieval result produces an empty context block; the prompt is
/// still assembled and sent, and the grounding instructions make the model
/// decline.
pub fn assemble(
    question: &str,
    results: &[SearchResult],
    system_instructions: Option<&str>,
) -> Prompt {
    let context = results
        .iter()
        .enumerate()
        .map(|(i, result)| format!("[Chunk {}]\n{}", i + 1, result.chunk.text))
        .collect::<Vec<_>>()
        .join("\n\n");

    Prompt {
        system: system_instructions.unwrap_or(DEFAULT_SYSTEM_INSTRUCTIONS).to_string(),
        user: format!("Resume context:\n{context}\n\nQuestion: {question}"),
    }
}
