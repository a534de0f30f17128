//! End-to-end pipeline tests with a deterministic embedder and mock model.

use std::collections::HashMap;
use std::sync::Arc;

use assistant_cli::{ResumeAssistant, DEFAULT_SYSTEM_INSTRUCTIONS};
use assistant_model::MockChatModel;
use assistant_rag::{
    Chunker, Document, EmbeddingProvider, InMemoryVectorStore, RecursiveChunker, ResumeIndex,
    Retriever,
};
use async_trait::async_trait;

const DIM: usize = 128;

/// Deterministic embedder: hashed bag of words, L2-normalized.
struct BagOfWordsEmbedder;

#[async_trait]
impl EmbeddingProvider for BagOfWordsEmbedder {
    async fn embed(&self, text: &str) -> assistant_rag::Result<Vec<f32>> {
        let mut v = vec![0.0f32; DIM];
        for word in text
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
        {
            let hash =
                word.bytes().fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64));
            v[(hash % DIM as u64) as usize] += 1.0;
        }
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            v.iter_mut().for_each(|x| *x /= norm);
        }
        Ok(v)
    }

    fn model(&self) -> &str {
        "bag-of-words"
    }
}

async fn indexed_retriever(text: &str) -> Retriever {
    let document = Document {
        id: "resume".to_string(),
        text: text.to_string(),
        metadata: HashMap::new(),
        source_uri: None,
    };
    let chunks = RecursiveChunker::new(80, 10).chunk(&document);

    let index = Arc::new(ResumeIndex::new(
        Arc::new(InMemoryVectorStore::new()),
        Arc::new(BagOfWordsEmbedder),
    ));
    index.upsert_chunks(chunks).await.unwrap();
    Retriever::with_default_k(index)
}

#[tokio::test]
async fn answer_flows_retrieval_context_into_the_prompt() {
    let retriever = indexed_retriever(
        "Aayush has 5 years of experience in backend systems.\n\n\
         Hobbies include hiking, photography, and chess tournaments.",
    )
    .await;
    let model = Arc::new(MockChatModel::new("Aayush has 5 years of experience."));
    let assistant = ResumeAssistant::new(retriever, model.clone());

    let answer =
        assistant.answer("How many years of experience does Aayush have?").await.unwrap();
    assert_eq!(answer, "Aayush has 5 years of experience.");

    let calls = model.calls();
    assert_eq!(calls.len(), 1);
    let (system, user) = &calls[0];

    assert_eq!(system, DEFAULT_SYSTEM_INSTRUCTIONS);
    assert!(user.starts_with("Resume context:\n[Chunk 1]\n"));
    assert!(
        user.contains("Aayush has 5 years of experience in backend systems."),
        "most relevant chunk must appear first in the context: {user}"
    );
    assert!(user.ends_with("Question: How many years of experience does Aayush have?"));
}

#[tokio::test]
async fn empty_index_still_sends_a_prompt_with_empty_context() {
    let index = Arc::new(ResumeIndex::new(
        Arc::new(InMemoryVectorStore::new()),
        Arc::new(BagOfWordsEmbedder),
    ));
    let retriever = Retriever::with_default_k(index);

    let model = Arc::new(MockChatModel::new("I don't know."));
    let assistant = ResumeAssistant::new(retriever, model.clone());

    let answer = assistant.answer("Where did Aayush study?").await.unwrap();
    assert_eq!(answer, "I don't know.");

    // No early exit on empty retrieval: the grounding instructions are what
    // make the model decline, not this component.
    let calls = model.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1, "Resume context:\n\n\nQuestion: Where did Aayush study?");
}

#[tokio::test]
async fn custom_system_instructions_reach_the_model() {
    let retriever = indexed_retriever("A one-line resume.").await;
    let model = Arc::new(MockChatModel::new("ok"));
    let assistant = ResumeAssistant::new(retriever, model.clone())
        .with_system_instructions("Answer in French only.");

    assistant.answer("Qui est-ce?").await.unwrap();

    assert_eq!(model.calls()[0].0, "Answer in French only.");
}

#[tokio::test]
async fn uncertain_answers_are_ordinary_values() {
    // A document with no experience information: the model's own "don't
    // know" reply comes back through the same path as any other answer.
    let retriever = indexed_retriever(
        "Hobbies include hiking, photography, and chess tournaments.",
    )
    .await;
    let model =
        Arc::new(MockChatModel::new("I don't know; the context does not mention experience."));
    let assistant = ResumeAssistant::new(retriever, model);

    let answer =
        assistant.answer("How many years of experience does Aayush have?").await.unwrap();
    assert!(answer.contains("don't know"));
}
