//! In-memory vector store using cosine similarity.
//!
//! [`InMemoryVectorStore`] keeps entries in a `Vec` behind a
//! `tokio::sync::RwLock`. It is suitable for tests and small corpora; the
//! durable counterpart is [`PersistedVectorStore`](crate::persisted::PersistedVectorStore).

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::document::{Chunk, SearchResult};
use crate::error::Result;
use crate::vectorstore::{cosine_similarity, VectorStore};

/// An in-memory vector store using cosine similarity for search.
///
/// Entries are appended in upsert order; duplicates are accepted.
#[derive(Debug, Default)]
pub struct InMemoryVectorStore {
    entries: RwLock<Vec<Chunk>>,
}

impl InMemoryVectorStore {
    /// Create a new empty in-memory vector store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn upsert(&self, chunks: &[Chunk]) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.extend(chunks.iter().cloned());
        Ok(())
    }

    async fn search(&self, embedding: &[f32], top_k: usize) -> Result<Vec<SearchResult>> {
        let entries = self.entries.read().await;

        let mut scored: Vec<SearchResult> = entries
            .iter()
            .map(|chunk| {
                let score = cosine_similarity(&chunk.embedding, embedding);
                SearchResult { chunk: chunk.clone(), score }
            })
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_k);
        Ok(scored)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.entries.read().await.len())
    }
}
