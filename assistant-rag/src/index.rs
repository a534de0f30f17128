//! The durable embedding index: build-or-load, upsert, and query.

use std::path::Path;
use std::sync::Arc;

use tracing::{error, info};

use crate::document::{Chunk, SearchResult};
use crate::embedding::EmbeddingProvider;
use crate::error::Result;
use crate::persisted::PersistedVectorStore;
use crate::vectorstore::VectorStore;

/// A long-lived handle over the persisted embedding index.
///
/// Pairs a [`VectorStore`] with the [`EmbeddingProvider`] that populated it.
/// Queries are embedded with that same provider; pointing the handle at an
/// index built by a different model silently produces meaningless
/// similarities, so the caller must keep the two consistent.
pub struct ResumeIndex {
    store: Arc<dyn VectorStore>,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl ResumeIndex {
    /// Create an index handle over an existing store.
    ///
    /// Used directly in tests; production code goes through
    /// [`build_or_load`](ResumeIndex::build_or_load).
    pub fn new(store: Arc<dyn VectorStore>, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self { store, embedder }
    }

    /// Open the persisted index at `persist_path` and upsert `chunks` into it.
    ///
    /// If the directory already contains entries they are loaded and the
    /// supplied chunks are added on top (additive indexing — there is no
    /// dedup key, so re-ingesting the same document grows the index). If
    /// the directory is empty, every chunk is embedded into a fresh index.
    ///
    /// # Errors
    ///
    /// Propagates [`RagError::VectorStore`](crate::RagError::VectorStore)
    /// from the store and [`RagError::Embedding`](crate::RagError::Embedding)
    /// from the embedding service; there is no internal retry.
    pub async fn build_or_load(
        chunks: Vec<Chunk>,
        persist_path: impl AsRef<Path>,
        embedder: Arc<dyn EmbeddingProvider>,
    ) -> Result<Self> {
        let store = PersistedVectorStore::open(persist_path).await?;

        let existing = store.count().await?;
        if existing == 0 {
            info!(chunk_count = chunks.len(), "building fresh index");
        } else {
            info!(existing, chunk_count = chunks.len(), "loaded existing index, upserting chunks");
        }

        let index = Self::new(Arc::new(store), embedder);
        index.upsert_chunks(chunks).await?;
        Ok(index)
    }

    /// Embed `chunks` and add them to the store.
    pub async fn upsert_chunks(&self, mut chunks: Vec<Chunk>) -> Result<()> {
        if chunks.is_empty() {
            return Ok(());
        }

        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        let embeddings = self.embedder.embed_batch(&texts).await.inspect_err(|e| {
            error!(error = %e, "embedding failed during ingestion");
        })?;

        for (chunk, embedding) in chunks.iter_mut().zip(embeddings) {
            chunk.embedding = embedding;
        }

        self.store.upsert(&chunks).await.inspect_err(|e| {
            error!(error = %e, "upsert failed during ingestion");
        })?;

        info!(chunk_count = chunks.len(), "indexed chunks");
        Ok(())
    }

    /// Embed `query_text` and return the `top_k` most similar chunks,
    /// ordered by descending similarity.
    ///
    /// No threshold filtering is applied — the caller sees exactly the k
    /// nearest even when similarity is low. An empty index yields an empty
    /// result.
    pub async fn query(&self, query_text: &str, top_k: usize) -> Result<Vec<SearchResult>> {
        let query_embedding = self.embedder.embed(query_text).await.inspect_err(|e| {
            error!(error = %e, "embedding failed during query");
        })?;

        let results = self.store.search(&query_embedding, top_k).await.inspect_err(|e| {
            error!(error = %e, "vector store search failed");
        })?;

        info!(result_count = results.len(), "query completed");
        Ok(results)
    }

    /// Number of entries in the underlying store.
    pub async fn count(&self) -> Result<usize> {
        self.store.count().await
    }
}
