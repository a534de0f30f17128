//! Durable vector store persisting entries under a directory.
//!
//! [`PersistedVectorStore`] owns its directory; no other component writes
//! there. Entries are stored one JSON object per line in `entries.jsonl`,
//! loaded in full at open and appended on upsert, so the index survives
//! process restarts and upserts stay additive.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::document::{Chunk, SearchResult};
use crate::error::{RagError, Result};
use crate::vectorstore::{cosine_similarity, VectorStore};

/// File name for the serialized entries inside the persistence directory.
const ENTRIES_FILE: &str = "entries.jsonl";

/// One persisted (chunk, embedding) pair.
///
/// The entry ID is freshly generated per upsert, so re-ingesting identical
/// text creates a new entry rather than overwriting — the additive-upsert
/// behavior the index contract requires.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct IndexEntry {
    id: Uuid,
    chunk: Chunk,
}

/// A vector store backed by a JSON-lines file in a persistence directory.
///
/// Search is exact cosine similarity over all entries, held in memory
/// behind a `tokio::sync::RwLock` so concurrent readers are safe.
pub struct PersistedVectorStore {
    dir: PathBuf,
    entries: RwLock<Vec<IndexEntry>>,
}

fn store_error(message: impl Into<String>) -> RagError {
    RagError::VectorStore { backend: "Persisted".to_string(), message: message.into() }
}

impl PersistedVectorStore {
    /// Open the store at `dir`, creating the directory if absent and
    /// loading any previously persisted entries.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::VectorStore`] if the directory cannot be created
    /// or the entries file is unreadable or corrupt.
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| store_error(format!("failed to create '{}': {e}", dir.display())))?;

        let entries_path = dir.join(ENTRIES_FILE);
        let mut entries = Vec::new();

        if entries_path.exists() {
            let raw = tokio::fs::read_to_string(&entries_path).await.map_err(|e| {
                store_error(format!("failed to read '{}': {e}", entries_path.display()))
            })?;
            for line in raw.lines().filter(|l| !l.trim().is_empty()) {
                let entry: IndexEntry = serde_json::from_str(line).map_err(|e| {
                    store_error(format!("corrupt entry in '{}': {e}", entries_path.display()))
                })?;
                entries.push(entry);
            }
        }

        info!(dir = %dir.display(), entry_count = entries.len(), "opened persisted vector store");

        Ok(Self { dir, entries: RwLock::new(entries) })
    }

    /// Path of the persistence directory this store owns.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Whether the store held no entries when queried.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl VectorStore for PersistedVectorStore {
    async fn upsert(&self, chunks: &[Chunk]) -> Result<()> {
        if chunks.is_empty() {
            return Ok(());
        }

        let new_entries: Vec<IndexEntry> =
            chunks.iter().map(|chunk| IndexEntry { id: Uuid::new_v4(), chunk: chunk.clone() }).collect();

        let mut lines = String::new();
        for entry in &new_entries {
            let line = serde_json::to_string(entry)
                .map_err(|e| store_error(format!("failed to serialize entry: {e}")))?;
            lines.push_str(&line);
            lines.push('\n');
        }

        // Hold the write lock across the file append so readers never see
        // memory and disk disagree mid-upsert.
        let mut entries = self.entries.write().await;

        let entries_path = self.dir.join(ENTRIES_FILE);
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&entries_path)
            .await
            .map_err(|e| {
                store_error(format!("failed to open '{}': {e}", entries_path.display()))
            })?;
        file.write_all(lines.as_bytes()).await.map_err(|e| {
            store_error(format!("failed to append to '{}': {e}", entries_path.display()))
        })?;
        file.flush().await.map_err(|e| {
            store_error(format!("failed to flush '{}': {e}", entries_path.display()))
        })?;

        entries.extend(new_entries);
        Ok(())
    }

    async fn search(&self, embedding: &[f32], top_k: usize) -> Result<Vec<SearchResult>> {
        let entries = self.entries.read().await;

        let mut scored: Vec<SearchResult> = entries
            .iter()
            .map(|entry| {
                let score = cosine_similarity(&entry.chunk.embedding, embedding);
                SearchResult { chunk: entry.chunk.clone(), score }
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
