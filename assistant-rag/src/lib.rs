//! # assistant-rag
//!
//! Retrieval side of the resume assistant: document loading, chunking,
//! embedding, and a persisted vector index with similarity search.
//!
//! ## Overview
//!
//! A document flows through the pipeline once at startup:
//!
//! ```text
//! load_document → RecursiveChunker → ResumeIndex::build_or_load
//! ```
//!
//! then each question goes through a [`Retriever`] bound to the index:
//!
//! ```text
//! question → embed → cosine search → top-k chunks
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use assistant_rag::{
//!     load_document, Chunker, OllamaEmbeddingProvider, RagConfig,
//!     RecursiveChunker, ResumeIndex, Retriever,
//! };
//!
//! let config = RagConfig::default();
//! let document = load_document("./sources/resume.pdf".as_ref())?;
//! let chunks = RecursiveChunker::new(config.chunk_size, config.chunk_overlap)
//!     .chunk(&document);
//! let embedder = Arc::new(OllamaEmbeddingProvider::new());
//! let index = ResumeIndex::build_or_load(chunks, "./.resume_index", embedder).await?;
//! let retriever = Retriever::new(Arc::new(index), config.top_k);
//! let results = retriever.retrieve("How many years of experience?").await?;
//! ```

pub mod chunking;
pub mod config;
pub mod document;
pub mod embedding;
pub mod error;
pub mod index;
pub mod inmemory;
pub mod loader;
pub mod ollama;
pub mod persisted;
pub mod retriever;
pub mod vectorstore;

pub use chunking::{Chunker, RecursiveChunker};
pub use config::RagConfig;
pub use document::{Chunk, Document, SearchResult};
pub use embedding::EmbeddingProvider;
pub use error::{RagError, Result};
pub use index::ResumeIndex;
pub use inmemory::InMemoryVectorStore;
pub use loader::load_document;
pub use ollama::OllamaEmbeddingProvider;
pub use persisted::PersistedVectorStore;
pub use retriever::Retriever;
pub use vectorstore::VectorStore;
