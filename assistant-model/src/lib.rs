//! # assistant-model
//!
//! Chat completion clients for the resume assistant.
//!
//! ## Overview
//!
//! This crate provides the [`ChatModel`] trait and two implementations:
//!
//! - [`OpenAiCompatClient`] — any OpenAI-compatible endpoint (LM Studio,
//!   Ollama's OpenAI shim, vLLM, OpenAI itself)
//! - [`MockChatModel`] — canned replies for tests
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use assistant_model::{ChatModel, GenerationConfig, OpenAiCompatClient};
//!
//! let model = OpenAiCompatClient::new(GenerationConfig::default());
//! let answer = model.complete("Be concise.", "What is RAG?").await?;
//! ```

pub mod chat;
pub mod error;
pub mod mock;
pub mod openai;

pub use chat::ChatModel;
pub use error::{ModelError, Result};
pub use mock::MockChatModel;
pub use openai::{GenerationConfig, OpenAiCompatClient};
