//! # assistant-cli
//!
//! Interactive resume assistant: wires the retrieval index
//! (`assistant-rag`) and the chat model (`assistant-model`) into a
//! grounded question-answering loop.

pub mod assistant;
pub mod console;
pub mod prompt;

pub use assistant::ResumeAssistant;
pub use console::{classify_input, run_console, Input};
pub use prompt::{assemble, Prompt, DEFAULT_SYSTEM_INSTRUCTIONS};
