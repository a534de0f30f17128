//! Mock chat model for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::chat::ChatModel;
use crate::error::Result;

/// A [`ChatModel`] that returns a canned reply and records every prompt it
/// receives, so tests can assert on what reached the generation boundary.
pub struct MockChatModel {
    reply: String,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockChatModel {
    /// Create a mock that always replies with `reply`.
    pub fn new(reply: impl Into<String>) -> Self {
        Self { reply: reply.into(), calls: Mutex::new(Vec::new()) }
    }

    /// The (system, user) message pairs received so far.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().expect("mock lock poisoned").clone()
    }
}

#[async_trait]
impl ChatModel for MockChatModel {
    fn name(&self) -> &str {
        "mock"
    }

    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        self.calls.lock().expect("mock lock poisoned").push((system.to_string(), user.to_string()));
        Ok(self.reply.clone())
    }
}
