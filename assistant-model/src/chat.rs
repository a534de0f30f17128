//! Chat completion trait.

use async_trait::async_trait;

use crate::error::Result;

/// A chat-completion service taking a two-role prompt and returning text.
///
/// One blocking request/response per call — no retry, no streaming. Model
/// name, temperature, endpoint, and credential are fixed configuration on
/// the implementation, not supplied per request.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// The model identifier this client targets.
    fn name(&self) -> &str;

    /// Submit a system + user message pair and return the textual completion.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Generation`](crate::ModelError::Generation) if
    /// the service call fails.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}
