//! Error types for the `assistant-model` crate.

use thiserror::Error;

/// Errors that can occur when generating completions.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The completion service call failed.
    #[error("generation error ({model}): {message}")]
    Generation {
        /// The model the request targeted.
        model: String,
        /// A description of the failure.
        message: String,
    },
}

/// A convenience result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
