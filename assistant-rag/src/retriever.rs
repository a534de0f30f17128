//! Thin query interface binding a fixed `k` to an index handle.

use std::sync::Arc;

use crate::document::SearchResult;
use crate::error::Result;
use crate::index::ResumeIndex;

/// Retrieves the `top_k` most relevant chunks for a question.
///
/// Pure convenience wrapper over [`ResumeIndex::query`] with no state
/// beyond the bound parameters.
#[derive(Clone)]
pub struct Retriever {
    index: Arc<ResumeIndex>,
    top_k: usize,
}

impl Retriever {
    /// The default number of chunks retrieved per question.
    pub const DEFAULT_TOP_K: usize = 4;

    /// Create a retriever over `index` returning `top_k` results per query.
    pub fn new(index: Arc<ResumeIndex>, top_k: usize) -> Self {
        Self { index, top_k }
    }

    /// Create a retriever with the default `k` of 4.
    pub fn with_default_k(index: Arc<ResumeIndex>) -> Self {
        Self::new(index, Self::DEFAULT_TOP_K)
    }

    /// Retrieve the most relevant chunks for `question`, ordered by
    /// descending similarity, at most `top_k` of them.
    pub async fn retrieve(&self, question: &str) -> Result<Vec<SearchResult>> {
        self.index.query(question, self.top_k).await
    }
}
