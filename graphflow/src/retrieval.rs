//! Retrieval interface for RAG-style nodes.
//!
//! A retriever takes a query string and returns an ordered sequence of text
//! passages; no determinism is guaranteed across calls. Vector search and
//! embedding indexing are out of scope — the in-memory implementation ranks
//! by keyword overlap, which is enough for demos and tests.

use async_trait::async_trait;

use crate::error::NodeError;

/// Source of context passages for retrieval-augmented nodes.
#[async_trait]
pub trait Retriever: Send + Sync {
    /// Returns passages relevant to `query`, most relevant first.
    async fn retrieve(&self, query: &str) -> Result<Vec<String>, NodeError>;
}

/// In-memory retriever over a fixed passage list.
///
/// Scores each passage by the number of lowercase query terms it contains;
/// ties keep insertion order, zero-score passages are dropped. Returns at
/// most `top_k` passages.
pub struct InMemoryRetriever {
    passages: Vec<String>,
    top_k: usize,
}

impl InMemoryRetriever {
    /// Creates a retriever over `passages` returning at most `top_k` hits.
    pub fn new(passages: Vec<String>, top_k: usize) -> Self {
        Self { passages, top_k }
    }

    fn score(passage: &str, terms: &[String]) -> usize {
        let haystack = passage.to_lowercase();
        terms.iter().filter(|t| haystack.contains(t.as_str())).count()
    }
}

#[async_trait]
impl Retriever for InMemoryRetriever {
    async fn retrieve(&self, query: &str) -> Result<Vec<String>, NodeError> {
        let terms: Vec<String> = query
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let mut scored: Vec<(usize, &String)> = self
            .passages
            .iter()
            .map(|p| (Self::score(p, &terms), p))
            .filter(|(score, _)| *score > 0)
            .collect();
        // Stable sort keeps insertion order among equal scores.
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(scored
            .into_iter()
            .take(self.top_k)
            .map(|(_, p)| p.clone())
            .collect())
    }
}
