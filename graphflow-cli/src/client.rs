//! Model client selection: real API when available, mock otherwise.

use graphflow::{LlmClient, MockLlm};

/// Builds the model client for a demo run.
///
/// With the `openai` feature and an `OPENAI_API_KEY` in the environment (or
/// `.env`), returns a real `ChatOpenAI` client unless `--mock` was passed.
/// Otherwise falls back to an echoing mock so every demo works offline.
#[cfg(feature = "openai")]
pub fn build_llm(mock: bool, model: &str) -> Box<dyn LlmClient> {
    dotenv::dotenv().ok();
    if !mock && std::env::var("OPENAI_API_KEY").is_ok() {
        return Box::new(graphflow::ChatOpenAI::new(model));
    }
    Box::new(MockLlm::echo())
}

/// Builds the model client for a demo run (mock-only build).
#[cfg(not(feature = "openai"))]
pub fn build_llm(_mock: bool, _model: &str) -> Box<dyn LlmClient> {
    Box::new(MockLlm::echo())
}
