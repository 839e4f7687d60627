//! Model invocation interface.
//!
//! A graph's model node depends on a callable that takes the ordered message
//! list and returns one assistant turn (text and/or structured tool calls);
//! this module defines the trait, a streaming variant, and a mock
//! implementation. `ChatOpenAI` (feature `openai`) talks to a real
//! OpenAI-compatible API.

mod mock;

#[cfg(feature = "openai")]
mod openai;

pub use mock::MockLlm;

#[cfg(feature = "openai")]
pub use openai::ChatOpenAI;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::NodeError;
use crate::message::{Message, ToolCall};
use crate::stream::MessageChunk;

/// Tool choice mode for chat completions: when tools are present, controls
/// whether the model may choose (auto), must not use (none), or must use
/// (required) a tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ToolChoiceMode {
    /// Model can pick between a message or tool calls. Default when tools are present.
    #[default]
    Auto,
    /// Model will not call any tool.
    None,
    /// Model must call one or more tools.
    Required,
}

impl std::str::FromStr for ToolChoiceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "none" => Ok(Self::None),
            "required" => Ok(Self::Required),
            _ => Err(format!(
                "unknown tool_choice: {} (use auto, none, or required)",
                s
            )),
        }
    }
}

/// One model completion: assistant text and any structured tool calls.
///
/// **Interaction**: Returned by `LlmClient::invoke()`; `ModelNode` writes
/// `content` into a new assistant message and `tool_calls` into the state's
/// `tool_calls` field.
#[derive(Debug, Clone, Default)]
pub struct LlmResponse {
    /// Assistant message content (may be empty for a tool-call-only turn).
    pub content: String,
    /// Tool calls requested this turn; empty means a plain text reply.
    pub tool_calls: Vec<ToolCall>,
}

/// Model client: given ordered messages, returns one assistant response.
///
/// No determinism is guaranteed across calls. Implementations own their
/// transport-level retry and timeout behavior; the graph runner treats any
/// returned error as fatal for the run.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Invoke one turn: read messages, return assistant content and tool calls.
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, NodeError>;

    /// Streaming variant: forwards content fragments to `chunk_tx` in arrival
    /// order; their concatenation equals the returned `content`. The default
    /// implementation performs a single `invoke` and emits one chunk.
    async fn invoke_stream(
        &self,
        messages: &[Message],
        chunk_tx: Option<mpsc::Sender<MessageChunk>>,
    ) -> Result<LlmResponse, NodeError> {
        let response = self.invoke(messages).await?;
        if let Some(tx) = chunk_tx {
            if !response.content.is_empty() {
                let _ = tx
                    .send(MessageChunk {
                        content: response.content.clone(),
                    })
                    .await;
            }
        }
        Ok(response)
    }
}
