//! Mock LLM for tests and demos: fixed reply, optional tool calls, no API.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::NodeError;
use crate::llm::{LlmClient, LlmResponse};
use crate::message::{Message, ToolCall};
use crate::stream::MessageChunk;

/// Mock model client: returns a fixed reply, or echoes the last human
/// message when built with [`echo`](MockLlm::echo).
///
/// The streaming variant splits the reply on word boundaries so chunk
/// handling can be exercised without a real API; the chunks concatenate to
/// exactly the final content.
pub struct MockLlm {
    content: String,
    tool_calls: Vec<ToolCall>,
    echo: bool,
}

impl MockLlm {
    /// Mock that always replies with `content`.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tool_calls: Vec::new(),
            echo: false,
        }
    }

    /// Mock that replies with the content of the last human message
    /// (falling back to a fixed line when there is none).
    pub fn echo() -> Self {
        Self {
            content: "I have nothing to respond to.".into(),
            tool_calls: Vec::new(),
            echo: true,
        }
    }

    /// Attach tool calls to every response (builder style).
    pub fn with_tool_calls(mut self, tool_calls: Vec<ToolCall>) -> Self {
        self.tool_calls = tool_calls;
        self
    }

    fn reply_for(&self, messages: &[Message]) -> String {
        if self.echo {
            messages
                .iter()
                .rev()
                .find_map(|m| match m {
                    Message::Human { content } => Some(content.clone()),
                    _ => None,
                })
                .unwrap_or_else(|| self.content.clone())
        } else {
            self.content.clone()
        }
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, NodeError> {
        Ok(LlmResponse {
            content: self.reply_for(messages),
            tool_calls: self.tool_calls.clone(),
        })
    }

    async fn invoke_stream(
        &self,
        messages: &[Message],
        chunk_tx: Option<mpsc::Sender<MessageChunk>>,
    ) -> Result<LlmResponse, NodeError> {
        let content = self.reply_for(messages);
        if let Some(tx) = chunk_tx {
            for piece in content.split_inclusive(' ') {
                let _ = tx
                    .send(MessageChunk {
                        content: piece.to_string(),
                    })
                    .await;
            }
        }
        Ok(LlmResponse {
            content,
            tool_calls: self.tool_calls.clone(),
        })
    }
}
