//! Model node: read messages, call the model, append the assistant turn.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::NodeError;
use crate::graph::{Node, RunContext};
use crate::llm::LlmClient;
use crate::message::Message;
use crate::state::{State, StateUpdate};
use crate::stream::{MessageChunk, StreamEvent, StreamMetadata};

use super::TOOL_CALLS;

/// Node that performs one model turn.
///
/// Reads the state's message list, invokes the client, and returns an update
/// appending one assistant message and replacing the `tool_calls` field with
/// the calls from this turn (empty for a plain text reply, so stale calls
/// from an earlier turn never linger).
///
/// **Interaction**: Holds a `Box<dyn LlmClient>` (e.g. `MockLlm` or
/// `ChatOpenAI`); registered like any other node. Overrides
/// `run_with_context` to forward token chunks when `Messages` streaming is on.
pub struct ModelNode {
    llm: Box<dyn LlmClient>,
}

impl ModelNode {
    /// Creates a model node with the given client.
    pub fn new(llm: Box<dyn LlmClient>) -> Self {
        Self { llm }
    }

    fn update_from(response: crate::llm::LlmResponse) -> StateUpdate {
        let calls = serde_json::to_value(&response.tool_calls)
            .unwrap_or_else(|_| serde_json::Value::Array(Vec::new()));
        StateUpdate::new()
            .with_message(Message::assistant(response.content))
            .set(TOOL_CALLS, calls)
    }
}

#[async_trait]
impl Node for ModelNode {
    async fn run(&self, state: &State) -> Result<StateUpdate, NodeError> {
        let response = self.llm.invoke(&state.messages()).await?;
        Ok(Self::update_from(response))
    }

    /// Streaming-aware variant: when the context wants message chunks, uses
    /// `invoke_stream()` and forwards each chunk as `StreamEvent::Messages`
    /// tagged with this node's name.
    async fn run_with_context(
        &self,
        state: &State,
        ctx: &RunContext,
    ) -> Result<StateUpdate, NodeError> {
        if !ctx.wants_message_chunks() {
            return self.run(state).await;
        }

        let (chunk_tx, mut chunk_rx) = mpsc::channel::<MessageChunk>(128);
        let stream_tx = ctx
            .stream_tx
            .clone()
            .ok_or_else(|| NodeError::Execution("stream context without sender".into()))?;
        let node = ctx.node.clone();

        let forward_task = tokio::spawn(async move {
            while let Some(chunk) = chunk_rx.recv().await {
                let event = StreamEvent::Messages {
                    chunk,
                    metadata: StreamMetadata { node: node.clone() },
                };
                // Consumer may have dropped; nothing to do about it.
                let _ = stream_tx.send(event).await;
            }
        });

        let result = self
            .llm
            .invoke_stream(&state.messages(), Some(chunk_tx))
            .await;

        // chunk_tx was moved into invoke_stream and dropped there; the
        // forwarder drains the channel and exits.
        let _ = forward_task.await;

        Ok(Self::update_from(result?))
    }
}
