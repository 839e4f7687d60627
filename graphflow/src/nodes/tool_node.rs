//! Tool node: execute pending tool calls, feed results back as tool messages.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::NodeError;
use crate::graph::Node;
use crate::message::{Message, ToolCall};
use crate::state::{State, StateUpdate};
use crate::tool_source::ToolSource;

use super::TOOL_CALLS;

/// Node that drains the `tool_calls` field.
///
/// Executes each pending call through the tool source in order, appends one
/// tool message per call (keyed by the call id so the model can pair call
/// and result), and resets `tool_calls` to empty. With no pending calls the
/// node is a no-op apart from the reset — not an error.
///
/// **Interaction**: Pairs with `ModelNode` in a model → tools → model loop;
/// a router checking `tool_calls` decides whether to come back here.
pub struct ToolNode {
    tools: Arc<dyn ToolSource>,
}

impl ToolNode {
    /// Creates a tool node backed by the given source.
    pub fn new(tools: Arc<dyn ToolSource>) -> Self {
        Self { tools }
    }

    fn pending_calls(state: &State) -> Vec<ToolCall> {
        state
            .get(TOOL_CALLS)
            .cloned()
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Node for ToolNode {
    async fn run(&self, state: &State) -> Result<StateUpdate, NodeError> {
        let mut update = StateUpdate::new().set(TOOL_CALLS, Value::Array(Vec::new()));

        for call in Self::pending_calls(state) {
            let arguments: Value = serde_json::from_str(&call.arguments).map_err(|e| {
                NodeError::Execution(format!(
                    "malformed arguments for tool {}: {}",
                    call.name, e
                ))
            })?;
            let output = self
                .tools
                .call_tool(&call.name, arguments)
                .await
                .map_err(|e| NodeError::ExternalCall(e.to_string()))?;
            let call_id = call.id.unwrap_or_else(|| call.name.clone());
            update = update.with_message(Message::tool(output.content, call_id));
        }

        Ok(update)
    }
}
