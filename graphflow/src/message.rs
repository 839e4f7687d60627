//! Conversational turns: system, human, assistant, and tool messages.
//!
//! Messages are immutable once appended to a state's message list; a run only
//! accumulates them. Tool turns carry a `tool_call_id` back-reference to the
//! assistant tool call they answer. Serde-tagged by `role` so messages can be
//! stored inside [`State`](crate::state::State) fields as JSON values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role of a conversational turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    System,
    Human,
    Assistant,
    Tool,
}

/// One conversational turn. Content may be empty (e.g. a tool-call-only
/// assistant turn); tool turns reference the originating call by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Message {
    System { content: String },
    Human { content: String },
    Assistant { content: String },
    Tool { content: String, tool_call_id: String },
}

impl Message {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Message::System {
            content: content.into(),
        }
    }

    /// Creates a human (user) message.
    pub fn human(content: impl Into<String>) -> Self {
        Message::Human {
            content: content.into(),
        }
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Message::Assistant {
            content: content.into(),
        }
    }

    /// Creates a tool result message answering the call with `tool_call_id`.
    pub fn tool(content: impl Into<String>, tool_call_id: impl Into<String>) -> Self {
        Message::Tool {
            content: content.into(),
            tool_call_id: tool_call_id.into(),
        }
    }

    /// The role of this turn.
    pub fn role(&self) -> Role {
        match self {
            Message::System { .. } => Role::System,
            Message::Human { .. } => Role::Human,
            Message::Assistant { .. } => Role::Assistant,
            Message::Tool { .. } => Role::Tool,
        }
    }

    /// Text content of this turn.
    pub fn content(&self) -> &str {
        match self {
            Message::System { content }
            | Message::Human { content }
            | Message::Assistant { content }
            | Message::Tool { content, .. } => content,
        }
    }
}

impl From<&Message> for Value {
    fn from(m: &Message) -> Value {
        serde_json::to_value(m).unwrap_or(Value::Null)
    }
}

impl From<Message> for Value {
    fn from(m: Message) -> Value {
        Value::from(&m)
    }
}

/// Structured tool invocation requested by the model: tool name plus raw
/// JSON arguments. `id` links the eventual tool message back to this call.
///
/// **Interaction**: Produced by `LlmClient::invoke` inside `LlmResponse`;
/// consumed by `ToolNode`, which answers each call with `Message::tool`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Tool name as exposed by the tool source.
    pub name: String,
    /// Arguments as a raw JSON string (model output, not yet validated).
    pub arguments: String,
    /// Call id; echoed in the tool message so the model can pair them.
    pub id: Option<String>,
}
