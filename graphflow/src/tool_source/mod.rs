//! Tool specs and execution.
//!
//! The model may answer with structured tool calls instead of plain content;
//! a `ToolSource` lists the available tools and executes a call, and
//! `ToolNode` feeds the output back into the conversation as a tool message
//! keyed by the call id.

mod mock;

pub use mock::MockToolSource;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Description of one callable tool: name, optional description, and a JSON
/// schema for its arguments. Passed to the model so it can emit tool calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSpec {
    pub name: String,
    pub description: Option<String>,
    pub input_schema: Value,
}

/// Text produced by one tool execution.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    pub content: String,
}

/// Error from listing or calling tools.
#[derive(Debug, Error)]
pub enum ToolSourceError {
    /// The named tool is not provided by this source.
    #[error("tool not found: {0}")]
    NotFound(String),

    /// The call itself failed (transport, bad arguments, tool-side error).
    #[error("tool call failed: {0}")]
    CallFailed(String),
}

/// Source of executable tools.
///
/// **Interaction**: `list_tools()` feeds `ChatOpenAI::with_tools`;
/// `call_tool` is driven by `ToolNode` for each pending `ToolCall`.
#[async_trait]
pub trait ToolSource: Send + Sync {
    /// Lists the tools this source provides.
    async fn list_tools(&self) -> Result<Vec<ToolSpec>, ToolSourceError>;

    /// Executes `name` with the given JSON arguments.
    async fn call_tool(&self, name: &str, arguments: Value) -> Result<ToolOutput, ToolSourceError>;
}
