//! Ready-made nodes for conversational graphs: model invocation and tool
//! execution.
//!
//! Both operate on the conventional `messages` append field plus a
//! `tool_calls` replace field: `ModelNode` writes pending calls there,
//! `ToolNode` drains them and feeds tool messages back. Wire them with a
//! router that checks `tool_calls` to build a call-execute-observe loop.

mod model_node;
mod tool_node;

pub use model_node::ModelNode;
pub use tool_node::ToolNode;

/// Conventional replace-field holding the model's pending tool calls.
pub const TOOL_CALLS: &str = "tool_calls";
