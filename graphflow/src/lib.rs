//! # graphflow
//!
//! Conversational workflow graphs in Rust: a shared state with per-field
//! **merge policies** flows through named nodes, and routers pick the next
//! node from the merged state until `END` is reached.
//!
//! ## Design Principles
//!
//! - **Partial updates**: A node reads the full state and returns only the
//!   fields it touches; the runner merges them under the schema's policy
//!   (append fields concatenate, replace fields overwrite).
//! - **Routing outside nodes**: Nodes encode outcomes in state fields; a
//!   [`Router`] reads the post-merge state and names the next node. Cycles
//!   are legal and bounded by counter fields, not by the runner.
//! - **Eager validation**: `WorkflowGraph::compile` rejects unknown nodes,
//!   conflicting edges, and dead ends before the first step runs.
//!
//! ## Main Modules
//!
//! - [`graph`]: `WorkflowGraph`, `CompiledGraph`, `Node`, `Router` — build
//!   and run workflow graphs.
//! - [`state`]: `State`, `StateSchema`, `StateUpdate` — the merge-policy
//!   state container.
//! - [`llm`]: `LlmClient` trait, `MockLlm`, and optional `ChatOpenAI` via the
//!   `openai` feature.
//! - [`nodes`]: `ModelNode` and `ToolNode` for model/tool loops.
//! - [`tool_source`], [`retrieval`], [`session`]: boundary collaborators —
//!   tools, passage retrieval, per-session state.
//! - [`parallel`]: run independent graphs concurrently and join all results.
//! - [`prompt`]: `{variable}` templates for strings and chat messages.
//! - [`output_parser`]: recover lists, JSON, and typed records from
//!   assistant replies.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use graphflow::{
//!     FnNode, Message, NodeError, State, StateSchema, StateUpdate, WorkflowGraph, END,
//! };
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mut graph = WorkflowGraph::new(StateSchema::messages_only());
//! graph.add_node(
//!     "reply",
//!     Arc::new(FnNode::new(|_state: &State| {
//!         Ok::<_, NodeError>(StateUpdate::new().with_message(Message::assistant("hi")))
//!     })),
//! );
//! graph.set_entry_point("reply");
//! graph.add_edge("reply", END);
//! let compiled = graph.compile().unwrap();
//!
//! let mut state = compiled.initial_state();
//! state.push_message(Message::human("hello"));
//! let out = compiled.invoke(state).await.unwrap();
//! assert_eq!(out.messages().len(), 2);
//! # }
//! ```
//!
//! ## Features
//!
//! - `openai`: OpenAI-compatible chat via `async-openai`.
//! - `tracing`: structured logging through the `tracing` crate instead of
//!   stderr fallbacks.

pub mod error;
pub mod graph;
pub mod llm;
pub mod message;
pub mod nodes;
pub mod output_parser;
pub mod parallel;
pub mod prompt;
pub mod retrieval;
pub mod session;
pub mod state;
pub mod stream;
pub mod tool_source;

pub use error::{GraphError, NodeError};
pub use graph::{
    router, CompilationError, CompiledGraph, FnNode, Node, Router, RunContext, WorkflowGraph, END,
};
pub use llm::{LlmClient, LlmResponse, MockLlm, ToolChoiceMode};
#[cfg(feature = "openai")]
pub use llm::ChatOpenAI;
pub use message::{Message, Role, ToolCall};
pub use nodes::{ModelNode, ToolNode, TOOL_CALLS};
pub use output_parser::{
    CommaSeparatedListParser, JsonOutputParser, OutputParseError, TypedOutputParser,
};
pub use parallel::invoke_parallel;
pub use prompt::{ChatPromptTemplate, PromptError, PromptTemplate};
pub use retrieval::{InMemoryRetriever, Retriever};
pub use session::{InMemorySessionStore, SessionStore};
pub use state::{MergePolicy, State, StateSchema, StateUpdate, MESSAGES};
pub use stream::{MessageChunk, StreamEvent, StreamMetadata, StreamMode};
pub use tool_source::{MockToolSource, ToolOutput, ToolSource, ToolSourceError, ToolSpec};
