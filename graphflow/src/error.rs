//! Runtime error types for nodes and graph execution.
//!
//! Compilation errors live in `graph::compile_error`; this module covers
//! failures that surface while a compiled graph runs. The runner performs no
//! retries and no translation: a node error is wrapped with the failing node
//! name and propagated to the caller.

use thiserror::Error;

/// Error returned by a node's `run`.
///
/// Ordinary business outcomes ("no user message found") are not errors; nodes
/// encode those in returned state fields for a router to interpret. A
/// `NodeError` means the step itself failed and the run must abort.
#[derive(Debug, Error)]
pub enum NodeError {
    /// An underlying call to a model, search, or tool interface failed
    /// (timeout, transport error, malformed response).
    #[error("external call failed: {0}")]
    ExternalCall(String),

    /// The node itself failed (bad arguments, unusable state value).
    #[error("execution failed: {0}")]
    Execution(String),
}

/// Error surfaced by `CompiledGraph::invoke` / `stream`.
///
/// A failed run yields no usable state; callers wanting resumability must
/// re-invoke from the last known-good state (e.g. via a session store).
#[derive(Debug, Error)]
pub enum GraphError {
    /// A node failed; the failing node name is attached for diagnosability.
    #[error("node {node}: {source}")]
    Node {
        node: String,
        #[source]
        source: NodeError,
    },

    /// A router returned a key with no matching destination in its mapping.
    #[error("router for node {node} returned unmapped key: {key}")]
    UnresolvedRoute { node: String, key: String },

    /// A node name had no registration at step time. Compile-time validation
    /// makes this unreachable for graphs built through `WorkflowGraph`.
    #[error("unknown node: {0}")]
    UnknownNode(String),
}
