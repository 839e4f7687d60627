//! Graph compilation error.
//!
//! Returned by `WorkflowGraph::compile` when the edge table references
//! unknown nodes, the entry point is missing, or a node carries conflicting
//! or missing outgoing edges. All configuration problems are caught here,
//! before the first step runs.

use thiserror::Error;

/// Error when compiling a workflow graph.
///
/// Returned by `WorkflowGraph::compile()`. Validation ensures every name in
/// the edge table (except END) is registered, the entry point exists, and
/// each node has exactly one outgoing edge declaration — one unconditional
/// destination or one conditional edge set, never both.
#[derive(Debug, Error)]
pub enum CompilationError {
    /// A node name referenced by an edge or the entry point was never
    /// registered via `add_node` (and is not END).
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// No entry point was set via `set_entry_point`.
    #[error("graph has no entry point")]
    MissingEntryPoint,

    /// A node declares more than one outgoing edge (two unconditional, two
    /// conditional, or one of each).
    #[error("conflicting edge declarations for node: {0}")]
    ConflictingEdges(String),

    /// A node has no outgoing edge at all; execution reaching it could never
    /// terminate or continue.
    #[error("node has no outgoing edge: {0}")]
    DeadEnd(String),
}
